//! Application state — single-owner, main-thread only.

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use tradelog_core::journal::Journal;

use crate::theme::{Theme, ThemeMode};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Panel {
    Dashboard,
    Journal,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Dashboard => 0,
            Panel::Journal => 1,
            Panel::Help => 2,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Dashboard),
            1 => Some(Panel::Journal),
            2 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Dashboard => "Dashboard",
            Panel::Journal => "Journal",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 3).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 2) % 3).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

pub struct AppState {
    pub journal: Journal,
    /// Name of the backing source ("static" or "api"), shown in the status bar.
    pub source_name: String,
    pub active_panel: Panel,
    /// The selected day; the calendars display its month.
    pub selected: NaiveDate,
    pub theme: Theme,
    pub status_message: Option<(String, StatusLevel)>,
    pub running: bool,
}

impl AppState {
    pub fn new(journal: Journal, source_name: String, selected: NaiveDate) -> Self {
        Self {
            journal,
            source_name,
            active_panel: Panel::Dashboard,
            selected,
            theme: Theme::default(),
            status_message: None,
            running: true,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }

    pub fn toggle_theme(&mut self) {
        let mode = self.theme.mode.toggle();
        self.theme = Theme::from_mode(mode);
        self.set_status(format!("Theme: {}", mode.label()));
    }

    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.theme = Theme::from_mode(mode);
    }

    // ── Selection movement ──

    pub fn move_days(&mut self, days: i64) {
        if let Some(date) = self
            .selected
            .checked_add_signed(chrono::Duration::days(days))
        {
            self.selected = date;
        }
    }

    /// Shift the selection by whole months, clamping the day to month end
    /// (Jan 31 + 1 month lands on Feb 28/29).
    pub fn move_months(&mut self, months: i32) {
        let shifted = if months >= 0 {
            self.selected.checked_add_months(Months::new(months as u32))
        } else {
            self.selected
                .checked_sub_months(Months::new(months.unsigned_abs()))
        };
        if let Some(date) = shifted {
            self.selected = date;
        }
    }
}
