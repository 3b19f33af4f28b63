//! Theme tokens for the journal TUI.
//!
//! Two palettes, matching the dashboard's light/dark toggle:
//! - **Dark**: near-black surface, green gains, red losses, cyan accent
//! - **Light**: white surface, darker green/red so contrast holds
//!
//! Sign is conveyed by color only; pnl strings never carry a leading `+`.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

use tradelog_core::calendar::DayOutcome;

/// Persisted theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Resolved color palette for one mode.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub mode: ThemeMode,
    pub background: Color,
    pub accent: Color,
    pub positive: Color,
    pub negative: Color,
    pub warning: Color,
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            background: Color::Rgb(15, 23, 42),
            accent: Color::Rgb(56, 189, 248),
            positive: Color::Rgb(52, 211, 153),
            negative: Color::Rgb(248, 113, 113),
            warning: Color::Rgb(251, 191, 36),
            muted: Color::Rgb(100, 116, 139),
            text_primary: Color::White,
            text_secondary: Color::Rgb(148, 163, 184),
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            background: Color::Rgb(248, 250, 252),
            accent: Color::Rgb(2, 132, 199),
            positive: Color::Rgb(5, 150, 105),
            negative: Color::Rgb(220, 38, 38),
            warning: Color::Rgb(180, 83, 9),
            muted: Color::Rgb(148, 163, 184),
            text_primary: Color::Rgb(15, 23, 42),
            text_secondary: Color::Rgb(71, 85, 105),
        }
    }

    /// Color for a pnl value: positive (>= 0) or negative.
    pub fn pnl_color(&self, value: f64) -> Color {
        if value >= 0.0 {
            self.positive
        } else {
            self.negative
        }
    }

    /// Color for a day cell's outcome; muted when the day has no record.
    pub fn outcome_color(&self, outcome: Option<DayOutcome>) -> Color {
        match outcome {
            Some(DayOutcome::Profit) => self.positive,
            Some(DayOutcome::Loss) => self.negative,
            None => self.muted,
        }
    }

    // ── Style helpers ──

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn accent_bold(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn negative_style(&self) -> Style {
        Style::default().fg(self.negative)
    }

    pub fn pnl(&self, value: f64) -> Style {
        Style::default().fg(self.pnl_color(value))
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_mode() {
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
    }

    #[test]
    fn pnl_color_treats_zero_as_positive() {
        let theme = Theme::dark();
        assert_eq!(theme.pnl_color(0.0), theme.positive);
        assert_eq!(theme.pnl_color(-0.01), theme.negative);
    }

    #[test]
    fn outcome_color_maps_all_cases() {
        let theme = Theme::light();
        assert_eq!(theme.outcome_color(Some(DayOutcome::Profit)), theme.positive);
        assert_eq!(theme.outcome_color(Some(DayOutcome::Loss)), theme.negative);
        assert_eq!(theme.outcome_color(None), theme.muted);
    }
}
