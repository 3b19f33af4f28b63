//! Keyboard input dispatch — global keys first, then selection movement.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Panel};

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => {
            app.active_panel = Panel::Dashboard;
            return;
        }
        KeyCode::Char('2') => {
            app.active_panel = Panel::Journal;
            return;
        }
        KeyCode::Char('3') | KeyCode::Char('?') => {
            app.active_panel = Panel::Help;
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        KeyCode::Char('t') => {
            app.toggle_theme();
            return;
        }
        _ => {}
    }

    // Selection movement applies on the calendar panels.
    if app.active_panel == Panel::Help {
        return;
    }
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.move_days(-1),
        KeyCode::Char('l') | KeyCode::Right => app.move_days(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_days(-7),
        KeyCode::Char('j') | KeyCode::Down => app.move_days(7),
        KeyCode::Char('[') => app.move_months(-1),
        KeyCode::Char(']') => app.move_months(1),
        // Jump to the day detail for the selection.
        KeyCode::Enter => app.active_panel = Panel::Journal,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crossterm::event::KeyEvent;
    use tradelog_core::journal::Journal;

    fn app() -> AppState {
        AppState::new(
            Journal::new(),
            "static".into(),
            NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
        )
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn hl_move_selection_by_one_day() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('l')));
        assert_eq!(app.selected, NaiveDate::from_ymd_opt(2025, 9, 11).unwrap());
        handle_key(&mut app, press(KeyCode::Char('h')));
        handle_key(&mut app, press(KeyCode::Char('h')));
        assert_eq!(app.selected, NaiveDate::from_ymd_opt(2025, 9, 9).unwrap());
    }

    #[test]
    fn jk_move_selection_by_one_week() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.selected, NaiveDate::from_ymd_opt(2025, 9, 17).unwrap());
        handle_key(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.selected, NaiveDate::from_ymd_opt(2025, 9, 10).unwrap());
    }

    #[test]
    fn brackets_change_month() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char(']')));
        assert_eq!(app.selected, NaiveDate::from_ymd_opt(2025, 10, 10).unwrap());
    }

    #[test]
    fn enter_opens_journal_panel() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.active_panel, Panel::Journal);
    }

    #[test]
    fn movement_is_inert_on_help_panel() {
        let mut app = app();
        app.active_panel = Panel::Help;
        handle_key(&mut app, press(KeyCode::Char('l')));
        assert_eq!(app.selected, NaiveDate::from_ymd_opt(2025, 9, 10).unwrap());
    }
}
