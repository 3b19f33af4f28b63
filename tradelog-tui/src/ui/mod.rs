//! Top-level UI layout — one panel at a time plus a status bar.

pub mod calendar_grid;
pub mod dashboard_panel;
pub mod help_panel;
pub mod journal_panel;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Panel};

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    draw_panel(f, chunks[0], app);
    status_bar::render(f, chunks[1], app);
}

/// Draw the active panel with its border.
fn draw_panel(f: &mut Frame, area: Rect, app: &AppState) {
    let panel = app.active_panel;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.accent())
        .title(format!(" {} [{}] ", panel.label(), panel.index() + 1))
        .title_style(app.theme.accent_bold());

    let inner = block.inner(area);
    f.render_widget(block, area);

    match panel {
        Panel::Dashboard => dashboard_panel::render(f, inner, app),
        Panel::Journal => journal_panel::render(f, inner, app),
        Panel::Help => help_panel::render(f, inner, app),
    }
}
