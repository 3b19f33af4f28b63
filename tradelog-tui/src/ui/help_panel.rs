//! Panel 3 — Help: key bindings.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;

const BINDINGS: &[(&str, &str)] = &[
    ("1 / 2 / 3", "switch panel (Dashboard, Journal, Help)"),
    ("Tab / Shift-Tab", "cycle panels"),
    ("h / l  (or arrows)", "move selection by one day"),
    ("j / k  (or arrows)", "move selection by one week"),
    ("[ / ]", "previous / next month"),
    ("Enter", "open the Journal panel on the selection"),
    ("t", "toggle light/dark theme"),
    ("?", "show this help"),
    ("q", "quit"),
];

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "Key Bindings",
        app.theme.accent_bold(),
    )));
    lines.push(Line::from(""));

    for (key, action) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<20}"), app.theme.text()),
            Span::styled(*action, app.theme.secondary()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Journal source: {}", app.source_name),
        app.theme.muted(),
    )));

    f.render_widget(Paragraph::new(lines), area);
}
