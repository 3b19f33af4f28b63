//! Single-line status bar: panel hints, source, theme, transient messages.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, Panel, StatusLevel};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    for panel in [Panel::Dashboard, Panel::Journal, Panel::Help] {
        let label = format!(" {}:{} ", panel.index() + 1, panel.label());
        let style = if panel == app.active_panel {
            app.theme.selected()
        } else {
            app.theme.muted()
        };
        spans.push(Span::styled(label, style));
    }

    spans.push(Span::styled(
        format!("  src:{}  theme:{}  ", app.source_name, app.theme.mode.label()),
        app.theme.muted(),
    ));

    if let Some((msg, level)) = &app.status_message {
        let style = match level {
            StatusLevel::Info => app.theme.secondary(),
            StatusLevel::Warning => app.theme.warning_style(),
            StatusLevel::Error => app.theme.negative_style(),
        };
        spans.push(Span::styled(msg.clone(), style));
    } else {
        spans.push(Span::styled("q:quit  ?:help", app.theme.muted()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
