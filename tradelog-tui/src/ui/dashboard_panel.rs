//! Panel 1 — Dashboard: compact month calendar with month totals.

use chrono::Datelike;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use tradelog_core::calendar::{month_grid, month_totals};
use tradelog_core::summary::format_pnl;

use crate::app::AppState;
use crate::ui::calendar_grid;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let year = app.selected.year();
    let month = app.selected.month();
    let grid = month_grid(&app.journal, year, month, Some(app.selected));
    let totals = month_totals(&app.journal, year, month);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled(calendar_grid::month_title(&grid), app.theme.accent_bold()),
        Span::styled(
            "  [h/l]day [j/k]week [\u{5b}/\u{5d}]month [Enter]journal",
            app.theme.muted(),
        ),
    ]));
    lines.push(Line::from(""));

    lines.extend(calendar_grid::render_compact(&grid, &app.theme));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Month PNL: ", app.theme.secondary()),
        Span::styled(format_pnl(totals.pnl), app.theme.pnl(totals.pnl)),
        Span::styled(
            format!(
                "   {} trades over {} logged days",
                totals.trade_count, totals.days_logged
            ),
            app.theme.secondary(),
        ),
    ]));

    if totals.days_logged == 0 {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "No journal entries this month.",
            app.theme.muted(),
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}
