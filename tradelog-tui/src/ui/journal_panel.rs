//! Panel 2 — Journal: detailed month calendar beside the selected day's log.

use chrono::Datelike;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use tradelog_core::calendar::month_grid;
use tradelog_core::domain::date_key;
use tradelog_core::summary::{day_view, format_pnl, DaySummary, DayView};

use crate::app::AppState;
use crate::theme::Theme;
use crate::ui::calendar_grid;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_calendar(f, chunks[0], app);
    render_day_log(f, chunks[1], app);
}

fn render_calendar(f: &mut Frame, area: Rect, app: &AppState) {
    let grid = month_grid(
        &app.journal,
        app.selected.year(),
        app.selected.month(),
        Some(app.selected),
    );

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        calendar_grid::month_title(&grid),
        app.theme.accent_bold(),
    )));
    lines.push(Line::from(""));
    lines.extend(calendar_grid::render_detailed(&grid, &app.theme));

    f.render_widget(Paragraph::new(lines), area);
}

fn render_day_log(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        format!("Daily Log: {}", date_key(app.selected)),
        app.theme.accent_bold(),
    )));
    lines.push(Line::from(""));

    match day_view(&app.journal, app.selected) {
        DayView::Empty { .. } => {
            lines.push(Line::from(Span::styled(
                "No trades or notes for this day.",
                app.theme.muted(),
            )));
        }
        DayView::Logged(summary) => {
            lines.extend(summary_lines(&summary, &app.theme));
        }
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn summary_lines(summary: &DaySummary, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Total PNL: ", theme.secondary()),
        Span::styled(format_pnl(summary.total_pnl), theme.pnl(summary.total_pnl)),
    ]));
    lines.push(Line::from(vec![
        Span::styled(
            format!("Trades: {}   ", summary.trade_count),
            theme.secondary(),
        ),
        Span::styled(format!("Wins: {}   ", summary.wins), theme.pnl(1.0)),
        Span::styled(format!("Losses: {}", summary.losses), theme.pnl(-1.0)),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Notes", theme.accent())));
    if summary.note.is_empty() {
        lines.push(Line::from(Span::styled("(none)", theme.muted())));
    } else {
        lines.push(Line::from(Span::styled(
            summary.note.clone(),
            theme.secondary(),
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Trade Reviews", theme.accent())));
    if summary.reviews.is_empty() {
        lines.push(Line::from(Span::styled("(no trades)", theme.muted())));
    }
    for review in &summary.reviews {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("{:<8}", review.ticker), theme.text()),
            Span::styled(format_pnl(review.pnl), theme.pnl(review.pnl)),
            Span::styled(
                if review.win { "  win" } else { "  loss" },
                theme.pnl(if review.win { 1.0 } else { -1.0 }),
            ),
        ]));
        if !review.note.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  {}", review.note),
                theme.secondary(),
            )));
        }
        if !review.before_image.is_empty() || !review.after_image.is_empty() {
            lines.push(Line::from(Span::styled(
                format!(
                    "  before: {}  after: {}",
                    display_ref(&review.before_image),
                    display_ref(&review.after_image)
                ),
                theme.muted(),
            )));
        }
    }

    lines
}

fn display_ref(image: &str) -> &str {
    if image.is_empty() {
        "-"
    } else {
        image
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tradelog_core::sample::sample_journal;
    use tradelog_core::summary::day_view;

    #[test]
    fn summary_lines_cover_reviews() {
        let journal = sample_journal();
        let DayView::Logged(summary) =
            day_view(&journal, NaiveDate::from_ymd_opt(2025, 9, 1).unwrap())
        else {
            panic!("seeded day");
        };

        let theme = Theme::dark();
        let lines = summary_lines(&summary, &theme);
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.as_ref())
            .collect();

        assert!(text.contains("150.00"));
        assert!(text.contains("AAPL"));
        assert!(text.contains("TSLA"));
        assert!(text.contains("Good entry on breakout."));
        assert!(text.contains("dashboard1.png"));
    }
}
