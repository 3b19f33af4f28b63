//! Calendar grid rendering — compact and detailed variants over the same
//! `MonthGrid` layout.

use ratatui::text::{Line, Span};

use tradelog_core::calendar::MonthGrid;
use tradelog_core::summary::format_pnl;

use crate::theme::Theme;

const WEEKDAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn month_title(grid: &MonthGrid) -> String {
    let name = MONTH_NAMES
        .get(grid.month as usize - 1)
        .copied()
        .unwrap_or("?");
    format!("{} {}", name, grid.year)
}

/// Compact variant: day number only, colored by outcome (dashboard page).
pub fn render_compact(grid: &MonthGrid, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![header_line(4, theme)];

    for week in weeks(grid) {
        let mut spans: Vec<Span> = Vec::new();
        for slot in week {
            match slot {
                None => spans.push(Span::raw("    ")),
                Some(idx) => {
                    let cell = &grid.cells[idx];
                    let style = if cell.selected {
                        theme.selected()
                    } else if cell.outcome.is_some() {
                        ratatui::style::Style::default()
                            .fg(theme.outcome_color(cell.outcome))
                            .add_modifier(ratatui::style::Modifier::BOLD)
                    } else {
                        theme.secondary()
                    };
                    spans.push(Span::styled(format!(" {:>2} ", cell.day), style));
                }
            }
        }
        lines.push(Line::from(spans));
    }
    lines
}

/// Detailed variant: day number plus pnl and trade count (journal page).
/// Each week renders as three rows, mirroring the stacked day cell.
pub fn render_detailed(grid: &MonthGrid, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![header_line(10, theme)];

    for week in weeks(grid) {
        let mut day_row: Vec<Span> = Vec::new();
        let mut pnl_row: Vec<Span> = Vec::new();
        let mut count_row: Vec<Span> = Vec::new();

        for slot in week {
            match slot {
                None => {
                    day_row.push(Span::raw(" ".repeat(10)));
                    pnl_row.push(Span::raw(" ".repeat(10)));
                    count_row.push(Span::raw(" ".repeat(10)));
                }
                Some(idx) => {
                    let cell = &grid.cells[idx];
                    let day_style = if cell.selected {
                        theme.selected()
                    } else {
                        theme.text()
                    };
                    day_row.push(Span::styled(format!(" {:>2}       ", cell.day), day_style));

                    if cell.outcome.is_some() {
                        pnl_row.push(Span::styled(
                            format!(" {:>8} ", format_pnl(cell.pnl)),
                            theme.pnl(cell.pnl),
                        ));
                        count_row.push(Span::styled(
                            format!(" {:>2} trades", cell.trade_count),
                            theme.muted(),
                        ));
                    } else {
                        pnl_row.push(Span::raw(" ".repeat(10)));
                        count_row.push(Span::raw(" ".repeat(10)));
                    }
                }
            }
        }

        lines.push(Line::from(day_row));
        lines.push(Line::from(pnl_row));
        lines.push(Line::from(count_row));
    }
    lines
}

fn header_line(cell_width: usize, theme: &Theme) -> Line<'static> {
    let spans: Vec<Span> = WEEKDAY_HEADER
        .iter()
        .map(|d| Span::styled(format!(" {d:<width$}", width = cell_width - 1), theme.muted()))
        .collect();
    Line::from(spans)
}

/// Chunk the grid into weeks of seven slots; `None` slots are the leading
/// blanks (and trailing padding of the last week).
fn weeks(grid: &MonthGrid) -> Vec<[Option<usize>; 7]> {
    let total = grid.leading_blanks + grid.cells.len();
    let week_count = total.div_ceil(7);
    let mut weeks = vec![[None; 7]; week_count];

    for idx in 0..grid.cells.len() {
        let slot = grid.leading_blanks + idx;
        weeks[slot / 7][slot % 7] = Some(idx);
    }
    weeks
}
