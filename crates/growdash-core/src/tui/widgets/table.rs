//! Generic table renderer over [`TableViewModel`], shared by all tabs.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::tui::style::Styles;
use crate::view::common::{FunnelRow, TableViewModel};

/// Renders a view model as a bordered table.
///
/// `selected` highlights that row index; pass `None` for read-only tables.
pub fn render_table<Id>(
    frame: &mut Frame,
    area: Rect,
    vm: &TableViewModel<Id>,
    selected: Option<usize>,
) {
    // Header with sort indicator
    let headers: Vec<Span> = vm
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            let indicator = if Some(i) == vm.sort_column {
                if vm.sort_ascending { "▲" } else { "▼" }
            } else {
                ""
            };
            Span::styled(format!("{}{}", h, indicator), Styles::table_header())
        })
        .collect();
    let header = Row::new(headers).style(Styles::table_header()).height(1);

    let rows: Vec<Row> = vm
        .rows
        .iter()
        .enumerate()
        .map(|(idx, vr)| {
            let base_style = if selected == Some(idx) {
                Styles::selected()
            } else {
                Styles::from_class(vr.style)
            };
            let cells = vr.cells.iter().map(|c| match c.style {
                Some(s) => Span::styled(c.text.clone(), Styles::from_class(s)),
                None => Span::raw(c.text.clone()),
            });
            Row::new(cells).style(base_style).height(1)
        })
        .collect();

    let mut constraints: Vec<Constraint> =
        vm.widths.iter().map(|&w| Constraint::Length(w)).collect();
    constraints.push(Constraint::Fill(1));

    let table = Table::new(rows, constraints)
        .header(header)
        .block(
            Block::default()
                .title(format!(" {} ", vm.title))
                .borders(Borders::ALL)
                .style(Styles::default()),
        )
        .column_spacing(1);

    frame.render_widget(table, area);
}

/// Bar length for a 100% funnel stage.
const FUNNEL_BAR_WIDTH: usize = 30;

/// Renders a conversion funnel as text bars, one stage per line.
pub fn render_funnel(frame: &mut Frame, area: Rect, title: &str, rows: &[FunnelRow]) {
    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            let filled = (row.pct / 100.0 * FUNNEL_BAR_WIDTH as f64).round() as usize;
            let filled = filled.min(FUNNEL_BAR_WIDTH);
            format!(
                "{:<20} {:>4} |{}{}| {:>5.1}%",
                row.stage,
                row.count,
                "█".repeat(filled),
                " ".repeat(FUNNEL_BAR_WIDTH - filled),
                row.pct
            )
        })
        .collect();

    let paragraph = Paragraph::new(lines.join("\n"))
        .style(Styles::default())
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL),
        );
    frame.render_widget(paragraph, area);
}
