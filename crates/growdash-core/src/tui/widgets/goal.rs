//! Goal tab: KPI gauges, seller table, high-potential and action plan.
//! Thin TUI wrapper over the builders in [`crate::view::goal`].

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::fixtures::goal::kpis;
use crate::model::SellerDataset;
use crate::tui::state::AppState;
use crate::tui::style::{Styles, Theme};
use crate::view::goal::{
    build_action_plan_view, build_high_potential_view, build_performance_view, build_ytd_view,
};

use super::table::render_table;

pub fn render_goal(frame: &mut Frame, area: Rect, state: &mut AppState, dataset: &SellerDataset) {
    let chunks = Layout::vertical([
        Constraint::Length(4),  // KPI cards
        Constraint::Min(8),     // Seller table
        Constraint::Length(7),  // High-potential | YTD
        Constraint::Length(5),  // Action plan
    ])
    .split(area);

    render_kpi_cards(frame, chunks[0]);

    let goal = state.goal;
    match build_performance_view(dataset, goal.view_mode, goal.sort_column, goal.sort_ascending) {
        Ok(vm) => {
            state.goal.table.clamp(vm.rows.len());
            render_table(frame, chunks[1], &vm, Some(state.goal.table.selected));
        }
        Err(e) => {
            let block = Block::default()
                .title(" Seller Performance ")
                .borders(Borders::ALL)
                .style(Styles::default());
            frame.render_widget(
                Paragraph::new(format!("Data error: {}", e)).block(block),
                chunks[1],
            );
        }
    }

    let bottom = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);
    match build_high_potential_view(dataset) {
        Ok(vm) => render_table(frame, bottom[0], &vm, None),
        Err(e) => {
            let block = Block::default()
                .title(" High-Potential Sellers ")
                .borders(Borders::ALL)
                .style(Styles::default());
            frame.render_widget(
                Paragraph::new(format!("Data error: {}", e)).block(block),
                bottom[0],
            );
        }
    }
    render_table(frame, bottom[1], &build_ytd_view(), None);

    render_table(frame, chunks[3], &build_action_plan_view(), None);
}

/// One card per KPI: name, actual vs target, and week-over-week delta.
fn render_kpi_cards(frame: &mut Frame, area: Rect) {
    let metrics = kpis();
    let constraints: Vec<Constraint> = metrics
        .iter()
        .map(|_| Constraint::Ratio(1, metrics.len() as u32))
        .collect();
    let cards = Layout::horizontal(constraints).split(area);

    for (metric, card_area) in metrics.iter().zip(cards.iter()) {
        let gap_color = if metric.gap() >= 0.0 {
            Theme::POSITIVE
        } else {
            Theme::WARNING
        };
        let lines = vec![
            Line::from(Span::styled(
                format!(
                    "{} / {}",
                    metric.format_value(metric.actual),
                    metric.format_value(metric.target)
                ),
                Style::default().fg(gap_color),
            )),
            Line::from(Span::styled(metric.format_delta(), Styles::dim())),
        ];
        let card = Paragraph::new(lines).style(Styles::default()).block(
            Block::default()
                .title(format!(" {} ", metric.name))
                .borders(Borders::ALL),
        );
        frame.render_widget(card, *card_area);
    }
}
