//! Recruitment tab: prospect pipeline, outreach plan, conversion funnel.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::fixtures::recruitment;
use crate::tui::state::AppState;
use crate::view::common::build_funnel;
use crate::view::recruitment::{
    build_engagement_view, build_priority_band_view, build_prospect_view,
};

use super::table::{render_funnel, render_table};

pub fn render_recruitment(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let chunks = Layout::vertical([
        Constraint::Min(7),    // Prospects
        Constraint::Length(8), // Engagement plan | Priority bands
        Constraint::Length(6), // Funnel
    ])
    .split(area);

    let prospects = build_prospect_view();
    state.recruitment.clamp(prospects.rows.len());
    render_table(frame, chunks[0], &prospects, Some(state.recruitment.selected));

    let middle = Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);
    render_table(frame, middle[0], &build_engagement_view(), None);
    render_table(frame, middle[1], &build_priority_band_view(), None);

    let funnel = build_funnel(&recruitment::funnel());
    render_funnel(frame, chunks[2], "Recruitment Funnel", &funnel);
}
