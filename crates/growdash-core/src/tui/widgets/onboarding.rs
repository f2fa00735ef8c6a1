//! Onboarding tab: milestone tracker, interventions, funnel, forecasts.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::fixtures::onboarding;
use crate::tui::state::AppState;
use crate::view::common::build_funnel;
use crate::view::onboarding::{
    build_forecast_view, build_intervention_view, build_milestone_view,
};

use super::table::{render_funnel, render_table};

pub fn render_onboarding(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let chunks = Layout::vertical([
        Constraint::Min(7),    // Milestones
        Constraint::Length(6), // Interventions
        Constraint::Length(7), // Funnel | Forecasts
    ])
    .split(area);

    let milestones = build_milestone_view();
    state.onboarding.clamp(milestones.rows.len());
    render_table(frame, chunks[0], &milestones, Some(state.onboarding.selected));

    render_table(frame, chunks[1], &build_intervention_view(), None);

    let bottom = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[2]);
    let funnel = build_funnel(&onboarding::funnel());
    render_funnel(frame, bottom[0], "Onboarding Funnel", &funnel);
    render_table(frame, bottom[1], &build_forecast_view(), None);
}
