//! Win tab: feature adoption, scorecards, revenue lift, growth potential.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::tui::state::AppState;
use crate::view::win::{
    build_adoption_view, build_lift_view, build_potential_view, build_scorecard_view,
};

use super::table::render_table;

pub fn render_win(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let chunks = Layout::vertical([
        Constraint::Min(7),    // Adoption | Scorecards
        Constraint::Length(8), // Lift | Potential
    ])
    .split(area);

    let top = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);
    let adoption = build_adoption_view();
    state.win.clamp(adoption.rows.len());
    render_table(frame, top[0], &adoption, Some(state.win.selected));
    render_table(frame, top[1], &build_scorecard_view(), None);

    let bottom = Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);
    render_table(frame, bottom[0], &build_lift_view(), None);
    render_table(frame, bottom[1], &build_potential_view(), None);
}
