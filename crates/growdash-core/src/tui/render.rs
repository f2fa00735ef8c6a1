//! Main rendering logic for the TUI.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::model::SellerDataset;

use super::state::{AppState, PopupState, Tab};
use super::widgets::{
    render_goal, render_header, render_help, render_onboarding, render_recruitment, render_win,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState, dataset: &SellerDataset, seed: u64) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(10),   // Content
    ])
    .split(area);

    render_header(frame, chunks[0], state, seed);

    match state.current_tab {
        Tab::Goal => render_goal(frame, chunks[1], state, dataset),
        Tab::Recruitment => render_recruitment(frame, chunks[1], state),
        Tab::Onboarding => render_onboarding(frame, chunks[1], state),
        Tab::Win => render_win(frame, chunks[1], state),
    }

    // Popup rendered last to overlay everything.
    if let PopupState::Help { ref mut scroll } = state.popup {
        let tab = state.current_tab;
        render_help(frame, area, tab, scroll);
    }
}
