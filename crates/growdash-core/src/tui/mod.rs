//! Terminal user interface for the seller growth dashboard.
//!
//! Four tabs mirror the business workflow: Goal tracking, Recruitment,
//! Onboarding, and Win (feature adoption). Tables are built from the
//! UI-agnostic view models in [`crate::view`].

mod app;
mod event;
mod input;
mod render;
mod state;
mod style;
mod widgets;

pub use app::App;
pub use state::{AppState, PopupState, Tab};
