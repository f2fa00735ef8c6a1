//! UI-agnostic table view models consumed by the presentation layer.

pub mod common;
pub mod goal;
pub mod onboarding;
pub mod recruitment;
pub mod win;
