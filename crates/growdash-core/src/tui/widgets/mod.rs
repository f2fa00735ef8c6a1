//! TUI widgets, one module per tab plus shared building blocks.

mod goal;
mod header;
mod help;
mod onboarding;
mod recruitment;
mod table;
mod win;

pub use goal::render_goal;
pub use header::render_header;
pub use help::render_help;
pub use onboarding::render_onboarding;
pub use recruitment::render_recruitment;
pub use win::render_win;
