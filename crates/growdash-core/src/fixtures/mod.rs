//! Hand-authored illustrative datasets for the dashboard tabs.
//!
//! These tables are independent fixtures: their seller names are disjoint
//! from the generated catalog on purpose and carry no relational integrity
//! to it. Derived columns (funnel conversion, adoption rate, revenue lift)
//! are computed, never stored.

pub mod goal;
pub mod onboarding;
pub mod recruitment;
pub mod win;

use serde::Serialize;

/// One stage of a conversion funnel.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FunnelStage {
    pub stage: &'static str,
    pub count: u32,
}

/// Shared low/medium/high bucket used for action priorities and risk columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}
