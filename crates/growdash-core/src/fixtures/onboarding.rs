//! Onboarding tab fixtures: milestones, interventions, funnel, forecasts.

use serde::Serialize;

use super::{FunnelStage, Priority};

/// Progress of one onboarding step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MilestoneStatus {
    Done,
    Pending,
    InProgress,
    NotStarted,
}

impl MilestoneStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MilestoneStatus::Done => "Done",
            MilestoneStatus::Pending => "Pending",
            MilestoneStatus::InProgress => "In progress",
            MilestoneStatus::NotStarted => "Not started",
        }
    }
}

/// Per-seller onboarding milestone tracker.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MilestoneRow {
    pub seller: &'static str,
    pub account_setup: MilestoneStatus,
    pub kyc: MilestoneStatus,
    pub listing: MilestoneStatus,
    pub first_shipment: MilestoneStatus,
    pub progress_pct: u8,
}

pub fn milestones() -> Vec<MilestoneRow> {
    use MilestoneStatus::*;
    vec![
        MilestoneRow {
            seller: "TechCorp_VN",
            account_setup: Done,
            kyc: Done,
            listing: Done,
            first_shipment: Done,
            progress_pct: 100,
        },
        MilestoneRow {
            seller: "FashionPlus_TH",
            account_setup: Done,
            kyc: Pending,
            listing: Done,
            first_shipment: NotStarted,
            progress_pct: 60,
        },
        MilestoneRow {
            seller: "HomeStyle_MY",
            account_setup: Done,
            kyc: Done,
            listing: InProgress,
            first_shipment: NotStarted,
            progress_pct: 75,
        },
        MilestoneRow {
            seller: "BeautyMax_SG",
            account_setup: Done,
            kyc: Done,
            listing: NotStarted,
            first_shipment: NotStarted,
            progress_pct: 50,
        },
    ]
}

/// Recommended intervention for a stalled seller.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Intervention {
    pub seller: &'static str,
    pub issue: &'static str,
    pub action: &'static str,
    /// Expected time to resolve; `None` when nothing is blocked.
    pub eta: Option<&'static str>,
    pub priority: Priority,
}

pub fn interventions() -> Vec<Intervention> {
    vec![
        Intervention {
            seller: "FashionPlus_TH",
            issue: "KYC delayed 3 days, documents missing",
            action: "Assist with KYC paperwork",
            eta: Some("2 days"),
            priority: Priority::High,
        },
        Intervention {
            seller: "HomeStyle_MY",
            issue: "Listing image quality below bar",
            action: "Share image guidelines",
            eta: Some("1 day"),
            priority: Priority::Medium,
        },
        Intervention {
            seller: "BeautyMax_SG",
            issue: "No blockers",
            action: "Keep monitoring",
            eta: None,
            priority: Priority::Low,
        },
    ]
}

pub fn funnel() -> Vec<FunnelStage> {
    vec![
        FunnelStage {
            stage: "First contact",
            count: 100,
        },
        FunnelStage {
            stage: "Signed intent",
            count: 75,
        },
        FunnelStage {
            stage: "Onboarding started",
            count: 60,
        },
        FunnelStage {
            stage: "Onboarding complete",
            count: 45,
        },
        FunnelStage {
            stage: "First sale",
            count: 38,
        },
    ]
}

/// Predicted completion for sellers still onboarding.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CompletionForecast {
    pub seller: &'static str,
    pub progress_pct: u8,
    pub eta_days: u8,
    pub risk: Priority,
}

pub fn forecasts() -> Vec<CompletionForecast> {
    vec![
        CompletionForecast {
            seller: "FashionPlus_TH",
            progress_pct: 60,
            eta_days: 5,
            risk: Priority::Medium,
        },
        CompletionForecast {
            seller: "HomeStyle_MY",
            progress_pct: 75,
            eta_days: 3,
            risk: Priority::Low,
        },
        CompletionForecast {
            seller: "BeautyMax_SG",
            progress_pct: 50,
            eta_days: 7,
            risk: Priority::Low,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_funnel_is_monotonic() {
        let stages = funnel();
        for pair in stages.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
    }

    #[test]
    fn test_completed_seller_has_full_progress() {
        let rows = milestones();
        assert_eq!(rows[0].progress_pct, 100);
        assert_eq!(rows[0].first_shipment, MilestoneStatus::Done);
    }

    #[test]
    fn test_forecasts_cover_unfinished_sellers() {
        let unfinished: Vec<&str> = milestones()
            .iter()
            .filter(|m| m.progress_pct < 100)
            .map(|m| m.seller)
            .collect();
        let forecast_sellers: Vec<&str> = forecasts().iter().map(|f| f.seller).collect();
        assert_eq!(unfinished, forecast_sellers);
    }
}
