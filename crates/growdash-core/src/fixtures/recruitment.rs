//! Recruitment tab fixtures: prospect pipeline, outreach plan, funnel.

use serde::Serialize;

use super::FunnelStage;

/// Recruitment priority band, P0 (highest) through P2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProspectPriority {
    P0,
    P1,
    P2,
}

impl ProspectPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProspectPriority::P0 => "P0",
            ProspectPriority::P1 => "P1",
            ProspectPriority::P2 => "P2",
        }
    }
}

/// One prospective seller scored for outreach.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Prospect {
    pub name: &'static str,
    /// GMS in the prospect's existing marketplace, in dollars.
    pub market_gms: u32,
    pub brand_position: &'static str,
    pub cross_market_fit_pct: u8,
    pub priority: ProspectPriority,
    pub potential: &'static str,
}

pub fn prospects() -> Vec<Prospect> {
    vec![
        Prospect {
            name: "TechCorp_VN",
            market_gms: 2_500_000,
            brand_position: "Market leader",
            cross_market_fit_pct: 95,
            priority: ProspectPriority::P0,
            potential: "Very High",
        },
        Prospect {
            name: "FashionPlus_TH",
            market_gms: 1_800_000,
            brand_position: "Regional brand",
            cross_market_fit_pct: 87,
            priority: ProspectPriority::P1,
            potential: "High",
        },
        Prospect {
            name: "HomeStyle_MY",
            market_gms: 1_200_000,
            brand_position: "Emerging brand",
            cross_market_fit_pct: 78,
            priority: ProspectPriority::P2,
            potential: "Medium",
        },
        Prospect {
            name: "BeautyMax_SG",
            market_gms: 2_100_000,
            brand_position: "Market leader",
            cross_market_fit_pct: 92,
            priority: ProspectPriority::P0,
            potential: "Very High",
        },
    ]
}

/// Delivery status of an outreach touchpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StepStatus {
    Sent,
    Scheduled,
    Planned,
}

impl StepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Sent => "Sent",
            StepStatus::Scheduled => "Scheduled",
            StepStatus::Planned => "Planned",
        }
    }
}

/// One touchpoint of the outreach cadence.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EngagementStep {
    pub touchpoint: &'static str,
    pub channel: &'static str,
    pub content: &'static str,
    pub response_rate_pct: u8,
    pub status: StepStatus,
}

pub fn engagement_plan() -> Vec<EngagementStep> {
    vec![
        EngagementStep {
            touchpoint: "Day 1",
            channel: "Email",
            content: "Introduction",
            response_rate_pct: 25,
            status: StepStatus::Sent,
        },
        EngagementStep {
            touchpoint: "Day 3",
            channel: "Email",
            content: "Value proposition",
            response_rate_pct: 18,
            status: StepStatus::Sent,
        },
        EngagementStep {
            touchpoint: "Day 7",
            channel: "Email",
            content: "Case studies",
            response_rate_pct: 12,
            status: StepStatus::Scheduled,
        },
        EngagementStep {
            touchpoint: "Day 14",
            channel: "Email",
            content: "Final offer",
            response_rate_pct: 8,
            status: StepStatus::Planned,
        },
        EngagementStep {
            touchpoint: "Follow-up",
            channel: "Phone",
            content: "Direct conversation",
            response_rate_pct: 35,
            status: StepStatus::Planned,
        },
    ]
}

pub fn funnel() -> Vec<FunnelStage> {
    vec![
        FunnelStage {
            stage: "Prospects",
            count: 150,
        },
        FunnelStage {
            stage: "Contacted",
            count: 80,
        },
        FunnelStage {
            stage: "Negotiating",
            count: 25,
        },
        FunnelStage {
            stage: "Signed",
            count: 8,
        },
    ]
}

/// Pipeline volume and outcomes per priority band.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PriorityBand {
    pub priority: ProspectPriority,
    pub count: u32,
    pub close_rate_pct: u8,
    pub avg_cycle_days: u32,
}

pub fn priority_bands() -> Vec<PriorityBand> {
    vec![
        PriorityBand {
            priority: ProspectPriority::P0,
            count: 25,
            close_rate_pct: 32,
            avg_cycle_days: 12,
        },
        PriorityBand {
            priority: ProspectPriority::P1,
            count: 45,
            close_rate_pct: 18,
            avg_cycle_days: 18,
        },
        PriorityBand {
            priority: ProspectPriority::P2,
            count: 80,
            close_rate_pct: 8,
            avg_cycle_days: 28,
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
    fn test_fixture_row_counts() {
        assert_eq!(prospects().len(), 4);
        assert_eq!(engagement_plan().len(), 5);
        assert_eq!(priority_bands().len(), 3);
    }
}
