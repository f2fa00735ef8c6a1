//! Goal tab fixtures: KPI gauges, YTD progress, and the AI action plan.

use serde::Serialize;

use super::Priority;
use crate::fmt;

/// Unit of a KPI value, used for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum KpiUnit {
    Count,
    Dollars,
    Percent,
}

/// One KPI gauge with actual, target, and week-over-week delta.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct KpiMetric {
    pub name: &'static str,
    pub actual: f64,
    pub target: f64,
    pub wow_delta: f64,
    pub unit: KpiUnit,
}

impl KpiMetric {
    /// Gap to target; negative means behind.
    pub fn gap(&self) -> f64 {
        self.actual - self.target
    }

    pub fn format_value(&self, value: f64) -> String {
        match self.unit {
            KpiUnit::Count => format!("{:.0}", value),
            KpiUnit::Dollars => fmt::format_money(value as i64),
            KpiUnit::Percent => format!("{:.0}%", value),
        }
    }

    pub fn format_delta(&self) -> String {
        match self.unit {
            KpiUnit::Count => format!("{:+.0} WoW", self.wow_delta),
            KpiUnit::Dollars => format!("{} WoW", fmt::format_money_delta(self.wow_delta as i64)),
            KpiUnit::Percent => format!("{:+.0}% WoW", self.wow_delta),
        }
    }
}

/// The five core KPI gauges.
pub fn kpis() -> Vec<KpiMetric> {
    vec![
        KpiMetric {
            name: "Launched Sellers",
            actual: 45.0,
            target: 50.0,
            wow_delta: 3.0,
            unit: KpiUnit::Count,
        },
        KpiMetric {
            name: "FBA Adopted Sellers",
            actual: 28.0,
            target: 30.0,
            wow_delta: 2.0,
            unit: KpiUnit::Count,
        },
        KpiMetric {
            name: "FBA BA Count",
            actual: 15.0,
            target: 12.0,
            wow_delta: 1.0,
            unit: KpiUnit::Count,
        },
        KpiMetric {
            name: "GMS",
            actual: 2_800_000.0,
            target: 3_000_000.0,
            wow_delta: 300_000.0,
            unit: KpiUnit::Dollars,
        },
        KpiMetric {
            name: "Ads Adoption Rate",
            actual: 67.0,
            target: 70.0,
            wow_delta: 2.0,
            unit: KpiUnit::Percent,
        },
    ]
}

/// Year-to-date progress against annual targets.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct YtdProgress {
    pub name: &'static str,
    pub actual: f64,
    pub target: f64,
    pub unit: KpiUnit,
}

impl YtdProgress {
    pub fn completion_pct(&self) -> f64 {
        if self.target == 0.0 {
            0.0
        } else {
            self.actual / self.target * 100.0
        }
    }

    pub fn on_track(&self) -> bool {
        self.completion_pct() >= 100.0
    }
}

pub fn ytd_progress() -> Vec<YtdProgress> {
    vec![
        YtdProgress {
            name: "Launched Sellers",
            actual: 180.0,
            target: 200.0,
            unit: KpiUnit::Count,
        },
        YtdProgress {
            name: "FBA Adopted",
            actual: 120.0,
            target: 130.0,
            unit: KpiUnit::Count,
        },
        YtdProgress {
            name: "FBA BA",
            actual: 58.0,
            target: 50.0,
            unit: KpiUnit::Count,
        },
        YtdProgress {
            name: "GMS",
            actual: 11_200_000.0,
            target: 12_000_000.0,
            unit: KpiUnit::Dollars,
        },
        YtdProgress {
            name: "Ads Adoption",
            actual: 65.0,
            target: 70.0,
            unit: KpiUnit::Percent,
        },
    ]
}

/// One fixed entry of the AI action plan shown on the Goal tab.
///
/// These are authored strings, not model output.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ActionRecommendation {
    pub problem: &'static str,
    pub action: &'static str,
    pub expected_impact: &'static str,
    pub priority: Priority,
}

pub fn action_plan() -> Vec<ActionRecommendation> {
    vec![
        ActionRecommendation {
            problem: "GMS gap of -$0.2M",
            action: "Focus on high-potential seller TechGiant_SG (+25% WoW growth)",
            expected_impact: "+$150K GMS",
            priority: Priority::High,
        },
        ActionRecommendation {
            problem: "FBA adoption below target",
            action: "Propose FBA BA expansion to ElectroMax_ID (strong current GMS)",
            expected_impact: "+5 FBA BAs",
            priority: Priority::Medium,
        },
        ActionRecommendation {
            problem: "Listing quality gap",
            action: "Prioritize image and title fixes for FashionHub_MY",
            expected_impact: "+15% conversion",
            priority: Priority::Medium,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kpi_gaps_match_targets() {
        let kpis = kpis();
        assert_eq!(kpis.len(), 5);
        assert_eq!(kpis[0].gap(), -5.0);
        assert_eq!(kpis[2].gap(), 3.0);
        assert_eq!(kpis[3].format_value(kpis[3].actual), "$2.8M");
        assert_eq!(kpis[3].format_delta(), "+$300K WoW");
    }

    #[test]
    fn test_ytd_completion() {
        let rows = ytd_progress();
        assert_eq!(rows[0].completion_pct(), 90.0);
        assert!(rows[2].on_track());
        assert!(!rows[3].on_track());
    }

    #[test]
    fn test_action_plan_priorities() {
        let plan = action_plan();
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].priority, Priority::High);
    }
}
