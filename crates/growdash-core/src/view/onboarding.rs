//! Onboarding tab view models: milestone tracker, interventions, forecasts.

use crate::fixtures::onboarding::{self, MilestoneStatus};
use crate::fixtures::Priority;
use crate::view::common::{RowStyleClass, TableViewModel, ViewCell, ViewRow};

const MILESTONE_HEADERS: [&str; 6] = [
    "Seller",
    "Account",
    "KYC",
    "Listing",
    "1st Shipment",
    "Progress",
];
const MILESTONE_WIDTHS: [u16; 6] = [16, 11, 11, 11, 12, 8];

/// Per-seller milestone tracker, least-complete sellers first.
pub fn build_milestone_view() -> TableViewModel<&'static str> {
    let mut milestones = onboarding::milestones();
    milestones.sort_by_key(|m| (m.progress_pct, m.seller));

    let rows = milestones
        .iter()
        .map(|m| ViewRow {
            id: m.seller,
            cells: vec![
                ViewCell::plain(m.seller.to_string()),
                status_cell(m.account_setup),
                status_cell(m.kyc),
                status_cell(m.listing),
                status_cell(m.first_shipment),
                ViewCell::plain(format!("{}%", m.progress_pct)),
            ],
            style: if m.progress_pct == 100 {
                RowStyleClass::Positive
            } else if m.progress_pct < 60 {
                RowStyleClass::Warning
            } else {
                RowStyleClass::Normal
            },
        })
        .collect();

    TableViewModel {
        title: "Onboarding Milestones".to_string(),
        headers: MILESTONE_HEADERS.iter().map(|h| h.to_string()).collect(),
        widths: MILESTONE_WIDTHS.to_vec(),
        rows,
        sort_column: Some(5),
        sort_ascending: true,
    }
}

fn status_cell(status: MilestoneStatus) -> ViewCell {
    let style = match status {
        MilestoneStatus::Done => Some(RowStyleClass::Positive),
        MilestoneStatus::Pending => Some(RowStyleClass::Warning),
        MilestoneStatus::InProgress => None,
        MilestoneStatus::NotStarted => Some(RowStyleClass::Dimmed),
    };
    ViewCell {
        text: status.as_str().to_string(),
        style,
    }
}

const INTERVENTION_HEADERS: [&str; 5] = ["Seller", "Issue", "Action", "ETA", "Priority"];
const INTERVENTION_WIDTHS: [u16; 5] = [16, 36, 26, 7, 8];

/// Recommended interventions, highest priority first.
pub fn build_intervention_view() -> TableViewModel<&'static str> {
    let mut interventions = onboarding::interventions();
    interventions.sort_by_key(|i| (priority_rank(i.priority), i.seller));

    let rows = interventions
        .iter()
        .map(|i| ViewRow {
            id: i.seller,
            cells: vec![
                ViewCell::plain(i.seller.to_string()),
                ViewCell::plain(i.issue.to_string()),
                ViewCell::plain(i.action.to_string()),
                ViewCell::plain(i.eta.unwrap_or("-").to_string()),
                ViewCell::plain(i.priority.as_str().to_string()),
            ],
            style: match i.priority {
                Priority::High => RowStyleClass::Critical,
                Priority::Medium => RowStyleClass::Warning,
                Priority::Low => RowStyleClass::Normal,
            },
        })
        .collect();

    TableViewModel {
        title: "Interventions".to_string(),
        headers: INTERVENTION_HEADERS.iter().map(|h| h.to_string()).collect(),
        widths: INTERVENTION_WIDTHS.to_vec(),
        rows,
        sort_column: Some(4),
        sort_ascending: true,
    }
}

fn priority_rank(priority: Priority) -> u8 {
    match priority {
        Priority::High => 0,
        Priority::Medium => 1,
        Priority::Low => 2,
    }
}

const FORECAST_HEADERS: [&str; 4] = ["Seller", "Progress", "ETA", "Risk"];
const FORECAST_WIDTHS: [u16; 4] = [16, 8, 8, 6];

pub fn build_forecast_view() -> TableViewModel<&'static str> {
    let rows = onboarding::forecasts()
        .iter()
        .map(|f| ViewRow {
            id: f.seller,
            cells: vec![
                ViewCell::plain(f.seller.to_string()),
                ViewCell::plain(format!("{}%", f.progress_pct)),
                ViewCell::plain(format!("{} days", f.eta_days)),
                ViewCell::plain(f.risk.as_str().to_string()),
            ],
            style: match f.risk {
                Priority::High => RowStyleClass::Critical,
                Priority::Medium => RowStyleClass::Warning,
                Priority::Low => RowStyleClass::Normal,
            },
        })
        .collect();

    TableViewModel {
        title: "Completion Forecast".to_string(),
        headers: FORECAST_HEADERS.iter().map(|h| h.to_string()).collect(),
        widths: FORECAST_WIDTHS.to_vec(),
        rows,
        sort_column: None,
        sort_ascending: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_milestones_sorted_least_complete_first() {
        let view = build_milestone_view();
        assert_eq!(view.rows.len(), 4);
        let pcts: Vec<&str> = view
            .rows
            .iter()
            .map(|r| r.cells[5].text.as_str())
            .collect();
        assert_eq!(pcts, ["50%", "60%", "75%", "100%"]);
    }

    #[test]
    fn test_completed_seller_is_positive() {
        let view = build_milestone_view();
        let last = view.rows.last().unwrap();
        assert_eq!(last.style, RowStyleClass::Positive);
    }

    #[test]
    fn test_interventions_sorted_by_priority() {
        let view = build_intervention_view();
        let priorities: Vec<&str> = view
            .rows
            .iter()
            .map(|r| r.cells[4].text.as_str())
            .collect();
        assert_eq!(priorities, ["High", "Medium", "Low"]);
    }

    #[test]
    fn test_missing_eta_renders_dash() {
        let view = build_intervention_view();
        let no_blocker = view.rows.iter().find(|r| r.id == "BeautyMax_SG").unwrap();
        assert_eq!(no_blocker.cells[3].text, "-");
    }

    #[test]
    fn test_forecast_shape() {
        let view = build_forecast_view();
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.headers.len(), view.widths.len());
    }
}
