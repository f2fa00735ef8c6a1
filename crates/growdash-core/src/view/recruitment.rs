//! Recruitment tab view models built from the prospect fixtures.

use crate::fixtures::recruitment::{self, ProspectPriority, StepStatus};
use crate::fmt;
use crate::view::common::{RowStyleClass, TableViewModel, ViewCell, ViewRow};

const PROSPECT_HEADERS: [&str; 6] = [
    "Prospect",
    "Market GMS",
    "Brand Position",
    "Fit",
    "Priority",
    "Potential",
];
const PROSPECT_WIDTHS: [u16; 6] = [16, 10, 15, 5, 8, 10];

/// Prospects ranked by priority band, P0 first.
pub fn build_prospect_view() -> TableViewModel<&'static str> {
    let mut prospects = recruitment::prospects();
    prospects.sort_by_key(|p| (priority_rank(p.priority), p.name));

    let rows = prospects
        .iter()
        .map(|p| ViewRow {
            id: p.name,
            cells: vec![
                ViewCell::plain(p.name.to_string()),
                ViewCell::plain(fmt::format_money(p.market_gms as i64)),
                ViewCell::plain(p.brand_position.to_string()),
                ViewCell::plain(format!("{}%", p.cross_market_fit_pct)),
                ViewCell::plain(p.priority.as_str().to_string()),
                ViewCell::plain(p.potential.to_string()),
            ],
            style: match p.priority {
                ProspectPriority::P0 => RowStyleClass::Accent,
                ProspectPriority::P1 => RowStyleClass::Normal,
                ProspectPriority::P2 => RowStyleClass::Dimmed,
            },
        })
        .collect();

    TableViewModel {
        title: "Prospect Pipeline".to_string(),
        headers: PROSPECT_HEADERS.iter().map(|h| h.to_string()).collect(),
        widths: PROSPECT_WIDTHS.to_vec(),
        rows,
        sort_column: Some(4),
        sort_ascending: true,
    }
}

fn priority_rank(priority: ProspectPriority) -> u8 {
    match priority {
        ProspectPriority::P0 => 0,
        ProspectPriority::P1 => 1,
        ProspectPriority::P2 => 2,
    }
}

const ENGAGEMENT_HEADERS: [&str; 5] = ["Touchpoint", "Channel", "Content", "Resp. Rate", "Status"];
const ENGAGEMENT_WIDTHS: [u16; 5] = [10, 8, 20, 10, 10];

/// Outreach cadence in touchpoint order.
pub fn build_engagement_view() -> TableViewModel<&'static str> {
    let rows = recruitment::engagement_plan()
        .iter()
        .map(|step| ViewRow {
            id: step.touchpoint,
            cells: vec![
                ViewCell::plain(step.touchpoint.to_string()),
                ViewCell::plain(step.channel.to_string()),
                ViewCell::plain(step.content.to_string()),
                ViewCell::plain(format!("{}%", step.response_rate_pct)),
                ViewCell::plain(step.status.as_str().to_string()),
            ],
            style: match step.status {
                StepStatus::Sent => RowStyleClass::Positive,
                StepStatus::Scheduled => RowStyleClass::Normal,
                StepStatus::Planned => RowStyleClass::Dimmed,
            },
        })
        .collect();

    TableViewModel {
        title: "Engagement Plan".to_string(),
        headers: ENGAGEMENT_HEADERS.iter().map(|h| h.to_string()).collect(),
        widths: ENGAGEMENT_WIDTHS.to_vec(),
        rows,
        sort_column: None,
        sort_ascending: true,
    }
}

const BAND_HEADERS: [&str; 4] = ["Priority", "Prospects", "Close Rate", "Avg Cycle"];
const BAND_WIDTHS: [u16; 4] = [8, 9, 10, 9];

pub fn build_priority_band_view() -> TableViewModel<&'static str> {
    let rows = recruitment::priority_bands()
        .iter()
        .map(|band| ViewRow {
            id: band.priority.as_str(),
            cells: vec![
                ViewCell::plain(band.priority.as_str().to_string()),
                ViewCell::plain(band.count.to_string()),
                ViewCell::plain(format!("{}%", band.close_rate_pct)),
                ViewCell::plain(format!("{} days", band.avg_cycle_days)),
            ],
            style: RowStyleClass::Normal,
        })
        .collect();

    TableViewModel {
        title: "Priority Bands".to_string(),
        headers: BAND_HEADERS.iter().map(|h| h.to_string()).collect(),
        widths: BAND_WIDTHS.to_vec(),
        rows,
        sort_column: None,
        sort_ascending: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prospects_ordered_by_priority() {
        let view = build_prospect_view();
        assert_eq!(view.rows.len(), 4);
        let priorities: Vec<&str> = view
            .rows
            .iter()
            .map(|r| r.cells[4].text.as_str())
            .collect();
        assert_eq!(priorities, ["P0", "P0", "P1", "P2"]);
    }

    #[test]
    fn test_p0_prospects_are_accented() {
        let view = build_prospect_view();
        assert_eq!(view.rows[0].style, RowStyleClass::Accent);
        assert_eq!(view.rows[3].style, RowStyleClass::Dimmed);
    }

    #[test]
    fn test_engagement_view_keeps_cadence_order() {
        let view = build_engagement_view();
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.rows[0].id, "Day 1");
        assert_eq!(view.rows[4].id, "Follow-up");
    }

    #[test]
    fn test_band_view_shape() {
        let view = build_priority_band_view();
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.headers.len(), view.widths.len());
    }
}
