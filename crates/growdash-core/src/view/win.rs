//! Win tab view models: feature adoption, scorecards, lift, forecasts.

use crate::fixtures::win;
use crate::fmt;
use crate::view::common::{RowStyleClass, TableViewModel, ViewCell, ViewRow};

const ADOPTION_HEADERS: [&str; 6] = ["Seller", "FBA", "Ads", "Promos", "Coupons", "Adoption"];
const ADOPTION_WIDTHS: [u16; 6] = [16, 5, 5, 6, 7, 8];

/// Feature adoption matrix with the derived adoption percentage.
pub fn build_adoption_view() -> TableViewModel<&'static str> {
    let rows = win::feature_adoption()
        .iter()
        .map(|row| {
            let pct = row.adoption_pct();
            ViewRow {
                id: row.seller,
                cells: vec![
                    ViewCell::plain(row.seller.to_string()),
                    flag_cell(row.fba),
                    flag_cell(row.ads),
                    flag_cell(row.promotions),
                    flag_cell(row.coupons),
                    ViewCell::plain(format!("{}%", pct)),
                ],
                style: if pct >= 75 {
                    RowStyleClass::Positive
                } else {
                    RowStyleClass::Normal
                },
            }
        })
        .collect();

    TableViewModel {
        title: "Feature Adoption".to_string(),
        headers: ADOPTION_HEADERS.iter().map(|h| h.to_string()).collect(),
        widths: ADOPTION_WIDTHS.to_vec(),
        rows,
        sort_column: None,
        sort_ascending: true,
    }
}

fn flag_cell(enabled: bool) -> ViewCell {
    if enabled {
        ViewCell::styled("yes".to_string(), RowStyleClass::Positive)
    } else {
        ViewCell::styled("no".to_string(), RowStyleClass::Dimmed)
    }
}

const SCORECARD_HEADERS: [&str; 5] = ["Seller", "Listing", "Ad ROI", "Inventory", "Grade"];
const SCORECARD_WIDTHS: [u16; 5] = [16, 7, 7, 11, 6];

pub fn build_scorecard_view() -> TableViewModel<&'static str> {
    let rows = win::scorecards()
        .iter()
        .map(|card| ViewRow {
            id: card.seller,
            cells: vec![
                ViewCell::plain(card.seller.to_string()),
                ViewCell::plain(card.listing_quality.to_string()),
                ViewCell::plain(format!("{:.1}x", card.ad_roi)),
                ViewCell::plain(card.inventory_health.to_string()),
                ViewCell::plain(card.overall_grade.to_string()),
            ],
            style: if card.overall_grade.starts_with('A') {
                RowStyleClass::Positive
            } else if card.overall_grade.starts_with('C') {
                RowStyleClass::Warning
            } else {
                RowStyleClass::Normal
            },
        })
        .collect();

    TableViewModel {
        title: "Seller Scorecards".to_string(),
        headers: SCORECARD_HEADERS.iter().map(|h| h.to_string()).collect(),
        widths: SCORECARD_WIDTHS.to_vec(),
        rows,
        sort_column: None,
        sort_ascending: true,
    }
}

const LIFT_HEADERS: [&str; 5] = ["Seller", "Baseline", "Current", "Lift", "Driver"];
const LIFT_WIDTHS: [u16; 5] = [16, 9, 9, 8, 14];

/// Revenue lift per seller, biggest lift first.
pub fn build_lift_view() -> TableViewModel<&'static str> {
    let mut lifts = win::revenue_lift();
    lifts.sort_by(|a, b| {
        b.lift_pct()
            .partial_cmp(&a.lift_pct())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.seller.cmp(b.seller))
    });

    let rows = lifts
        .iter()
        .map(|lift| ViewRow {
            id: lift.seller,
            cells: vec![
                ViewCell::plain(lift.seller.to_string()),
                ViewCell::plain(fmt::format_money(lift.baseline as i64)),
                ViewCell::plain(fmt::format_money(lift.current as i64)),
                ViewCell::styled(fmt::format_growth(lift.lift_pct()), RowStyleClass::Positive),
                ViewCell::plain(lift.driver.to_string()),
            ],
            style: RowStyleClass::Normal,
        })
        .collect();

    TableViewModel {
        title: "Revenue Lift".to_string(),
        headers: LIFT_HEADERS.iter().map(|h| h.to_string()).collect(),
        widths: LIFT_WIDTHS.to_vec(),
        rows,
        sort_column: Some(3),
        sort_ascending: false,
    }
}

const POTENTIAL_HEADERS: [&str; 5] = [
    "Seller",
    "Performance",
    "Adoption",
    "Forecast",
    "Confidence",
];
const POTENTIAL_WIDTHS: [u16; 5] = [16, 11, 8, 8, 10];

pub fn build_potential_view() -> TableViewModel<&'static str> {
    let rows = win::growth_potential()
        .iter()
        .map(|row| ViewRow {
            id: row.seller,
            cells: vec![
                ViewCell::plain(row.seller.to_string()),
                ViewCell::plain(row.current_performance.to_string()),
                ViewCell::plain(format!("{}%", row.adoption_pct)),
                ViewCell::plain(format!("+{}%", row.forecast_growth_pct)),
                ViewCell::plain(format!("{}%", row.confidence_pct)),
            ],
            style: if row.confidence_pct >= 90 {
                RowStyleClass::Accent
            } else {
                RowStyleClass::Normal
            },
        })
        .collect();

    TableViewModel {
        title: "Growth Potential".to_string(),
        headers: POTENTIAL_HEADERS.iter().map(|h| h.to_string()).collect(),
        widths: POTENTIAL_WIDTHS.to_vec(),
        rows,
        sort_column: None,
        sort_ascending: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adoption_view_derives_percentage() {
        let view = build_adoption_view();
        assert_eq!(view.rows.len(), 4);
        assert_eq!(view.rows[0].cells[5].text, "75%");
        assert_eq!(view.rows[1].cells[5].text, "50%");
    }

    #[test]
    fn test_lift_view_sorted_descending() {
        let view = build_lift_view();
        let lifts: Vec<&str> = view
            .rows
            .iter()
            .map(|r| r.cells[3].text.as_str())
            .collect();
        // 30% ties first by seller name, then 22.5%, 20%.
        assert_eq!(lifts, ["+30.0%", "+30.0%", "+22.5%", "+20.0%"]);
        assert_eq!(view.rows[0].id, "BeautyPro_VN");
    }

    #[test]
    fn test_scorecard_a_grades_are_positive() {
        let view = build_scorecard_view();
        let top = view.rows.iter().find(|r| r.id == "BeautyPro_VN").unwrap();
        assert_eq!(top.style, RowStyleClass::Positive);
    }

    #[test]
    fn test_high_confidence_is_accented() {
        let view = build_potential_view();
        let confident = view.rows.iter().find(|r| r.id == "TechGiant_SG").unwrap();
        assert_eq!(confident.style, RowStyleClass::Accent);
    }
}
