//! Goal tab view models: the seller performance table and the derived
//! high-potential table.

use crate::fixtures;
use crate::fmt;
use crate::model::{ComplianceRisk, DataIntegrityError, JoinedSeller, SellerDataset};
use crate::view::common::{RowStyleClass, SortKey, TableViewModel, ViewCell, ViewRow};

/// Which projection of the joined dataset the performance table shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GoalViewMode {
    /// Raw seller metrics: GMV, growth, compliance, tier.
    #[default]
    Performance,
    /// AI analysis columns: growth score, gaps, risk, sentiment.
    Insight,
}

impl GoalViewMode {
    pub fn name(&self) -> &'static str {
        match self {
            GoalViewMode::Performance => "Performance",
            GoalViewMode::Insight => "AI Insight",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            GoalViewMode::Performance => GoalViewMode::Insight,
            GoalViewMode::Insight => GoalViewMode::Performance,
        }
    }

    /// Column the table sorts by when the user has not chosen one.
    pub fn default_sort_column(&self) -> usize {
        match self {
            // GMV
            GoalViewMode::Performance => 3,
            // Growth score
            GoalViewMode::Insight => 1,
        }
    }

    pub fn column_count(&self) -> usize {
        match self {
            GoalViewMode::Performance => PERFORMANCE_HEADERS.len(),
            GoalViewMode::Insight => INSIGHT_HEADERS.len(),
        }
    }
}

const PERFORMANCE_HEADERS: [&str; 7] = [
    "Seller",
    "Country",
    "Category",
    "GMV",
    "Growth",
    "Compliance",
    "Tier",
];
const PERFORMANCE_WIDTHS: [u16; 7] = [16, 7, 11, 8, 8, 10, 4];

const INSIGHT_HEADERS: [&str; 6] = [
    "Seller",
    "Growth Score",
    "Product Gaps",
    "Risk",
    "Sentiment",
    "Revenue Pot.",
];
const INSIGHT_WIDTHS: [u16; 6] = [16, 12, 12, 8, 9, 12];

/// Growth above this reads as a standout performer.
const STRONG_GROWTH_PCT: f64 = 15.0;
/// Compliance below this needs attention.
const LOW_COMPLIANCE_SCORE: u8 = 70;

/// Builds the main Goal tab table over the joined dataset.
///
/// `sort_column` indexes into the mode's headers; out-of-range values fall
/// back to the mode's default column. Ties sort ascending by seller name.
pub fn build_performance_view(
    dataset: &SellerDataset,
    mode: GoalViewMode,
    sort_column: usize,
    sort_ascending: bool,
) -> Result<TableViewModel<String>, DataIntegrityError> {
    let mut joined = dataset.joined()?;

    let sort_column = if sort_column < mode.column_count() {
        sort_column
    } else {
        mode.default_sort_column()
    };
    sort_joined(&mut joined, mode, sort_column, sort_ascending);

    let rows = joined
        .iter()
        .map(|row| match mode {
            GoalViewMode::Performance => performance_row(row),
            GoalViewMode::Insight => insight_row(row),
        })
        .collect();

    let (headers, widths): (&[&str], &[u16]) = match mode {
        GoalViewMode::Performance => (&PERFORMANCE_HEADERS, &PERFORMANCE_WIDTHS),
        GoalViewMode::Insight => (&INSIGHT_HEADERS, &INSIGHT_WIDTHS),
    };

    Ok(TableViewModel {
        title: format!("Seller {}", mode.name()),
        headers: headers.iter().map(|h| h.to_string()).collect(),
        widths: widths.to_vec(),
        rows,
        sort_column: Some(sort_column),
        sort_ascending,
    })
}

fn sort_joined(
    joined: &mut [JoinedSeller<'_>],
    mode: GoalViewMode,
    sort_column: usize,
    sort_ascending: bool,
) {
    joined.sort_by(|a, b| {
        let ka = sort_key(a, mode, sort_column);
        let kb = sort_key(b, mode, sort_column);
        let ord = ka
            .partial_cmp(&kb)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.seller.name.cmp(&b.seller.name));
        if sort_ascending { ord } else { ord.reverse() }
    });
}

fn sort_key(row: &JoinedSeller<'_>, mode: GoalViewMode, column: usize) -> SortKey {
    match mode {
        GoalViewMode::Performance => match column {
            0 => SortKey::Text(row.seller.name.clone()),
            1 => SortKey::Text(row.seller.country.as_str().to_string()),
            2 => SortKey::Text(row.seller.category.as_str().to_string()),
            3 => SortKey::Integer(row.seller.gmv as i64),
            4 => SortKey::Float(row.seller.growth_rate),
            5 => SortKey::Integer(row.seller.compliance_score as i64),
            _ => SortKey::Text(row.seller.tier.as_str().to_string()),
        },
        GoalViewMode::Insight => match column {
            0 => SortKey::Text(row.analysis.seller.clone()),
            1 => SortKey::Integer(row.analysis.growth_score as i64),
            2 => SortKey::Integer(row.analysis.product_gap_count as i64),
            3 => SortKey::Integer(risk_rank(row.analysis.compliance_risk)),
            4 => SortKey::Float(row.analysis.sentiment),
            _ => SortKey::Integer(row.analysis.revenue_potential as i64),
        },
    }
}

fn risk_rank(risk: ComplianceRisk) -> i64 {
    match risk {
        ComplianceRisk::Low => 0,
        ComplianceRisk::Medium => 1,
        ComplianceRisk::High => 2,
    }
}

fn performance_row(row: &JoinedSeller<'_>) -> ViewRow<String> {
    let seller = row.seller;
    let style = if seller.compliance_score < LOW_COMPLIANCE_SCORE {
        RowStyleClass::Warning
    } else if seller.growth_rate >= STRONG_GROWTH_PCT {
        RowStyleClass::Positive
    } else {
        RowStyleClass::Normal
    };
    let growth_style = if seller.growth_rate < 0.0 {
        Some(RowStyleClass::Critical)
    } else {
        None
    };

    ViewRow {
        id: seller.name.clone(),
        cells: vec![
            ViewCell::plain(seller.name.clone()),
            ViewCell::plain(seller.country.as_str().to_string()),
            ViewCell::plain(seller.category.as_str().to_string()),
            ViewCell::plain(fmt::format_money(seller.gmv as i64)),
            ViewCell {
                text: fmt::format_growth(seller.growth_rate),
                style: growth_style,
            },
            ViewCell::plain(seller.compliance_score.to_string()),
            ViewCell::plain(seller.tier.as_str().to_string()),
        ],
        style,
    }
}

fn insight_row(row: &JoinedSeller<'_>) -> ViewRow<String> {
    let analysis = row.analysis;
    let style = match analysis.compliance_risk {
        ComplianceRisk::High => RowStyleClass::Critical,
        ComplianceRisk::Medium => RowStyleClass::Warning,
        ComplianceRisk::Low => RowStyleClass::Normal,
    };

    ViewRow {
        id: analysis.seller.clone(),
        cells: vec![
            ViewCell::plain(analysis.seller.clone()),
            ViewCell::plain(analysis.growth_score.to_string()),
            ViewCell::plain(analysis.product_gap_count.to_string()),
            ViewCell::plain(analysis.compliance_risk.as_str().to_string()),
            ViewCell::plain(format!("{:.1}", analysis.sentiment)),
            ViewCell::plain(fmt::format_money(analysis.revenue_potential as i64)),
        ],
        style,
    }
}

const HIGH_POTENTIAL_HEADERS: [&str; 4] = ["Seller", "Growth", "Revenue Pot.", "Recommendation"];
const HIGH_POTENTIAL_WIDTHS: [u16; 4] = [16, 8, 12, 40];

/// Top three sellers by growth rate joined with their recommendations.
pub fn build_high_potential_view(
    dataset: &SellerDataset,
) -> Result<TableViewModel<String>, DataIntegrityError> {
    let joined = dataset.joined()?;
    let top = dataset.top_by_growth(3);

    let rows = top
        .iter()
        .filter_map(|seller| {
            joined
                .iter()
                .find(|row| row.seller.name == seller.name)
                .map(|row| ViewRow {
                    id: seller.name.clone(),
                    cells: vec![
                        ViewCell::plain(seller.name.clone()),
                        ViewCell::plain(fmt::format_growth(seller.growth_rate)),
                        ViewCell::plain(fmt::format_money(row.analysis.revenue_potential as i64)),
                        ViewCell::plain(row.analysis.recommendation.to_string()),
                    ],
                    style: RowStyleClass::Accent,
                })
        })
        .collect();

    Ok(TableViewModel {
        title: "High-Potential Sellers".to_string(),
        headers: HIGH_POTENTIAL_HEADERS
            .iter()
            .map(|h| h.to_string())
            .collect(),
        widths: HIGH_POTENTIAL_WIDTHS.to_vec(),
        rows,
        sort_column: None,
        sort_ascending: false,
    })
}

const YTD_HEADERS: [&str; 4] = ["Metric", "Actual", "Target", "Done"];
const YTD_WIDTHS: [u16; 4] = [17, 8, 8, 6];

/// Year-to-date progress table; behind-target rows are flagged.
pub fn build_ytd_view() -> TableViewModel<&'static str> {
    let rows = fixtures::goal::ytd_progress()
        .iter()
        .map(|row| ViewRow {
            id: row.name,
            cells: vec![
                ViewCell::plain(row.name.to_string()),
                ViewCell::plain(format!("{:.0}", row.actual)),
                ViewCell::plain(format!("{:.0}", row.target)),
                ViewCell::plain(fmt::format_pct(row.completion_pct())),
            ],
            style: if row.on_track() {
                RowStyleClass::Positive
            } else if row.completion_pct() < 85.0 {
                RowStyleClass::Warning
            } else {
                RowStyleClass::Normal
            },
        })
        .collect();

    TableViewModel {
        title: "YTD Progress".to_string(),
        headers: YTD_HEADERS.iter().map(|h| h.to_string()).collect(),
        widths: YTD_WIDTHS.to_vec(),
        rows,
        sort_column: None,
        sort_ascending: true,
    }
}

const ACTION_HEADERS: [&str; 4] = ["Problem", "Action", "Impact", "Priority"];
const ACTION_WIDTHS: [u16; 4] = [24, 48, 16, 8];

/// The fixed AI action plan, highest priority first.
pub fn build_action_plan_view() -> TableViewModel<usize> {
    let mut plan = fixtures::goal::action_plan();
    plan.sort_by(|a, b| b.priority.cmp(&a.priority));

    let rows = plan
        .iter()
        .enumerate()
        .map(|(idx, item)| ViewRow {
            id: idx,
            cells: vec![
                ViewCell::plain(item.problem.to_string()),
                ViewCell::plain(item.action.to_string()),
                ViewCell::plain(item.expected_impact.to_string()),
                ViewCell::plain(item.priority.as_str().to_string()),
            ],
            style: match item.priority {
                fixtures::Priority::High => RowStyleClass::Critical,
                fixtures::Priority::Medium => RowStyleClass::Warning,
                fixtures::Priority::Low => RowStyleClass::Normal,
            },
        })
        .collect();

    TableViewModel {
        title: "AI Action Plan".to_string(),
        headers: ACTION_HEADERS.iter().map(|h| h.to_string()).collect(),
        widths: ACTION_WIDTHS.to_vec(),
        rows,
        sort_column: Some(3),
        sort_ascending: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> SellerDataset {
        SellerDataset::generate(42)
    }

    #[test]
    fn test_performance_view_sorted_by_gmv_descending() {
        let ds = sample_dataset();
        let view = build_performance_view(&ds, GoalViewMode::Performance, 3, false).unwrap();
        assert_eq!(view.rows.len(), 10);
        assert_eq!(view.headers.len(), 7);
        assert_eq!(view.sort_column, Some(3));

        let gmvs: Vec<u32> = view
            .rows
            .iter()
            .map(|r| {
                ds.sellers
                    .iter()
                    .find(|s| s.name == r.id)
                    .unwrap()
                    .gmv
            })
            .collect();
        assert!(gmvs.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_sort_ascending_reverses_descending() {
        let ds = sample_dataset();
        let desc = build_performance_view(&ds, GoalViewMode::Performance, 0, false).unwrap();
        let asc = build_performance_view(&ds, GoalViewMode::Performance, 0, true).unwrap();
        let mut desc_ids: Vec<&String> = desc.rows.iter().map(|r| &r.id).collect();
        desc_ids.reverse();
        let asc_ids: Vec<&String> = asc.rows.iter().map(|r| &r.id).collect();
        assert_eq!(desc_ids, asc_ids);
    }

    #[test]
    fn test_out_of_range_sort_column_falls_back_to_default() {
        let ds = sample_dataset();
        let view = build_performance_view(&ds, GoalViewMode::Insight, 99, false).unwrap();
        assert_eq!(
            view.sort_column,
            Some(GoalViewMode::Insight.default_sort_column())
        );
    }

    #[test]
    fn test_insight_view_styles_risk() {
        let ds = sample_dataset();
        let view = build_performance_view(&ds, GoalViewMode::Insight, 1, false).unwrap();
        for row in &view.rows {
            let analysis = ds.analyses.iter().find(|a| a.seller == row.id).unwrap();
            let expected = match analysis.compliance_risk {
                ComplianceRisk::High => RowStyleClass::Critical,
                ComplianceRisk::Medium => RowStyleClass::Warning,
                ComplianceRisk::Low => RowStyleClass::Normal,
            };
            assert_eq!(row.style, expected);
        }
    }

    #[test]
    fn test_high_potential_matches_top_growth() {
        let ds = sample_dataset();
        let view = build_high_potential_view(&ds).unwrap();
        assert_eq!(view.rows.len(), 3);

        let expected: Vec<&str> = ds.top_by_growth(3).iter().map(|s| s.name.as_str()).collect();
        let actual: Vec<&str> = view.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(actual, expected);
        assert!(view.rows.iter().all(|r| r.style == RowStyleClass::Accent));
    }

    #[test]
    fn test_ytd_view_flags_behind_target_rows() {
        let view = build_ytd_view();
        assert_eq!(view.rows.len(), 5);
        let fba_ba = view.rows.iter().find(|r| r.id == "FBA BA").unwrap();
        assert_eq!(fba_ba.style, RowStyleClass::Positive);
    }

    #[test]
    fn test_action_plan_sorted_high_first() {
        let view = build_action_plan_view();
        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.rows[0].cells[3].text, "High");
        assert_eq!(view.rows[0].style, RowStyleClass::Critical);
    }

    #[test]
    fn test_view_mode_toggle_round_trips() {
        let mode = GoalViewMode::Performance;
        assert_eq!(mode.toggle().toggle(), mode);
        assert_ne!(mode.name(), mode.toggle().name());
    }
}
