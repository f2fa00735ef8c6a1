//! UI-agnostic view model types.
//!
//! These types describe presentation data without depending on a rendering
//! framework. The TUI maps them to ratatui styles; any other frontend
//! would map them to its own styling vocabulary.

use crate::fixtures::FunnelStage;

/// Row-level style classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowStyleClass {
    #[default]
    Normal,
    /// Warning level (TUI: yellow).
    Warning,
    /// Critical level (TUI: red).
    Critical,
    /// Positive (TUI: green). E.g. strong growth, completed milestones.
    Positive,
    /// Dimmed (TUI: dark gray).
    Dimmed,
    /// Accent (TUI: cyan). E.g. top-ranked sellers.
    Accent,
}

/// A single table cell with optional per-cell style override.
#[derive(Debug, Clone, Default)]
pub struct ViewCell {
    pub text: String,
    /// `None` = inherit row style.
    pub style: Option<RowStyleClass>,
}

impl ViewCell {
    pub fn plain(text: String) -> Self {
        Self { text, style: None }
    }

    pub fn styled(text: String, style: RowStyleClass) -> Self {
        Self {
            text,
            style: Some(style),
        }
    }
}

/// One table row, parameterized by entity ID type.
#[derive(Debug, Clone)]
pub struct ViewRow<Id> {
    pub id: Id,
    pub cells: Vec<ViewCell>,
    pub style: RowStyleClass,
}

/// Complete table ready to be rendered by any frontend.
#[derive(Debug, Clone)]
pub struct TableViewModel<Id> {
    pub title: String,
    pub headers: Vec<String>,
    pub widths: Vec<u16>,
    pub rows: Vec<ViewRow<Id>>,
    pub sort_column: Option<usize>,
    pub sort_ascending: bool,
}

/// Sort key extracted from a cell's underlying value.
///
/// Derived `PartialOrd` compares the discriminant first, but a given sort
/// column always produces the same variant, so only same-variant
/// comparisons occur in practice.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
pub enum SortKey {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// One row of a rendered conversion funnel with derived percentage.
#[derive(Debug, Clone, Copy)]
pub struct FunnelRow {
    pub stage: &'static str,
    pub count: u32,
    /// Conversion relative to the first stage; first stage reads 100%.
    pub pct: f64,
}

/// Computes conversion percentages against the first funnel stage.
pub fn build_funnel(stages: &[FunnelStage]) -> Vec<FunnelRow> {
    let first = stages.first().map(|s| s.count).unwrap_or(0);
    stages
        .iter()
        .map(|s| FunnelRow {
            stage: s.stage,
            count: s.count,
            pct: if first > 0 {
                s.count as f64 / first as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_funnel_percentages() {
        let stages = [
            FunnelStage {
                stage: "a",
                count: 200,
            },
            FunnelStage {
                stage: "b",
                count: 50,
            },
        ];
        let rows = build_funnel(&stages);
        assert_eq!(rows[0].pct, 100.0);
        assert_eq!(rows[1].pct, 25.0);
    }

    #[test]
    fn test_empty_funnel() {
        assert!(build_funnel(&[]).is_empty());
    }

    #[test]
    fn test_sort_key_ordering() {
        assert!(SortKey::Float(2.0) > SortKey::Float(1.0));
        assert!(SortKey::Text("a".into()) < SortKey::Text("b".into()));
    }
}
