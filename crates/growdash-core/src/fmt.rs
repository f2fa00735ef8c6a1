//! Shared formatting helpers for table cells.
//!
//! Pure string formatting only; no ratatui styles, no layout.

/// Format a dollar amount compactly: `"$2.8M"`, `"$180K"`, `"$512"`.
pub fn format_money(dollars: i64) -> String {
    let sign = if dollars < 0 { "-" } else { "" };
    let abs = dollars.unsigned_abs() as f64;
    if abs >= 1_000_000.0 {
        format!("{}${:.1}M", sign, abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{}${:.0}K", sign, abs / 1_000.0)
    } else {
        format!("{}${}", sign, dollars.unsigned_abs())
    }
}

/// Format a dollar delta with an explicit sign: `"+$300K"`, `"-$0.2M"`.
pub fn format_money_delta(dollars: i64) -> String {
    if dollars >= 0 {
        format!("+{}", format_money(dollars))
    } else {
        format_money(dollars)
    }
}

/// Format a percentage with one decimal: `"67.0%"`.
pub fn format_pct(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Format a growth rate with an explicit sign: `"+25.0%"`, `"-3.2%"`.
pub fn format_growth(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{:.1}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Format a plain count with a delta suffix: `"45 (+3 WoW)"`.
pub fn format_count_delta(actual: f64, delta: f64) -> String {
    format!("{:.0} ({:+.0} WoW)", actual, delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(2_800_000), "$2.8M");
        assert_eq!(format_money(180_000), "$180K");
        assert_eq!(format_money(512), "$512");
        assert_eq!(format_money(-200_000), "-$200K");
    }

    #[test]
    fn test_format_money_delta() {
        assert_eq!(format_money_delta(300_000), "+$300K");
        assert_eq!(format_money_delta(-200_000), "-$200K");
    }

    #[test]
    fn test_format_growth() {
        assert_eq!(format_growth(25.0), "+25.0%");
        assert_eq!(format_growth(-3.25), "-3.2%");
    }

    #[test]
    fn test_format_count_delta() {
        assert_eq!(format_count_delta(45.0, 3.0), "45 (+3 WoW)");
        assert_eq!(format_count_delta(28.0, -2.0), "28 (-2 WoW)");
    }
}
