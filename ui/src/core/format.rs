//! Formatting helpers for presenting scores.

/// Render a score the way the page prints numbers: whole values without a
/// fractional part, everything else in its shortest form.
pub fn format_score(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Percentage with a single decimal, e.g. `75.0`. Halves round away from
/// zero (`1.25` -> `1.3`), as the page's own number formatting does.
pub fn format_percent(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    format!("{rounded:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_scores_drop_the_fraction() {
        assert_eq!(format_score(20.0), "20");
        assert_eq!(format_score(0.0), "0");
        assert_eq!(format_score(-4.0), "-4");
    }

    #[test]
    fn fractional_scores_keep_their_digits() {
        assert_eq!(format_score(12.5), "12.5");
        assert_eq!(format_score(0.75), "0.75");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(75.0), "75.0");
        assert_eq!(format_percent(100.0 / 3.0), "33.3");
    }

    #[test]
    fn percent_halves_round_up() {
        assert_eq!(format_percent(1.25), "1.3");
        assert_eq!(format_percent(0.25), "0.3");
        assert_eq!(format_percent(1.0 / 80.0 * 100.0), "1.3");
        assert_eq!(format_percent(0.05 / 20.0 * 100.0), "0.3");
        assert_eq!(format_percent(1.24), "1.2");
    }
}
