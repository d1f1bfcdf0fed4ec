//! Number rendering shared by the display and the history trace.

/// Render a value for display.
///
/// Whole numbers drop the fractional part entirely (`4.0` → `"4"`); anything
/// else uses the shortest representation that parses back to the same value.
/// Infinities and NaN pass through as `inf`, `-inf` and `NaN`.
pub fn render(value: f64) -> String {
    if value % 1.0 == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_numbers() {
        assert_eq!(render(4.0), "4");
        assert_eq!(render(-12.0), "-12");
        assert_eq!(render(0.0), "0");
        assert_eq!(render(1e16), "10000000000000000");
    }

    #[test]
    fn fractions() {
        assert_eq!(render(4.5), "4.5");
        assert_eq!(render(0.1), "0.1");
        assert_eq!(render(-2.25), "-2.25");
    }

    #[test]
    fn shortest_round_trip() {
        let third = 1.0 / 3.0;
        assert_eq!(render(third).parse::<f64>().unwrap(), third);
        assert_eq!(render(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn non_finite() {
        assert_eq!(render(f64::INFINITY), "inf");
        assert_eq!(render(f64::NEG_INFINITY), "-inf");
        assert_eq!(render(f64::NAN), "NaN");
    }
}
