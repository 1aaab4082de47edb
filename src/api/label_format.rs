/// Formats a numeric label rounded to an integer.
///
/// Halves round away from zero and negative values that round to zero keep
/// their sign (`-0`), matching canvas-era `toFixed(0)` output.
#[must_use]
pub fn format_integer_label(value: f64) -> String {
    format!("{}", value.round())
}

#[cfg(test)]
mod tests {
    use super::format_integer_label;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_integer_label(2.5), "3");
        assert_eq!(format_integer_label(-2.5), "-3");
        assert_eq!(format_integer_label(39.6), "40");
        assert_eq!(format_integer_label(200.0), "200");
    }

    #[test]
    fn keeps_negative_zero_sign() {
        assert_eq!(format_integer_label(-0.4), "-0");
    }
}
