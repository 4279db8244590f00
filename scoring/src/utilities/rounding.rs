/// Round `value` to `digits` decimal places, halves away from zero.
///
/// Uses the multiply / round / divide trick; `f64::round` already rounds
/// half-way cases away from zero.
#[inline]
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_requested_digits() {
        assert_eq!(round_to(5.954, 2), 5.95);
        assert_eq!(round_to(5.954, 1), 6.0);
        assert_eq!(round_to(5.954, 0), 6.0);
    }

    #[test]
    fn rounds_halves_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_eq!(round_to(0.125, 2), 0.13);
    }

    #[test]
    fn leaves_zero_alone() {
        assert_eq!(round_to(0.0, 2), 0.0);
    }
}
