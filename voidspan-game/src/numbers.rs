//! Numeric conversion helpers centralizing the lossy casts the model output needs.

use num_traits::cast::cast;

/// Round a f64 and clamp it to the i32 range, returning 0 for non-finite values.
#[must_use]
pub fn round_f64_to_i32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    let min = cast::<i32, f64>(i32::MIN).unwrap_or(f64::MIN);
    let max = cast::<i32, f64>(i32::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(min, max).round();
    cast::<f64, i32>(clamped).unwrap_or(0)
}

/// Round a f64 and clamp it to the i64 range, returning 0 for non-finite values.
#[must_use]
pub fn round_f64_to_i64(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    let min = cast::<i64, f64>(i64::MIN).unwrap_or(f64::MIN);
    let max = cast::<i64, f64>(i64::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(min, max).round();
    cast::<f64, i64>(clamped).unwrap_or(if clamped > 0.0 { i64::MAX } else { i64::MIN })
}

/// Convert i64 to f64 while allowing precision loss in a single location.
#[must_use]
pub fn i64_to_f64(value: i64) -> f64 {
    cast::<i64, f64>(value).unwrap_or(0.0)
}

/// Convert u64 to f64 while allowing precision loss in a single location.
#[must_use]
pub fn u64_to_f64(value: u64) -> f64 {
    cast::<u64, f64>(value).unwrap_or(0.0)
}

/// Percentage of `part` in `whole`, clamped to 0..=100. A zero whole yields 0.
#[must_use]
pub fn ratio_pct(part: f64, whole: f64) -> f64 {
    if whole <= 0.0 || !part.is_finite() {
        return 0.0;
    }
    (part / whole * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_handles_fractions_and_non_finite() {
        assert_eq!(round_f64_to_i32(4.6), 5);
        assert_eq!(round_f64_to_i32(-4.6), -5);
        assert_eq!(round_f64_to_i32(f64::NAN), 0);
        assert_eq!(round_f64_to_i32(1e12), i32::MAX);
        assert_eq!(round_f64_to_i32(f64::INFINITY), 0);
        assert_eq!(round_f64_to_i32(f64::NEG_INFINITY), 0);
        assert_eq!(round_f64_to_i64(12_000.4), 12_000);
        assert_eq!(round_f64_to_i64(f64::INFINITY), 0);
    }

    #[test]
    fn ratio_pct_clamps() {
        assert!((ratio_pct(50.0, 200.0) - 25.0).abs() < f64::EPSILON);
        assert!((ratio_pct(-10.0, 100.0) - 0.0).abs() < f64::EPSILON);
        assert!((ratio_pct(300.0, 100.0) - 100.0).abs() < f64::EPSILON);
        assert!((ratio_pct(1.0, 0.0) - 0.0).abs() < f64::EPSILON);
    }
}
