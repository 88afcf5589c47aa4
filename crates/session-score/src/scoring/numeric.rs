/// Round to one decimal place, halves away from zero.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Ratio with an explicit fallback when the denominator is zero.
pub(crate) fn ratio_or(numerator: u32, denominator: u32, fallback: f64) -> f64 {
    if denominator == 0 {
        fallback
    } else {
        f64::from(numerator) / f64::from(denominator)
    }
}
