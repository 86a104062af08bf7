//! Min-max rescaling of raw scores for display.
//!
//! The core hands out raw scores; this is the presentation side's view of
//! them. Finite scores map onto `[0, 1]` using the finite minimum and
//! maximum. Positive infinity (closeness of a node that reaches nothing)
//! pins to `1.0` and negative infinity to `0.0`. When every finite score is
//! equal there is no spread to show and they all map to `0.0`.

/// Rescale `values` to `[0, 1]`.
#[must_use]
pub fn min_max(values: &[f64]) -> Vec<f64> {
    let (min, max) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    let span = max - min;

    values
        .iter()
        .map(|&v| {
            if v.is_nan() {
                0.0
            } else if v.is_infinite() {
                if v.is_sign_positive() { 1.0 } else { 0.0 }
            } else if span > 0.0 {
                (v - min) / span
            } else {
                0.0
            }
        })
        .collect()
}
