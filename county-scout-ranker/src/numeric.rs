//! Numeric conversions shared by the scoring modules.

/// Widen a census count to `f64`.
#[expect(
    clippy::cast_precision_loss,
    reason = "census counts stay far below 2^52"
)]
pub(crate) const fn as_f64(value: u64) -> f64 {
    value as f64
}
