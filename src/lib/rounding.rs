use libm::roundf;

use crate::config::MAX_DECIMAL_PLACES;

const POW10: [f32; MAX_DECIMAL_PLACES as usize + 1] =
    [1.0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9];

/// Round `value` to `places` decimal digits, halves away from zero.
///
/// `places` is clamped to `0..=MAX_DECIMAL_PLACES`. If scaling overflows the
/// input is returned as is. The rounding applies to the binary value, so a
/// literal such as 2.675 that is stored just below the midpoint rounds down.
pub fn round_to_decimals(value: f32, places: i32) -> f32 {
    let scale = POW10[places.clamp(0, MAX_DECIMAL_PLACES) as usize];
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    roundf(scaled) / scale
}
