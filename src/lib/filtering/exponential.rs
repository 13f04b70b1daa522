use num_traits::Float;

use crate::config::{ALPHA, DEFAULT_TEMP};
use crate::error::ErrorCode;

/// Single-pole IIR smoothing: `new = alpha * raw + (1 - alpha) * old`.
///
/// Evaluated as `old + alpha * (raw - old)` so that a raw value equal to the
/// current estimate leaves it bit-for-bit unchanged.
///
/// Only the previous output is retained. `init` must be called with a real
/// reading before the first `update`; until then the filter holds `default`,
/// which is a placeholder and not a measurement. Updating an unseeded filter
/// trips a debug assertion.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExponentialFilter<ItemT> {
    alpha: ItemT,
    prev: ItemT,
    default: ItemT,
    seeded: bool,
}

impl<ItemT> ExponentialFilter<ItemT>
where
    ItemT: Float,
{
    pub fn new(alpha: ItemT, default: ItemT) -> Result<ExponentialFilter<ItemT>, ErrorCode> {
        // written so that NaN fails the check
        if !(alpha > ItemT::zero() && alpha < ItemT::one()) {
            return Err(ErrorCode::AlphaOutOfRange);
        }
        Ok(ExponentialFilter {
            alpha,
            prev: default,
            default,
            seeded: false,
        })
    }

    /// Seed the filter with a real reading, discarding all smoothing history.
    pub fn init(&mut self, seed: ItemT) {
        self.prev = seed;
        self.seeded = true;
    }

    pub fn reset(&mut self) {
        self.prev = self.default;
        self.seeded = false;
    }

    pub fn update(&mut self, data: ItemT) -> ItemT {
        debug_assert!(self.seeded, "exponential filter updated before init");
        self.prev = self.prev + self.alpha * (data - self.prev);
        self.prev
    }

    pub fn value(&self) -> ItemT {
        self.prev
    }

    pub fn alpha(&self) -> ItemT {
        self.alpha
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }
}

impl Default for ExponentialFilter<f32> {
    fn default() -> ExponentialFilter<f32> {
        ExponentialFilter {
            alpha: ALPHA,
            prev: DEFAULT_TEMP,
            default: DEFAULT_TEMP,
            seeded: false,
        }
    }
}
