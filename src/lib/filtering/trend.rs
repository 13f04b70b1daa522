use num_traits::Float;

use crate::config::{DEFAULT_TEMP, TREND_THRESHOLD};
use crate::error::ErrorCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Trend {
    Rising,
    Falling,
    Stable,
}

/// Fixed window of past samples used to classify the recent trend.
///
/// Every slot always holds a sample: `init` fills the whole window with a seed
/// and each `push` overwrites the oldest one. `idx` is the next slot to be
/// written, which is also the oldest sample; the newest sits just before it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrendBuffer<ItemT, const SIZE: usize> {
    buff: [ItemT; SIZE],
    idx: usize,
    threshold: ItemT,
    seeded: bool,
}

impl<ItemT, const SIZE: usize> TrendBuffer<ItemT, SIZE>
where
    ItemT: Float,
{
    const NON_EMPTY: () = assert!(SIZE > 0, "trend buffer needs at least one slot");

    /// `default` fills every slot until the first `init`.
    pub fn new(threshold: ItemT, default: ItemT) -> Result<TrendBuffer<ItemT, SIZE>, ErrorCode> {
        let () = Self::NON_EMPTY;
        if !threshold.is_finite() || threshold < ItemT::zero() {
            return Err(ErrorCode::InvalidThreshold);
        }
        Ok(TrendBuffer {
            buff: [default; SIZE],
            idx: 0,
            threshold,
            seeded: false,
        })
    }

    /// Fill every slot with `seed` and rewind the cursor.
    pub fn init(&mut self, seed: ItemT) {
        self.buff = [seed; SIZE];
        self.idx = 0;
        self.seeded = true;
    }

    pub fn push(&mut self, data: ItemT) {
        debug_assert!(self.seeded, "trend buffer pushed before init");
        self.buff[self.idx] = data;
        self.idx = (self.idx + 1) % SIZE;
    }

    pub fn oldest(&self) -> ItemT {
        self.buff[self.idx]
    }

    pub fn newest(&self) -> ItemT {
        self.buff[(self.idx + SIZE - 1) % SIZE]
    }

    pub fn delta(&self) -> ItemT {
        self.newest() - self.oldest()
    }

    // NaN in either end slot compares false both ways and reads as Stable
    pub fn trend(&self) -> Trend {
        debug_assert!(self.seeded, "trend queried before init");
        let (oldest, newest) = (self.oldest(), self.newest());
        if newest > oldest + self.threshold {
            Trend::Rising
        } else if newest < oldest - self.threshold {
            Trend::Falling
        } else {
            Trend::Stable
        }
    }

    /// Raw slots in storage order. Rotate by `cursor()` for chronological
    /// order, or use `iter()`.
    pub fn snapshot(&self) -> &[ItemT; SIZE] {
        &self.buff
    }

    /// Samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = ItemT> + '_ {
        let (newer, older) = self.buff.split_at(self.idx);
        older.iter().chain(newer.iter()).copied()
    }

    pub fn cursor(&self) -> usize {
        self.idx
    }

    pub fn threshold(&self) -> ItemT {
        self.threshold
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }
}

impl<const SIZE: usize> Default for TrendBuffer<f32, SIZE> {
    fn default() -> TrendBuffer<f32, SIZE> {
        let () = Self::NON_EMPTY;
        TrendBuffer {
            buff: [DEFAULT_TEMP; SIZE],
            idx: 0,
            threshold: TREND_THRESHOLD,
            seeded: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded<const SIZE: usize>(seed: f32) -> TrendBuffer<f32, SIZE> {
        let mut buffer = TrendBuffer::<f32, SIZE>::new(0.1, DEFAULT_TEMP).unwrap();
        buffer.init(seed);
        buffer
    }

    #[test]
    fn rejects_bad_thresholds() {
        for threshold in [-0.1_f32, f32::NAN, f32::INFINITY] {
            assert_eq!(
                TrendBuffer::<f32, 3>::new(threshold, DEFAULT_TEMP).err(),
                Some(ErrorCode::InvalidThreshold)
            );
        }
        assert!(TrendBuffer::<f32, 3>::new(0.0, DEFAULT_TEMP).is_ok());
    }

    #[test]
    fn new_fills_with_given_default() {
        let buffer = TrendBuffer::<f32, 4>::new(0.1, 22.0).unwrap();
        assert_eq!(buffer.snapshot(), &[22.0; 4]);
        assert!(!buffer.is_seeded());
    }

    #[test]
    fn snapshot_after_init_is_all_seed() {
        let buffer = seeded::<5>(21.5);
        assert_eq!(buffer.snapshot(), &[21.5; 5]);
        assert_eq!(buffer.cursor(), 0);
        assert_eq!(buffer.trend(), Trend::Stable);
    }

    #[test]
    fn three_slot_walkthrough() {
        let mut buffer = seeded::<3>(20.0);

        buffer.push(20.05);
        assert_eq!(buffer.snapshot(), &[20.05, 20.0, 20.0]);
        assert_eq!(buffer.cursor(), 1);
        assert_eq!(buffer.oldest(), 20.0);
        assert_eq!(buffer.newest(), 20.05);
        assert_eq!(buffer.trend(), Trend::Stable);

        buffer.push(20.3);
        assert_eq!(buffer.snapshot(), &[20.05, 20.3, 20.0]);
        assert_eq!(buffer.cursor(), 2);
        assert_eq!(buffer.oldest(), 20.0);
        assert_eq!(buffer.newest(), 20.3);
        assert_eq!(buffer.trend(), Trend::Rising);
    }

    #[test]
    fn falling_when_newest_drops_past_threshold() {
        let mut buffer = seeded::<4>(25.0);
        buffer.push(24.95);
        assert_eq!(buffer.trend(), Trend::Stable);
        buffer.push(24.5);
        assert_eq!(buffer.trend(), Trend::Falling);
    }

    #[test]
    fn difference_equal_to_threshold_is_stable() {
        let mut buffer = TrendBuffer::<f32, 2>::new(0.5, 0.0).unwrap();
        buffer.init(1.0);
        buffer.push(1.5);
        assert_eq!(buffer.trend(), Trend::Stable);
        buffer.init(1.0);
        buffer.push(0.5);
        assert_eq!(buffer.trend(), Trend::Stable);
    }

    #[test]
    fn cursor_wraps_after_capacity_pushes() {
        let mut buffer = seeded::<4>(0.0);
        for i in 1..=4 {
            buffer.push(i as f32);
        }
        assert_eq!(buffer.cursor(), 0);
        assert_eq!(buffer.oldest(), 1.0);

        buffer.push(5.0);
        // the seed is gone; the oldest visible sample is the second push
        assert_eq!(buffer.oldest(), 2.0);
        assert_eq!(buffer.newest(), 5.0);
    }

    #[test]
    fn holds_last_pushes_in_order() {
        let mut buffer = seeded::<4>(0.0);
        for i in 1..=11 {
            buffer.push(i as f32);
            assert_eq!(buffer.snapshot().len(), 4);
        }
        let mut chronological = [0.0; 4];
        for (slot, value) in chronological.iter_mut().zip(buffer.iter()) {
            *slot = value;
        }
        assert_eq!(chronological, [8.0, 9.0, 10.0, 11.0]);
        assert_eq!(buffer.iter().count(), 4);
    }

    #[test]
    fn iter_matches_snapshot_rotated_by_cursor() {
        let mut buffer = seeded::<5>(0.0);
        for v in [3.0, 1.0, 4.0, 1.5, 5.0, 9.0, 2.0] {
            buffer.push(v);
        }
        let raw = buffer.snapshot();
        let cursor = buffer.cursor();
        for (i, value) in buffer.iter().enumerate() {
            assert_eq!(value, raw[(cursor + i) % 5]);
        }
    }

    #[test]
    fn single_slot_buffer_is_always_stable() {
        let mut buffer = seeded::<1>(10.0);
        buffer.push(50.0);
        assert_eq!(buffer.oldest(), buffer.newest());
        assert_eq!(buffer.trend(), Trend::Stable);
    }

    #[test]
    fn nan_sample_reads_as_stable() {
        let mut buffer = seeded::<3>(20.0);
        buffer.push(f32::NAN);
        assert_eq!(buffer.trend(), Trend::Stable);
    }

    #[test]
    fn init_resets_history() {
        let mut buffer = seeded::<3>(20.0);
        buffer.push(30.0);
        buffer.push(40.0);
        buffer.init(18.0);
        assert_eq!(buffer.snapshot(), &[18.0; 3]);
        assert_eq!(buffer.cursor(), 0);
        assert_eq!(buffer.delta(), 0.0);
    }

    #[test]
    fn default_is_configured_but_unseeded() {
        let buffer = TrendBuffer::<f32, 6>::default();
        assert_eq!(buffer.snapshot(), &[DEFAULT_TEMP; 6]);
        assert_eq!(buffer.threshold(), TREND_THRESHOLD);
        assert!(!buffer.is_seeded());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "before init")]
    fn push_before_init_is_caught_in_debug() {
        let mut buffer = TrendBuffer::<f32, 3>::default();
        buffer.push(1.0);
    }
}
