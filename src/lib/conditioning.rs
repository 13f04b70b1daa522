use crate::config::{DEFAULT_TEMP, PUSH_INTERVAL, TREND_COUNT};
use crate::error::ErrorCode;
use crate::filtering::exponential::ExponentialFilter;
use crate::filtering::trend::{Trend, TrendBuffer};

/// One sensor channel: a smoothing filter feeding a trend buffer.
///
/// Every call to `sample` updates the filter; every `push_interval`-th call
/// also records the filtered value in the trend history. Independent channels
/// are independent instances. When shared between interrupt contexts the
/// whole conditioner must sit behind one lock so that a trend query never
/// sees the buffer and its cursor out of step.
///
/// Trend changes are logged and also held until `take_transition`, for hosts
/// that report over their own channel instead of a logger.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConditioner<const SIZE: usize = TREND_COUNT> {
    filter: ExponentialFilter<f32>,
    history: TrendBuffer<f32, SIZE>,
    push_interval: u32,
    cycles: u32,
    last_trend: Trend,
    transition: Option<(Trend, Trend)>,
}

impl<const SIZE: usize> SensorConditioner<SIZE> {
    pub fn new(
        alpha: f32,
        threshold: f32,
        push_interval: u32,
    ) -> Result<SensorConditioner<SIZE>, ErrorCode> {
        if push_interval == 0 {
            return Err(ErrorCode::ZeroPushInterval);
        }
        Ok(SensorConditioner {
            filter: ExponentialFilter::new(alpha, DEFAULT_TEMP)?,
            history: TrendBuffer::new(threshold, DEFAULT_TEMP)?,
            push_interval,
            cycles: 0,
            last_trend: Trend::Stable,
            transition: None,
        })
    }

    /// Seed filter and history with the first valid reading. Calling it again
    /// later (e.g. after a sensor fault) discards all history.
    pub fn seed(&mut self, raw: f32) {
        self.filter.init(raw);
        self.history.init(raw);
        self.cycles = 0;
        self.last_trend = Trend::Stable;
        self.transition = None;
        log::debug!("conditioner seeded at {}", raw);
    }

    pub fn sample(&mut self, raw: f32) -> f32 {
        let filtered = self.filter.update(raw);

        self.cycles += 1;
        if self.cycles >= self.push_interval {
            self.cycles = 0;
            self.history.push(filtered);

            let trend = self.history.trend();
            if trend != self.last_trend {
                log::debug!(
                    "trend {:?} -> {:?} (delta {})",
                    self.last_trend,
                    trend,
                    self.history.delta()
                );
                self.transition = Some((self.last_trend, trend));
                self.last_trend = trend;
            }
        }

        filtered
    }

    /// The most recent `(from, to)` trend change not yet taken, if any.
    pub fn take_transition(&mut self) -> Option<(Trend, Trend)> {
        self.transition.take()
    }

    pub fn value(&self) -> f32 {
        self.filter.value()
    }

    pub fn trend(&self) -> Trend {
        self.history.trend()
    }

    pub fn snapshot(&self) -> &[f32; SIZE] {
        self.history.snapshot()
    }

    pub fn filter(&self) -> &ExponentialFilter<f32> {
        &self.filter
    }

    pub fn history(&self) -> &TrendBuffer<f32, SIZE> {
        &self.history
    }

    pub fn push_interval(&self) -> u32 {
        self.push_interval
    }
}

impl<const SIZE: usize> Default for SensorConditioner<SIZE> {
    fn default() -> SensorConditioner<SIZE> {
        SensorConditioner {
            filter: ExponentialFilter::default(),
            history: TrendBuffer::default(),
            push_interval: PUSH_INTERVAL,
            cycles: 0,
            last_trend: Trend::Stable,
            transition: None,
        }
    }
}
