//! Sensor data conditioning for small microcontrollers.
//!
//! An exponential smoothing filter removes noise from raw readings and a
//! circular trend buffer classifies the recent history as rising, falling or
//! stable. Both are plain state objects with no allocation; a firmware loop
//! owns them and calls into them once per sampling cycle.
//!
//! ```
//! use thermotrend::conditioning::SensorConditioner;
//! use thermotrend::filtering::trend::Trend;
//!
//! let mut conditioner = SensorConditioner::<4>::default();
//! conditioner.seed(21.0);
//! for _ in 0..4 {
//!     conditioner.sample(21.0);
//! }
//! assert_eq!(conditioner.trend(), Trend::Stable);
//! ```

#![cfg_attr(not(test), no_std)]

pub mod conditioning;
pub mod config;
pub mod error;
pub mod rounding;

pub mod filtering {
    pub mod exponential;
    pub mod trend;
}
