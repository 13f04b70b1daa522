// Build-time tuning of the conditioning chain. Earlier firmware revisions ran
// ALPHA at 0.07 and 0.02 and seeded at 22.0; these are the settled values.

// weight of the newest raw sample, lower is smoother but slower
pub const ALPHA: f32 = 0.05;

// filter and trend buffer contents before the first real reading, in degC
pub const DEFAULT_TEMP: f32 = 20.0;

pub const TREND_COUNT: usize = 10;
// minimum newest-oldest difference for a rising/falling trend, in degC
pub const TREND_THRESHOLD: f32 = 0.1;

// filter updates per trend buffer push
pub const PUSH_INTERVAL: u32 = 1;

pub const MAX_DECIMAL_PLACES: i32 = 9;

const _: () = assert!(ALPHA > 0.0 && ALPHA < 1.0, "ALPHA must be in (0, 1)");
const _: () = assert!(TREND_THRESHOLD >= 0.0, "TREND_THRESHOLD must not be negative");
const _: () = assert!(TREND_COUNT > 0, "TREND_COUNT must be at least 1");
const _: () = assert!(PUSH_INTERVAL > 0, "PUSH_INTERVAL must be at least 1");
