pub const SYSCLK_HZ: u32 = 48_000_000;
pub const UART_BAUD: u32 = 115_200;

pub const SAMPLE_PERIOD_MS: u64 = 100;
pub const REPORT_PERIOD_MS: u64 = 1000;
// dump the whole trend window every n-th report
pub const SNAPSHOT_EVERY_N_REPORTS: u32 = 10;

// TMP36 on PA0: 500 mV at 0 degC, 10 mV/degC
pub const SENSOR_OFFSET_MV: f32 = 500.0;
pub const SENSOR_MV_PER_DEG_C: f32 = 10.0;
pub const SENSOR_MIN_DEG_C: f32 = -40.0;
pub const SENSOR_MAX_DEG_C: f32 = 125.0;

pub const DISPLAY_DECIMALS: i32 = 1;
