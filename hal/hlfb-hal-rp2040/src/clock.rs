//! Microsecond clock for pulse timing
//!
//! Backed by the embassy time driver (the RP2040 1 MHz timer), so readings
//! are exact microseconds and never wrap in practice.

use embassy_time::Instant;
use hlfb_hal::MicrosClock;

/// Clock reading the embassy time driver
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl MicrosClock for EmbassyClock {
    fn now_us(&self) -> u64 {
        Instant::now().as_micros()
    }
}
