//! HLFB waveform sampling and load decoding
//!
//! HLFB is open-drain and active low: the drive pulls the line to ground for
//! the asserted part of each PWM period. The sampler times one low and one
//! high pulse, scales the resulting duty cycle by the channel's adjustment
//! factor (percent scale, 100 = identity) and maps it to a load:
//!
//! ```text
//! load = round(2 × |duty × adjustment − 50|)
//! ```
//!
//! A calibrated duty of 50% is zero load; 0% or 100% is full load.

use hlfb_hal::{Level, PulseInput};

use crate::channel::Reading;

/// Level the drive asserts on the HLFB line
pub const ACTIVE_LEVEL: Level = Level::Low;

/// Decode a pair of pulse widths into a load percentage
///
/// Returns `None` when no period was observed (both widths zero).
pub fn decode_load(active_us: u32, inactive_us: u32, adjustment: f32) -> Option<u32> {
    let period = u64::from(active_us) + u64::from(inactive_us);
    if period == 0 {
        return None;
    }

    let duty = active_us as f32 / period as f32 * adjustment;
    // `as` saturates at u32::MAX and maps NaN to 0
    Some(libm::roundf(2.0 * libm::fabsf(duty - 50.0)) as u32)
}

/// Sample one channel
///
/// Blocks for at most `2 × timeout_us`.
pub fn sample<P: PulseInput + ?Sized>(input: &mut P, adjustment: f32, timeout_us: u32) -> Reading {
    let active_us = input.pulse_width_us(ACTIVE_LEVEL, timeout_us);
    let inactive_us = input.pulse_width_us(ACTIVE_LEVEL.inverse(), timeout_us);

    match decode_load(active_us, inactive_us, adjustment) {
        Some(load) => Reading::Load(load),
        None if input.level() == ACTIVE_LEVEL => Reading::StaticActive,
        None => Reading::NoSignal,
    }
}
