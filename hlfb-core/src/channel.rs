//! Per-motor channel state

use hlfb_hal::PulseInput;

use crate::sampler;

/// Classification of one sampling pass on one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reading {
    /// A full period was observed; load in percent (may exceed 100 with a
    /// large adjustment factor)
    Load(u32),
    /// No period, but the input is held at the active level
    StaticActive,
    /// No period and the input is idle: disconnected or unpowered drive
    NoSignal,
}

impl Reading {
    /// Value reported on the telemetry line
    ///
    /// `StaticActive` shares the `0` of an unloaded motor; `NoSignal` is `-1`.
    pub fn telemetry_code(&self) -> i32 {
        match *self {
            Reading::Load(load) => i32::try_from(load).unwrap_or(i32::MAX),
            Reading::StaticActive => 0,
            Reading::NoSignal => -1,
        }
    }

    /// True if this reading should trip the aggregate fault output
    pub fn is_fault(&self) -> bool {
        matches!(self, Reading::NoSignal)
    }
}

/// One monitored HLFB input
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Channel {
    pin: u8,
    adjustment: f32,
    last: Option<Reading>,
}

impl Channel {
    /// Create a channel on `pin` with an initial adjustment factor
    pub fn new(pin: u8, adjustment: f32) -> Self {
        Self {
            pin,
            adjustment,
            last: None,
        }
    }

    /// Hardware pin number
    pub fn pin(&self) -> u8 {
        self.pin
    }

    /// Current adjustment factor
    pub fn adjustment(&self) -> f32 {
        self.adjustment
    }

    /// Replace the adjustment factor; takes effect on the next sample
    pub fn set_adjustment(&mut self, adjustment: f32) {
        self.adjustment = adjustment;
    }

    /// Result of the most recent sample, if any
    pub fn last_reading(&self) -> Option<Reading> {
        self.last
    }

    /// Sample `input` and record the result
    pub fn sample<P: PulseInput + ?Sized>(&mut self, input: &mut P, timeout_us: u32) -> Reading {
        let reading = sampler::sample(input, self.adjustment, timeout_us);
        self.last = Some(reading);
        reading
    }
}
