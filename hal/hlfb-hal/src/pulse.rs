//! Bounded pulse-width measurement
//!
//! HLFB outputs encode motor load as a PWM duty cycle. The monitor measures
//! one low and one high pulse per channel with a blocking, deadline-bounded
//! poll of the input level.
//!
//! A measurement of level `L`:
//! 1. waits for any `L` pulse already in progress to end,
//! 2. waits for the next `L` pulse to start,
//! 3. times that pulse until it ends.
//!
//! All three phases share a single deadline of `timeout_us` from the call.
//! Overrunning it in any phase yields 0.

use crate::gpio::{InputPin, Level};

/// Free-running microsecond clock
pub trait MicrosClock {
    /// Microseconds since an arbitrary epoch. Must be monotonic.
    fn now_us(&self) -> u64;
}

/// Input pin able to time a single pulse
pub trait PulseInput: InputPin {
    /// Width in microseconds of the next complete pulse at `level`
    ///
    /// Returns 0 if no complete pulse was seen within `timeout_us`.
    fn pulse_width_us(&mut self, level: Level, timeout_us: u32) -> u32;
}

/// Measure the next complete pulse at `level` on `pin`
///
/// A zero timeout returns 0 without touching the pin.
pub fn measure_pulse<P, C>(pin: &P, clock: &C, level: Level, timeout_us: u32) -> u32
where
    P: InputPin + ?Sized,
    C: MicrosClock + ?Sized,
{
    if timeout_us == 0 {
        return 0;
    }

    let deadline = clock.now_us().saturating_add(u64::from(timeout_us));

    // Skip the tail of a pulse that started before we were called
    while pin.level() == level {
        if clock.now_us() >= deadline {
            return 0;
        }
    }

    while pin.level() != level {
        if clock.now_us() >= deadline {
            return 0;
        }
    }

    let pulse_start = clock.now_us();

    while pin.level() == level {
        if clock.now_us() >= deadline {
            return 0;
        }
    }

    let width = clock.now_us().saturating_sub(pulse_start);
    u32::try_from(width).unwrap_or(u32::MAX)
}

/// Input pin paired with a clock, giving it pulse-timing capability
///
/// Chip HALs wrap their GPIO input type and a microsecond timer in this
/// to satisfy [`PulseInput`].
pub struct TimedInput<P, C> {
    pin: P,
    clock: C,
}

impl<P: InputPin, C: MicrosClock> TimedInput<P, C> {
    /// Pair `pin` with `clock`
    pub fn new(pin: P, clock: C) -> Self {
        Self { pin, clock }
    }

    /// Get access to the underlying pin
    pub fn pin(&self) -> &P {
        &self.pin
    }
}

impl<P: InputPin, C: MicrosClock> InputPin for TimedInput<P, C> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

impl<P: InputPin, C: MicrosClock> PulseInput for TimedInput<P, C> {
    fn pulse_width_us(&mut self, level: Level, timeout_us: u32) -> u32 {
        measure_pulse(&self.pin, &self.clock, level, timeout_us)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Clock that advances one microsecond every time it is read
    struct SimClock<'a> {
        time: &'a Cell<u64>,
    }

    impl MicrosClock for SimClock<'_> {
        fn now_us(&self) -> u64 {
            let now = self.time.get();
            self.time.set(now + 1);
            now
        }
    }

    /// Square wave: low for `low_us`, then high for `high_us`, repeating
    struct SquareWave<'a> {
        time: &'a Cell<u64>,
        low_us: u64,
        high_us: u64,
    }

    impl InputPin for SquareWave<'_> {
        fn is_high(&self) -> bool {
            if self.high_us == 0 {
                return false;
            }
            if self.low_us == 0 {
                return true;
            }
            self.time.get() % (self.low_us + self.high_us) >= self.low_us
        }
    }

    #[test]
    fn test_measures_low_and_high_pulses() {
        let time = Cell::new(0);
        let wave = SquareWave {
            time: &time,
            low_us: 500,
            high_us: 365,
        };
        let mut input = TimedInput::new(wave, SimClock { time: &time });

        assert_eq!(input.pulse_width_us(Level::Low, 10_000), 500);
        assert_eq!(input.pulse_width_us(Level::High, 10_000), 365);
    }

    #[test]
    fn test_skips_pulse_in_progress() {
        let time = Cell::new(100); // 400us into a 500us low pulse
        let wave = SquareWave {
            time: &time,
            low_us: 500,
            high_us: 500,
        };
        let mut input = TimedInput::new(wave, SimClock { time: &time });

        // Partial pulse is ignored, the next full one is timed
        assert_eq!(input.pulse_width_us(Level::Low, 10_000), 500);
    }

    #[test]
    fn test_static_level_times_out() {
        let time = Cell::new(0);
        let wave = SquareWave {
            time: &time,
            low_us: 1,
            high_us: 0,
        };
        let mut input = TimedInput::new(wave, SimClock { time: &time });

        assert_eq!(input.pulse_width_us(Level::Low, 1_000), 0);
        assert_eq!(input.pulse_width_us(Level::High, 1_000), 0);
        // Deadline bounds the wait
        assert!(time.get() <= 2_010);
    }

    #[test]
    fn test_pulse_longer_than_timeout() {
        let time = Cell::new(0);
        let wave = SquareWave {
            time: &time,
            low_us: 5_000,
            high_us: 5_000,
        };
        let mut input = TimedInput::new(wave, SimClock { time: &time });

        assert_eq!(input.pulse_width_us(Level::High, 4_000), 0);
    }

    #[test]
    fn test_zero_timeout_returns_immediately() {
        let time = Cell::new(0);
        let wave = SquareWave {
            time: &time,
            low_us: 10,
            high_us: 10,
        };
        let mut input = TimedInput::new(wave, SimClock { time: &time });

        assert_eq!(input.pulse_width_us(Level::Low, 0), 0);
        assert_eq!(time.get(), 0);
    }
}
