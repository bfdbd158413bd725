//! Runtime configuration
//!
//! Everything here is mutated only by the command interpreter and read by
//! the sampler on the following cycle. Nothing is persisted: a power cycle
//! restores the defaults.

/// Number of physical HLFB inputs
pub const MAX_CHANNELS: usize = 4;

/// Motors monitored after power-up
pub const DEFAULT_MOTOR_COUNT: i32 = 3;

/// Pulse measurement bound after power-up (10 ms)
pub const DEFAULT_PULSE_TIMEOUT_US: u32 = 10_000;

/// Adjustment factor applied to every channel after power-up
pub const DEFAULT_ADJUSTMENT: f32 = 86.5;

/// Fixed pin assignment of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardLayout {
    /// Pin of HLFB channel 0; channel `i` is on `hlfb_base_pin + i`
    pub hlfb_base_pin: u8,
    /// Status indicator, high while a sampling pass runs
    pub status_pin: u8,
    /// Aggregate fault output, low while any channel has no signal
    pub fault_pin: u8,
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            hlfb_base_pin: 9,
            status_pin: 13,
            fault_pin: 8,
        }
    }
}

impl BoardLayout {
    /// Pin of channel `index`
    pub fn hlfb_pin(&self, index: usize) -> u8 {
        self.hlfb_base_pin.saturating_add(index as u8)
    }
}

/// Live monitor configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonitorConfig {
    /// Motor count exactly as last commanded (not range checked)
    pub motor_count: i32,
    /// Upper bound for each pulse measurement, in microseconds
    pub pulse_timeout_us: u32,
    /// Sampling enabled
    pub running: bool,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            motor_count: DEFAULT_MOTOR_COUNT,
            pulse_timeout_us: DEFAULT_PULSE_TIMEOUT_US,
            running: true,
        }
    }
}

impl MonitorConfig {
    /// Number of channels a sampling pass visits
    ///
    /// `motor_count` is stored verbatim, but only the physical channels can
    /// be sampled: negative counts sample nothing and counts above
    /// [`MAX_CHANNELS`] sample all of them.
    pub fn active_channels(&self) -> usize {
        self.motor_count.clamp(0, MAX_CHANNELS as i32) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MonitorConfig::default();
        assert_eq!(config.motor_count, 3);
        assert_eq!(config.pulse_timeout_us, 10_000);
        assert!(config.running);
    }

    #[test]
    fn test_active_channels_bounded() {
        let mut config = MonitorConfig::default();

        config.motor_count = 2;
        assert_eq!(config.active_channels(), 2);

        config.motor_count = 6;
        assert_eq!(config.active_channels(), MAX_CHANNELS);

        config.motor_count = 0;
        assert_eq!(config.active_channels(), 0);

        config.motor_count = -5;
        assert_eq!(config.active_channels(), 0);
    }

    #[test]
    fn test_channel_pins() {
        let layout = BoardLayout::default();
        assert_eq!(layout.hlfb_pin(0), 9);
        assert_eq!(layout.hlfb_pin(3), 12);
    }
}
