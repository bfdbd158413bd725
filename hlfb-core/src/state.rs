//! Monitor state shared by the sampler and the command interpreter
//!
//! The cycle controller owns one [`MonitorState`] and lends it to each phase
//! in turn, so every write completes before the next phase reads.

use hlfb_protocol::HelpInfo;

use crate::channel::Channel;
use crate::config::{BoardLayout, MonitorConfig, DEFAULT_ADJUSTMENT, MAX_CHANNELS};

/// Operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Channels are sampled and telemetry is emitted every cycle
    Monitoring,
    /// Sampling is skipped; commands are still processed
    Idle,
}

/// Configuration, channels and board layout
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonitorState {
    pub config: MonitorConfig,
    pub channels: [Channel; MAX_CHANNELS],
    pub layout: BoardLayout,
}

impl Default for MonitorState {
    fn default() -> Self {
        Self::new(BoardLayout::default(), MonitorConfig::default(), DEFAULT_ADJUSTMENT)
    }
}

impl MonitorState {
    /// Create state with every channel at the same adjustment factor
    pub fn new(layout: BoardLayout, config: MonitorConfig, adjustment: f32) -> Self {
        Self {
            config,
            channels: core::array::from_fn(|i| Channel::new(layout.hlfb_pin(i), adjustment)),
            layout,
        }
    }

    /// Current mode, derived from the run flag
    pub fn mode(&self) -> Mode {
        if self.config.running {
            Mode::Monitoring
        } else {
            Mode::Idle
        }
    }

    /// Facts shown by the `HELP` command
    pub fn help_info(&self) -> HelpInfo {
        HelpInfo {
            hlfb_base_pin: self.layout.hlfb_base_pin,
            motor_count: self.config.motor_count,
            fault_pin: self.layout.fault_pin,
        }
    }
}
