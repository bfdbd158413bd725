//! Board wiring and start-up defaults
//!
//! Constants are generated from `board.toml` by the build script, which has
//! already checked the pin assignment for range and overlap.

use hlfb_core::{BoardLayout, MonitorConfig, MonitorState};
use hlfb_hal::UartConfig;

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));

/// Pin layout of this board
pub fn layout() -> BoardLayout {
    BoardLayout {
        hlfb_base_pin: HLFB_BASE_PIN,
        status_pin: STATUS_PIN,
        fault_pin: FAULT_PIN,
    }
}

/// Monitor state at power-up: monitoring, with the configured defaults
pub fn initial_state() -> MonitorState {
    let config = MonitorConfig {
        motor_count: DEFAULT_MOTOR_COUNT,
        pulse_timeout_us: DEFAULT_PULSE_TIMEOUT_US,
        running: true,
    };
    MonitorState::new(layout(), config, DEFAULT_ADJUSTMENT)
}

/// Command port settings
pub fn serial_config() -> UartConfig {
    UartConfig { baudrate: BAUDRATE }
}
