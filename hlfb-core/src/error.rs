//! Monitor error types
//!
//! None of these stop the control loop. They are reported once per cycle so
//! the firmware can log them.

/// Errors that can occur during a monitor cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorError {
    /// Writing telemetry or a command reply failed
    SerialWrite,
    /// Reading from the command port failed
    SerialRead,
}
