//! RP2040-specific HAL for the HLFB monitor
//!
//! This crate provides RP2040 implementations of the shared `hlfb-hal`
//! traits:
//!
//! - GPIO input/output wrappers around `embassy-rp` pins
//! - A microsecond clock backed by `embassy-time`
//! - A pin bank for taking GPIOs by number from board config
//! - Serial RX/TX adapters over any `embedded-io` UART half

#![no_std]

pub mod clock;
pub mod gpio;
pub mod pins;
pub mod uart;

pub use clock::EmbassyClock;
pub use gpio::{hlfb_input, HlfbInput, RpInput, RpOutput};
pub use pins::{PinBank, PinError, SerialPeripherals};
pub use uart::{SerialRx, SerialTx};

// Re-export shared traits from hlfb-hal for convenience
pub use hlfb_hal::{InputPin, OutputPin, PulseInput, UartRx, UartTx};
