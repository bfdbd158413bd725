//! HLFB Monitor Hardware Abstraction Layer
//!
//! This crate defines the pin and serial contracts the monitor core consumes.
//! Chip-specific crates implement them on real hardware; tests implement them
//! with mock pins and a simulated clock.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  hlfb-core (sampler, interpreter, loop) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hlfb-hal (this crate - traits)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │   hlfb-hal-   │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`pulse::PulseInput`] - Bounded pulse-width measurement
//! - [`pulse::MicrosClock`] - Free-running microsecond clock
//! - [`uart::UartTx`], [`uart::UartRx`] - Serial communication

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod pulse;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, Level, OutputPin};
pub use pulse::{measure_pulse, MicrosClock, PulseInput, TimedInput};
pub use uart::{TextWriter, UartConfig, UartRx, UartTx};
