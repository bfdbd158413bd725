//! HLFB Monitor Serial Protocol
//!
//! This crate defines the ASCII, line-based protocol spoken over the monitor's
//! serial port. The host sends commands; the monitor answers with echoes,
//! confirmations and a continuous telemetry stream.
//!
//! # Protocol Overview
//!
//! Lines are terminated by `\n` or `\r`. Outgoing lines end with `\r\n`.
//!
//! ```text
//! host → monitor                  monitor → host
//! ─────────────────────────────   ─────────────────────────────
//! MCT:<n>                         HLFB:<v0>[,<v1>,<v2>,<v3>]
//! ADJ:<f>[,<f>,<f>,<f>]           <echo of each command line>
//! TIMEOUT:<us>                    Parsed MCT: <n>
//! START | STOP | HELP             Monitoring started.
//! ```
//!
//! Telemetry values are a load percentage, `0` for a statically active
//! input, or `-1` when a channel shows no signal.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod line;
pub mod number;
pub mod response;

pub use command::{Adjustments, Command, MAX_ADJUSTMENTS};
pub use line::{Line, LineBuffer, LINE_CAPACITY};
pub use response::{HelpInfo, LINE_END};
