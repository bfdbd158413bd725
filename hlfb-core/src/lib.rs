//! Board-agnostic core logic for the HLFB monitor
//!
//! This crate contains everything that does not depend on a specific chip:
//!
//! - Per-channel state and the duty-cycle → load decoder
//! - The serial command interpreter
//! - The cycle controller that ties sampling, telemetry and commands together
//!
//! Hardware is reached only through the `hlfb-hal` traits, so the whole
//! control loop runs on the host under test.

#![no_std]
#![deny(unsafe_code)]

pub mod channel;
pub mod config;
pub mod controller;
pub mod error;
pub mod interpreter;
pub mod sampler;
pub mod state;

pub use channel::{Channel, Reading};
pub use config::{BoardLayout, MonitorConfig, MAX_CHANNELS};
pub use controller::{CycleController, CycleReport};
pub use error::MonitorError;
pub use interpreter::CommandInterpreter;
pub use state::{Mode, MonitorState};
