//! Serial command interpreter
//!
//! Drains whatever bytes the port already holds, assembles them into lines
//! and dispatches each complete line. It never waits for input, so a partial
//! line simply stays buffered until a later cycle.
//!
//! Each dispatched line is echoed, applied to the [`MonitorState`] and then
//! confirmed. There is no reject path: every line either changes state or
//! produces the unknown-command notice.

use core::fmt::Write;

use heapless::Vec;
use hlfb_hal::UartRx;
use hlfb_protocol::{response, Command, LineBuffer};

use crate::error::MonitorError;
use crate::state::MonitorState;

/// Commands kept per cycle for reporting; later ones are still applied
pub const MAX_REPORTED_COMMANDS: usize = 4;

/// Commands dispatched during one poll
pub type DispatchedCommands = Vec<Command, MAX_REPORTED_COMMANDS>;

/// Line-buffered command interpreter
#[derive(Debug, Clone, Default)]
pub struct CommandInterpreter {
    line: LineBuffer,
}

impl CommandInterpreter {
    /// Create an interpreter with an empty line buffer
    pub fn new() -> Self {
        Self {
            line: LineBuffer::new(),
        }
    }

    /// Process every byte currently available on `rx`
    ///
    /// Replies go to `out`. Dispatched commands are appended to `dispatched`.
    /// A read error ends the poll; a write error is reported but the
    /// remaining input is still processed.
    pub fn poll<R, W>(
        &mut self,
        rx: &mut R,
        out: &mut W,
        state: &mut MonitorState,
        dispatched: &mut DispatchedCommands,
    ) -> Result<(), MonitorError>
    where
        R: UartRx,
        W: Write,
    {
        let mut result = Ok(());

        while rx.read_ready().map_err(|_| MonitorError::SerialRead)? {
            let byte = rx.read_byte().map_err(|_| MonitorError::SerialRead)?;

            let Some(line) = self.line.feed(byte) else {
                continue;
            };

            let command = Command::parse(&line);
            apply(state, &command);

            if respond(out, &line, &command, state).is_err() {
                result = Err(MonitorError::SerialWrite);
            }

            let _ = dispatched.push(command);
        }

        result
    }

    /// Bytes of the partial line waiting for a terminator
    pub fn pending(&self) -> usize {
        self.line.len()
    }
}

/// Apply a command to the monitor state
pub fn apply(state: &mut MonitorState, command: &Command) {
    match command {
        Command::MotorCount(count) => state.config.motor_count = *count,
        Command::Adjust(factors) => {
            for (channel, &factor) in state.channels.iter_mut().zip(factors.iter()) {
                channel.set_adjustment(factor);
            }
        }
        Command::Timeout(timeout_us) => state.config.pulse_timeout_us = *timeout_us,
        Command::Start => state.config.running = true,
        Command::Stop => state.config.running = false,
        Command::Help | Command::Unknown => {}
    }
}

fn respond<W: Write>(
    out: &mut W,
    line: &[u8],
    command: &Command,
    state: &MonitorState,
) -> core::fmt::Result {
    response::write_echo(out, line)?;
    response::write_reply(out, command, &state.help_info())
}
