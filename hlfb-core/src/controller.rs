//! Cycle controller
//!
//! One call to [`CycleController::run_cycle`] is one iteration of the
//! monitor's main loop:
//!
//! 1. clear the fault latch
//! 2. when monitoring: raise the status output, sample channels
//!    `0..motor_count` in order, emit the telemetry line, drop the status
//!    output (when idle the status output just stays low)
//! 3. process pending serial commands
//! 4. drive the fault output low if any channel had no signal, high otherwise
//!
//! Commands handled in step 3 only affect sampling from the next cycle on.

use heapless::Vec;
use hlfb_hal::{Level, OutputPin, PulseInput, UartRx};
use hlfb_protocol::response;

use crate::channel::Reading;
use crate::config::MAX_CHANNELS;
use crate::error::MonitorError;
use crate::interpreter::{CommandInterpreter, DispatchedCommands};
use crate::state::{Mode, MonitorState};

/// Level of the fault output while a fault is latched
pub const FAULT_ASSERTED: Level = Level::Low;

/// What happened during one cycle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Mode the cycle ran in
    pub mode: Mode,
    /// Readings in channel order (empty when idle)
    pub readings: Vec<Reading, MAX_CHANNELS>,
    /// At least one channel reported no signal
    pub fault: bool,
    /// Commands dispatched after sampling
    pub commands: DispatchedCommands,
    /// First serial error of the cycle
    pub error: Option<MonitorError>,
}

impl CycleReport {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            readings: Vec::new(),
            fault: false,
            commands: DispatchedCommands::new(),
            error: None,
        }
    }

    fn record_error(&mut self, error: MonitorError) {
        self.error.get_or_insert(error);
    }
}

/// Owns the monitor state and every piece of hardware it touches
///
/// - `P`: HLFB inputs
/// - `S`: status output
/// - `F`: fault output
/// - `R`: serial receiver
/// - `W`: serial text output
pub struct CycleController<P, S, F, R, W> {
    inputs: [P; MAX_CHANNELS],
    status: S,
    fault: F,
    rx: R,
    out: W,
    state: MonitorState,
    interpreter: CommandInterpreter,
}

impl<P, S, F, R, W> CycleController<P, S, F, R, W>
where
    P: PulseInput,
    S: OutputPin,
    F: OutputPin,
    R: UartRx,
    W: core::fmt::Write,
{
    /// Create a controller
    ///
    /// `inputs[i]` must be the pin of `state.channels[i]`.
    pub fn new(
        inputs: [P; MAX_CHANNELS],
        status: S,
        fault: F,
        rx: R,
        out: W,
        state: MonitorState,
    ) -> Self {
        Self {
            inputs,
            status,
            fault,
            rx,
            out,
            state,
            interpreter: CommandInterpreter::new(),
        }
    }

    /// Power-up sequence, before the first cycle
    ///
    /// The fault output starts asserted until the first cycle proves the
    /// channels healthy, then the help block is printed.
    pub fn start(&mut self) -> Result<(), MonitorError> {
        self.fault.set_level(FAULT_ASSERTED);
        self.status.set_low();
        response::write_help(&mut self.out, &self.state.help_info())
            .map_err(|_| MonitorError::SerialWrite)
    }

    /// Run one iteration of the main loop
    pub fn run_cycle(&mut self) -> CycleReport {
        let mut report = CycleReport::new(self.state.mode());

        match report.mode {
            Mode::Monitoring => {
                self.status.set_high();
                self.sample_channels(&mut report);
                let codes = report.readings.iter().map(Reading::telemetry_code);
                if response::write_telemetry(&mut self.out, codes).is_err() {
                    report.record_error(MonitorError::SerialWrite);
                }
                self.status.set_low();
            }
            Mode::Idle => self.status.set_low(),
        }

        if let Err(e) = self.interpreter.poll(
            &mut self.rx,
            &mut self.out,
            &mut self.state,
            &mut report.commands,
        ) {
            report.record_error(e);
        }

        self.fault.set_level(if report.fault {
            FAULT_ASSERTED
        } else {
            FAULT_ASSERTED.inverse()
        });

        report
    }

    fn sample_channels(&mut self, report: &mut CycleReport) {
        let timeout_us = self.state.config.pulse_timeout_us;
        let count = self.state.config.active_channels();

        for (channel, input) in self
            .state
            .channels
            .iter_mut()
            .zip(self.inputs.iter_mut())
            .take(count)
        {
            let reading = channel.sample(input, timeout_us);
            report.fault |= reading.is_fault();
            // Cannot fail: count is bounded by MAX_CHANNELS
            let _ = report.readings.push(reading);
        }
    }

    /// Current monitor state
    pub fn state(&self) -> &MonitorState {
        &self.state
    }

    /// Mutable monitor state, for applying configuration outside the
    /// serial protocol
    pub fn state_mut(&mut self) -> &mut MonitorState {
        &mut self.state
    }

    /// Get access to the HLFB inputs
    pub fn inputs_mut(&mut self) -> &mut [P; MAX_CHANNELS] {
        &mut self.inputs
    }

    /// Get access to the status output
    pub fn status(&self) -> &S {
        &self.status
    }

    /// Get access to the fault output
    pub fn fault(&self) -> &F {
        &self.fault
    }

    /// Get access to the serial receiver
    pub fn rx_mut(&mut self) -> &mut R {
        &mut self.rx
    }

    /// Get access to the serial output
    pub fn out(&self) -> &W {
        &self.out
    }

    /// Mutable serial output
    pub fn out_mut(&mut self) -> &mut W {
        &mut self.out
    }
}
