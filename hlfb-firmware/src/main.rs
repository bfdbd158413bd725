//! HLFB Monitor - Servo Load Monitor Firmware
//!
//! Decodes the High-Level Feedback (HLFB) duty-cycle output of up to four
//! servo motors into a 0-100 load figure, streams it over UART0 and drives a
//! fault output when a motor stops reporting.
//!
//! The board layout is compiled in from `board.toml`; everything else is
//! reconfigured at runtime through the serial command protocol.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::AnyPin;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as RpUartConfig, Uart};
use embassy_rp::Peri;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use hlfb_core::{CycleController, CycleReport, Mode};
use hlfb_hal::TextWriter;
use hlfb_hal_rp2040::{hlfb_input, PinBank, RpOutput, SerialRx, SerialTx};

mod board;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 256]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("HLFB monitor starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    let (mut pins, serial) = PinBank::split(p);
    info!("Peripherals initialized");

    // Setup UART0 for the command port
    let baudrate = board::serial_config().baudrate;
    let mut uart_config = RpUartConfig::default();
    uart_config.baudrate = baudrate;

    let tx_buf = TX_BUF.init([0u8; 256]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(serial.uart, serial.tx, serial.rx, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized at {} baud", baudrate);

    // Setup monitor pins from the board layout
    let state = board::initial_state();
    let layout = state.layout;

    let inputs = core::array::from_fn(|i| hlfb_input(take_pin(&mut pins, layout.hlfb_pin(i))));
    let status = RpOutput::new(take_pin(&mut pins, layout.status_pin));
    let fault = RpOutput::new(take_pin(&mut pins, layout.fault_pin));

    info!(
        "HLFB on GPIO{}..GPIO{}, status GPIO{}, fault GPIO{}",
        layout.hlfb_pin(0),
        layout.hlfb_pin(hlfb_core::MAX_CHANNELS - 1),
        layout.status_pin,
        layout.fault_pin
    );

    let mut controller = CycleController::new(
        inputs,
        status,
        fault,
        SerialRx::new(rx),
        TextWriter::new(SerialTx::new(tx)),
        state,
    );

    if let Err(e) = controller.start() {
        warn!("Failed to print help: {}", e);
    }
    info!(
        "Monitoring {} motors, timeout {}us",
        controller.state().config.motor_count,
        controller.state().config.pulse_timeout_us
    );

    let mut fault_latched = true;
    loop {
        let report = controller.run_cycle();
        log_cycle(&report, &mut fault_latched);

        // Push this cycle's telemetry and replies out before sampling again
        let out = controller.out_mut();
        if let Err(e) = out.flush() {
            warn!("UART flush failed: {}", e);
        }
        if let Some(e) = out.take_error() {
            warn!("UART write failed: {}", e);
        }

        // Yield to the executor between cycles
        embassy_futures::yield_now().await;
    }
}

/// Take a board pin, halting if the layout is unusable
fn take_pin(pins: &mut PinBank, pin: u8) -> Peri<'static, AnyPin> {
    match pins.take(pin) {
        Ok(p) => p,
        Err(e) => defmt::panic!("GPIO{} unavailable: {}", pin, e),
    }
}

/// Log commands and fault transitions of one cycle
fn log_cycle(report: &CycleReport, fault_latched: &mut bool) {
    for command in report.commands.iter() {
        info!("Command: {}", command.keyword());
    }

    if let Some(e) = report.error {
        warn!("Cycle serial error: {}", e);
    }

    if report.mode == Mode::Monitoring {
        debug!("Readings: {}", report.readings);
    }

    if report.fault != *fault_latched {
        if report.fault {
            warn!("Motor fault: no HLFB signal ({})", report.readings);
        } else {
            info!("Fault cleared");
        }
        *fault_latched = report.fault;
    }
}
