//! Build script for hlfb-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml at compile time
//! - Generates the board constants included by `src/board.rs`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Number of HLFB channels wired on the board
const HLFB_CHANNELS: u8 = 4;

/// RP2040 user GPIOs
const GPIO_COUNT: u8 = 30;

/// GPIOs used by the command UART (UART0 TX/RX)
const UART_PINS: [u8; 2] = [0, 1];

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BoardFile {
    pins: PinsSection,
    serial: SerialSection,
    defaults: DefaultsSection,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PinsSection {
    hlfb_base: u8,
    status: u8,
    fault: u8,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SerialSection {
    baudrate: u32,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DefaultsSection {
    motor_count: i32,
    adjustment: f64,
    pulse_timeout_us: u32,
}

fn main() {
    setup_linker();
    let board = validate_config();
    generate_board_module(&board);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    if env::var_os("CARGO_FEATURE_DEFMT").is_some() {
        println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    }

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate board.toml configuration at compile time
fn validate_config() -> BoardFile {
    // Re-run if board.toml changes
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    // Check if config file exists
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml configuration file.          ║\n\
            ║  Please create one in the hlfb-firmware directory.               ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    // Read the config file
    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse TOML syntax and shape in one go
    let board: BoardFile = match toml::from_str(&config_content) {
        Ok(board) => board,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid board.toml                                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    validate_pins(&board.pins);
    validate_defaults(&board.serial, &board.defaults);

    println!("cargo:warning=board.toml validated successfully");
    board
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Panic with a boxed list of validation errors, if any
fn report_errors(title: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Validate pin assignments
fn validate_pins(pins: &PinsSection) {
    let mut errors = Vec::new();

    let mut assigned: Vec<(String, u8)> = (0..HLFB_CHANNELS)
        .map(|i| (format!("hlfb channel {}", i), pins.hlfb_base.saturating_add(i)))
        .collect();
    assigned.push(("status".to_string(), pins.status));
    assigned.push(("fault".to_string(), pins.fault));

    for (name, pin) in &assigned {
        if *pin >= GPIO_COUNT {
            errors.push(format!("[pins] {} uses GPIO{}, must be 0-29", name, pin));
        }
        if UART_PINS.contains(pin) {
            errors.push(format!("[pins] {} uses GPIO{}, reserved for UART0", name, pin));
        }
    }

    for (i, (name, pin)) in assigned.iter().enumerate() {
        if let Some((other, _)) = assigned[..i].iter().find(|(_, p)| p == pin) {
            errors.push(format!("[pins] {} and {} both use GPIO{}", other, name, pin));
        }
    }

    report_errors("Invalid pin configuration", &errors);
}

/// Validate serial settings and start-up defaults
fn validate_defaults(serial: &SerialSection, defaults: &DefaultsSection) {
    let mut errors = Vec::new();

    if serial.baudrate == 0 {
        errors.push("[serial] baudrate must be non-zero".to_string());
    }
    if defaults.pulse_timeout_us == 0 {
        errors.push("[defaults] pulse_timeout_us must be non-zero".to_string());
    }
    if !defaults.adjustment.is_finite() {
        errors.push("[defaults] adjustment must be a finite number".to_string());
    }

    report_errors("Invalid defaults configuration", &errors);

    if !(0..=HLFB_CHANNELS as i32).contains(&defaults.motor_count) {
        println!(
            "cargo:warning=board.toml motor_count {} is outside 0-{}, sampling is clamped",
            defaults.motor_count, HLFB_CHANNELS
        );
    }
}

/// Write the board constants to OUT_DIR/board_config.rs
fn generate_board_module(board: &BoardFile) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let mut f = File::create(out_dir.join("board_config.rs")).unwrap();

    writeln!(f, "// Generated from board.toml by build.rs").unwrap();
    writeln!(f, "pub const HLFB_BASE_PIN: u8 = {};", board.pins.hlfb_base).unwrap();
    writeln!(f, "pub const STATUS_PIN: u8 = {};", board.pins.status).unwrap();
    writeln!(f, "pub const FAULT_PIN: u8 = {};", board.pins.fault).unwrap();
    writeln!(f, "pub const BAUDRATE: u32 = {};", board.serial.baudrate).unwrap();
    writeln!(
        f,
        "pub const DEFAULT_MOTOR_COUNT: i32 = {};",
        board.defaults.motor_count
    )
    .unwrap();
    writeln!(
        f,
        "pub const DEFAULT_ADJUSTMENT: f32 = {:?};",
        board.defaults.adjustment
    )
    .unwrap();
    writeln!(
        f,
        "pub const DEFAULT_PULSE_TIMEOUT_US: u32 = {};",
        board.defaults.pulse_timeout_us
    )
    .unwrap();
}
