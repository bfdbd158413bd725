//! Outgoing text: telemetry, echoes, confirmations and help
//!
//! Every function writes whole lines terminated by [`LINE_END`] to any
//! [`core::fmt::Write`] sink.

use core::fmt::{self, Write};

use crate::command::Command;

/// Outgoing line terminator
pub const LINE_END: &str = "\r\n";

/// Telemetry line prefix
pub const TELEMETRY_PREFIX: &str = "HLFB:";

/// Board facts shown in the help block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HelpInfo {
    /// Pin of channel 0
    pub hlfb_base_pin: u8,
    /// Configured motor count, as last set
    pub motor_count: i32,
    /// Aggregate fault output pin
    pub fault_pin: u8,
}

/// Write one telemetry line: `HLFB:<v0>,<v1>,...`
pub fn write_telemetry<W, I>(w: &mut W, values: I) -> fmt::Result
where
    W: Write,
    I: IntoIterator<Item = i32>,
{
    w.write_str(TELEMETRY_PREFIX)?;
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            w.write_char(',')?;
        }
        write!(w, "{}", value)?;
    }
    w.write_str(LINE_END)
}

/// Echo a received line back verbatim
///
/// Non-ASCII bytes are shown as `?`.
pub fn write_echo<W: Write>(w: &mut W, line: &[u8]) -> fmt::Result {
    for &b in line {
        w.write_char(if b.is_ascii() { b as char } else { '?' })?;
    }
    w.write_str(LINE_END)
}

/// Write the reply for an applied command
pub fn write_reply<W: Write>(w: &mut W, command: &Command, help: &HelpInfo) -> fmt::Result {
    match command {
        Command::MotorCount(count) => write!(w, "Parsed MCT: {}{}", count, LINE_END),
        Command::Adjust(factors) => {
            for (i, factor) in factors.iter().enumerate() {
                write!(w, "Parsed ADJ for motor {}: {:.4}{}", i + 1, factor, LINE_END)?;
            }
            Ok(())
        }
        Command::Timeout(timeout_us) => write!(w, "Parsed TIMEOUT: {}{}", timeout_us, LINE_END),
        Command::Start => write!(w, "Monitoring started.{}", LINE_END),
        Command::Stop => write!(w, "Monitoring stopped.{}", LINE_END),
        Command::Help => write_help(w, help),
        Command::Unknown => write!(
            w,
            "Unknown command. Type HELP for a list of commands.{}",
            LINE_END
        ),
    }
}

/// Write the usage block
pub fn write_help<W: Write>(w: &mut W, help: &HelpInfo) -> fmt::Result {
    const USAGE: &[&str] = &[
        "Available commands:",
        "MCT:<value>      - Set motor count (1-4)",
        "ADJ:<v1>[,<v2>,<v3>,<v4>] - Set adjustment factor(s) per motor (comma-separated floats)",
        "TIMEOUT:<value>  - Set pulse timeout in us",
        "START            - Start HLFB monitoring",
        "STOP             - Stop HLFB monitoring",
        "HELP             - Show this help message",
    ];

    for line in USAGE {
        w.write_str(line)?;
        w.write_str(LINE_END)?;
    }

    let last_pin = i64::from(help.hlfb_base_pin) + i64::from(help.motor_count) - 1;
    write!(
        w,
        "Monitoring HLFB on pins {} to {}.{}",
        help.hlfb_base_pin, last_pin, LINE_END
    )?;
    write!(w, "Pin {} LOW indicates motor failure.{}", help.fault_pin, LINE_END)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Adjustments;
    use heapless::String;

    const HELP: HelpInfo = HelpInfo {
        hlfb_base_pin: 9,
        motor_count: 3,
        fault_pin: 8,
    };

    #[test]
    fn test_telemetry_line() {
        let mut out: String<64> = String::new();
        write_telemetry(&mut out, [12, 0, -1]).unwrap();
        assert_eq!(out.as_str(), "HLFB:12,0,-1\r\n");
    }

    #[test]
    fn test_telemetry_single_and_empty() {
        let mut out: String<64> = String::new();
        write_telemetry(&mut out, [7]).unwrap();
        assert_eq!(out.as_str(), "HLFB:7\r\n");

        out.clear();
        write_telemetry(&mut out, [0i32; 0]).unwrap();
        assert_eq!(out.as_str(), "HLFB:\r\n");
    }

    #[test]
    fn test_echo() {
        let mut out: String<64> = String::new();
        write_echo(&mut out, b"  MCT:2").unwrap();
        assert_eq!(out.as_str(), "  MCT:2\r\n");

        out.clear();
        write_echo(&mut out, &[b'A', 0xC3, b'B']).unwrap();
        assert_eq!(out.as_str(), "A?B\r\n");
    }

    #[test]
    fn test_adjust_reply() {
        let mut factors = Adjustments::new();
        factors.extend_from_slice(&[90.0, 80.5]).unwrap();

        let mut out: String<128> = String::new();
        write_reply(&mut out, &Command::Adjust(factors), &HELP).unwrap();
        assert_eq!(
            out.as_str(),
            "Parsed ADJ for motor 1: 90.0000\r\nParsed ADJ for motor 2: 80.5000\r\n"
        );
    }

    #[test]
    fn test_simple_replies() {
        let mut out: String<128> = String::new();
        write_reply(&mut out, &Command::MotorCount(6), &HELP).unwrap();
        write_reply(&mut out, &Command::Timeout(5000), &HELP).unwrap();
        write_reply(&mut out, &Command::Stop, &HELP).unwrap();
        assert_eq!(
            out.as_str(),
            "Parsed MCT: 6\r\nParsed TIMEOUT: 5000\r\nMonitoring stopped.\r\n"
        );
    }

    #[test]
    fn test_help_shows_pin_range() {
        let mut out: String<512> = String::new();
        write_help(&mut out, &HELP).unwrap();
        assert!(out.starts_with("Available commands:\r\n"));
        assert!(out.contains("Monitoring HLFB on pins 9 to 11.\r\n"));
        assert!(out.ends_with("Pin 8 LOW indicates motor failure.\r\n"));
    }
}
