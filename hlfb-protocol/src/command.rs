//! Command grammar
//!
//! Keywords are case-sensitive and matched as prefixes after any leading
//! spaces. Arguments follow a colon. Parsing never fails: anything that is
//! not a known keyword becomes [`Command::Unknown`], and malformed numbers
//! fall back to zero (see [`crate::number`]).

use heapless::Vec;

use crate::number::{parse_float, parse_int, parse_uint};

/// Maximum number of adjustment factors in one `ADJ` command
pub const MAX_ADJUSTMENTS: usize = 4;

/// Adjustment factors in channel order
pub type Adjustments = Vec<f32, MAX_ADJUSTMENTS>;

/// A parsed command line
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// `MCT:<int>` - number of monitored motors, unvalidated
    MotorCount(i32),
    /// `ADJ:<f>[,<f>...]` - adjustment factors for channels 0..n
    Adjust(Adjustments),
    /// `TIMEOUT:<uint>` - pulse measurement timeout in microseconds
    Timeout(u32),
    /// `START` - resume sampling
    Start,
    /// `STOP` - suspend sampling
    Stop,
    /// `HELP` - print usage
    Help,
    /// Anything else
    Unknown,
}

impl Command {
    /// Parse one line (terminator already stripped)
    pub fn parse(line: &[u8]) -> Self {
        let start = line.iter().position(|&b| b != b' ').unwrap_or(line.len());
        let cmd = &line[start..];

        if let Some(arg) = cmd.strip_prefix(b"MCT:") {
            Command::MotorCount(parse_int(arg))
        } else if let Some(arg) = cmd.strip_prefix(b"ADJ:") {
            Command::Adjust(parse_adjustments(arg))
        } else if let Some(arg) = cmd.strip_prefix(b"TIMEOUT:") {
            Command::Timeout(parse_uint(arg))
        } else if cmd.starts_with(b"START") {
            Command::Start
        } else if cmd.starts_with(b"STOP") {
            Command::Stop
        } else if cmd.starts_with(b"HELP") {
            Command::Help
        } else {
            Command::Unknown
        }
    }

    /// Short keyword for logging
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::MotorCount(_) => "MCT",
            Command::Adjust(_) => "ADJ",
            Command::Timeout(_) => "TIMEOUT",
            Command::Start => "START",
            Command::Stop => "STOP",
            Command::Help => "HELP",
            Command::Unknown => "?",
        }
    }
}

/// Comma-separated factors; empty fields are skipped, extras ignored
fn parse_adjustments(arg: &[u8]) -> Adjustments {
    let mut factors = Adjustments::new();
    for token in arg
        .split(|&b| b == b',')
        .filter(|token| !token.is_empty())
        .take(MAX_ADJUSTMENTS)
    {
        // Cannot fail: take() bounds the count
        let _ = factors.push(parse_float(token));
    }
    factors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjust(values: &[f32]) -> Command {
        let mut factors = Adjustments::new();
        factors.extend_from_slice(values).unwrap();
        Command::Adjust(factors)
    }

    #[test]
    fn test_parse_motor_count() {
        assert_eq!(Command::parse(b"MCT:2"), Command::MotorCount(2));
        assert_eq!(Command::parse(b"MCT:6"), Command::MotorCount(6));
        assert_eq!(Command::parse(b"MCT:-1"), Command::MotorCount(-1));
        assert_eq!(Command::parse(b"MCT:x"), Command::MotorCount(0));
    }

    #[test]
    fn test_parse_adjust() {
        assert_eq!(Command::parse(b"ADJ:90.0,80.0"), adjust(&[90.0, 80.0]));
        assert_eq!(
            Command::parse(b"ADJ:1,2,3,4,5,6"),
            adjust(&[1.0, 2.0, 3.0, 4.0])
        );
        assert_eq!(Command::parse(b"ADJ:1,,2"), adjust(&[1.0, 2.0]));
        assert_eq!(Command::parse(b"ADJ:"), adjust(&[]));
        assert_eq!(Command::parse(b"ADJ:abc"), adjust(&[0.0]));
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(Command::parse(b"TIMEOUT:5000"), Command::Timeout(5000));
        assert_eq!(Command::parse(b"TIMEOUT:"), Command::Timeout(0));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(Command::parse(b"START"), Command::Start);
        assert_eq!(Command::parse(b"STOP"), Command::Stop);
        assert_eq!(Command::parse(b"HELP"), Command::Help);
        // Prefix match
        assert_eq!(Command::parse(b"STARTNOW"), Command::Start);
        assert_eq!(Command::parse(b"HELPME"), Command::Help);
    }

    #[test]
    fn test_leading_spaces_skipped() {
        assert_eq!(Command::parse(b"   STOP"), Command::Stop);
        assert_eq!(Command::parse(b"  MCT:4"), Command::MotorCount(4));
    }

    #[test]
    fn test_unknown() {
        assert_eq!(Command::parse(b"start"), Command::Unknown);
        assert_eq!(Command::parse(b"MCT 2"), Command::Unknown);
        assert_eq!(Command::parse(b"\tSTOP"), Command::Unknown);
        assert_eq!(Command::parse(b"   "), Command::Unknown);
    }
}
