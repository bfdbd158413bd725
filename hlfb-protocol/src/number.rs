//! Lenient numeric argument parsing
//!
//! Command arguments are parsed the way C's `atoi`, `atof` and `strtoul`
//! read them: leading whitespace is skipped, an optional sign is accepted,
//! and the longest numeric prefix is used. Input without any digits parses
//! as zero. Nothing is ever rejected.

fn skip_space(s: &[u8]) -> &[u8] {
    let start = s
        .iter()
        .position(|b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c))
        .unwrap_or(s.len());
    &s[start..]
}

fn split_sign(s: &[u8]) -> (bool, &[u8]) {
    match s.first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    }
}

fn count_digits(s: &[u8]) -> usize {
    s.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn leading_digits(s: &[u8]) -> impl Iterator<Item = u8> + '_ {
    s.iter().take_while(|b| b.is_ascii_digit()).map(|b| b - b'0')
}

/// Parse a signed integer prefix, saturating at the `i32` range
pub fn parse_int(s: &[u8]) -> i32 {
    let (negative, rest) = split_sign(skip_space(s));

    let limit = i64::from(i32::MAX) + 1;
    let mut value: i64 = 0;
    for digit in leading_digits(rest) {
        value = (value * 10 + i64::from(digit)).min(limit);
    }

    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Parse an unsigned integer prefix
///
/// Overflow saturates at `u32::MAX`. A leading minus negates modulo 2^32,
/// so `-1` reads as `u32::MAX`.
pub fn parse_uint(s: &[u8]) -> u32 {
    let (negative, rest) = split_sign(skip_space(s));

    let limit = u64::from(u32::MAX) + 1;
    let mut value: u64 = 0;
    for digit in leading_digits(rest) {
        value = (value * 10 + u64::from(digit)).min(limit);
    }

    if value > u64::from(u32::MAX) {
        return u32::MAX;
    }

    let value = value as u32;
    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

/// Parse a decimal floating-point prefix with optional exponent
///
/// `inf`, `infinity` and `nan` are accepted in any case, as `atof` does.
pub fn parse_float(s: &[u8]) -> f32 {
    let s = skip_space(s);
    let len = float_prefix_len(s);
    core::str::from_utf8(&s[..len])
        .ok()
        .and_then(|text| text.parse().ok())
        .unwrap_or(0.0)
}

/// Length of the longest `[sign]digits[.digits][e[sign]digits]` prefix, or
/// of a signed `inf`/`infinity`/`nan`. Zero when no digit is present.
fn float_prefix_len(s: &[u8]) -> usize {
    let sign = usize::from(matches!(s.first(), Some(b'+' | b'-')));
    let body = &s[sign..];

    for word in [&b"infinity"[..], b"inf", b"nan"] {
        if body.len() >= word.len() && body[..word.len()].eq_ignore_ascii_case(word) {
            return sign + word.len();
        }
    }

    let int_digits = count_digits(body);
    let mut end = int_digits;
    let mut frac_digits = 0;
    if body.get(end) == Some(&b'.') {
        frac_digits = count_digits(&body[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    // Exponent only counts when at least one digit follows the marker
    if matches!(body.get(end), Some(b'e' | b'E')) {
        let exp = &body[end + 1..];
        let exp_sign = usize::from(matches!(exp.first(), Some(b'+' | b'-')));
        let exp_digits = count_digits(&exp[exp_sign..]);
        if exp_digits > 0 {
            end += 1 + exp_sign + exp_digits;
        }
    }

    sign + end
}
