//! String parsing utilities

use crate::error::{Result, SysgrabError};

/// Normalize a raw line: strip `prefix` if the line starts with it, trim
/// leading whitespace, cut at the first `suffix`, trim trailing whitespace.
pub fn clean(line: &str, prefix: Option<&str>, suffix: Option<&str>) -> String {
    let rest = match prefix {
        Some(p) => line.strip_prefix(p).unwrap_or(line),
        None => line,
    };
    let rest = rest.trim_start();
    let rest = match suffix.filter(|s| !s.is_empty()) {
        Some(s) => rest.find(s).map_or(rest, |pos| &rest[..pos]),
        None => rest,
    };
    rest.trim_end().to_string()
}

/// Parse the integer at the very start of `text`.
///
/// Only an optional sign followed by base-10 digits is accepted; anything
/// after the digits is ignored, nothing before them is skipped.
pub fn extract_int(text: &str) -> Result<i64> {
    let bytes = text.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count();

    if digits == 0 {
        return Err(SysgrabError::NoDigits(text.to_string()));
    }

    text[..sign + digits]
        .parse::<i64>()
        .map_err(|_| SysgrabError::OutOfRange(text.to_string()))
}

/// Parse the floating-point literal at the very start of `text`.
pub fn extract_double(text: &str) -> Result<f64> {
    let len = float_prefix_len(text.as_bytes())
        .ok_or_else(|| SysgrabError::NoNumber(text.to_string()))?;

    text[..len]
        .parse::<f64>()
        .map_err(|_| SysgrabError::NoNumber(text.to_string()))
}

// Length of the longest `[sign] digits [. digits] [e [sign] digits]` prefix.
fn float_prefix_len(bytes: &[u8]) -> Option<usize> {
    let count_digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = count_digits(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(end + 1);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    Some(end)
}

/// Render `value` in fixed-point notation with `places` decimals.
///
/// Digits match the exact binary value, so `0.815` (just below the
/// decimal tie) prints `"0.81"` at two places. Only an exact tie rounds
/// away from zero: `7812.5` with zero places is `"7813"`.
pub fn format_number(value: f64, places: usize) -> String {
    let text = match exact_tie(value, places) {
        Some(rounded) => format!("{:.*}", places, rounded),
        None => format!("{:.*}", places, value),
    };

    // avoid "-0"
    match text.strip_prefix('-') {
        Some(rest) if rest.bytes().all(|b| b == b'0' || b == b'.') => rest.to_string(),
        _ => text,
    }
}

/// The away-from-zero rounding of `value` when it lies exactly halfway
/// between two representable results.
fn exact_tie(value: f64, places: usize) -> Option<f64> {
    // 10^22 is the largest exactly representable power of ten
    if places > 22 || !value.is_finite() {
        return None;
    }
    let scale = 10f64.powi(places as i32);
    let scaled = value * scale;
    // a zero residual means the product was not rounded
    if scaled.fract().abs() != 0.5 || value.mul_add(scale, -scaled) != 0.0 {
        return None;
    }
    Some(scaled.round() / scale)
}

/// Format uptime from seconds as `H:MM:SS`
pub fn format_uptime(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    format!("{}:{:02}:{:02}", hours, minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_strips_prefix_suffix_and_whitespace() {
        assert_eq!(clean(" MemTotal:    8000 kB\n", Some("MemTotal:"), Some(" kB")), "8000");
        assert_eq!(clean("MemTotal:    8000 kB\n", Some("MemTotal:"), Some(" kB")), "8000");
        assert_eq!(
            clean("PRETTY_NAME=\"Arch Linux\"", Some("PRETTY_NAME=\""), Some("\"")),
            "Arch Linux"
        );
    }

    #[test]
    fn clean_treats_affixes_as_optional() {
        assert_eq!(clean("  x86_64\n", Some("nope"), Some("missing")), "x86_64");
        assert_eq!(clean("value", None, None), "value");
        assert_eq!(clean("   \n", None, None), "");
        assert_eq!(clean("abc", Some("abc"), None), "");
    }

    #[test]
    fn extract_int_reads_leading_integer() {
        assert_eq!(extract_int("3661.50 1234.0").unwrap(), 3661);
        assert_eq!(extract_int("-42abc").unwrap(), -42);
        assert_eq!(extract_int("+7").unwrap(), 7);
    }

    #[test]
    fn extract_int_does_not_skip_prefix() {
        assert!(matches!(extract_int("abc 12"), Err(SysgrabError::NoDigits(_))));
        assert!(matches!(extract_int(" 12"), Err(SysgrabError::NoDigits(_))));
        assert!(matches!(extract_int(""), Err(SysgrabError::NoDigits(_))));
        assert!(matches!(extract_int("-"), Err(SysgrabError::NoDigits(_))));
    }

    #[test]
    fn extract_int_reports_overflow_separately() {
        assert!(matches!(
            extract_int("99999999999999999999999"),
            Err(SysgrabError::OutOfRange(_))
        ));
    }

    #[test]
    fn extract_double_reads_leading_literal() {
        assert_eq!(extract_double("4700.0000").unwrap(), 4700.0);
        assert_eq!(extract_double("3.5GHz").unwrap(), 3.5);
        assert_eq!(extract_double(".25").unwrap(), 0.25);
        assert_eq!(extract_double("1e3x").unwrap(), 1000.0);
        assert_eq!(extract_double("12.").unwrap(), 12.0);
        assert_eq!(extract_double("2e").unwrap(), 2.0);
        assert!(matches!(extract_double("MHz"), Err(SysgrabError::NoNumber(_))));
        assert!(matches!(extract_double("."), Err(SysgrabError::NoNumber(_))));
    }

    #[test]
    fn format_number_is_fixed_point() {
        assert_eq!(format_number(4.7, 2), "4.70");
        assert_eq!(format_number(976.5625, 0), "977");
        assert_eq!(format_number(7812.5, 0), "7813");
        assert_eq!(format_number(-0.2, 0), "0");
        assert_eq!(format_number(3.14159, 3), "3.142");
    }

    #[test]
    fn format_number_rounds_the_exact_value_once() {
        // 0.815 is stored as 0.81499999999999994671
        assert_eq!(format_number(0.815, 2), "0.81");
        assert_eq!(format_number(2.815, 2), format!("{:.2}", 2.815));
        assert_eq!(format_number(0.995, 2), format!("{:.2}", 0.995));
        for mhz in 800..6000 {
            let ghz = mhz as f64 / 1000.0;
            let scaled = ghz * 100.0;
            if scaled.fract().abs() != 0.5 || ghz.mul_add(100.0, -scaled) != 0.0 {
                assert_eq!(format_number(ghz, 2), format!("{:.2}", ghz), "{} MHz", mhz);
            }
        }
    }

    #[test]
    fn format_number_exact_ties_round_away_from_zero() {
        assert_eq!(format_number(7812.5, 0), "7813");
        assert_eq!(format_number(2.5, 0), "3");
        assert_eq!(format_number(-2.5, 0), "-3");
        assert_eq!(format_number(0.125, 2), "0.13");
        assert_eq!(format_number(-0.0, 2), "0.00");
    }

    #[test]
    fn uptime_is_hours_minutes_seconds() {
        assert_eq!(format_uptime(3661), "1:01:01");
        assert_eq!(format_uptime(59), "0:00:59");
        assert_eq!(format_uptime(100 * 3600 + 5), "100:00:05");
    }
}
