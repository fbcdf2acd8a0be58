/// Magnitude from which numbers are displayed in exponent form.
const EXPONENT_UPPER: f64 = 1e21;
/// Magnitude below which non-zero numbers are displayed in exponent form.
const EXPONENT_LOWER: f64 = 1e-6;

/// Formats a number for display.
///
/// # Example
/// ```
/// use classhub::interpreter::value::number::format_number;
///
/// assert_eq!(format_number(5.0), "5");
/// assert_eq!(format_number(3.25), "3.25");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// assert_eq!(format_number(f64::NAN), "NaN");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(1.5e-7), "1.5e-7");
/// ```
#[must_use]
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if !(EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        let formatted = format!("{n:e}");
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            },
            _ => formatted,
        };
    }

    if n.fract() == 0.0 {
        format!("{n:.0}")
    } else {
        format!("{n}")
    }
}

/// Coerces text to a number.
///
/// Surrounding whitespace is ignored and empty text is `0`. Anything that is
/// not a plain decimal literal (optionally signed, optionally with an
/// exponent) or a spelled-out infinity becomes `NaN`.
///
/// # Example
/// ```
/// use classhub::interpreter::value::number::parse_number;
///
/// assert_eq!(parse_number(" 16 "), 16.0);
/// assert_eq!(parse_number(""), 0.0);
/// assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
/// assert!(parse_number("abc").is_nan());
/// assert!(parse_number("inf").is_nan());
/// ```
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim();

    match text {
        "" => return 0.0,
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {},
    }

    let plain = text.chars()
                    .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !plain {
        return f64::NAN;
    }

    text.parse().unwrap_or(f64::NAN)
}

/// Rounds to the nearest integer, with halves going towards positive
/// infinity.
///
/// # Example
/// ```
/// use classhub::interpreter::value::number::round_half_up;
///
/// assert_eq!(round_half_up(2.5), 3.0);
/// assert_eq!(round_half_up(-2.5), -2.0);
/// assert_eq!(round_half_up(-2.6), -3.0);
/// ```
#[must_use]
pub fn round_half_up(n: f64) -> f64 {
    let floor = n.floor();
    if n - floor >= 0.5 { floor + 1.0 } else { floor }
}
