//! Locale-style decimal formatting.

/// Placeholder shown when a value cannot be displayed.
pub const NOT_AVAILABLE: &str = "n/a";

/// Decimal and grouping separators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl NumberFormat {
    /// German style: `1.234,5`.
    pub fn german() -> Self {
        Self {
            decimal_separator: ',',
            grouping_separator: '.',
        }
    }

    /// English style: `1,234.5`.
    pub fn english() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::german()
    }
}

/// Format `value` with at most `max_fraction_digits` decimals.
///
/// Rounds half away from zero, drops trailing zeros and groups thousands.
/// Non-finite values render as `n/a`.
///
/// ```
/// use station_server::format::{NumberFormat, format_number};
///
/// let de = NumberFormat::german();
/// assert_eq!(format_number(1234.56, 1, &de), "1.234,6");
/// assert_eq!(format_number(21.0, 1, &de), "21");
/// assert_eq!(format_number(f64::NAN, 1, &de), "n/a");
/// ```
pub fn format_number(value: f64, max_fraction_digits: usize, format: &NumberFormat) -> String {
    if !value.is_finite() {
        return NOT_AVAILABLE.to_string();
    }

    let factor = 10f64.powi(max_fraction_digits as i32);
    let rounded = (value * factor).round() / factor;
    let negative = rounded < 0.0;

    let plain = format!("{:.*}", max_fraction_digits, rounded.abs());
    let (integer, fraction) = match plain.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (plain.as_str(), ""),
    };

    let mut out = String::with_capacity(plain.len() + 4);
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(integer, format.grouping_separator));
    if !fraction.is_empty() {
        out.push(format.decimal_separator);
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
