//! Permissive numeric parsing for dataset fields.
//!
//! Dataset text is interpreted leniently: leading whitespace is skipped,
//! the longest numeric prefix is used and anything after it is ignored.
//! Text without a numeric prefix yields zero instead of an error.

/// Parses the leading decimal floating-point number of `text`.
///
/// Accepts an optional sign, digits with an optional fraction and an
/// optional exponent. Returns `0.0` when no digits are found.
#[must_use]
pub fn parse_leading_f64(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(bytes, end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(bytes, end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(bytes, exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed
        .get(..end)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Parses the leading decimal integer of `text`.
///
/// Accepts an optional sign followed by digits. Values outside the `i64`
/// range saturate. Returns `0` when no digits are found.
#[must_use]
pub fn parse_leading_i64(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let negative = bytes.first() == Some(&b'-');
    let start = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = count_digits(bytes, start);

    bytes
        .iter()
        .skip(start)
        .take(digits)
        .fold(0i64, |acc, digit| {
            let value = i64::from(digit - b'0');
            if negative {
                acc.saturating_mul(10).saturating_sub(value)
            } else {
                acc.saturating_mul(10).saturating_add(value)
            }
        })
}

fn count_digits(bytes: &[u8], start: usize) -> usize {
    bytes
        .iter()
        .skip(start)
        .take_while(|byte| byte.is_ascii_digit())
        .count()
}
