//! Locale-independent number formatting in the style of C's `%.Ng`.

/// Significant digits used when presenting roots.
pub const ROOT_PRECISION: usize = 4;

/// Format `value` like `printf("%.*g", precision, value)`.
///
/// The value is rounded to `precision` significant digits. Fixed notation is
/// used when the decimal exponent `X` of the rounded value satisfies
/// `-4 <= X < precision`, scientific notation (`d.ddde±XX`) otherwise.
/// Trailing zeros and a dangling decimal point are removed in both forms.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    let precision = precision.max(1);
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rust's `{:e}` rounds exactly like printf, so the exponent it reports is
    // the exponent after rounding to `precision` digits.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Format a root for display, folding negative zero into `0`.
pub fn format_root(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format_general(value, ROOT_PRECISION)
}

fn strip_trailing_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
