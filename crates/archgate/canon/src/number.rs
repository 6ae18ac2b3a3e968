//! ECMAScript `Number.prototype.toString` formatting for finite doubles.

use serde_json::Number;

use crate::error::CanonError;

/// Render a JSON number in canonical form.
///
/// Integers that arrive as integers are written exactly; everything else is
/// formatted as an IEEE-754 double using the shortest round-trip digits.
pub(crate) fn write_number(out: &mut Vec<u8>, n: &Number) -> Result<(), CanonError> {
    if let Some(i) = n.as_i64() {
        out.extend_from_slice(i.to_string().as_bytes());
        return Ok(());
    }
    if let Some(u) = n.as_u64() {
        out.extend_from_slice(u.to_string().as_bytes());
        return Ok(());
    }
    let f = n.as_f64().ok_or(CanonError::NonFiniteNumber)?;
    out.extend_from_slice(format_f64(f)?.as_bytes());
    Ok(())
}

pub(crate) fn format_f64(value: f64) -> Result<String, CanonError> {
    if !value.is_finite() {
        return Err(CanonError::NonFiniteNumber);
    }
    if value == 0.0 {
        // Covers -0.0 as well.
        return Ok("0".to_string());
    }

    let negative = value < 0.0;
    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e-7".
    let sci = format!("{:e}", value.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let mut digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
    }
    let k = digits.len() as i32;
    // value = 0.d1d2...dk × 10^n
    let n = exponent + 1;

    let mut out = String::new();
    if negative {
        out.push('-');
    }

    if k <= n && n <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat('0').take((n - k) as usize));
    } else if 0 < n && n <= 21 {
        out.push_str(&digits[..n as usize]);
        out.push('.');
        out.push_str(&digits[n as usize..]);
    } else if -6 < n && n <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take((-n) as usize));
        out.push_str(&digits);
    } else {
        out.push_str(&digits[..1]);
        if k > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        let e = n - 1;
        if e >= 0 {
            out.push('+');
        }
        out.push_str(&e.to_string());
    }
    Ok(out)
}
