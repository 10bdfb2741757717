//! Number and date formatting shared by view state and rendering.

use chrono::{DateTime, Utc};

/// Price with exactly three decimals: `1234.5` → `"1234.500"`.
///
/// An exact tie rounds away from zero (`0.0625` → `"0.063"`), where `{:.3}`
/// alone would round it to even.
pub fn format_price(price: f64) -> String {
    // Exact expansion; a tie ends in a 5 at the fourth decimal
    let exact = format!("{:.30}", price.abs());
    let Some((int_part, frac)) = exact.split_once('.') else {
        return format!("{:.3}", price);
    };
    let is_tie = frac.as_bytes().get(3) == Some(&b'5') && frac[4..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{:.3}", price);
    }

    let mut digits: Vec<u8> = format!("{}{}", int_part, &frac[..3]).into_bytes();
    let mut carry = true;
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        digits.insert(0, b'1');
    }
    let digits = String::from_utf8_lossy(&digits);
    let (whole, decimals) = digits.split_at(digits.len() - 3);
    let sign = if price < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, whole, decimals)
}

/// Supply figure as a plain number: integral values print without a
/// fractional part (`21000000`), others with their shortest exact form.
pub fn format_supply(value: f64) -> String {
    format!("{}", value)
}

/// Insert `,` between thousands of the integer part of `digits`.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// US dollars with grouping and two decimals: `1234567.891` → `"$1,234,567.89"`.
pub fn format_usd(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, group_thousands(int_part), frac_part)
}

/// Signed percentage with two decimals: `1.5` → `"+1.50%"`.
pub fn format_percent(value: f64) -> String {
    if value > 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

/// Calendar date, or `-` when missing.
pub fn format_date(value: Option<DateTime<Utc>>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}
