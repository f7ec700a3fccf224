//! Currency and percentage formatting shared by the engines and the report.
//!
//! Recommendation strings embed these outputs, so the rounding rules are part of the
//! engine contract: fixed-point values round half away from zero on the exact binary
//! value, currency is US-style with a `$` symbol, `,` grouping and no cents.

pub const DEFAULT_PERCENT_DECIMALS: usize = 1;

const CURRENCY_SYMBOL: &str = "$";
const GROUPING_SEPARATOR: char = ',';
const DECIMAL_SEPARATOR: char = '.';
/// Largest integer below which every `f64` integer is exact.
const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Renders `value` with exactly `decimals` fractional digits.
///
/// Ties round away from zero; everything else is correctly rounded from the exact
/// binary value. Negative values keep their sign even when they round to zero.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    let magnitude = value.abs();
    let body = match rounded_tie_units(magnitude, decimals) {
        Some(units) => place_decimal(units, decimals),
        None => format!("{:.*}", decimals, magnitude),
    };
    if value < 0.0 {
        format!("-{}", body)
    } else {
        body
    }
}

/// When `magnitude` sits exactly halfway between two `decimals`-digit values, returns
/// the upper one scaled by `10^decimals`.
fn rounded_tie_units(magnitude: f64, decimals: usize) -> Option<u64> {
    let exponent = decimals as i32;
    let doubled = magnitude * 2f64.powi(exponent + 1);
    if doubled.fract() != 0.0 || doubled % 2.0 != 1.0 {
        return None;
    }
    let twice_scaled = doubled * 5f64.powi(exponent);
    if twice_scaled >= EXACT_INTEGER_LIMIT {
        return None;
    }
    Some(((twice_scaled + 1.0) / 2.0) as u64)
}

fn place_decimal(units: u64, decimals: usize) -> String {
    let digits = format!("{:0>width$}", units, width = decimals + 1);
    if decimals == 0 {
        return digits;
    }
    let (int_part, frac_part) = digits.split_at(digits.len() - decimals);
    format!("{}{}{}", int_part, DECIMAL_SEPARATOR, frac_part)
}

/// Fixed-point rendering with thousands grouping on the integer part.
pub fn format_number(value: f64, precision: usize) -> String {
    let mut body = to_fixed(value, precision);
    match body.find(DECIMAL_SEPARATOR) {
        Some(pos) => {
            let mut int_part = body[..pos].to_string();
            insert_grouping(&mut int_part);
            body = format!("{}{}", int_part, &body[pos..]);
        }
        None => insert_grouping(&mut body),
    }
    body
}

fn insert_grouping(int_part: &mut String) {
    if let Some(digits) = int_part.strip_prefix('-') {
        *int_part = format!("-{}", group_digits(digits));
    } else {
        *int_part = group_digits(int_part);
    }
}

fn group_digits(digits: &str) -> String {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_string();
    }
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(GROUPING_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}

/// Whole-dollar currency, e.g. `$1,200,000` or `-$250`.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{}NaN", CURRENCY_SYMBOL);
    }
    let body = if amount.is_infinite() {
        "∞".to_string()
    } else {
        format_number(amount.abs(), 0)
    };
    if amount.is_sign_negative() {
        format!("-{}{}", CURRENCY_SYMBOL, body)
    } else {
        format!("{}{}", CURRENCY_SYMBOL, body)
    }
}

/// Percentage with a fixed number of decimals, e.g. `12.5%`.
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{}%", to_fixed(value, decimals))
}

/// Income multiple with one decimal, e.g. `1.3x`.
pub fn format_multiple(value: f64) -> String {
    format!("{}x", to_fixed(value, 1))
}
