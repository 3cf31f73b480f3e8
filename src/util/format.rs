//! Number formatting for the estimate views.

/// Most fraction digits shown for a money amount.
const MAX_FRACTION_DIGITS: usize = 3;

/// Groups thousands with `,` and keeps at most three fraction digits,
/// dropping trailing zeros: `91000.0` becomes `91,000`, `1234.5` becomes
/// `1,234.5`.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.*}", MAX_FRACTION_DIGITS, value);
    let (integer_part, fraction_part) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, fraction.trim_end_matches('0')),
        None => (formatted.as_str(), ""),
    };

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // "-0" after rounding away the fraction
    let sign = if grouped.chars().all(|c| c == '0') && fraction_part.is_empty() {
        ""
    } else {
        sign
    };

    if fraction_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{fraction_part}")
    }
}

pub fn format_currency(value: f64, suffix: &str) -> String {
    format!("{}{suffix}", format_amount(value))
}

/// Fixed two decimals, as shown next to the profit rate.
pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}
