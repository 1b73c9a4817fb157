const GROUP_SEPARATOR: char = ',';

/// Renders an operand for the display: the integer part gets thousands
/// separators, the fractional part is reattached exactly as typed.
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    let operand = operand?;
    let formatted = match operand.split_once('.') {
        Some((integer, fraction)) => format!("{}.{}", format_integer(integer), fraction),
        None => format_integer(operand),
    };
    Some(formatted)
}

fn format_integer(integer: &str) -> String {
    let (negative, digits) = match integer.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, integer),
    };

    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        let trimmed = digits.trim_start_matches('0');
        let trimmed = if trimmed.is_empty() { "0" } else { trimmed };
        let grouped = group_digits(trimmed);
        return if negative { format!("-{grouped}") } else { grouped };
    }

    format_number(parse_whole(integer))
}

// Blank reads as zero, anything unreadable as NaN
fn parse_whole(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    match unsigned {
        "Infinity" if trimmed.starts_with('-') => f64::NEG_INFINITY,
        "Infinity" => f64::INFINITY,
        _ => trimmed.parse().unwrap_or(f64::NAN),
    }
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let rounded = format!("{:.0}", value.abs());
    let grouped = group_digits(&rounded);
    if value.is_sign_negative() && rounded != "0" {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    grouped
}
