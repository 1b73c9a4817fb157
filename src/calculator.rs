use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "÷",
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

pub struct Calculator;

impl Calculator {
    // Anything that cannot be evaluated yields an empty string
    pub fn evaluate(
        previous: Option<&str>,
        current: Option<&str>,
        operation: Option<Operation>,
    ) -> String {
        let (Some(prev), Some(current)) = (
            previous.and_then(Self::parse_float),
            current.and_then(Self::parse_float),
        ) else {
            return String::new();
        };

        match operation {
            Some(op) => Self::render_number(op.apply(prev, current)),
            None => String::new(),
        }
    }

    /// Parses the longest numeric prefix, so `"5."` reads as 5 and `"12abc"` as 12.
    pub fn parse_float(input: &str) -> Option<f64> {
        let s = input.trim_start();
        let bytes = s.as_bytes();

        let mut end = 0;
        if matches!(bytes.first(), Some(b'+' | b'-')) {
            end = 1;
        }

        if s[end..].starts_with("Infinity") {
            return Some(if s.starts_with('-') {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            });
        }

        let int_digits = count_digits(&bytes[end..]);
        end += int_digits;

        let mut frac_digits = 0;
        if bytes.get(end) == Some(&b'.') {
            frac_digits = count_digits(&bytes[end + 1..]);
            if int_digits > 0 || frac_digits > 0 {
                end += 1 + frac_digits;
            }
        }

        if int_digits == 0 && frac_digits == 0 {
            return None;
        }

        if matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp_end = end + 1;
            if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
                exp_end += 1;
            }
            let exp_digits = count_digits(&bytes[exp_end..]);
            if exp_digits > 0 {
                end = exp_end + exp_digits;
            }
        }

        s[..end].parse::<f64>().ok()
    }

    pub fn render_number(value: f64) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }
        if value.is_infinite() {
            let literal = if value > 0.0 { "Infinity" } else { "-Infinity" };
            return literal.to_string();
        }
        // Covers -0 as well.
        if value == 0.0 {
            return "0".to_string();
        }

        let magnitude = value.abs();
        if magnitude >= 1e21 || magnitude < 1e-6 {
            let rendered = format!("{value:e}");
            match rendered.split_once('e') {
                Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                    format!("{mantissa}e+{exponent}")
                }
                _ => rendered,
            }
        } else {
            format!("{value}")
        }
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
