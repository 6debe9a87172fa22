//! Number rendering in the product's pt-BR style
//!
//! Amounts group thousands with dots and use a decimal comma; technical
//! parameters and percentages keep a plain decimal point, matching the
//! product's mixed rendering.

/// Thousands grouping with dots, decimal comma.
fn grouped(value: f64, decimals: usize) -> String {
    let mut s = format!("{:.*}", decimals, value);
    let negative = s.starts_with('-');
    if negative {
        s.remove(0);
    }

    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (s.clone(), None),
    };

    let digits = int_part.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + decimals + 2);
    for (i, b) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(*b as char);
    }
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(&frac);
    }

    // A value that rounds to all zeros renders without a sign.
    if negative && out.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.insert(0, '-');
    }
    out
}

/// Local-currency amount: "R$ 1.234.567,89".
pub fn brl(value: f64) -> String {
    format!("R$ {}", grouped(value, 2))
}

/// USD amount with a plain decimal point: "US$ 0.50".
pub fn usd(value: f64) -> String {
    format!("US$ {value:.2}")
}

/// Whole-number count with grouping: "6.437.931".
pub fn count(value: f64) -> String {
    grouped(value, 0)
}

/// Fixed-decimals percentage: "18.33%".
pub fn pct(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}
