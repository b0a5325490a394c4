//! Brazilian-locale display helpers for prices and timestamps.

use chrono::NaiveDateTime;

/// Format `value` as Brazilian reais, e.g. `R$ 1.234,56`.
pub fn format_price(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}R$ {},{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Format a store timestamp as `dd/mm/yyyy, HH:MM`.
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%d/%m/%Y, %H:%M").to_string()
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
