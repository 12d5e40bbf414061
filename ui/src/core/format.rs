//! Formatting helpers for presenting metrics and parameter values.

use super::params::{ParamSpec, ValueDisplay};

/// Currency label used throughout the project sheet.
pub const CURRENCY: &str = "CLP";

/// Fixed-point rendering with `,` thousands separators (`1234.5` → `1,234.50` for 2 places).
pub fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (raw.as_str(), None),
    };

    let mut grouped = String::with_capacity(raw.len() + int_part.len() / 3 + 1);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    let is_zero = raw.chars().all(|c| c == '0' || c == '.');
    if value.is_sign_negative() && !is_zero {
        grouped.insert(0, '-');
    }
    grouped
}

pub fn format_tonnes(value: f64) -> String {
    format!("{} ton/año", format_grouped(value, 2))
}

pub fn format_currency(value: f64) -> String {
    format!("{CURRENCY} {}", format_grouped(value, 0))
}

pub fn format_percent(fraction: f64) -> String {
    format!("{:.0} %", fraction * 100.0)
}

/// Value readout shown beside a slider.
pub fn format_param(spec: &ParamSpec, value: f64) -> String {
    match spec.display {
        ValueDisplay::Percent => format_percent(value),
        ValueDisplay::Integer => format!("{} {}", format_grouped(value, 0), spec.unit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::params::{ENERGY_GENERATED, VALORIZATION_RATE};

    #[test]
    fn groups_thousands() {
        assert_eq!(format_grouped(0.0, 0), "0");
        assert_eq!(format_grouped(999.0, 0), "999");
        assert_eq!(format_grouped(1_000.0, 0), "1,000");
        assert_eq!(format_grouped(10_000_000.0, 0), "10,000,000");
        assert_eq!(format_grouped(123_456.789, 2), "123,456.79");
    }

    #[test]
    fn keeps_sign_except_for_zero() {
        assert_eq!(format_grouped(-1_500.0, 0), "-1,500");
        assert_eq!(format_grouped(-0.001, 2), "0.00");
    }

    #[test]
    fn metric_readouts() {
        assert_eq!(format_tonnes(81.0), "81.00 ton/año");
        assert_eq!(format_currency(3_000_000.0), "CLP 3,000,000");
        assert_eq!(format_percent(0.9), "90 %");
    }

    #[test]
    fn slider_readouts() {
        assert_eq!(format_param(&ENERGY_GENERATED, 20_000.0), "20,000 kWh/año");
        assert_eq!(format_param(&VALORIZATION_RATE, 0.75), "75 %");
    }
}
