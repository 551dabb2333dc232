//! BRL display formatting for the revenue metric.
//!
//! The source dashboard tagged revenue as AUD with an unrelated locale,
//! an apparent copy-paste slip; the dataset is Brazilian and its product
//! charts are labeled R$, so revenue is shown as BRL here.

/// Format a non-negative amount as `R$ 1.234.567,89`
/// (pt-BR grouping: `.` thousands, `,` decimals).
pub fn format_brl(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let whole = cents / 100;
    let frac = (cents % 100).abs();

    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if cents < 0 { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(format_brl(1_234_567.891), "R$ 1.234.567,89");
        assert_eq!(format_brl(999.0), "R$ 999,00");
        assert_eq!(format_brl(1000.0), "R$ 1.000,00");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
    }

    #[test]
    fn test_rounding_to_cents() {
        assert_eq!(format_brl(0.005), "R$ 0,01");
        assert_eq!(format_brl(150.004), "R$ 150,00");
    }
}
