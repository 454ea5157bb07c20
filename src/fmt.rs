/// Format a value with thousands separators: `money(-1234.5, "$")` is `-$1,234.50`.
pub fn money(val: f64, symbol: &str) -> String {
    let cents = format!("{:.2}", val.abs());
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    // -0.004 rounds to 0.00; do not print a sign for it
    let sign = if val < 0.0 && cents != "0.00" { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{dec_part}")
}

/// Horizontal bar of `width` cells scaled by `value / max`.
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if width == 0 || max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let filled = ((value / max) * width as f64).round() as usize;
    "\u{2588}".repeat(filled.clamp(1, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(1234.56, "$"), "$1,234.56");
        assert_eq!(money(-500.00, "$"), "-$500.00");
        assert_eq!(money(0.0, "$"), "$0.00");
        assert_eq!(money(1000000.99, "$"), "$1,000,000.99");
        assert_eq!(money(42.1, "€"), "€42.10");
        assert_eq!(money(-0.001, "$"), "$0.00");
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(50.0, 100.0, 10).chars().count(), 5);
        assert_eq!(bar(100.0, 100.0, 10).chars().count(), 10);
        assert_eq!(bar(0.01, 100.0, 10).chars().count(), 1);
        assert_eq!(bar(0.0, 100.0, 10), "");
        assert_eq!(bar(5.0, 0.0, 10), "");
    }
}
