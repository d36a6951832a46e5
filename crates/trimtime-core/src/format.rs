//! Display formatting for prices.

/// Format an amount in minor units as currency with thousands separators and
/// two decimals: `123450` with `"₱"` becomes `"₱1,234.50"`.
pub fn format_price(minor_units: u64, symbol: &str) -> String {
    let whole = minor_units / 100;
    let fraction = minor_units % 100;
    format!("{symbol}{}.{fraction:02}", group_thousands(whole))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_default_catalog() {
        assert_eq!(format_price(10_000, "₱"), "₱100.00");
    }

    #[test]
    fn test_format_price_thousands() {
        assert_eq!(format_price(123_450, "₱"), "₱1,234.50");
        assert_eq!(format_price(123_456_789, "$"), "$1,234,567.89");
        assert_eq!(format_price(10_000_000, "$"), "$100,000.00");
    }

    #[test]
    fn test_format_price_small_amounts() {
        assert_eq!(format_price(0, "₱"), "₱0.00");
        assert_eq!(format_price(5, "₱"), "₱0.05");
        assert_eq!(format_price(99_999, ""), "999.99");
    }
}
