/// Format an address for display (truncated)
pub fn format_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Format a USD amount with thousands separators
pub fn format_usd(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, cents) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::new();
    for (i, c) in whole.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let whole: String = grouped.chars().rev().collect();

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, whole, cents)
}

/// Truncate a string to a maximum length
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_truncation() {
        assert_eq!(
            format_address("0x742d35Cc6634C0532925a3b8D4B9B4B73"),
            "0x742d...4B73"
        );
        assert_eq!(format_address("0xshort"), "0xshort");
    }

    #[test]
    fn usd_grouping() {
        assert_eq!(format_usd(1234.56), "$1,234.56");
        assert_eq!(format_usd(0.5), "$0.50");
        assert_eq!(format_usd(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_usd(-42.0), "-$42.00");
    }
}
