//! Formatting helpers for presenting amounts.

/// `$2,450.00` / `-$140.00`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "—".to_string();
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let body = format!("{}.{:02}", group_thousands(cents / 100), cents % 100);
    if amount < 0.0 && cents > 0 {
        format!("-${body}")
    } else {
        format!("${body}")
    }
}

/// `$12,000`, used for chart tooltips.
pub fn format_whole_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "—".to_string();
    }
    let whole = amount.abs().round() as u64;
    let sign = if amount < 0.0 && whole > 0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(whole))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_and_signs() {
        assert_eq!(format_currency(2450.0), "$2,450.00");
        assert_eq!(format_currency(-140.0), "-$140.00");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(format_currency(-0.001), "$0.00");
        assert_eq!(format_currency(f64::NAN), "—");
    }

    #[test]
    fn whole_currency_drops_cents() {
        assert_eq!(format_whole_currency(12000.0), "$12,000");
        assert_eq!(format_whole_currency(999.6), "$1,000");
        assert_eq!(format_whole_currency(640.0), "$640");
    }
}
