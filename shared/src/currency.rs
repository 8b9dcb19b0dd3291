//! Display formatting for monetary values: whole rupees, grouped
//! thousands, currency-tagged. Presentation only; amounts stay `f64`
//! everywhere else.

const CURRENCY_TAG: &str = "PKR";

/// Format an amount as a currency string with zero decimal places,
/// e.g. `PKR 1,250` or `-PKR 250`.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    if rounded < 0.0 {
        format!("-{} {}", CURRENCY_TAG, group_digits(-rounded))
    } else {
        format!("{} {}", CURRENCY_TAG, group_digits(rounded))
    }
}

/// Format a plain number with zero decimal places and grouped thousands.
pub fn format_number(value: f64) -> String {
    let rounded = value.round();
    if rounded < 0.0 {
        format!("-{}", group_digits(-rounded))
    } else {
        group_digits(rounded)
    }
}

fn group_digits(value: f64) -> String {
    let digits = format!("{:.0}", value);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
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
    fn test_small_amounts() {
        assert_eq!(format_currency(0.0), "PKR 0");
        assert_eq!(format_currency(5.0), "PKR 5");
        assert_eq!(format_currency(999.0), "PKR 999");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_currency(1000.0), "PKR 1,000");
        assert_eq!(format_currency(1250.0), "PKR 1,250");
        assert_eq!(format_currency(1234567.0), "PKR 1,234,567");
    }

    #[test]
    fn test_rounds_to_whole_units() {
        assert_eq!(format_currency(1249.5), "PKR 1,250");
        assert_eq!(format_currency(1249.4), "PKR 1,249");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_currency(-250.0), "-PKR 250");
        assert_eq!(format_currency(-1234.6), "-PKR 1,235");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(98765.0), "98,765");
        assert_eq!(format_number(-42.0), "-42");
    }
}
