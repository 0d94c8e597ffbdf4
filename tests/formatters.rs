#[cfg(test)]
mod tests {
    use meetcost::libs::formatter::{
        format_clock, format_currency, format_currency_compact, format_currency_with, format_duration_human, format_fractional_cents,
        format_hourly_rate, parse_dollars,
    };

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(7), "$0.07");
        assert_eq!(format_currency(9_500), "$95.00");
        assert_eq!(format_currency(123_456), "$1,234.56");
        assert_eq!(format_currency(123_456_789), "$1,234,567.89");
    }

    #[test]
    fn test_format_currency_with_symbol() {
        assert_eq!(format_currency_with("€", 250_050), "€2,500.50");
        assert_eq!(format_currency_with("", 100), "1.00");
    }

    #[test]
    fn test_format_currency_compact() {
        assert_eq!(format_currency_compact(99_999), "$999.99");
        assert_eq!(format_currency_compact(100_000), "$1K");
        assert_eq!(format_currency_compact(123_456), "$1.2K");
        assert_eq!(format_currency_compact(250_000_000), "$2.5M");
        assert_eq!(format_currency_compact(100_000_000_000), "$1B");
    }

    #[test]
    fn test_format_hourly_rate() {
        assert_eq!(format_hourly_rate(9_500), "$95.00/hr");
    }

    #[test]
    fn test_format_fractional_cents() {
        assert_eq!(format_fractional_cents(283.33), "$2.83");
        assert_eq!(format_fractional_cents(-5.0), "$0.00");
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00:00");
        assert_eq!(format_clock(999), "00:00:00");
        assert_eq!(format_clock(61_000), "00:01:01");
        assert_eq!(format_clock(3_725_000), "01:02:05");
        assert_eq!(format_clock(100 * 3_600_000), "100:00:00");
    }

    #[test]
    fn test_format_duration_human() {
        assert_eq!(format_duration_human(0), "0m");
        assert_eq!(format_duration_human(45 * 60_000), "45m");
        assert_eq!(format_duration_human(2 * 3_600_000), "2h");
        assert_eq!(format_duration_human(83 * 60_000), "1h 23m");
    }

    #[test]
    fn test_parse_dollars() {
        assert_eq!(parse_dollars("95"), Some(9_500));
        assert_eq!(parse_dollars("95.5"), Some(9_550));
        assert_eq!(parse_dollars("$1,200.05"), Some(120_005));
        assert_eq!(parse_dollars(" .75 "), Some(75));
        assert_eq!(parse_dollars(""), None);
        assert_eq!(parse_dollars("-5"), None);
        assert_eq!(parse_dollars("1.234"), None);
        assert_eq!(parse_dollars("abc"), None);
        assert_eq!(parse_dollars("."), None);
    }
}
