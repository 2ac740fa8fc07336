//! Display and input parsing helpers for the views.

use chrono::NaiveDate;

pub fn money(amount: f64) -> String {
    format!("{amount:.2} €")
}

pub fn date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Value for an `<input type="date">`.
pub fn date_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Numeric input; anything unparsable reads as zero.
pub fn parse_u32(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}

pub fn parse_price(value: &str) -> f64 {
    value.trim().replace(',', ".").parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_round_trip_through_inputs() {
        let day = NaiveDate::from_ymd_opt(2026, 3, 9);
        assert_eq!(date_input(day), "2026-03-09");
        assert_eq!(parse_date("2026-03-09"), day);
        assert_eq!(date(day), "09/03/2026");
        assert_eq!(date(None), "-");
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn numbers_are_lenient() {
        assert_eq!(parse_u32(" 4 "), 4);
        assert_eq!(parse_u32("four"), 0);
        assert_eq!(parse_price("12,50"), 12.5);
        assert_eq!(money(12.5), "12.50 €");
    }
}
