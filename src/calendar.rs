// Trading-day gate: weekends plus an exchange holiday list
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// Holiday-aware trading calendar. The holiday set is injected by the
/// driver (from config or a fetched exchange calendar) rather than held
/// in global state.
#[derive(Debug, Clone, Default)]
pub struct TradingCalendar {
    holidays: HashSet<NaiveDate>,
}

impl TradingCalendar {
    pub fn new(holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self { holidays: holidays.into_iter().collect() }
    }

    pub fn is_trading_day(&self, date: NaiveDate) -> bool {
        !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !self.holidays.contains(&date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn weekends_are_closed() {
        let cal = TradingCalendar::default();
        assert!(!cal.is_trading_day(d(2026, 8, 29))); // Saturday
        assert!(!cal.is_trading_day(d(2026, 8, 30))); // Sunday
        assert!(cal.is_trading_day(d(2026, 8, 28))); // Friday
    }

    #[test]
    fn configured_holidays_are_closed() {
        let cal = TradingCalendar::new([d(2026, 10, 1)]);
        assert!(!cal.is_trading_day(d(2026, 10, 1)));
        assert!(cal.is_trading_day(d(2026, 10, 8)));
    }
}
