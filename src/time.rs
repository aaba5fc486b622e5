use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::errors::LedgerError;

/// Clock abstracts access to the current timestamp so services remain
/// deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Returns the current calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Clock backed by the system time source, reporting local calendar days.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Today's date in the local calendar.
pub fn today() -> NaiveDate {
    SystemClock.today()
}

/// Parses a calendar date in the `YYYY-MM-DD` form used at input boundaries.
pub fn parse_date(value: &str) -> Result<NaiveDate, LedgerError> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| LedgerError::InvalidDate(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    #[test]
    fn default_today_derives_from_now() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 15, 22, 30, 0).unwrap());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn system_clock_reports_a_current_date() {
        let clock = SystemClock;
        let delta = (clock.today() - clock.now().date_naive()).num_days().abs();
        assert!(delta <= 1);
    }

    #[test]
    fn parse_date_accepts_iso_dates() {
        let parsed = parse_date("2024-02-29").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn parse_date_trims_surrounding_whitespace() {
        let parsed = parse_date(" 2024-01-05 ").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn parse_date_rejects_other_shapes() {
        assert!(parse_date("05/01/2024").is_err());
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_date("").is_err());
    }
}
