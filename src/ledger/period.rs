use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Relative window used to scope transaction views. Each window ends at the
/// reference date and reaches back by the named span; `All` disables
/// filtering entirely.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    #[default]
    Week,
    HalfMonth,
    Month,
    Year,
    All,
}

impl Period {
    /// Maps a UI label onto a period. Unrecognised labels fall back to `All`,
    /// which keeps the view unfiltered rather than empty.
    pub fn from_label(label: &str) -> Period {
        match label.trim() {
            "week" => Period::Week,
            "half-month" => Period::HalfMonth,
            "month" => Period::Month,
            "year" => Period::Year,
            _ => Period::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Week => "week",
            Period::HalfMonth => "half-month",
            Period::Month => "month",
            Period::Year => "year",
            Period::All => "all",
        }
    }

    /// Inclusive start of the window ending at `today`; `None` means no
    /// filtering. Month and year windows clamp to the last valid day when
    /// the source day does not exist in the target month.
    pub fn start_from(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Period::Week => Some(today - Duration::days(7)),
            Period::HalfMonth => Some(today - Duration::days(15)),
            Period::Month => Some(shift_month(today, -1)),
            Period::Year => Some(shift_year(today, -1)),
            Period::All => None,
        }
    }

    /// True when `date` falls inside the window ending at `today`.
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.start_from(today) {
            Some(start) => date >= start,
            None => true,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

fn shift_year(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    let month = date.month();
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    (first_next - Duration::days(1)).day()
}
