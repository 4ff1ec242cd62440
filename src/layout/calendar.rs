//! Date arithmetic for the grid builders and geometry math.
//!
//! All functions are pure; month lengths are calendar-correct, leap years
//! included.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Whole days from `start` to `end`; negative when `end` is earlier.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Whole calendar months from `start`'s month to `end`'s month, ignoring
/// the day of month.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let start_months = i64::from(start.year()) * 12 + i64::from(start.month0());
    let end_months = i64::from(end.year()) * 12 + i64::from(end.month0());
    end_months - start_months
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> i64 {
    days_between(first_of_month(date), first_of_next_month(date))
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_next_month(date) - Duration::days(1)
}

/// First day of the month after the one containing `date`.
pub fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// First day of the month `count` whole months after the month containing
/// `date`.
pub fn add_months(date: NaiveDate, count: i64) -> NaiveDate {
    let months = i64::from(date.year()) * 12 + i64::from(date.month0()) + count;
    let year = months.div_euclid(12);
    let month0 = months.rem_euclid(12);
    NaiveDate::from_ymd_opt(year as i32, month0 as u32 + 1, 1).unwrap_or(date)
}

/// Full month name, e.g. "January".
pub fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

/// Three-letter month abbreviation, e.g. "Jan".
pub fn month_abbrev(date: NaiveDate) -> String {
    date.format("%b").to_string()
}

/// Single-letter day-of-week label used for narrow day cells.
pub fn day_letter(date: NaiveDate) -> char {
    match date.weekday() {
        Weekday::Sun | Weekday::Sat => 'S',
        Weekday::Mon => 'M',
        Weekday::Tue | Weekday::Thu => 'T',
        Weekday::Wed => 'W',
        Weekday::Fri => 'F',
    }
}

/// True for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Sunday on or before `date`.
pub fn previous_sunday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Saturday on or after `date`.
pub fn next_saturday(date: NaiveDate) -> NaiveDate {
    date + Duration::days(6 - i64::from(date.weekday().num_days_from_sunday()))
}
