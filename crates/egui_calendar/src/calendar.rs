//! Gregorian calendar arithmetic.
//!
//! Months are 0-based (`month0`, January is `0`), like [`chrono::Datelike::month0`].
//! Weekdays count from Sunday (`0`) to Saturday (`6`).
//!
//! Everything here is plain modular arithmetic and is valid for every `i32` year,
//! using the proleptic Gregorian calendar before 1582.

use chrono::NaiveDate;

use crate::{CalendarError, Result};

/// Short weekday names, Sunday first, matching the column order of a [`crate::Grid`].
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Is this a leap year in the Gregorian calendar?
///
/// Every fourth year is, except centuries, except every fourth century.
///
/// ```
/// use egui_calendar::is_leap_year;
/// assert!(is_leap_year(2024));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(!is_leap_year(2023));
/// ```
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month, in `28..=31`.
///
/// # Errors
/// [`CalendarError::InvalidMonth`] if `month0` is not in `0..=11`.
pub fn days_in_month(month0: u32, year: i32) -> Result<u32> {
    let days = *DAYS_IN_MONTH
        .get(month0 as usize)
        .ok_or(CalendarError::InvalidMonth { month0 })?;
    if month0 == 1 && is_leap_year(year) {
        Ok(29)
    } else {
        Ok(days)
    }
}

/// Weekday of the first day of the month, Sunday = 0 … Saturday = 6.
///
/// # Errors
/// [`CalendarError::InvalidMonth`] if `month0` is not in `0..=11`.
pub fn first_weekday(month0: u32, year: i32) -> Result<u32> {
    check_month(month0)?;
    let days = days_since_unix_epoch(year, month0 + 1, 1);
    // 1970-01-01 was a Thursday.
    Ok((days + 4).rem_euclid(7) as u32)
}

/// The current local wall-clock date. The time of day is dropped.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// The month after `(month0, year)`, wrapping December into January of the next year.
///
/// # Errors
/// [`CalendarError::InvalidMonth`] for a bad `month0`,
/// [`CalendarError::InvalidYear`] if the next year does not fit in an `i32`.
pub fn next_month(month0: u32, year: i32) -> Result<(u32, i32)> {
    check_month(month0)?;
    if month0 == 11 {
        let year = year
            .checked_add(1)
            .ok_or(CalendarError::InvalidYear { year })?;
        Ok((0, year))
    } else {
        Ok((month0 + 1, year))
    }
}

/// The month before `(month0, year)`, wrapping January into December of the previous year.
///
/// # Errors
/// [`CalendarError::InvalidMonth`] for a bad `month0`,
/// [`CalendarError::InvalidYear`] if the previous year does not fit in an `i32`.
pub fn previous_month(month0: u32, year: i32) -> Result<(u32, i32)> {
    check_month(month0)?;
    if month0 == 0 {
        let year = year
            .checked_sub(1)
            .ok_or(CalendarError::InvalidYear { year })?;
        Ok((11, year))
    } else {
        Ok((month0 - 1, year))
    }
}

pub(crate) fn check_month(month0: u32) -> Result<()> {
    if month0 < 12 {
        Ok(())
    } else {
        Err(CalendarError::InvalidMonth { month0 })
    }
}

/// Days from 1970-01-01 to the given date (month and day 1-based).
///
/// Counts in 400-year eras of 146 097 days, with years starting in March so the
/// leap day falls at the end.
fn days_since_unix_epoch(year: i32, month: u32, day: u32) -> i64 {
    let year = i64::from(year) - i64::from(month <= 2);
    let era = year.div_euclid(400);
    let year_of_era = year.rem_euclid(400);
    let month_from_march = (i64::from(month) + 9) % 12;
    let day_of_year = (153 * month_from_march + 2) / 5 + i64::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}
