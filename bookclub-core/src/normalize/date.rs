//! Meeting date parsing and formatting
//!
//! Dates in the sheet are typed by hand, mostly as `DD.MM.YYYY`, sometimes
//! year-first or with slashes. All dates are local calendar dates.

use chrono::{DateTime, Days, Months, NaiveDate, NaiveDateTime};

/// Date-only layouts tried by the lenient fallback, after `.` became `/`
const FALLBACK_DATE_FORMATS: &[&str] = &[
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d %B %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%b %d, %Y",
];

/// Date-time layouts tried by the lenient fallback; the time part is dropped
const FALLBACK_DATE_TIME_FORMATS: &[&str] = &[
    "%Y/%m/%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

/// Parse a meeting date.
///
/// Three parts separated by `.`, `/` or `-` are read as year-month-day when
/// the first part has four characters, or day-month-year when the last one
/// does; days and months past the end of the calendar roll over. Anything
/// else, including non-numeric parts, goes through a lenient fallback parser.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    parse_three_part(trimmed).or_else(|| parse_fallback(&trimmed.replace('.', "/")))
}

fn parse_three_part(text: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = text.split(['.', '/', '-']).map(str::trim).collect();
    let [first, second, third] = parts.as_slice() else {
        return None;
    };

    let (year, month, day) = if first.chars().count() == 4 {
        (*first, *second, *third)
    } else if third.chars().count() == 4 {
        (*third, *second, *first)
    } else {
        return None;
    };

    roll_over(part_number(year)?, part_number(month)?, part_number(day)?)
}

/// An empty part counts as zero; anything else must be an integer
fn part_number(part: &str) -> Option<i64> {
    if part.is_empty() {
        Some(0)
    } else {
        part.parse().ok()
    }
}

/// Calendar arithmetic that carries out-of-range months and days into the
/// neighbouring month or year: day 31 of April is 1 May, day 0 of January
/// is 31 December. Years 0..=99 are read as 1900..=1999.
fn roll_over(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    let year = if (0..=99).contains(&year) { year + 1900 } else { year };
    let start = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, 1, 1)?;

    let months = month - 1;
    let start = if months >= 0 {
        start.checked_add_months(Months::new(u32::try_from(months).ok()?))?
    } else {
        start.checked_sub_months(Months::new(u32::try_from(-months).ok()?))?
    };

    let days = day - 1;
    if days >= 0 {
        start.checked_add_days(Days::new(u64::try_from(days).ok()?))
    } else {
        start.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

fn parse_fallback(text: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }

    FALLBACK_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        .or_else(|| {
            FALLBACK_DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
                .map(|dt| dt.date())
        })
}

/// Format as `DD.MM.YYYY`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format as `MM.YYYY`
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%m.%Y").to_string()
}

/// Format as `DD.MM.YYYY HH:MM`
pub fn format_date_time(date_time: NaiveDateTime) -> String {
    date_time.format("%d.%m.%Y %H:%M").to_string()
}
