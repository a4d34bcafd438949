//! Date sub-parser
//!
//! Turns the free-form date strings found in tagged records into CSL
//! `date-parts`, and back into `YYYY-MM-DD` text. Recognized shapes:
//! - ISO dates, optionally with a time (`2022-06-21`, `2022-06-21T10:00:00Z`)
//! - Year-first slashes (`2018/03/15`, `2018/03`)
//! - Day-first numerics (`12/7/2023`, `12.07.2023`) and `MM/YYYY`
//! - Month names (`12 July 2023`, `July 12, 2023`, `Jul. 2023`, `2018 Mar 15`)
//! - Year ranges (`2001-2003`)
//!
//! Anything else is kept as a raw date.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use crate::csl::DateValue;

lazy_static! {
    static ref YEAR_RANGE: Regex = Regex::new(r"^(\d{4})\s*[-–/]\s*(\d{4})$").unwrap();
    static ref ISO_DATE: Regex =
        Regex::new(r"^(-?\d{1,4})(?:-(\d{1,2})(?:-(\d{1,2}))?)?(?:[T ]\d{1,2}:\d{2}\S*)?$").unwrap();
    static ref YEAR_FIRST: Regex = Regex::new(r"^(\d{4})/(\d{1,2})(?:/(\d{1,2}))?/?$").unwrap();
    static ref DAY_FIRST: Regex = Regex::new(r"^(\d{1,2})[/.](\d{1,2})[/.](\d{4})$").unwrap();
    static ref MONTH_YEAR: Regex = Regex::new(r"^(\d{1,2})/(\d{4})$").unwrap();
    static ref DAY_MONTH_NAME: Regex =
        Regex::new(r"^(\d{1,2})\.?\s+([A-Za-z]+)\.?,?\s+(\d{4})$").unwrap();
    static ref MONTH_NAME_DAY: Regex =
        Regex::new(r"^([A-Za-z]+)\.?\s+(\d{1,2})(?:st|nd|rd|th)?,?\s+(\d{4})$").unwrap();
    static ref MONTH_NAME_YEAR: Regex = Regex::new(r"^([A-Za-z]+)\.?,?\s+(\d{4})$").unwrap();
    static ref YEAR_MONTH_NAME: Regex =
        Regex::new(r"^(\d{4})\s+([A-Za-z]+)\.?(?:\s+(\d{1,2}))?$").unwrap();
}

const MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

/// Parse a date string into a [`DateValue`].
///
/// Never fails: unrecognized text becomes a raw date.
pub fn parse_date(input: &str) -> DateValue {
    let text = input.trim();
    if text.is_empty() {
        return DateValue::raw(text);
    }

    match parse_structured(text) {
        Some(date_parts) => DateValue {
            date_parts,
            raw: None,
        },
        None => {
            tracing::warn!(date = %text, "Unrecognized date, keeping raw text");
            DateValue::raw(text)
        }
    }
}

fn parse_structured(text: &str) -> Option<Vec<Vec<i32>>> {
    if let Some(caps) = YEAR_RANGE.captures(text) {
        let start = caps[1].parse().ok()?;
        let end = caps[2].parse().ok()?;
        return Some(vec![vec![start], vec![end]]);
    }

    let (year, month, day) = if let Some(caps) = ISO_DATE.captures(text) {
        (
            caps[1].parse().ok()?,
            number(caps.get(2)),
            number(caps.get(3)),
        )
    } else if let Some(caps) = YEAR_FIRST.captures(text) {
        (caps[1].parse().ok()?, number(caps.get(2)), number(caps.get(3)))
    } else if let Some(caps) = DAY_FIRST.captures(text) {
        (caps[3].parse().ok()?, number(caps.get(2)), number(caps.get(1)))
    } else if let Some(caps) = MONTH_YEAR.captures(text) {
        (caps[2].parse().ok()?, number(caps.get(1)), None)
    } else if let Some(caps) = DAY_MONTH_NAME.captures(text) {
        (caps[3].parse().ok()?, Some(month_number(&caps[2])?), number(caps.get(1)))
    } else if let Some(caps) = MONTH_NAME_DAY.captures(text) {
        (caps[3].parse().ok()?, Some(month_number(&caps[1])?), number(caps.get(2)))
    } else if let Some(caps) = MONTH_NAME_YEAR.captures(text) {
        (caps[2].parse().ok()?, Some(month_number(&caps[1])?), None)
    } else if let Some(caps) = YEAR_MONTH_NAME.captures(text) {
        (caps[1].parse().ok()?, Some(month_number(&caps[2])?), number(caps.get(3)))
    } else {
        return None;
    };

    validate(year, month, day)
}

fn number(capture: Option<regex::Match<'_>>) -> Option<u32> {
    capture.and_then(|m| m.as_str().parse().ok())
}

/// Month number from an English month name or abbreviation of at least three letters
fn month_number(name: &str) -> Option<u32> {
    let name = name.to_lowercase();
    if name.len() < 3 {
        return None;
    }
    MONTHS
        .iter()
        .position(|month| month.starts_with(&name))
        .map(|index| index as u32 + 1)
}

fn validate(year: i32, month: Option<u32>, day: Option<u32>) -> Option<Vec<Vec<i32>>> {
    match (month, day) {
        (None, _) => Some(vec![vec![year]]),
        (Some(month), None) => {
            (1..=12).contains(&month).then(|| vec![vec![year, month as i32]])
        }
        (Some(month), Some(day)) => NaiveDate::from_ymd_opt(year, month, day)
            .map(|_| vec![vec![year, month as i32, day as i32]]),
    }
}

/// Format a date as `YYYY-MM-DD` text (ranges joined with `/`).
///
/// Raw dates come back unchanged.
pub fn format_date(date: &DateValue) -> String {
    if date.date_parts.is_empty() {
        return date.raw.clone().unwrap_or_default();
    }
    date.date_parts
        .iter()
        .map(|parts| format_parts(parts))
        .collect::<Vec<_>>()
        .join("/")
}

fn format_parts(parts: &[i32]) -> String {
    parts
        .iter()
        .enumerate()
        .map(|(index, part)| {
            if index == 0 {
                part.to_string()
            } else {
                format!("{:02}", part)
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}
