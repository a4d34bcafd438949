//! Value converters
//!
//! Each converter is a pair of pure functions, one per direction, working on
//! positional tuples: the values of a rule's input keys in, the values of its
//! output keys out. `None` marks an absent input or an output position that
//! must stay unset.

use lazy_static::lazy_static;
use regex::Regex;

use crate::csl::{CslValue, DateValue, Name, ValueKind};
use crate::entry::FieldValue;
use crate::text::{format_date, format_name, parse_date, parse_name};
use crate::types::{ItemType, ReferenceType, DEFAULT_ITEM_TYPE, DEFAULT_REFERENCE_TYPE};

lazy_static! {
    static ref ISSN: Regex = Regex::new(r"^\d{4}-\d{3}[0-9xX]$").unwrap();
    static ref DEGREE: Regex = Regex::new(r"(?i)master|phd|doctoral").unwrap();
}

/// Named value transformation attached to a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Converter {
    /// Reference type name ↔ item type, with defaults for unknown values
    Type,
    /// `(date, year)` ↔ structured date
    Date,
    /// Year ↔ year-only structured date
    Year,
    /// Name strings ↔ structured names
    Names,
    /// One standard number ↔ `(ISBN, ISSN)`
    IsbnIssn,
    /// `(genre, degree)` ↔ genre
    GenreDegree,
}

impl Converter {
    /// Apply the tagged → normalized direction
    pub fn to_target(&self, values: &[Option<&FieldValue>]) -> Vec<Option<CslValue>> {
        let text = |index: usize| first_text(values, index);
        match self {
            Self::Type => {
                let item_type = reference_type_to_item_type(text(0).unwrap_or_default());
                vec![Some(CslValue::Text(item_type.name().to_string()))]
            }
            Self::Date => vec![date_to_target(text(0), text(1)).map(CslValue::Date)],
            Self::Year => vec![text(0).and_then(year_to_target).map(CslValue::Date)],
            Self::Names => {
                let names = values
                    .first()
                    .copied()
                    .flatten()
                    .map(|value| names_to_target(&value.values()))
                    .unwrap_or_default();
                vec![(!names.is_empty()).then(|| CslValue::Names(names))]
            }
            Self::IsbnIssn => match text(0) {
                Some(number) => {
                    let (isbn, issn) = split_standard_number(number);
                    vec![isbn.map(CslValue::from), issn.map(CslValue::from)]
                }
                None => vec![None, None],
            },
            Self::GenreDegree => {
                vec![genre_to_target(text(0), text(1)).map(CslValue::from)]
            }
        }
    }

    /// Apply the normalized → tagged direction
    pub fn to_source(&self, values: &[Option<&CslValue>]) -> Vec<Option<FieldValue>> {
        let value = |index: usize| values.get(index).copied().flatten();
        match self {
            Self::Type => {
                let name = value(0).and_then(CslValue::as_text).unwrap_or_default();
                let reference_type = item_type_to_reference_type(name);
                vec![Some(FieldValue::from(reference_type.name()))]
            }
            Self::Date => match value(0).and_then(CslValue::as_date) {
                Some(date) => {
                    let (date, year) = date_to_source(date);
                    vec![date.map(FieldValue::from), year.map(FieldValue::from)]
                }
                None => vec![None, None],
            },
            Self::Year => vec![value(0)
                .and_then(CslValue::as_date)
                .and_then(year_to_source)
                .map(FieldValue::from)],
            Self::Names => vec![value(0)
                .and_then(CslValue::as_names)
                .and_then(|names| FieldValue::from_values(names_to_source(names)))],
            Self::IsbnIssn => {
                let isbn = value(0).and_then(CslValue::as_text);
                let issn = value(1).and_then(CslValue::as_text);
                vec![join_standard_number(isbn, issn).map(FieldValue::from)]
            }
            Self::GenreDegree => match value(0).and_then(CslValue::as_text) {
                Some(genre) => {
                    let (genre, degree) = genre_to_source(genre);
                    vec![genre.map(FieldValue::from), degree.map(FieldValue::from)]
                }
                None => vec![None, None],
            },
        }
    }
}

fn first_text<'a>(values: &[Option<&'a FieldValue>], index: usize) -> Option<&'a str> {
    values.get(index).copied().flatten().and_then(FieldValue::first)
}

/// Item type for a reference type name, `document` when unknown
pub fn reference_type_to_item_type(name: &str) -> ItemType {
    ReferenceType::from_name(name)
        .map(|t| t.item_type())
        .unwrap_or(DEFAULT_ITEM_TYPE)
}

/// Reference type for an item type name, `Generic` when unknown
pub fn item_type_to_reference_type(name: &str) -> ReferenceType {
    ItemType::from_name(name)
        .map(|t| t.reference_type())
        .unwrap_or(DEFAULT_REFERENCE_TYPE)
}

/// Parse the full date when present and non-empty, else fall back to the year
pub fn date_to_target(date: Option<&str>, year: Option<&str>) -> Option<DateValue> {
    match date.filter(|d| !d.trim().is_empty()) {
        Some(date) => Some(parse_date(date)),
        None => year.and_then(year_to_target),
    }
}

/// Full date text and year text of a structured date
pub fn date_to_source(date: &DateValue) -> (Option<String>, Option<String>) {
    let text = format_date(date);
    ((!text.is_empty()).then_some(text), year_to_source(date))
}

/// A year-only date; non-numeric years go through the date parser
pub fn year_to_target(year: &str) -> Option<DateValue> {
    let year = year.trim();
    if year.is_empty() {
        return None;
    }
    match year.parse::<i32>() {
        Ok(year) => Some(DateValue::year(year)),
        Err(_) => Some(parse_date(year)),
    }
}

/// First year component as text
pub fn year_to_source(date: &DateValue) -> Option<String> {
    date.first_year().map(|year| year.to_string())
}

pub fn names_to_target(values: &[&str]) -> Vec<Name> {
    values.iter().filter_map(|value| parse_name(value)).collect()
}

pub fn names_to_source(names: &[Name]) -> Vec<String> {
    names
        .iter()
        .map(format_name)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Whether a standard number has the ISSN shape (`1234-567X`)
pub fn is_issn(number: &str) -> bool {
    ISSN.is_match(number)
}

/// Route a standard number to `(ISBN, ISSN)`
pub fn split_standard_number(number: &str) -> (Option<&str>, Option<&str>) {
    if is_issn(number) {
        (None, Some(number))
    } else {
        (Some(number), None)
    }
}

/// The ISBN when non-empty, else the ISSN
pub fn join_standard_number<'a>(isbn: Option<&'a str>, issn: Option<&'a str>) -> Option<&'a str> {
    isbn.filter(|s| !s.is_empty()).or(issn)
}

/// Whether a genre names an academic degree
pub fn is_degree(genre: &str) -> bool {
    DEGREE.is_match(genre)
}

/// The degree when non-empty, else the genre
pub fn genre_to_target<'a>(genre: Option<&'a str>, degree: Option<&'a str>) -> Option<&'a str> {
    degree.filter(|s| !s.is_empty()).or(genre)
}

/// Route a genre to `(genre, degree)`
pub fn genre_to_source(genre: &str) -> (Option<&str>, Option<&str>) {
    if is_degree(genre) {
        (None, Some(genre))
    } else {
        (Some(genre), None)
    }
}

/// Copy a tagged value into a variable of the given kind
pub(crate) fn copy_to_target(value: &FieldValue, kind: ValueKind) -> Option<CslValue> {
    let values = value.values().into_iter().map(str::to_string).collect();
    CslValue::List(values).into_kind(kind)
}

/// Flatten a normalized value back into tag occurrences
pub(crate) fn copy_to_source(value: &CslValue) -> Option<FieldValue> {
    match value {
        CslValue::Text(text) => Some(FieldValue::Single(text.clone())),
        CslValue::Date(date) => {
            let text = format_date(date);
            (!text.is_empty()).then(|| FieldValue::Single(text))
        }
        CslValue::Names(names) => FieldValue::from_values(names_to_source(names)),
        CslValue::List(items) => FieldValue::from_values(items.clone()),
    }
}
