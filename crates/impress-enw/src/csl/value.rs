//! Value shapes of a normalized record

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::variable::ValueKind;
use crate::text::{format_date, format_name, parse_date, parse_name};

/// A structured CSL date
///
/// `date_parts` holds one `[year, month?, day?]` array, or two for a range.
/// Text the date parser could not interpret is kept in `raw`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DateValue {
    #[serde(rename = "date-parts", skip_serializing_if = "Vec::is_empty")]
    pub date_parts: Vec<Vec<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl DateValue {
    /// A single date from its parts (year first)
    pub fn from_parts(parts: Vec<i32>) -> Self {
        Self {
            date_parts: vec![parts],
            raw: None,
        }
    }

    /// A year-only date
    pub fn year(year: i32) -> Self {
        Self::from_parts(vec![year])
    }

    /// A date that only carries its original text
    pub fn raw(text: impl Into<String>) -> Self {
        Self {
            date_parts: Vec::new(),
            raw: Some(text.into()),
        }
    }

    /// First year component, if any
    pub fn first_year(&self) -> Option<i32> {
        self.date_parts.first().and_then(|parts| parts.first()).copied()
    }

    fn from_json(value: &Value) -> Result<Self, String> {
        match value {
            Value::String(text) => Ok(parse_date(text)),
            Value::Number(n) => n
                .as_i64()
                .and_then(|y| i32::try_from(y).ok())
                .map(Self::year)
                .ok_or_else(|| format!("{} is not a year", n)),
            Value::Object(map) => {
                let mut date = Self::default();
                if let Some(parts) = map.get("date-parts") {
                    let ranges = parts.as_array().ok_or("`date-parts` must be an array")?;
                    for range in ranges {
                        let range = range.as_array().ok_or("`date-parts` entries must be arrays")?;
                        let parts = range
                            .iter()
                            .map(date_part)
                            .collect::<Result<Vec<_>, _>>()?;
                        if !parts.is_empty() {
                            date.date_parts.push(parts);
                        }
                    }
                }
                date.raw = map
                    .get("raw")
                    .or_else(|| map.get("literal"))
                    .and_then(Value::as_str)
                    .map(str::to_string);
                if date.date_parts.is_empty() && date.raw.is_none() {
                    return Err("date has neither `date-parts` nor `raw`".to_string());
                }
                Ok(date)
            }
            _ => Err("expected a date object or string".to_string()),
        }
    }
}

/// CSL date parts may be numbers or numeric strings
fn date_part(value: &Value) -> Result<i32, String> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| format!("{} is not a date part", n)),
        Value::String(s) => s
            .trim()
            .parse()
            .map_err(|_| format!("`{}` is not a date part", s)),
        _ => Err("date parts must be numbers".to_string()),
    }
}

/// A structured CSL name
///
/// Personal names use `family`/`given` (plus particles and suffix);
/// institutional names use `literal`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Name {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dropping_particle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_dropping_particle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,
}

impl Name {
    /// A personal name
    pub fn personal(family: impl Into<String>, given: Option<&str>) -> Self {
        Self {
            family: Some(family.into()),
            given: given.map(str::to_string),
            ..Default::default()
        }
    }

    /// An institutional name
    pub fn literal(literal: impl Into<String>) -> Self {
        Self {
            literal: Some(literal.into()),
            ..Default::default()
        }
    }

    /// Whether no component is set
    pub fn is_empty(&self) -> bool {
        self.family.is_none() && self.given.is_none() && self.literal.is_none()
    }
}

/// A value held by a normalized record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CslValue {
    Text(String),
    Date(DateValue),
    Names(Vec<Name>),
    List(Vec<String>),
}

impl CslValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::Date(_) => ValueKind::Date,
            Self::Names(_) => ValueKind::Names,
            Self::List(_) => ValueKind::List,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateValue> {
        match self {
            Self::Date(date) => Some(date),
            _ => None,
        }
    }

    pub fn as_names(&self) -> Option<&[Name]> {
        match self {
            Self::Names(names) => Some(names),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Reshape the value to `kind`.
    ///
    /// Returns `None` when nothing meaningful survives the reshaping
    /// (a date cannot become a list of names, an empty list has no first item).
    pub fn into_kind(self, kind: ValueKind) -> Option<Self> {
        if self.kind() == kind {
            return Some(self);
        }
        match (self, kind) {
            (Self::Text(text), ValueKind::Date) => Some(Self::Date(parse_date(&text))),
            (Self::Text(text), ValueKind::Names) => parse_name(&text).map(|n| Self::Names(vec![n])),
            (Self::Text(text), ValueKind::List) => Some(Self::List(vec![text])),
            (Self::List(items), ValueKind::Text) => items.into_iter().next().map(Self::Text),
            (Self::List(items), ValueKind::Date) => {
                items.first().map(|first| Self::Date(parse_date(first)))
            }
            (Self::List(items), ValueKind::Names) => {
                let names: Vec<Name> = items.iter().filter_map(|s| parse_name(s)).collect();
                (!names.is_empty()).then_some(Self::Names(names))
            }
            (Self::Date(date), ValueKind::Text) => Some(Self::Text(format_date(&date))),
            (Self::Date(date), ValueKind::List) => Some(Self::List(vec![format_date(&date)])),
            (Self::Names(names), ValueKind::Text) => Some(Self::Text(
                names.iter().map(format_name).collect::<Vec<_>>().join("; "),
            )),
            (Self::Names(names), ValueKind::List) => {
                Some(Self::List(names.iter().map(format_name).collect()))
            }
            (Self::Names(_), ValueKind::Date) => None,
            // Same-kind pairs returned above
            (value, _) => Some(value),
        }
    }

    /// Decode a CSL-JSON value for a variable of the given kind
    pub(crate) fn from_json(kind: ValueKind, value: &Value) -> Result<Self, String> {
        match kind {
            ValueKind::Text => match value {
                Value::String(s) => Ok(Self::Text(s.clone())),
                Value::Number(n) => Ok(Self::Text(n.to_string())),
                _ => Err("expected a string or number".to_string()),
            },
            ValueKind::Date => DateValue::from_json(value).map(Self::Date),
            ValueKind::Names => {
                let items = match value {
                    Value::Array(items) => items.as_slice(),
                    other => std::slice::from_ref(other),
                };
                let mut names = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(s) => names.extend(parse_name(s)),
                        Value::Object(_) => names.push(
                            Name::deserialize(item).map_err(|e| e.to_string())?,
                        ),
                        _ => return Err("expected name objects".to_string()),
                    }
                }
                Ok(Self::Names(names))
            }
            ValueKind::List => match value {
                Value::String(s) => Ok(Self::List(vec![s.clone()])),
                Value::Array(items) => items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => Ok(s.clone()),
                        Value::Number(n) => Ok(n.to_string()),
                        _ => Err("expected a list of strings".to_string()),
                    })
                    .collect::<Result<Vec<_>, _>>()
                    .map(Self::List),
                _ => Err("expected a string or list of strings".to_string()),
            },
        }
    }
}

impl From<DateValue> for CslValue {
    fn from(date: DateValue) -> Self {
        Self::Date(date)
    }
}

impl From<Vec<Name>> for CslValue {
    fn from(names: Vec<Name>) -> Self {
        Self::Names(names)
    }
}

impl From<String> for CslValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for CslValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}
