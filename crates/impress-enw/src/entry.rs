//! Tagged record data structures

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::ReferenceType;

/// Tag carrying the reference type
pub const TYPE_TAG: char = '0';

/// Value of one tag: a single occurrence or every occurrence in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Multiple(Vec<String>),
}

impl FieldValue {
    /// Build a value from occurrences; a single occurrence collapses to `Single`
    pub fn from_values(mut values: Vec<String>) -> Option<Self> {
        match values.len() {
            0 => None,
            1 => values.pop().map(Self::Single),
            _ => Some(Self::Multiple(values)),
        }
    }

    /// First occurrence
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multiple(values) => values.first().map(String::as_str),
        }
    }

    /// Every occurrence, in order
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => vec![value.as_str()],
            Self::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Continue the last occurrence with more text
    pub(crate) fn extend_last(&mut self, text: &str) {
        let last = match self {
            Self::Single(value) => Some(value),
            Self::Multiple(values) => values.last_mut(),
        };
        if let Some(last) = last {
            if !last.is_empty() {
                last.push(' ');
            }
            last.push_str(text);
        }
    }

    /// Append an occurrence, promoting `Single` to `Multiple`
    pub fn push(&mut self, value: String) {
        match self {
            Self::Single(first) => {
                let first = std::mem::take(first);
                *self = Self::Multiple(vec![first, value]);
            }
            Self::Multiple(values) => values.push(value),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

/// A parsed tagged record: an ordered map from tag to value.
///
/// Digit tags are kept first in ascending order, every other tag follows in
/// insertion order. Formatting relies on this order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldBag {
    fields: Vec<(char, FieldValue)>,
}

impl FieldBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bag holding only a `%0` type line
    pub fn with_type(reference_type: ReferenceType) -> Self {
        let mut bag = Self::new();
        bag.add_tag(TYPE_TAG, reference_type.name());
        bag
    }

    /// Add an occurrence of a tag (e.g. another author)
    pub fn add_tag(&mut self, tag: char, value: impl Into<String>) {
        let value = value.into();
        match self.position(tag) {
            Some(index) => self.fields[index].1.push(value),
            None => self.insert_ordered(tag, FieldValue::Single(value)),
        }
    }

    /// Set a tag, replacing all previous occurrences
    pub fn set(&mut self, tag: char, value: FieldValue) {
        match self.position(tag) {
            Some(index) => self.fields[index].1 = value,
            None => self.insert_ordered(tag, value),
        }
    }

    /// Continue the last occurrence of a tag (wrapped lines)
    pub(crate) fn extend_last(&mut self, tag: char, text: &str) {
        if let Some(index) = self.position(tag) {
            self.fields[index].1.extend_last(text);
        }
    }

    pub fn get(&self, tag: char) -> Option<&FieldValue> {
        self.position(tag).map(|index| &self.fields[index].1)
    }

    /// Get the first occurrence of a tag
    pub fn get_tag(&self, tag: char) -> Option<&str> {
        self.get(tag).and_then(FieldValue::first)
    }

    /// Get every occurrence of a tag (e.g. all authors)
    pub fn get_all_tags(&self, tag: char) -> Vec<&str> {
        self.get(tag).map(FieldValue::values).unwrap_or_default()
    }

    pub fn contains(&self, tag: char) -> bool {
        self.position(tag).is_some()
    }

    /// Raw `%0` value
    pub fn type_name(&self) -> Option<&str> {
        self.get_tag(TYPE_TAG)
    }

    /// The `%0` value as a known reference type
    pub fn reference_type(&self) -> Option<ReferenceType> {
        self.type_name().and_then(ReferenceType::from_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &FieldValue)> {
        self.fields.iter().map(|(tag, value)| (*tag, value))
    }

    /// Number of distinct tags
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn position(&self, tag: char) -> Option<usize> {
        self.fields.iter().position(|(t, _)| *t == tag)
    }

    fn insert_ordered(&mut self, tag: char, value: FieldValue) {
        let index = if tag.is_ascii_digit() {
            self.fields
                .iter()
                .position(|(t, _)| !t.is_ascii_digit() || *t > tag)
                .unwrap_or(self.fields.len())
        } else {
            self.fields.len()
        };
        self.fields.insert(index, (tag, value));
    }
}

impl Serialize for FieldBag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (tag, value) in &self.fields {
            map.serialize_entry(&tag.to_string(), value)?;
        }
        map.end()
    }
}

struct FieldBagVisitor;

impl<'de> Visitor<'de> for FieldBagVisitor {
    type Value = FieldBag;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map from single-character tags to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FieldBag, A::Error> {
        let mut bag = FieldBag::new();
        while let Some((key, value)) = access.next_entry::<String, FieldValue>()? {
            let mut chars = key.chars();
            let tag = match (chars.next(), chars.next()) {
                (Some(tag), None) => tag,
                _ => return Err(de::Error::custom(format!("invalid tag `{}`", key))),
            };
            if let FieldValue::Multiple(values) = value {
                match FieldValue::from_values(values) {
                    Some(value) => bag.set(tag, value),
                    None => continue,
                }
            } else {
                bag.set(tag, value);
            }
        }
        Ok(bag)
    }
}

impl<'de> Deserialize<'de> for FieldBag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FieldBagVisitor)
    }
}
