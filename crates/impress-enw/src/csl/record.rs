//! Normalized (CSL-JSON) record

use std::collections::BTreeMap;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value::CslValue;
use super::variable::Variable;
use crate::error::{EnwError, Result};
use crate::types::ItemType;

/// A record in the normalized vocabulary.
///
/// Values are reshaped to their variable's kind on insert, so a date
/// variable always holds a [`CslValue::Date`] and a names variable always
/// holds [`CslValue::Names`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CslRecord {
    fields: BTreeMap<Variable, CslValue>,
}

impl CslRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a record with only its `type` set
    pub fn with_type(item_type: ItemType) -> Self {
        let mut record = Self::new();
        record.set_type(item_type);
        record
    }

    pub fn get(&self, variable: Variable) -> Option<&CslValue> {
        self.fields.get(&variable)
    }

    /// Get a text variable
    pub fn get_text(&self, variable: Variable) -> Option<&str> {
        self.get(variable).and_then(CslValue::as_text)
    }

    pub fn contains(&self, variable: Variable) -> bool {
        self.fields.contains_key(&variable)
    }

    /// Set a variable, replacing any previous value.
    ///
    /// Returns `false` when the value could not be reshaped to the variable's
    /// kind and was dropped.
    pub fn insert(&mut self, variable: Variable, value: impl Into<CslValue>) -> bool {
        match value.into().into_kind(variable.kind()) {
            Some(value) => {
                self.fields.insert(variable, value);
                true
            }
            None => false,
        }
    }

    /// Set the `type` variable
    pub fn set_type(&mut self, item_type: ItemType) {
        self.fields
            .insert(Variable::Type, CslValue::Text(item_type.name().to_string()));
    }

    /// The raw `type` string, recognized or not
    pub fn type_name(&self) -> Option<&str> {
        self.get_text(Variable::Type)
    }

    /// The `type` as a known item type
    pub fn item_type(&self) -> Option<ItemType> {
        self.type_name().and_then(ItemType::from_name)
    }

    /// Iterate over variables in a stable order
    pub fn iter(&self) -> impl Iterator<Item = (Variable, &CslValue)> {
        self.fields.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Decode a record from a CSL-JSON object.
    ///
    /// Keys outside the known vocabulary are skipped; values of the wrong
    /// shape are rejected.
    pub fn from_json_value(value: &Value) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| EnwError::InvalidRecord("expected a JSON object".to_string()))?;

        let mut record = Self::new();
        for (key, value) in object {
            let Some(variable) = Variable::from_name(key) else {
                tracing::debug!(key = %key, "Skipping unknown CSL variable");
                continue;
            };
            if value.is_null() {
                continue;
            }
            let value = CslValue::from_json(variable.kind(), value).map_err(|message| {
                EnwError::InvalidValue {
                    variable: key.clone(),
                    message,
                }
            })?;
            record.fields.insert(variable, value);
        }
        Ok(record)
    }
}

impl Serialize for CslRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        // `type` leads, as in hand-written CSL-JSON
        if let Some(value) = self.fields.get(&Variable::Type) {
            map.serialize_entry(Variable::Type.name(), value)?;
        }
        for (variable, value) in self.fields.iter().filter(|(v, _)| **v != Variable::Type) {
            map.serialize_entry(variable.name(), value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CslRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_json_value(&value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csl::{DateValue, Name};
    use serde_json::json;

    #[test]
    fn test_insert_reshapes_to_kind() {
        let mut record = CslRecord::new();
        assert!(record.insert(Variable::Issued, "2018"));
        assert!(record.insert(Variable::Author, "Doe, Jane"));
        assert_eq!(
            record.get(Variable::Issued),
            Some(&CslValue::Date(DateValue::year(2018)))
        );
        assert_eq!(
            record.get(Variable::Author),
            Some(&CslValue::Names(vec![Name::personal("Doe", Some("Jane"))]))
        );
    }

    #[test]
    fn test_type_serializes_first() {
        let mut record = CslRecord::with_type(ItemType::Book);
        record.insert(Variable::Abstract, "Text");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"type":"book","abstract":"Text"}"#);
    }

    #[test]
    fn test_deserialize_skips_unknown_keys() {
        let record: CslRecord = serde_json::from_value(json!({
            "id": "x1",
            "type": "article-journal",
            "volume": 126,
            "issued": {"date-parts": [[2018]]}
        }))
        .unwrap();
        assert_eq!(record.len(), 3);
        assert_eq!(record.item_type(), Some(ItemType::ArticleJournal));
        assert_eq!(record.get_text(Variable::Volume), Some("126"));
    }

    #[test]
    fn test_deserialize_rejects_bad_shapes() {
        let err = CslRecord::from_json_value(&json!({"author": 42})).unwrap_err();
        assert!(matches!(err, EnwError::InvalidValue { ref variable, .. } if variable == "author"));
        assert!(CslRecord::from_json_value(&json!([])).is_err());
    }

    #[test]
    fn test_unknown_type_is_kept_verbatim() {
        let record = CslRecord::from_json_value(&json!({"type": "hologram"})).unwrap();
        assert_eq!(record.type_name(), Some("hologram"));
        assert_eq!(record.item_type(), None);
    }
}
