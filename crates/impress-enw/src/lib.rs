//! EndNote tagged-format parsing, formatting and CSL-JSON translation
//!
//! This crate provides:
//! - A parser and formatter for `%<tag> <value>` records
//! - A declarative, type-conditional rule table between tags and CSL variables
//! - A generic engine applying that table in both directions
//! - Date and name sub-parsers used by the value converters
//!
//! The engine, parser and formatter are total. Errors only arise when
//! decoding CSL-JSON handed over by a host.

pub mod csl;
pub mod entry;
pub mod error;
pub mod export;
pub mod formatter;
pub mod mapping;
pub mod parser;
pub mod text;
pub mod translator;
pub mod types;

pub use csl::{CslRecord, CslValue, DateValue, Name, ValueKind, Variable};
pub use entry::{FieldBag, FieldValue};
pub use error::{EnwError, Result};
pub use export::{export, Output, OutputFormat, OutputOptions};
pub use formatter::{format_entries, format_entry};
pub use mapping::{Converter, Rule, RULES};
pub use parser::{is_enw, parse};
pub use translator::{
    convert_all_to_source, convert_all_to_target, convert_to_source, convert_to_target,
};
pub use types::{ItemType, ReferenceType};

/// Parse tagged text straight into CSL records
pub fn parse_csl(input: &str) -> Vec<CslRecord> {
    convert_all_to_target(&parse(input))
}

/// Decode CSL-JSON: an array of records or a single record
pub fn csl_from_json(json: &str) -> Result<Vec<CslRecord>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    match value {
        serde_json::Value::Array(items) => items.iter().map(CslRecord::from_json_value).collect(),
        serde_json::Value::Object(_) => Ok(vec![CslRecord::from_json_value(&value)?]),
        _ => Err(EnwError::InvalidRecord(
            "expected a CSL-JSON object or array".to_string(),
        )),
    }
}

/// Encode records as a CSL-JSON array
pub fn csl_to_json(records: &[CslRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
