//! Export pipeline from CSL records to tagged output

use serde::{Deserialize, Serialize};

use crate::csl::CslRecord;
use crate::entry::FieldBag;
use crate::formatter::format_entries;
use crate::translator::convert_all_to_source;

/// Shape of the export result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Formatted `%<tag> <value>` text
    #[default]
    Text,
    /// The translated field bags, unformatted
    Object,
}

/// Options for export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// Ends every line; records are separated by one extra terminator
    pub line_ending: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            line_ending: "\n".to_string(),
        }
    }
}

/// Result of an export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Text(String),
    Object(Vec<FieldBag>),
}

impl Output {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Object(_) => None,
        }
    }

    pub fn into_bags(self) -> Option<Vec<FieldBag>> {
        match self {
            Self::Object(bags) => Some(bags),
            Self::Text(_) => None,
        }
    }
}

/// Export CSL records as tagged records
pub fn export(records: &[CslRecord], options: &OutputOptions) -> Output {
    let bags = convert_all_to_source(records);
    tracing::debug!(records = bags.len(), format = ?options.format, "Exporting tagged records");
    match options.format {
        OutputFormat::Object => Output::Object(bags),
        OutputFormat::Text => Output::Text(format_entries(&bags, &options.line_ending)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ItemType;

    #[test]
    fn test_default_options() {
        let options: OutputOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, OutputOptions::default());
        assert_eq!(options.format, OutputFormat::Text);
        assert_eq!(options.line_ending, "\n");
    }

    #[test]
    fn test_options_from_json() {
        let options: OutputOptions =
            serde_json::from_str(r#"{"format": "object", "lineEnding": "\r\n"}"#).unwrap();
        assert_eq!(options.format, OutputFormat::Object);
        assert_eq!(options.line_ending, "\r\n");
    }

    #[test]
    fn test_export_modes() {
        let records = vec![CslRecord::with_type(ItemType::Book)];

        let text = export(&records, &OutputOptions::default());
        assert_eq!(text.as_text(), Some("%0 Book\n"));

        let options = OutputOptions {
            format: OutputFormat::Object,
            ..Default::default()
        };
        let bags = export(&records, &options).into_bags().unwrap();
        assert_eq!(bags.len(), 1);
        assert_eq!(bags[0].type_name(), Some("Book"));
    }
}
