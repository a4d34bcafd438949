//! Date and name sub-parsers used by the value converters

pub mod date_parser;
pub mod name_parser;

pub use date_parser::{format_date, parse_date};
pub use name_parser::{format_name, parse_name};
