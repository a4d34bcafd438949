//! Tagged-format formatter

use crate::entry::FieldBag;

/// Format a field bag as `%<tag> <value>` lines, each ended by `line_ending`
pub fn format_entry(bag: &FieldBag, line_ending: &str) -> String {
    format_entry_internal(bag, line_ending)
}

/// Format multiple field bags, separated by an empty line
pub fn format_entries(bags: &[FieldBag], line_ending: &str) -> String {
    bags.iter()
        .map(|bag| format_entry_internal(bag, line_ending))
        .collect::<Vec<_>>()
        .join(line_ending)
}

fn format_entry_internal(bag: &FieldBag, line_ending: &str) -> String {
    let mut record = String::new();
    for (tag, value) in bag.iter() {
        // Repeated tags expand to one line per occurrence
        for value in value.values() {
            record.push('%');
            record.push(tag);
            record.push(' ');
            record.push_str(value);
            record.push_str(line_ending);
        }
    }
    record
}
