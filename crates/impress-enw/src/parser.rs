//! Tagged-format parser
//!
//! Records are runs of `%<tag> <value>` lines, each record opened by a `%0`
//! type line. Repeated tags accumulate in order of appearance. Lines that do
//! not start with `%` continue the previous value.

use std::borrow::Cow;

use nom::{
    character::complete::{anychar, char},
    combinator::{opt, rest, verify},
    sequence::{pair, preceded},
    IResult,
};

use crate::entry::{FieldBag, FieldValue, TYPE_TAG};
use crate::types::ReferenceType;

/// Parse tagged text into field bags, one per `%0` record.
///
/// Never fails: blank input yields no records and lines before the first
/// `%0` are dropped.
pub fn parse(input: &str) -> Vec<FieldBag> {
    parse_enw(input.trim())
}

/// Whether text looks like tagged records (some line starts with `%0`)
pub fn is_enw(input: &str) -> bool {
    input.lines().any(|line| line.trim_start().starts_with("%0"))
}

fn parse_enw(input: &str) -> Vec<FieldBag> {
    let mut bags = Vec::new();
    let mut current: Option<FieldBag> = None;
    let mut last_tag: Option<char> = None;
    let mut dropped = 0usize;

    for raw_line in input.lines() {
        let line = normalize_line(raw_line.trim_end_matches('\r'));
        if line.trim().is_empty() {
            continue;
        }

        match parse_tag_line(&line) {
            Ok((_, (TYPE_TAG, value))) => {
                if let Some(bag) = current.take() {
                    bags.push(finalize(bag));
                }
                let mut bag = FieldBag::new();
                bag.add_tag(TYPE_TAG, value);
                current = Some(bag);
                last_tag = Some(TYPE_TAG);
            }
            Ok((_, (tag, value))) => match current.as_mut() {
                Some(bag) => {
                    bag.add_tag(tag, value);
                    last_tag = Some(tag);
                }
                None => dropped += 1,
            },
            Err(_) => match (current.as_mut(), last_tag) {
                (Some(bag), Some(tag)) if !line.starts_with('%') => {
                    bag.extend_last(tag, line.trim());
                }
                _ => dropped += 1,
            },
        }
    }

    if let Some(bag) = current.take() {
        bags.push(finalize(bag));
    }

    if dropped > 0 {
        tracing::warn!(lines = dropped, "Dropped lines outside of any record");
    }
    tracing::debug!(records = bags.len(), "Parsed tagged records");
    bags
}

/// Rewrite known quirks of exported files
fn normalize_line(line: &str) -> Cow<'_, str> {
    // Some exporters write the `%]` tag with a dollar marker
    match line.strip_prefix("$]") {
        Some(rest) => Cow::Owned(format!("%]{}", rest)),
        None => Cow::Borrowed(line),
    }
}

/// `%` marker, one tag character, an optional space, then the value.
///
/// The space is optional so `%(value` and `%[value` parse like `%( value`.
fn parse_tag_line(input: &str) -> IResult<&str, (char, &str)> {
    pair(
        preceded(char('%'), verify(anychar, |c: &char| !c.is_whitespace())),
        preceded(opt(char(' ')), rest),
    )(input)
}

/// Canonicalize the type line of a finished record
fn finalize(mut bag: FieldBag) -> FieldBag {
    if let Some(name) = bag.type_name() {
        let canonical = canonical_type_name(name);
        bag.set(TYPE_TAG, FieldValue::Single(canonical));
    }
    bag
}

/// Spelling of a reference type as used by the type table.
///
/// Known names are matched case-insensitively; others are title-cased word
/// by word.
pub fn canonical_type_name(name: &str) -> String {
    match ReferenceType::from_name(name) {
        Some(reference_type) => reference_type.name().to_string(),
        None => title_case(name.trim()),
    }
}

fn title_case(input: &str) -> String {
    input
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
