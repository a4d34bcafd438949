//! Rule-driven translation between tagged records and CSL records
//!
//! One generic engine serves both directions. A [`Pass`] picks which side of
//! every rule is read and which is written; the scan itself never branches on
//! direction or record type.
//!
//! Per rule, in table order:
//! 1. a rule marked `Never` for the input side is skipped,
//! 2. output keys already written are left alone (first write wins),
//! 3. the input-side guard must hold against the input record,
//! 4. at least one input key must be present.
//!
//! Guards only ever read the input record, so the result does not depend on
//! what earlier rules wrote. A record without a type gets the default type
//! after the scan.

use std::fmt;

use crate::csl::{CslRecord, CslValue, Variable};
use crate::entry::{FieldBag, FieldValue, TYPE_TAG};
use crate::mapping::converters::{copy_to_source, copy_to_target};
use crate::mapping::{Converter, Rule, Side, RULES};
use crate::types::{ItemType, ReferenceType};

/// A record the engine can read guards from and accumulate into
pub(crate) trait Fields: Default {
    type Key: Copy + PartialEq + fmt::Debug + 'static;
    type Type: Copy + PartialEq + 'static;
    type Value;

    fn contains(&self, key: Self::Key) -> bool;
    fn get(&self, key: Self::Key) -> Option<&Self::Value>;
    fn has_type(&self) -> bool;
    /// The record type, if set and known
    fn record_type(&self) -> Option<Self::Type>;
    /// Write a key unless it is already set; returns whether it was written
    fn insert_new(&mut self, key: Self::Key, value: Self::Value) -> bool;
}

impl Fields for FieldBag {
    type Key = char;
    type Type = ReferenceType;
    type Value = FieldValue;

    fn contains(&self, key: char) -> bool {
        FieldBag::contains(self, key)
    }

    fn get(&self, key: char) -> Option<&FieldValue> {
        FieldBag::get(self, key)
    }

    fn has_type(&self) -> bool {
        FieldBag::contains(self, TYPE_TAG)
    }

    fn record_type(&self) -> Option<ReferenceType> {
        self.reference_type()
    }

    fn insert_new(&mut self, key: char, value: FieldValue) -> bool {
        if FieldBag::contains(self, key) {
            return false;
        }
        self.set(key, value);
        true
    }
}

impl Fields for CslRecord {
    type Key = Variable;
    type Type = ItemType;
    type Value = CslValue;

    fn contains(&self, key: Variable) -> bool {
        CslRecord::contains(self, key)
    }

    fn get(&self, key: Variable) -> Option<&CslValue> {
        CslRecord::get(self, key)
    }

    fn has_type(&self) -> bool {
        CslRecord::contains(self, Variable::Type)
    }

    fn record_type(&self) -> Option<ItemType> {
        self.item_type()
    }

    fn insert_new(&mut self, key: Variable, value: CslValue) -> bool {
        !CslRecord::contains(self, key) && self.insert(key, value)
    }
}

type Input<P> = <P as Pass>::Input;
type Output<P> = <P as Pass>::Output;

/// One translation direction
pub(crate) trait Pass {
    type Input: Fields;
    type Output: Fields;

    const NAME: &'static str;

    fn input_keys(rule: &Rule) -> &[<Self::Input as Fields>::Key];
    fn output_keys(rule: &Rule) -> &[<Self::Output as Fields>::Key];
    /// The guard read against the input record
    fn input_side(
        rule: &Rule,
    ) -> &Side<<Self::Input as Fields>::Type, <Self::Input as Fields>::Key>;

    fn convert(
        converter: Converter,
        values: &[Option<&<Self::Input as Fields>::Value>],
    ) -> Vec<Option<<Self::Output as Fields>::Value>>;

    /// Verbatim copy, reshaped for the output key
    fn copy(
        value: &<Self::Input as Fields>::Value,
        key: <Self::Output as Fields>::Key,
    ) -> Option<<Self::Output as Fields>::Value>;
}

/// Tagged → normalized
pub(crate) struct ToTarget;

impl Pass for ToTarget {
    type Input = FieldBag;
    type Output = CslRecord;

    const NAME: &'static str = "to_target";

    fn input_keys(rule: &Rule) -> &[char] {
        rule.source.tags()
    }

    fn output_keys(rule: &Rule) -> &[Variable] {
        rule.target.variables()
    }

    fn input_side(rule: &Rule) -> &Side<ReferenceType, char> {
        &rule.when_source
    }

    fn convert(converter: Converter, values: &[Option<&FieldValue>]) -> Vec<Option<CslValue>> {
        converter.to_target(values)
    }

    fn copy(value: &FieldValue, key: Variable) -> Option<CslValue> {
        copy_to_target(value, key.kind())
    }
}

/// Normalized → tagged
pub(crate) struct ToSource;

impl Pass for ToSource {
    type Input = CslRecord;
    type Output = FieldBag;

    const NAME: &'static str = "to_source";

    fn input_keys(rule: &Rule) -> &[Variable] {
        rule.target.variables()
    }

    fn output_keys(rule: &Rule) -> &[char] {
        rule.source.tags()
    }

    fn input_side(rule: &Rule) -> &Side<ItemType, Variable> {
        &rule.when_target
    }

    fn convert(converter: Converter, values: &[Option<&CslValue>]) -> Vec<Option<FieldValue>> {
        converter.to_source(values)
    }

    fn copy(value: &CslValue, _key: char) -> Option<FieldValue> {
        copy_to_source(value)
    }
}

/// Evaluate a guard against a record.
///
/// Type lists need the record's type to be set and known.
fn check<F: Fields>(side: &Side<F::Type, F::Key>, record: &F) -> bool {
    let guard = match side {
        Side::Any => return true,
        Side::Never => return false,
        Side::Guard(guard) => guard,
    };

    if let Some(types) = guard.types {
        match record.record_type() {
            Some(record_type) if types.contains(&record_type) => {}
            _ => return false,
        }
    }
    guard.present.iter().all(|key| record.contains(*key))
        && !guard.absent.iter().any(|key| record.contains(*key))
}

fn apply<P: Pass>(rule: &'static Rule, input: &Input<P>, output: &mut Output<P>) {
    let outputs = P::output_keys(rule);
    if outputs.iter().all(|key| output.contains(*key)) {
        return;
    }
    if !check(P::input_side(rule), input) {
        return;
    }

    let inputs = P::input_keys(rule);
    let values: Vec<_> = inputs.iter().map(|key| input.get(*key)).collect();
    if values.iter().all(Option::is_none) {
        return;
    }

    let results = match rule.convert {
        Some(converter) => P::convert(converter, &values),
        None => match (values.iter().flatten().next(), outputs.first()) {
            (Some(value), Some(key)) => vec![P::copy(value, *key)],
            _ => Vec::new(),
        },
    };

    // Extra converter positions beyond the rule's keys are dropped
    for (key, value) in outputs.iter().zip(results) {
        if let Some(value) = value {
            if output.insert_new(*key, value) {
                tracing::trace!(direction = P::NAME, ?inputs, key = ?key, "Applied rule");
            }
        }
    }
}

fn translate<P: Pass>(input: &Input<P>) -> Output<P> {
    let mut output: Output<P> = Default::default();
    for rule in RULES.iter() {
        apply::<P>(rule, input, &mut output);
    }

    if !output.has_type() {
        let type_rule = RULES.iter().find(|rule| rule.convert == Some(Converter::Type));
        let default_type = P::convert(Converter::Type, &[None]).into_iter().flatten().next();
        if let (Some(rule), Some(value)) = (type_rule, default_type) {
            if let Some(key) = P::output_keys(rule).first() {
                output.insert_new(*key, value);
            }
        }
    }
    output
}

/// Translate a tagged record into a CSL record
pub fn convert_to_target(bag: &FieldBag) -> CslRecord {
    let record = translate::<ToTarget>(bag);
    tracing::debug!(
        tags = bag.len(),
        variables = record.len(),
        item_type = record.type_name().unwrap_or_default(),
        "Converted tagged record"
    );
    record
}

/// Translate a CSL record into a tagged record
pub fn convert_to_source(record: &CslRecord) -> FieldBag {
    let bag = translate::<ToSource>(record);
    tracing::debug!(
        variables = record.len(),
        tags = bag.len(),
        reference_type = bag.type_name().unwrap_or_default(),
        "Converted CSL record"
    );
    bag
}

/// Translate many tagged records, preserving order
#[cfg(not(feature = "parallel"))]
pub fn convert_all_to_target(bags: &[FieldBag]) -> Vec<CslRecord> {
    bags.iter().map(convert_to_target).collect()
}

/// Translate many tagged records, preserving order
#[cfg(feature = "parallel")]
pub fn convert_all_to_target(bags: &[FieldBag]) -> Vec<CslRecord> {
    use rayon::prelude::*;
    bags.par_iter().map(convert_to_target).collect()
}

/// Translate many CSL records, preserving order
#[cfg(not(feature = "parallel"))]
pub fn convert_all_to_source(records: &[CslRecord]) -> Vec<FieldBag> {
    records.iter().map(convert_to_source).collect()
}

/// Translate many CSL records, preserving order
#[cfg(feature = "parallel")]
pub fn convert_all_to_source(records: &[CslRecord]) -> Vec<FieldBag> {
    use rayon::prelude::*;
    records.par_iter().map(convert_to_source).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csl::{DateValue, Name};

    fn bag(lines: &[(char, &str)]) -> FieldBag {
        let mut bag = FieldBag::new();
        for (tag, value) in lines {
            bag.add_tag(*tag, *value);
        }
        bag
    }

    #[test]
    fn test_type_only_record() {
        let record = convert_to_target(&bag(&[('0', "Book")]));
        assert_eq!(record, CslRecord::with_type(ItemType::Book));
    }

    #[test]
    fn test_missing_type_defaults() {
        let record = convert_to_target(&bag(&[('X', "Summary"), ('T', "Untitled")]));
        assert_eq!(record.item_type(), Some(ItemType::Document));
        assert_eq!(record.get_text(Variable::Abstract), Some("Summary"));
        // Type-guarded rules need a type on the input
        assert!(!record.contains(Variable::Title));

        let bag = convert_to_source(&CslRecord::new());
        assert_eq!(bag.type_name(), Some("Generic"));
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn test_unknown_type_defaults() {
        let record = convert_to_target(&bag(&[('0', "Hologram")]));
        assert_eq!(record.type_name(), Some("document"));

        let mut record = CslRecord::new();
        record.insert(Variable::Type, "hologram");
        assert_eq!(convert_to_source(&record).type_name(), Some("Generic"));
    }

    #[test]
    fn test_reviewed_author_swap() {
        let plain = convert_to_target(&bag(&[('0', "Book"), ('A', "Doe, Jane")]));
        assert_eq!(
            plain.get(Variable::Author),
            Some(&CslValue::Names(vec![Name::personal("Doe", Some("Jane"))]))
        );
        assert!(!plain.contains(Variable::ReviewedAuthor));

        let review = convert_to_target(&bag(&[
            ('0', "Book"),
            ('A', "Doe, Jane"),
            ('4', "Roe, Richard"),
        ]));
        assert_eq!(
            review.get(Variable::ReviewedAuthor),
            Some(&CslValue::Names(vec![Name::personal("Doe", Some("Jane"))]))
        );
        assert_eq!(
            review.get(Variable::Author),
            Some(&CslValue::Names(vec![Name::personal("Roe", Some("Richard"))]))
        );

        let back = convert_to_source(&review);
        assert_eq!(back.get_tag('A'), Some("Doe, Jane"));
        assert_eq!(back.get_tag('4'), Some("Roe, Richard"));
    }

    #[test]
    fn test_original_title_swap() {
        let record = convert_to_target(&bag(&[
            ('0', "Book"),
            ('T', "Translated"),
            ('Q', "Original"),
        ]));
        assert_eq!(record.get_text(Variable::Title), Some("Original"));
        assert_eq!(record.get_text(Variable::OriginalTitle), Some("Translated"));

        let back = convert_to_source(&record);
        assert_eq!(back.get_tag('T'), Some("Translated"));
        assert_eq!(back.get_tag('Q'), Some("Original"));
    }

    #[test]
    fn test_date_prefers_full_date() {
        let record = convert_to_target(&bag(&[
            ('0', "Journal Article"),
            ('D', "2018"),
            ('8', "2018-03-15"),
        ]));
        assert_eq!(
            record.get(Variable::Issued),
            Some(&CslValue::Date(DateValue::from_parts(vec![2018, 3, 15])))
        );
    }

    #[test]
    fn test_forward_only_rules_skip_reverse() {
        let record = convert_to_target(&bag(&[('0', "Edited Book"), ('A', "Doe, Jane")]));
        assert!(record.contains(Variable::Editor));

        // Edited books come back as books, with the editor under `%Y`
        let back = convert_to_source(&record);
        assert_eq!(back.type_name(), Some("Book"));
        assert_eq!(back.get_tag('Y'), Some("Doe, Jane"));
        assert!(!back.contains('A'));
    }

    #[test]
    fn test_batch_preserves_order() {
        let bags = vec![
            bag(&[('0', "Book")]),
            bag(&[('0', "Thesis")]),
            bag(&[('0', "Map")]),
        ];
        let types: Vec<_> = convert_all_to_target(&bags)
            .iter()
            .map(|r| r.type_name().map(str::to_string))
            .collect();
        assert_eq!(
            types,
            vec![Some("book".into()), Some("thesis".into()), Some("map".into())]
        );
        let back = convert_all_to_source(&convert_all_to_target(&bags));
        assert_eq!(back[1].type_name(), Some("Thesis"));
    }

    #[test]
    fn test_check_reads_only_the_given_record() {
        let guard: Side<ItemType, Variable> = Side::Guard(crate::mapping::Guard {
            types: Some(&[ItemType::Book]),
            present: &[Variable::OriginalTitle],
            absent: &[Variable::ReviewedAuthor],
        });
        let mut record = CslRecord::with_type(ItemType::Book);
        assert!(!check(&guard, &record));

        record.insert(Variable::OriginalTitle, "Original");
        assert!(check(&guard, &record));

        record.insert(Variable::ReviewedAuthor, vec![Name::personal("Doe", None)]);
        assert!(!check(&guard, &record));

        assert!(!check(&guard, &CslRecord::new()));
        assert!(check(&Side::<ItemType, Variable>::Any, &CslRecord::new()));
        assert!(!check(&Side::<ItemType, Variable>::Never, &record));
    }
}
