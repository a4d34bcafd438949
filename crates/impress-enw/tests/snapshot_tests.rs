//! Snapshot tests for tagged output
//!
//! Uses insta crate to detect unexpected output changes

use impress_enw::{
    csl_to_json, export, format_entry, parse_csl, CslRecord, DateValue, FieldBag, ItemType,
    Name, OutputOptions, ReferenceType, Variable,
};
use insta::assert_snapshot;

fn export_text(records: &[CslRecord]) -> String {
    export(records, &OutputOptions::default())
        .as_text()
        .unwrap_or_default()
        .to_string()
}

// === Formatting ===

#[test]
fn test_format_journal_article() {
    let mut bag = FieldBag::with_type(ReferenceType::JournalArticle);
    bag.add_tag('A', "Einstein, Albert");
    bag.add_tag('T', "On the Electrodynamics of Moving Bodies");
    bag.add_tag('J', "Annalen der Physik");
    bag.add_tag('V', "17");
    bag.add_tag('P', "891-921");
    bag.add_tag('D', "1905");

    assert_snapshot!(format_entry(&bag, "\n"), @r###"
    %0 Journal Article
    %A Einstein, Albert
    %T On the Electrodynamics of Moving Bodies
    %J Annalen der Physik
    %V 17
    %P 891-921
    %D 1905
    "###);
}

// === Export ===

#[test]
fn test_export_book() {
    let mut record = CslRecord::with_type(ItemType::Book);
    record.insert(Variable::Title, "The Art of Computer Programming");
    record.insert(
        Variable::Author,
        vec![Name::personal("Knuth", Some("Donald E."))],
    );
    record.insert(Variable::Publisher, "Addison-Wesley");
    record.insert(Variable::Issued, DateValue::year(1997));

    assert_snapshot!(export_text(&[record]), @r###"
    %0 Book
    %8 1997
    %A Knuth, Donald E.
    %D 1997
    %I Addison-Wesley
    %T The Art of Computer Programming
    "###);
}

#[test]
fn test_export_institutional_author() {
    let mut record = CslRecord::with_type(ItemType::Report);
    record.insert(
        Variable::Author,
        vec![Name::literal("World Health Organization")],
    );
    record.insert(Variable::Title, "World Health Statistics");

    assert_snapshot!(export_text(&[record]), @r###"
    %0 Report
    %A World Health Organization,
    %T World Health Statistics
    "###);
}

#[test]
fn test_export_full_date() {
    let mut record = CslRecord::with_type(ItemType::ArticleJournal);
    record.insert(Variable::Issued, DateValue::from_parts(vec![2022, 6, 21]));

    assert_snapshot!(export_text(&[record]), @r###"
    %0 Journal Article
    %8 2022-06-21
    %D 2022
    "###);
}

// === CSL-JSON ===

#[test]
fn test_csl_json_output() {
    let records = parse_csl("%0 Map\n%@ 1234-567X\n");

    assert_snapshot!(csl_to_json(&records).unwrap(), @r###"
    [
      {
        "type": "map",
        "ISSN": "1234-567X"
      }
    ]
    "###);
}
