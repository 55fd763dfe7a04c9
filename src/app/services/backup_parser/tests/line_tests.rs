//! Tests for physical line normalization

use crate::app::services::backup_parser::line::RawRecord;

#[test]
fn test_split_into_tag_and_fields() {
    let record = RawRecord::parse("entry;\"2024-01-01 08:00:00\";\"a note\"");

    assert_eq!(record.record_type, "entry");
    assert_eq!(record.fields, vec!["2024-01-01 08:00:00", "a note"]);
}

#[test]
fn test_unquoted_fields_pass_through() {
    let record = RawRecord::parse("food;apple;14");

    assert_eq!(record.record_type, "food");
    assert_eq!(record.fields, vec!["apple", "14"]);
}

#[test]
fn test_strips_exactly_one_quote_pair() {
    // the format has no escaping, so inner quotes survive the strip
    let record = RawRecord::parse("entryTag;\"\"nested\"\"");

    assert_eq!(record.fields, vec!["\"nested\""]);
}

#[test]
fn test_one_sided_quotes_are_stripped() {
    let record = RawRecord::parse("entryTag;\"leading;trailing\"");

    assert_eq!(record.fields, vec!["leading", "trailing"]);
}

#[test]
fn test_lone_quote_field_becomes_empty() {
    let record = RawRecord::parse("entryTag;\"");

    assert_eq!(record.fields, vec![""]);
}

#[test]
fn test_empty_line_has_empty_record_type() {
    let record = RawRecord::parse("");

    assert_eq!(record.record_type, "");
    assert!(record.fields.is_empty());
}

#[test]
fn test_whitespace_only_line_is_empty() {
    let record = RawRecord::parse("   \t  ");

    assert_eq!(record.record_type, "");
    assert!(record.fields.is_empty());
}

#[test]
fn test_empty_fields_are_kept_in_order() {
    let record = RawRecord::parse("food;\"apple\";;\"apple\";\"14\"");

    assert_eq!(record.fields, vec!["apple", "", "apple", "14"]);
}

#[test]
fn test_field_accessors() {
    let record = RawRecord::parse("measurement;\"insulin\";\"4\";\"1\";\"0\"");

    assert_eq!(record.field(0), Some("insulin"));
    assert_eq!(record.field(3), Some("0"));
    assert_eq!(record.field(4), None);
    assert_eq!(record.last_field(), Some("0"));
}

#[test]
fn test_last_field_on_bare_tag() {
    let record = RawRecord::parse("data");

    assert_eq!(record.record_type, "data");
    assert_eq!(record.last_field(), None);
}
