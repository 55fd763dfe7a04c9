//! End-to-end integration tests: backup text through parsing, querying and
//! report assembly to the serialized report map.

use diaguard_processor::{
    BackupParser, NumericField, ParserConfig, ReportBuilder, ReportConfig,
};

/// A week of diary data with foods, measurements, tags and noise lines
fn weekly_backup() -> String {
    let mut lines: Vec<String> = vec![
        "meta;\"1\";\"4.3.1\"".to_string(),
        "food;\"Apple\";\"\";\"fruit\";\"14\"".to_string(),
        "food;\"Bread\";\"\";\"bakery\";\"49\"".to_string(),
    ];

    for day in 1..=7 {
        lines.push(format!("entry;\"2024-05-{:02} 08:00:00\";\"\"", day));
        lines.push(format!("measurement;\"bloodsugar\";\"{}\"", 90 + day * 5));
        lines.push("measurement;\"insulin\";\"4\";\"1\";\"16\"".to_string());
        lines.push("foodEaten;\"Bread\";\"80\"".to_string());
        lines.push("entryTag;\"breakfast\"".to_string());

        lines.push(format!("entry;\"2024-05-{:02} 20:00:00\";\"dinner\"", day));
        lines.push(format!("measurement;\"bloodsugar\";\"{}\"", 150 + day * 10));
        lines.push("foodEaten;\"Apple\";\"150\"".to_string());
    }

    lines.join("\n")
}

#[test]
fn test_full_pipeline_from_backup_to_report() {
    let parser = BackupParser::new(ParserConfig::default());
    let result = parser.parse_str(&weekly_backup()).unwrap();

    assert_eq!(result.record_set.len(), 14);
    assert_eq!(result.catalog.len(), 2);
    assert!(result.stats.errors.is_empty());

    let report = ReportBuilder::new(&result.record_set, ReportConfig::default()).build();

    assert_eq!(report.entry_count, 14);
    assert!(report.hba1c.is_some());
    // evening readings reach the 180 bound on day 3 and climb from there
    assert_eq!(report.time_above_range, 5);
    assert_eq!(report.time_in_range, 9);
    assert_eq!(report.time_below_range, 0);
    assert_eq!(report.mean_entries_per_day, Some(2.0));
    // fast insulin is 5 every morning, 0 every evening
    assert_eq!(report.mean_fast_insulin_per_day, Some(5.0));
    assert_eq!(report.std_fast_insulin_per_day, Some(0.0));
}

#[test]
fn test_report_serializes_with_expected_keys() {
    let parser = BackupParser::new(ParserConfig::default());
    let result = parser.parse_str(&weekly_backup()).unwrap();
    let report = ReportBuilder::new(&result.record_set, ReportConfig::default()).build();

    let value = serde_json::to_value(&report).unwrap();
    let map = value.as_object().unwrap();

    for key in [
        "hba1c",
        "time_in_range",
        "time_below_range",
        "time_above_range",
        "entry_count",
        "mean_entries_per_day",
        "std_entries_per_day",
        "mean_fast_insulin_per_day",
        "std_fast_insulin_per_day",
        "glucose_by_hour",
        "time_in_range_by_hour",
        "time_below_range_by_hour",
        "time_above_range_by_hour",
        "entries",
    ] {
        assert!(map.contains_key(key), "report is missing key '{}'", key);
    }

    assert_eq!(map["glucose_by_hour"].as_array().unwrap().len(), 24);
    assert_eq!(map["time_in_range_by_hour"].as_array().unwrap().len(), 24);
}

#[test]
fn test_empty_backup_produces_null_statistics_not_errors() {
    let parser = BackupParser::new(ParserConfig::default());
    let result = parser.parse_str("").unwrap();
    let report = ReportBuilder::new(&result.record_set, ReportConfig::default()).build();

    let value = serde_json::to_value(&report).unwrap();
    assert!(value["hba1c"].is_null());
    assert!(value["mean_entries_per_day"].is_null());
    assert_eq!(value["entry_count"], 0);
    assert_eq!(value["glucose_by_hour"].as_array().unwrap().len(), 24);
}

#[test]
fn test_query_pipeline_over_parsed_backup() {
    let parser = BackupParser::new(ParserConfig::default());
    let result = parser.parse_str(&weekly_backup()).unwrap();

    // tagged morning entries with glucose in the target band
    let view = result
        .record_set
        .view()
        .with_tags(&["breakfast"], false)
        .range(NumericField::Glucose, 70.0, 180.0);

    assert_eq!(view.len(), 7);
    for entry in view.iter() {
        assert_eq!(entry.hour(), 8);
        assert_eq!(entry.meal.get("bread"), Some(&39.2)); // 80g x 49/100
    }
}

#[test]
fn test_lenient_and_strict_disagree_on_damaged_backup() {
    let mut damaged = weekly_backup();
    damaged.push_str("\nentry;\"2024-05-08 08:00:00\";\"\"\nfoodEaten;\"cake\";\"100\"\n");

    let lenient = BackupParser::new(ParserConfig::default())
        .parse_str(&damaged)
        .unwrap();
    assert_eq!(lenient.record_set.len(), 14);
    assert_eq!(lenient.stats.entries_skipped, 1);

    let strict = BackupParser::new(ParserConfig::new().with_strict()).parse_str(&damaged);
    assert!(strict.is_err());
}
