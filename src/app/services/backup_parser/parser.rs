//! Core backup parser implementation
//!
//! A single forward pass over the normalized line sequence with an explicit
//! index cursor. `food` records feed the catalog as they are encountered;
//! an `entry` record opens a sub-record scan that consumes the following
//! `measurement`, `foodEaten` and `entryTag` lines and stops, without
//! consuming, at the first line of any other type. The line that stopped the
//! scan is then processed as the next top-level record.

use std::path::Path;

use indicatif::ProgressBar;
use tracing::{debug, info, warn};

use super::food_catalog::FoodCatalog;
use super::line::RawRecord;
use super::stats::{ParseResult, ParseStats};
use crate::app::models::Entry;
use crate::app::services::query::RecordSet;
use crate::config::ParserConfig;
use crate::constants::{
    ENTRY_DATE_FORMAT, ENTRY_DATE_FORMAT_SHORT, MANUAL_CARBS_KEY, measurement_categories,
    record_types,
};
use crate::{Error, Result};

/// Parser for Diaguard backup files
///
/// The parser is tolerant by default: a malformed entry is skipped as a
/// whole, its error recorded in the parse statistics with the offending line
/// position, and parsing continues with the next top-level record. With
/// [`ParserConfig::strict`] set, the first malformed entry aborts the run
/// instead. Structural failures (unreadable input) always abort.
#[derive(Debug, Default)]
pub struct BackupParser {
    config: ParserConfig,
}

impl BackupParser {
    /// Create a new parser with the given failure policy
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a backup file from disk
    pub fn parse_file(&self, file_path: &Path) -> Result<ParseResult> {
        info!("Parsing Diaguard backup: {}", file_path.display());

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::io(
                format!("failed to read backup file {}", file_path.display()),
                e,
            )
        })?;

        self.parse_str(&content)
    }

    /// Parse backup content from a string
    pub fn parse_str(&self, content: &str) -> Result<ParseResult> {
        let lines: Vec<&str> = content.lines().collect();
        self.parse_lines(&lines, None)
    }

    /// Parse backup lines, optionally reporting progress per consumed line
    pub fn parse_lines(
        &self,
        lines: &[&str],
        progress: Option<&ProgressBar>,
    ) -> Result<ParseResult> {
        let records: Vec<RawRecord> = lines.iter().map(|line| RawRecord::parse(line)).collect();

        let mut catalog = FoodCatalog::new();
        let mut entries: Vec<Entry> = Vec::new();
        let mut stats = ParseStats::new();
        stats.total_lines = records.len();

        let mut i = 0;
        while i < records.len() {
            let record = &records[i];
            let line_no = i + 1;

            match record.record_type.as_str() {
                record_types::FOOD => {
                    match self.register_food(record, line_no, &mut catalog) {
                        Ok(()) => stats.foods_registered += 1,
                        Err(e) => {
                            if self.config.strict {
                                return Err(e);
                            }
                            warn!("Skipped food record: {}", e);
                            stats.errors.push(e.to_string());
                        }
                    }
                    i += 1;
                }
                record_types::ENTRY => {
                    let (next, outcome) = self.scan_entry(&records, i, &catalog);
                    match outcome {
                        Ok(entry) => {
                            entries.push(entry);
                            stats.entries_parsed += 1;
                        }
                        Err(e) => {
                            if self.config.strict {
                                return Err(e);
                            }
                            debug!("Skipped entry starting at line {}: {}", line_no, e);
                            stats.entries_skipped += 1;
                            stats.errors.push(e.to_string());
                        }
                    }
                    i = next;
                }
                _ => {
                    stats.lines_skipped += 1;
                    i += 1;
                }
            }

            if let Some(pb) = progress {
                pb.set_position(i as u64);
            }
        }

        info!("{}", stats.summary());

        Ok(ParseResult {
            record_set: RecordSet::new(entries),
            catalog,
            stats,
        })
    }

    /// Register one `food` record in the catalog
    ///
    /// The name is the first field; the carbohydrate ratio is the last field
    /// (the exporter writes several unused columns in between).
    fn register_food(
        &self,
        record: &RawRecord,
        line_no: usize,
        catalog: &mut FoodCatalog,
    ) -> Result<()> {
        let name = record.field(0).ok_or_else(|| {
            Error::malformed_line(line_no, record_types::FOOD, "missing name field")
        })?;

        if record.fields.len() < 2 {
            return Err(Error::malformed_line(
                line_no,
                record_types::FOOD,
                "missing carbohydrate field",
            ));
        }

        let ratio = parse_float_field(record, record.fields.len() - 1, "carbs per 100g", line_no)?;
        catalog.register(name, ratio);

        Ok(())
    }

    /// Reconstruct one entry starting at `start`
    ///
    /// Returns the cursor position of the first line past the entry's
    /// sub-records together with the parse outcome. The boundary is located
    /// even when the entry itself fails, so the outer loop always resumes at
    /// the line that stopped the scan.
    fn scan_entry(
        &self,
        records: &[RawRecord],
        start: usize,
        catalog: &FoodCatalog,
    ) -> (usize, Result<Entry>) {
        let mut outcome = self.begin_entry(&records[start], start + 1);

        let mut j = start + 1;
        while j < records.len() {
            let sub = &records[j];
            match sub.record_type.as_str() {
                record_types::MEASUREMENT | record_types::FOOD_EATEN | record_types::ENTRY_TAG => {
                    if let Ok(entry) = outcome.as_mut() {
                        if let Err(e) = self.apply_sub_record(sub, j + 1, catalog, entry) {
                            outcome = Err(e);
                        }
                    }
                    j += 1;
                }
                _ => break,
            }
        }

        (j, outcome)
    }

    /// Start an entry from its header record (date string, comments)
    fn begin_entry(&self, record: &RawRecord, line_no: usize) -> Result<Entry> {
        let date_str = record.field(0).ok_or_else(|| {
            Error::malformed_line(line_no, record_types::ENTRY, "missing date field")
        })?;
        let comments = record.field(1).ok_or_else(|| {
            Error::malformed_line(line_no, record_types::ENTRY, "missing comments field")
        })?;

        let timestamp = parse_entry_date(date_str, line_no)?;

        Ok(Entry::new(timestamp, comments))
    }

    /// Apply one sub-record to the in-progress entry
    fn apply_sub_record(
        &self,
        record: &RawRecord,
        line_no: usize,
        catalog: &FoodCatalog,
        entry: &mut Entry,
    ) -> Result<()> {
        match record.record_type.as_str() {
            record_types::MEASUREMENT => {
                let category = record.field(0).ok_or_else(|| {
                    Error::malformed_line(
                        line_no,
                        record_types::MEASUREMENT,
                        "missing category field",
                    )
                })?;

                match category {
                    measurement_categories::BLOODSUGAR => {
                        entry.glucose = Some(parse_int_field(record, 1, "bloodsugar", line_no)?);
                    }
                    measurement_categories::INSULIN => {
                        entry.bolus_insulin = parse_int_field(record, 1, "bolus", line_no)?;
                        entry.correction_insulin =
                            parse_int_field(record, 2, "correction", line_no)?;
                        entry.basal_insulin = parse_int_field(record, 3, "basal", line_no)?;
                    }
                    measurement_categories::MEAL => {
                        let grams = parse_float_field(record, 1, "meal carbs", line_no)?;
                        entry.meal.insert(MANUAL_CARBS_KEY.to_string(), grams);
                    }
                    measurement_categories::ACTIVITY => {
                        entry.activity = parse_int_field(record, 1, "activity", line_no)?;
                    }
                    measurement_categories::HBA1C => {
                        entry.hba1c = Some(parse_float_field(record, 1, "hba1c", line_no)?);
                    }
                    other => {
                        debug!(
                            "Ignoring unknown measurement category '{}' at line {}",
                            other, line_no
                        );
                    }
                }
            }
            record_types::FOOD_EATEN => {
                let name = record.field(0).ok_or_else(|| {
                    Error::malformed_line(line_no, record_types::FOOD_EATEN, "missing name field")
                })?;
                let weight = parse_float_field(record, 1, "food weight", line_no)?;

                let carbs = catalog
                    .carbs_in(name, weight)
                    .ok_or_else(|| Error::unknown_food(line_no, name.to_lowercase()))?;
                entry.meal.insert(name.to_lowercase(), carbs);
            }
            record_types::ENTRY_TAG => {
                let tag = record.field(0).ok_or_else(|| {
                    Error::malformed_line(line_no, record_types::ENTRY_TAG, "missing tag field")
                })?;
                entry.add_tag(tag);
            }
            other => {
                // scan_entry only forwards the three sub-record types
                unreachable!("unexpected sub-record type '{}'", other);
            }
        }

        Ok(())
    }
}

/// Parse an entry date, accepting the exporter format with or without seconds
fn parse_entry_date(value: &str, line_no: usize) -> Result<chrono::NaiveDateTime> {
    chrono::NaiveDateTime::parse_from_str(value, ENTRY_DATE_FORMAT).or_else(|primary_err| {
        chrono::NaiveDateTime::parse_from_str(value, ENTRY_DATE_FORMAT_SHORT)
            .map_err(|_| Error::unparseable_date(line_no, value, primary_err))
    })
}

/// Parse a numeric field as a float
fn parse_float_field(record: &RawRecord, index: usize, field: &str, line_no: usize) -> Result<f64> {
    let value = record.field(index).ok_or_else(|| {
        Error::malformed_line(
            line_no,
            record.record_type.clone(),
            format!("missing {} field", field),
        )
    })?;

    value
        .trim()
        .parse::<f64>()
        .map_err(|_| Error::unparseable_number(line_no, field, value))
}

/// Parse an integer-typed measurement field
///
/// The exporter writes these as floats; the fractional part is dropped
/// toward zero, not rounded, matching the numbers in the app's own reports.
fn parse_int_field(record: &RawRecord, index: usize, field: &str, line_no: usize) -> Result<i32> {
    Ok(parse_float_field(record, index, field, line_no)?.trunc() as i32)
}
