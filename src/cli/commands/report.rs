//! Report command implementation
//!
//! Parses the backup, assembles the report over the configured windows, and
//! renders it as human-readable text or JSON.

use std::path::Path;

use colored::Colorize;
use tracing::{debug, info, warn};

use super::shared::{create_parse_progress_bar, read_input, setup_logging};
use crate::app::services::backup_parser::{BackupParser, ParseResult};
use crate::app::services::statistics::{Report, ReportBuilder};
use crate::cli::args::{OutputFormat, ReportArgs};
use crate::config::ReportConfig;
use crate::{Error, Result};

/// Report command runner
pub fn run_report(args: ReportArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting Diaguard processor");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let result = parse_backup(&args)?;
    if !result.stats.errors.is_empty() {
        warn!(
            "{} records could not be parsed; run with -vv for details",
            result.stats.errors.len()
        );
        for error in &result.stats.errors {
            debug!("Parse error: {}", error);
        }
    }

    let config = args.report_config();
    let report = ReportBuilder::new(&result.record_set, config.clone()).build();

    let rendered = match args.format {
        OutputFormat::Json => render_json(&report)?,
        OutputFormat::Text => render_text(&report, &config),
    };

    write_output(args.output.as_deref(), &rendered)?;

    info!("Report complete: {} entries in window", report.entry_count);
    Ok(())
}

/// Parse the backup with a progress bar when reading from a file
fn parse_backup(args: &ReportArgs) -> Result<ParseResult> {
    let content = read_input(args.input.as_deref())?;
    let lines: Vec<&str> = content.lines().collect();

    let parser = BackupParser::new(args.parser_config());

    if args.show_progress() {
        let pb = create_parse_progress_bar(lines.len() as u64, "Reading backup");
        let result = parser.parse_lines(&lines, Some(&pb));
        match &result {
            Ok(parsed) => pb.finish_with_message(format!(
                "done: {} entries, {} foods",
                parsed.stats.entries_parsed, parsed.stats.foods_registered
            )),
            Err(_) => pb.abandon_with_message("failed".to_string()),
        }
        result
    } else {
        parser.parse_lines(&lines, None)
    }
}

/// Serialize the report value map as pretty-printed JSON
fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Render the report for terminal reading
fn render_text(report: &Report, config: &ReportConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", "Diaguard Report".bold()));
    out.push_str("===============\n\n");

    let hba1c = match report.hba1c {
        Some(value) => format!("{:.2}%", value),
        None => "N/A".dimmed().to_string(),
    };
    out.push_str(&format!(
        "HbA1c (last {} days): {}\n\n",
        config.hba1c_window_days, hba1c
    ));

    out.push_str(&format!(
        "{}\n",
        format!("Last {} days", config.stats_window_days).bold()
    ));

    let per_day = match (report.mean_entries_per_day, report.std_entries_per_day) {
        (Some(mean), Some(std)) => format!(" ({:.2}/day \u{b1} {:.2})", mean, std),
        (Some(mean), None) => format!(" ({:.2}/day)", mean),
        _ => String::new(),
    };
    out.push_str(&format!(
        "  Entries: {}{}\n",
        report.entry_count, per_day
    ));

    match (
        report.mean_fast_insulin_per_day,
        report.std_fast_insulin_per_day,
    ) {
        (Some(mean), Some(std)) => out.push_str(&format!(
            "  Fast insulin/day: {:.2} \u{b1} {:.2}\n",
            mean, std
        )),
        (Some(mean), None) => out.push_str(&format!("  Fast insulin/day: {:.2}\n", mean)),
        _ => {}
    }

    let counts = report.range_counts();
    match counts.percentages() {
        Some((below, in_range, above)) => out.push_str(&format!(
            "  Time in range [{}, {}): {:.1}% in, {:.1}% below, {:.1}% above ({} readings)\n",
            config.range_lower,
            config.range_upper,
            in_range,
            below,
            above,
            counts.total()
        )),
        None => out.push_str(&format!(
            "  Time in range: {}\n",
            "no glucose readings".dimmed()
        )),
    }

    out.push('\n');
    out.push_str(&format!("{}\n", "Glucose by hour".bold()));
    for hourly in &report.glucose_by_hour {
        out.push_str(&format!(
            "  {:02}  {:6.1} \u{b1} {:5.1}\n",
            hourly.hour, hourly.mean, hourly.std_dev
        ));
    }

    out.push('\n');
    out.push_str(&format!(
        "{}\n",
        format!("Recent entries (last {} days)", config.listing_window_days).bold()
    ));

    if report.entries.is_empty() {
        out.push_str(&format!("  {}\n", "no entries".dimmed()));
        return out;
    }

    out.push_str(&format!(
        "  {:<15} {:>5} {:>6} {:>5} {:>6} {:>6}  {}\n",
        "Date", "Gluc", "Bolus", "Corr", "Basal", "Carbs", "Meal"
    ));
    for row in &report.entries {
        out.push_str(&format!(
            "  {:<15} {:>5} {:>6} {:>5} {:>6} {:>6}  {}\n",
            row.timestamp,
            row.glucose.map(|g| g.to_string()).unwrap_or_default(),
            format_count(row.bolus),
            format_count(row.correction),
            format_count(row.basal),
            format_grams(row.carbs),
            row.meal
        ));
    }

    out
}

/// Zero counts are displayed blank so the table reads at a glance
fn format_count(value: i32) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}

fn format_grams(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        format!("{:.1}", value)
    }
}

/// Write the rendered report to a file, or stdout when no path is given
fn write_output(output: Option<&Path>, rendered: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|e| {
                Error::io(format!("failed to write report to {}", path.display()), e)
            })?;
            info!("Report written to {}", path.display());
            Ok(())
        }
        None => {
            println!("{}", rendered);
            Ok(())
        }
    }
}
