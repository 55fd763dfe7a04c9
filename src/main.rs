use clap::Parser;
use diaguard_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Diaguard Processor - Diabetes Diary Report Generator");
    println!("====================================================");
    println!();
    println!("Parse Diaguard diabetes diary backups and compute clinical statistics:");
    println!("estimated HbA1c, time in range, daily insulin use, and glucose-by-hour.");
    println!();
    println!("USAGE:");
    println!("    diaguard-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    report      Compute and render a statistics report (main command)");
    println!("    foods       List the food catalog defined in a backup");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Text report from a backup file:");
    println!("    diaguard-processor report --input diaguard.csv");
    println!();
    println!("    # JSON report from stdin, written to a file:");
    println!("    diaguard-processor report --format json --output report.json < diaguard.csv");
    println!();
    println!("    # Custom target range and statistics window:");
    println!("    diaguard-processor report -i diaguard.csv --range-lower 80 \\");
    println!("                              --range-upper 160 --stats-window 30");
    println!();
    println!("    # List foods defined in a backup:");
    println!("    diaguard-processor foods --input diaguard.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    diaguard-processor <COMMAND> --help");
}
