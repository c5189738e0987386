mod cli;
mod report;

use std::process::ExitCode;

use clap::Parser;

use cli::Args;
use report::format_results;

fn main() -> ExitCode {
    let args = Args::parse();
    bigfiles_common::init_logging(args.verbose);

    let config = args.to_config();
    match bigfiles_scanner::find_biggest_files(&config) {
        Ok(report) => {
            if report.skipped_count > 0 {
                log::warn!(
                    "[bigfiles] skipped {} unreadable entries under {}",
                    report.skipped_count,
                    config.root.display()
                );
            }
            if report.is_empty() {
                log::info!(
                    "[bigfiles] nothing matched {:?} under {}",
                    config.pattern,
                    config.root.display()
                );
            }
            for line in format_results(&report) {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("bigfiles: {}", e);
            ExitCode::FAILURE
        }
    }
}
