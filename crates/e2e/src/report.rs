//! Report rendering for the suite binary.

use clap::ValueEnum;
use colored::Colorize;
use sua::SuiteReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable pass/fail lines.
	Text,
	/// The report as a JSON document on stdout.
	Json,
}

pub fn render(report: &SuiteReport, format: OutputFormat) {
	match format {
		OutputFormat::Text => render_text(report),
		OutputFormat::Json => match serde_json::to_string_pretty(report) {
			Ok(document) => println!("{document}"),
			Err(err) => eprintln!("failed to serialize report: {err}"),
		},
	}
}

fn render_text(report: &SuiteReport) {
	for outcome in &report.outcomes {
		let tag = if outcome.passed() {
			"PASS".green().bold()
		} else {
			"FAIL".red().bold()
		};
		match &outcome.error {
			Some(message) => {
				println!("{tag} {} ({}ms): {message}", outcome.name, outcome.elapsed_ms);
			}
			None => println!("{tag} {} ({}ms)", outcome.name, outcome.elapsed_ms),
		}
	}

	let summary = format!("{} passed, {} failed", report.passed(), report.failed());
	if report.all_passed() {
		println!("{}", summary.green().bold());
	} else {
		println!("{}", summary.red().bold());
	}
}
