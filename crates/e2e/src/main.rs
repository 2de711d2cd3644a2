use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use sua::{Runner, Session, SuiteConfig};
use sua_e2e::report::OutputFormat;
use sua_e2e::{logging, report, suite};

/// Runs the login-modal suite against a live deployment.
#[derive(Parser)]
#[command(name = "sua-e2e", version)]
struct Cli {
	/// Target application base URL.
	#[arg(long, value_name = "URL")]
	base_url: Option<String>,

	/// WebDriver endpoint (a running chromedriver).
	#[arg(long, value_name = "URL")]
	webdriver_url: Option<String>,

	/// Wait timeout in seconds for visibility/clickability polls.
	#[arg(long, value_name = "SECS")]
	timeout: Option<u64>,

	/// Click strategy: "synthetic" (script dispatch) or "native" (pointer).
	#[arg(long, value_name = "STRATEGY")]
	click: Option<String>,

	/// Run with a visible browser window.
	#[arg(long)]
	headed: bool,

	/// Report output format.
	#[arg(long, value_enum, default_value = "text")]
	format: OutputFormat,

	/// Increase log verbosity (-v, -vv).
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

#[tokio::main]
async fn main() {
	let cli = Cli::parse();
	logging::init_logging(cli.verbose);

	match run(cli).await {
		Ok(true) => {}
		Ok(false) => std::process::exit(1),
		Err(err) => {
			eprintln!("{} {err:#}", "suite setup failed:".red().bold());
			std::process::exit(2);
		}
	}
}

async fn run(cli: Cli) -> anyhow::Result<bool> {
	let config = resolve_config(&cli)?;
	let format = cli.format;

	// Suite setup: a session that cannot start, or a base URL that cannot
	// be reached, is fatal to the whole run. No retry.
	let session = Session::connect(config).await?;
	if let Err(err) = session.goto_base().await {
		let _ = session.quit().await;
		return Err(err.into());
	}

	let summary = Runner::new(suite::login_modal_cases())
		.before_each(suite::reset_page)
		.after_each(suite::clear_cookies)
		.run(&session)
		.await;

	// Teardown failures are logged, never propagated.
	if let Err(err) = session.quit().await {
		tracing::warn!(error = %err, "failed to close the browser session");
	}

	report::render(&summary, format);
	Ok(summary.all_passed())
}

fn resolve_config(cli: &Cli) -> anyhow::Result<SuiteConfig> {
	let mut config = SuiteConfig::from_env()?;
	if let Some(base) = &cli.base_url {
		config.base_url = base.parse().with_context(|| format!("--base-url {base:?}"))?;
	}
	if let Some(webdriver) = &cli.webdriver_url {
		config.webdriver_url = webdriver
			.parse()
			.with_context(|| format!("--webdriver-url {webdriver:?}"))?;
	}
	if let Some(secs) = cli.timeout {
		config.wait_timeout = Duration::from_secs(secs);
	}
	if let Some(strategy) = &cli.click {
		config.click = strategy.parse()?;
	}
	if cli.headed {
		config.headless = false;
	}
	Ok(config)
}
