//! Suite configuration resolved from `E2E_*` environment variables.
//!
//! Every knob has a default matching the dev deployment, so a bare
//! `cargo run` against a local chromedriver needs no environment at all.

use std::time::Duration;

use url::Url;

use crate::click::ClickStrategy;
use crate::error::{Error, Result};

/// Default target: the dev deployment of the club portal.
pub const DEFAULT_BASE_URL: &str = "http://speak-ukrainian.eastus2.cloudapp.azure.com/dev/";

/// Default WebDriver remote end: chromedriver on its stock port.
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";

const DEFAULT_WAIT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Everything the suite needs to reach and drive the target application.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
	/// Target application entry point.
	pub base_url: Url,
	/// WebDriver remote end the browser is driven through.
	pub webdriver_url: Url,
	/// Deadline for visibility/clickability waits.
	pub wait_timeout: Duration,
	/// Pause between readiness probes within a wait.
	pub poll_interval: Duration,
	/// How click events reach the page.
	pub click: ClickStrategy,
	/// Run the browser without a visible window.
	pub headless: bool,
}

impl SuiteConfig {
	/// Resolves the configuration from the process environment.
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Resolves the configuration from an arbitrary variable lookup.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
		let base_url = parse_url("E2E_BASE_URL", lookup("E2E_BASE_URL"), DEFAULT_BASE_URL)?;
		let webdriver_url =
			parse_url("E2E_WEBDRIVER_URL", lookup("E2E_WEBDRIVER_URL"), DEFAULT_WEBDRIVER_URL)?;

		let wait_timeout = match lookup("E2E_WAIT_TIMEOUT_SECS") {
			Some(raw) => Duration::from_secs(parse_number("E2E_WAIT_TIMEOUT_SECS", &raw)?),
			None => DEFAULT_WAIT_TIMEOUT,
		};
		let poll_interval = match lookup("E2E_POLL_INTERVAL_MS") {
			Some(raw) => Duration::from_millis(parse_number("E2E_POLL_INTERVAL_MS", &raw)?),
			None => DEFAULT_POLL_INTERVAL,
		};

		let click = match lookup("E2E_CLICK_STRATEGY") {
			Some(raw) => raw.parse()?,
			None => ClickStrategy::default(),
		};
		let headless = !matches!(
			lookup("E2E_HEADED").as_deref(),
			Some("1") | Some("true") | Some("yes")
		);

		Ok(Self {
			base_url,
			webdriver_url,
			wait_timeout,
			poll_interval,
			click,
			headless,
		})
	}
}

fn parse_url(key: &str, value: Option<String>, default: &str) -> Result<Url> {
	let raw = value.unwrap_or_else(|| default.to_string());
	Url::parse(&raw).map_err(|err| Error::Config(format!("{key}: {raw:?} is not a URL: {err}")))
}

fn parse_number(key: &str, raw: &str) -> Result<u64> {
	raw.parse()
		.map_err(|err| Error::Config(format!("{key}: {raw:?} is not a number: {err}")))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn none(_key: &str) -> Option<String> {
		None
	}

	#[test]
	fn defaults_apply_when_environment_is_empty() {
		let config = SuiteConfig::from_lookup(none).unwrap();
		assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
		assert_eq!(config.webdriver_url.as_str(), "http://localhost:9515/");
		assert_eq!(config.wait_timeout, Duration::from_secs(10));
		assert_eq!(config.poll_interval, Duration::from_millis(250));
		assert_eq!(config.click, ClickStrategy::Synthetic);
		assert!(config.headless);
	}

	#[test]
	fn variables_override_defaults() {
		let config = SuiteConfig::from_lookup(|key| match key {
			"E2E_BASE_URL" => Some("http://localhost:3000/".to_string()),
			"E2E_WAIT_TIMEOUT_SECS" => Some("3".to_string()),
			"E2E_CLICK_STRATEGY" => Some("native".to_string()),
			"E2E_HEADED" => Some("1".to_string()),
			_ => None,
		})
		.unwrap();
		assert_eq!(config.base_url.as_str(), "http://localhost:3000/");
		assert_eq!(config.wait_timeout, Duration::from_secs(3));
		assert_eq!(config.click, ClickStrategy::Native);
		assert!(!config.headless);
	}

	#[test]
	fn malformed_url_is_a_config_error() {
		let err = SuiteConfig::from_lookup(|key| {
			(key == "E2E_BASE_URL").then(|| "not a url".to_string())
		})
		.unwrap_err();
		assert!(matches!(err, Error::Config(_)), "got: {err}");
	}

	#[test]
	fn malformed_timeout_is_a_config_error() {
		let err = SuiteConfig::from_lookup(|key| {
			(key == "E2E_WAIT_TIMEOUT_SECS").then(|| "soon".to_string())
		})
		.unwrap_err();
		assert!(matches!(err, Error::Config(_)), "got: {err}");
	}
}
