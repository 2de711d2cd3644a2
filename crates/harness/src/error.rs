// Error types for the e2e harness

use thiserror::Error;

/// Result type alias for harness operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the browser session.
#[derive(Debug, Error)]
pub enum Error {
	/// Suite-level setup failed. Fatal to the whole run, no retry.
	#[error("suite setup failed: {0}")]
	Setup(String),

	/// A configuration value could not be parsed.
	#[error("configuration error: {0}")]
	Config(String),

	#[error("navigation failed: {url}")]
	Navigation {
		url: String,
		#[source]
		source: fantoccini::error::CmdError,
	},

	/// No element matched the selector.
	#[error("element not found: {selector}")]
	ElementNotFound { selector: String },

	/// The click target is missing, hidden, or disabled.
	///
	/// Raised synchronously before any click event is dispatched; the
	/// dispatch is never attempted.
	#[error("element is not clickable: {target}")]
	NotClickable { target: String },

	/// A bounded wait exhausted its deadline.
	#[error("timeout after {ms}ms waiting for: {condition}")]
	Timeout { ms: u64, condition: String },

	#[error("javascript evaluation failed: {0}")]
	JsEval(String),

	#[error(transparent)]
	WebDriver(#[from] fantoccini::error::CmdError),

	#[error(transparent)]
	NewSession(#[from] fantoccini::error::NewSessionError),

	#[error(transparent)]
	Json(#[from] serde_json::Error),
}

impl Error {
	/// Returns true if this is a bounded-wait timeout.
	pub fn is_timeout(&self) -> bool {
		matches!(self, Error::Timeout { .. })
	}
}
