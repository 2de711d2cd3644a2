//! Click strategies and scroll helpers.

use std::fmt;
use std::str::FromStr;

use fantoccini::elements::Element;
use tracing::debug;

use crate::error::{Error, Result};
use crate::session::Session;

/// How click events reach the page.
///
/// Synthetic dispatch injects a `MouseEvent` via script and therefore
/// bypasses the occlusion and visibility checks a native pointer click
/// enforces. The strategy is a per-run configuration choice, never an
/// implicit default buried in a helper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickStrategy {
	/// Script-dispatched `MouseEvent` (bubbling, cancelable).
	#[default]
	Synthetic,
	/// WebDriver element click, with the driver's actionability checks.
	Native,
}

impl FromStr for ClickStrategy {
	type Err = Error;

	fn from_str(value: &str) -> Result<Self> {
		match value.to_ascii_lowercase().as_str() {
			"synthetic" => Ok(ClickStrategy::Synthetic),
			"native" => Ok(ClickStrategy::Native),
			other => Err(Error::Config(format!(
				"unknown click strategy {other:?} (expected \"synthetic\" or \"native\")"
			))),
		}
	}
}

impl fmt::Display for ClickStrategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ClickStrategy::Synthetic => f.write_str("synthetic"),
			ClickStrategy::Native => f.write_str("native"),
		}
	}
}

const SYNTHETIC_CLICK: &str = "arguments[0].dispatchEvent(new MouseEvent('click', \
	{bubbles: true, cancelable: true, view: window}));";

const SCROLL_INTO_VIEW: &str = "arguments[0].scrollIntoView(true);";

/// Resolves an optional lookup result, treating a missing element as
/// unclickable.
pub fn require_clickable(target: &str, element: Option<Element>) -> Result<Element> {
	element.ok_or_else(|| Error::NotClickable {
		target: target.to_string(),
	})
}

/// Hidden or disabled targets must fail before any event is dispatched.
fn clickable_or_err(target: &str, displayed: bool, enabled: bool) -> Result<()> {
	if displayed && enabled {
		Ok(())
	} else {
		Err(Error::NotClickable {
			target: target.to_string(),
		})
	}
}

impl Session {
	/// Scrolls the element into view.
	pub async fn scroll_into_view(&self, element: &Element) -> Result<()> {
		self.execute(SCROLL_INTO_VIEW, vec![serde_json::to_value(element)?])
			.await?;
		Ok(())
	}

	/// Clicks an element using the configured strategy.
	///
	/// `target` names the element in logs and errors. A hidden or disabled
	/// element fails with [`Error::NotClickable`] and no click is dispatched.
	pub async fn click(&self, element: &Element, target: &str) -> Result<()> {
		let displayed = element.is_displayed().await?;
		let enabled = element.is_enabled().await?;
		clickable_or_err(target, displayed, enabled)?;

		debug!(element = target, strategy = %self.config().click, "click");
		match self.config().click {
			ClickStrategy::Synthetic => {
				self.execute(SYNTHETIC_CLICK, vec![serde_json::to_value(element)?])
					.await?;
			}
			ClickStrategy::Native => {
				element.clone().click().await?;
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strategy_parses_case_insensitively() {
		assert_eq!("synthetic".parse::<ClickStrategy>().unwrap(), ClickStrategy::Synthetic);
		assert_eq!("Native".parse::<ClickStrategy>().unwrap(), ClickStrategy::Native);
	}

	#[test]
	fn unknown_strategy_is_a_config_error() {
		let err = "double".parse::<ClickStrategy>().unwrap_err();
		assert!(matches!(err, Error::Config(_)), "got: {err}");
	}

	#[test]
	fn hidden_or_disabled_targets_are_not_clickable() {
		assert!(clickable_or_err("icon", true, true).is_ok());
		for (displayed, enabled) in [(false, true), (true, false), (false, false)] {
			let err = clickable_or_err("icon", displayed, enabled).unwrap_err();
			assert!(matches!(err, Error::NotClickable { .. }), "got: {err}");
		}
	}

	#[test]
	fn missing_element_is_not_clickable() {
		let err = require_clickable("menu entry", None).unwrap_err();
		assert!(matches!(err, Error::NotClickable { .. }), "got: {err}");
	}
}
