//! Text-content element lookup.
//!
//! Dropdown entries on the target page carry no stable ids, so they are
//! found by partial text match. The native XPath `contains()` locator is
//! preferred; a scripted scan over candidate nodes is the fallback for
//! markup the XPath misses (text split across nested nodes).

use fantoccini::Locator;
use fantoccini::elements::Element;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::session::Session;

/// Returns the index of the first candidate whose `textContent` contains
/// the needle, or -1. Selector and needle travel as script arguments, so
/// neither needs escaping.
const TEXT_SCAN: &str = "return Array.from(document.querySelectorAll(arguments[0]))\
	.findIndex((node) => node.textContent.includes(arguments[1]));";

/// Quotes a string as an XPath literal, handling embedded quotes.
pub fn xpath_literal(value: &str) -> String {
	if !value.contains('\'') {
		format!("'{value}'")
	} else if !value.contains('"') {
		format!("\"{value}\"")
	} else {
		// Both quote kinds present: stitch the pieces with concat().
		let parts: Vec<String> = value.split('\'').map(|part| format!("'{part}'")).collect();
		format!("concat({})", parts.join(", \"'\", "))
	}
}

impl Session {
	/// Finds the first element matching an XPath expression, or `None`.
	pub async fn find_first_xpath(&self, xpath: &str) -> Result<Option<Element>> {
		match self.client().find(Locator::XPath(xpath)).await {
			Ok(element) => Ok(Some(element)),
			Err(err) if err.is_no_such_element() => Ok(None),
			Err(err) => Err(err.into()),
		}
	}

	/// Scans `candidates` for the first node whose text contains `needle`.
	pub async fn find_by_text_scan(
		&self,
		candidates: &str,
		needle: &str,
	) -> Result<Option<Element>> {
		let index = self
			.execute(TEXT_SCAN, vec![Value::from(candidates), Value::from(needle)])
			.await?;
		let Some(index) = index.as_i64().filter(|idx| *idx >= 0) else {
			return Ok(None);
		};

		let mut matches = self.find_all(candidates).await?;
		if (index as usize) < matches.len() {
			Ok(Some(matches.swap_remove(index as usize)))
		} else {
			// The page mutated between the scan and the lookup.
			Ok(None)
		}
	}

	/// Finds an element by partial text: native XPath locator first, the
	/// scripted scan as fallback.
	pub async fn find_by_partial_text(
		&self,
		candidates: &str,
		xpath: &str,
		needle: &str,
	) -> Result<Option<Element>> {
		if let Some(element) = self.find_first_xpath(xpath).await? {
			return Ok(Some(element));
		}
		debug!(needle, "xpath lookup missed, falling back to text scan");
		self.find_by_text_scan(candidates, needle).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn plain_strings_use_single_quotes() {
		assert_eq!(xpath_literal("Увійти"), "'Увійти'");
	}

	#[test]
	fn strings_with_apostrophes_use_double_quotes() {
		assert_eq!(xpath_literal("it's here"), "\"it's here\"");
	}

	#[test]
	fn strings_with_both_quote_kinds_use_concat() {
		assert_eq!(
			xpath_literal("a'b\"c"),
			"concat('a', \"'\", 'b\"c')"
		);
	}
}
