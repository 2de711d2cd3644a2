//! Bounded-deadline polling waits for [`Session`].
//!
//! A wait is a blocking poll: probe the readiness predicate, sleep the
//! configured interval, repeat until the deadline. On exhaustion the wait
//! fails with [`Error::Timeout`]; there is no retry beyond the loop and no
//! cancellation beyond the deadline.

use fantoccini::elements::Element;
use tokio::time::{Instant, sleep};
use tracing::trace;

use crate::error::{Error, Result};
use crate::session::Session;

#[derive(Debug, Clone, Copy)]
enum Readiness {
	/// Element is attached and displayed.
	Visible,
	/// Element is attached, displayed, and enabled.
	Clickable,
}

impl Readiness {
	fn describe(self, selector: &str) -> String {
		match self {
			Readiness::Visible => format!("visibility of {selector}"),
			Readiness::Clickable => format!("clickability of {selector}"),
		}
	}

	async fn probe(self, element: &Element) -> Result<bool> {
		Ok(match self {
			Readiness::Visible => element.is_displayed().await?,
			Readiness::Clickable => {
				element.is_displayed().await? && element.is_enabled().await?
			}
		})
	}
}

impl Session {
	/// Polls until the selector matches a displayed element.
	pub async fn wait_until_visible(&self, selector: &str) -> Result<Element> {
		self.wait_element(selector, Readiness::Visible).await
	}

	/// Polls until the selector matches a displayed, enabled element.
	pub async fn wait_until_clickable(&self, selector: &str) -> Result<Element> {
		self.wait_element(selector, Readiness::Clickable).await
	}

	async fn wait_element(&self, selector: &str, readiness: Readiness) -> Result<Element> {
		let timeout = self.config().wait_timeout;
		let poll = self.config().poll_interval;
		let deadline = Instant::now() + timeout;
		loop {
			if let Some(element) = self.try_find(selector).await? {
				if readiness.probe(&element).await? {
					return Ok(element);
				}
			}
			if Instant::now() >= deadline {
				return Err(Error::Timeout {
					ms: timeout.as_millis() as u64,
					condition: readiness.describe(selector),
				});
			}
			trace!(selector, "condition not met yet");
			sleep(poll).await;
		}
	}
}
