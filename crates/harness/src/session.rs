//! WebDriver session lifecycle and element lookup.

use fantoccini::elements::Element;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::SuiteConfig;
use crate::error::{Error, Result};

/// One browser instance under automated control for the suite's lifetime.
///
/// Owns the connection to the WebDriver remote end. Page state is reset
/// between cases by re-navigating and clearing cookies; the session itself
/// is never recreated mid-run.
pub struct Session {
	client: Client,
	config: SuiteConfig,
}

impl Session {
	/// Connects to the WebDriver endpoint and starts a fresh browser.
	pub async fn connect(config: SuiteConfig) -> Result<Self> {
		let mut chrome_args = vec!["--disable-gpu", "--window-size=1920,1080"];
		if config.headless {
			chrome_args.push("--headless=new");
		}
		let mut caps = serde_json::Map::new();
		caps.insert("browserName".to_string(), Value::from("chrome"));
		caps.insert(
			"goog:chromeOptions".to_string(),
			serde_json::json!({ "args": chrome_args }),
		);

		let client = ClientBuilder::rustls()
			.map_err(|err| Error::Setup(format!("tls initialization failed: {err}")))?
			.capabilities(caps)
			.connect(config.webdriver_url.as_str())
			.await?;
		info!(webdriver = %config.webdriver_url, headless = config.headless, "session started");
		Ok(Self { client, config })
	}

	pub fn config(&self) -> &SuiteConfig {
		&self.config
	}

	pub(crate) fn client(&self) -> &Client {
		&self.client
	}

	/// Navigates to an absolute URL.
	pub async fn goto(&self, url: &str) -> Result<()> {
		debug!(url, "navigate");
		self.client.goto(url).await.map_err(|source| Error::Navigation {
			url: url.to_string(),
			source,
		})
	}

	/// Re-navigates to the configured base URL, resetting page state.
	pub async fn goto_base(&self) -> Result<()> {
		let base = self.config.base_url.clone();
		self.goto(base.as_str()).await
	}

	/// Drops every cookie the browser currently holds, so the next case
	/// starts unauthenticated.
	pub async fn clear_cookies(&self) -> Result<()> {
		self.client.delete_all_cookies().await?;
		Ok(())
	}

	/// Ends the WebDriver session and closes the browser.
	pub async fn quit(self) -> Result<()> {
		info!("closing session");
		self.client.close().await?;
		Ok(())
	}

	/// Locates the first element matching a CSS selector, or `None`.
	pub async fn try_find(&self, selector: &str) -> Result<Option<Element>> {
		match self.client.find(Locator::Css(selector)).await {
			Ok(element) => Ok(Some(element)),
			Err(err) if err.is_no_such_element() => Ok(None),
			Err(err) => Err(err.into()),
		}
	}

	/// Locates the first element matching a CSS selector; missing elements
	/// are an error.
	pub async fn find(&self, selector: &str) -> Result<Element> {
		self.try_find(selector).await?.ok_or_else(|| Error::ElementNotFound {
			selector: selector.to_string(),
		})
	}

	/// Locates every element matching a CSS selector.
	pub async fn find_all(&self, selector: &str) -> Result<Vec<Element>> {
		Ok(self.client.find_all(Locator::Css(selector)).await?)
	}

	/// Runs a script in the page and returns its JSON result.
	pub async fn execute(&self, script: &str, args: Vec<Value>) -> Result<Value> {
		self.client
			.execute(script, args)
			.await
			.map_err(|err| Error::JsEval(err.to_string()))
	}
}
