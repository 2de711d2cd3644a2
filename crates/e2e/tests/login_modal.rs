// Login modal suite against a live deployment.
//
// Needs a WebDriver remote end and network access to the target, so the
// test is gated on the environment:
//
//   chromedriver --port=9515 &
//   E2E_WEBDRIVER_URL=http://localhost:9515 cargo test -p sua-e2e --test login_modal
//
// E2E_BASE_URL, E2E_CLICK_STRATEGY, E2E_WAIT_TIMEOUT_SECS and E2E_HEADED
// tune the run; defaults target the dev deployment headlessly.

use sua::{Runner, Session, SuiteConfig};
use sua_e2e::suite;

#[tokio::test]
async fn login_modal_suite() {
	if std::env::var("E2E_WEBDRIVER_URL").is_err() {
		eprintln!("skipping login_modal_suite: E2E_WEBDRIVER_URL is not set");
		return;
	}

	let config = SuiteConfig::from_env().expect("invalid E2E_* configuration");
	let session = Session::connect(config).await.expect("suite setup failed");
	session
		.goto_base()
		.await
		.expect("target application unreachable");

	let report = Runner::new(suite::login_modal_cases())
		.before_each(suite::reset_page)
		.after_each(suite::clear_cookies)
		.run(&session)
		.await;

	if let Err(err) = session.quit().await {
		eprintln!("failed to close the browser session: {err}");
	}

	for outcome in &report.outcomes {
		match &outcome.error {
			Some(message) => eprintln!("FAIL {}: {message}", outcome.name),
			None => eprintln!("PASS {}", outcome.name),
		}
	}
	assert!(
		report.all_passed(),
		"{} of {} cases failed",
		report.failed(),
		report.outcomes.len()
	);
}
