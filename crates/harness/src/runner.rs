//! Sequential case runner with per-case lifecycle hooks.
//!
//! Cases run strictly in declared order, one at a time, against a shared
//! context (the browser [`Session`](crate::Session) in production, anything
//! in tests). A failed hook or case marks that case failed and never stops
//! the cases after it; each case is a two-state machine, not-run to
//! passed-or-failed, with no retries and no cross-case state.

use std::future::Future;
use std::pin::Pin;
use std::time::Instant;

use serde::Serialize;
use tracing::{error, info};

/// Boxed future returned by cases and hooks.
pub type BoxFut<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A case or hook body: borrows the shared context for one run.
///
/// Assertions inside a body report failure by returning an error
/// (`anyhow::ensure!` reads well for this); panics are not part of the
/// contract.
pub type CaseFn<C> = for<'a> fn(&'a C) -> BoxFut<'a, anyhow::Result<()>>;

/// One named test case.
pub struct Case<C> {
	pub name: &'static str,
	pub run: CaseFn<C>,
}

impl<C> Case<C> {
	pub fn new(name: &'static str, run: CaseFn<C>) -> Self {
		Self { name, run }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
	Passed,
	Failed,
}

/// Outcome of one executed case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
	pub name: &'static str,
	pub status: CaseStatus,
	/// Failure message with its cause chain, when failed.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	pub elapsed_ms: u64,
}

impl CaseOutcome {
	pub fn passed(&self) -> bool {
		self.status == CaseStatus::Passed
	}
}

/// Ordered outcomes of one runner pass.
#[derive(Debug, Serialize)]
pub struct SuiteReport {
	pub outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
	pub fn passed(&self) -> usize {
		self.outcomes.iter().filter(|outcome| outcome.passed()).count()
	}

	pub fn failed(&self) -> usize {
		self.outcomes.len() - self.passed()
	}

	pub fn all_passed(&self) -> bool {
		self.failed() == 0
	}
}

/// Executes cases sequentially, isolating failures per case.
pub struct Runner<C> {
	cases: Vec<Case<C>>,
	before_each: Option<CaseFn<C>>,
	after_each: Option<CaseFn<C>>,
}

impl<C> Runner<C> {
	pub fn new(cases: Vec<Case<C>>) -> Self {
		Self {
			cases,
			before_each: None,
			after_each: None,
		}
	}

	/// Hook run before every case; a failure fails that case.
	pub fn before_each(mut self, hook: CaseFn<C>) -> Self {
		self.before_each = Some(hook);
		self
	}

	/// Hook run after every case, including failed ones.
	pub fn after_each(mut self, hook: CaseFn<C>) -> Self {
		self.after_each = Some(hook);
		self
	}

	pub async fn run(&self, cx: &C) -> SuiteReport {
		let mut outcomes = Vec::with_capacity(self.cases.len());
		for case in &self.cases {
			outcomes.push(self.run_case(case, cx).await);
		}
		SuiteReport { outcomes }
	}

	async fn run_case(&self, case: &Case<C>, cx: &C) -> CaseOutcome {
		info!(case = case.name, "case started");
		let started = Instant::now();

		let mut result = match self.before_each {
			Some(hook) => hook(cx).await,
			None => Ok(()),
		};
		if result.is_ok() {
			result = (case.run)(cx).await;
		}
		if let Some(hook) = self.after_each {
			let cleanup = hook(cx).await;
			if result.is_ok() {
				result = cleanup;
			} else if let Err(err) = cleanup {
				let message = format!("{err:#}");
				error!(case = case.name, error = %message, "cleanup failed after case failure");
			}
		}

		let elapsed_ms = started.elapsed().as_millis() as u64;
		match result {
			Ok(()) => {
				info!(case = case.name, elapsed_ms, "case passed");
				CaseOutcome {
					name: case.name,
					status: CaseStatus::Passed,
					error: None,
					elapsed_ms,
				}
			}
			Err(err) => {
				let message = format!("{err:#}");
				error!(case = case.name, elapsed_ms, error = %message, "case failed");
				CaseOutcome {
					name: case.name,
					status: CaseStatus::Failed,
					error: Some(message),
					elapsed_ms,
				}
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;
	use std::sync::atomic::{AtomicUsize, Ordering};

	use super::*;

	#[derive(Default)]
	struct Trace {
		log: Mutex<Vec<&'static str>>,
		setups: AtomicUsize,
	}

	impl Trace {
		fn record(&self, entry: &'static str) {
			self.log.lock().unwrap().push(entry);
		}
	}

	fn passing(cx: &Trace) -> BoxFut<'_, anyhow::Result<()>> {
		Box::pin(async move {
			cx.record("case");
			Ok(())
		})
	}

	fn failing(cx: &Trace) -> BoxFut<'_, anyhow::Result<()>> {
		Box::pin(async move {
			cx.record("failing case");
			anyhow::bail!("expected 2, got 3");
		})
	}

	fn setup(cx: &Trace) -> BoxFut<'_, anyhow::Result<()>> {
		Box::pin(async move {
			cx.record("setup");
			Ok(())
		})
	}

	fn flaky_setup(cx: &Trace) -> BoxFut<'_, anyhow::Result<()>> {
		Box::pin(async move {
			if cx.setups.fetch_add(1, Ordering::SeqCst) == 0 {
				anyhow::bail!("navigation refused");
			}
			cx.record("setup");
			Ok(())
		})
	}

	fn teardown(cx: &Trace) -> BoxFut<'_, anyhow::Result<()>> {
		Box::pin(async move {
			cx.record("teardown");
			Ok(())
		})
	}

	#[tokio::test]
	async fn a_failing_case_does_not_stop_later_cases() {
		let trace = Trace::default();
		let report = Runner::new(vec![
			Case::new("first", passing),
			Case::new("second", failing),
			Case::new("third", passing),
		])
		.run(&trace)
		.await;

		let statuses: Vec<_> = report.outcomes.iter().map(|o| o.status).collect();
		assert_eq!(
			statuses,
			vec![CaseStatus::Passed, CaseStatus::Failed, CaseStatus::Passed]
		);
		assert_eq!(report.passed(), 2);
		assert_eq!(report.failed(), 1);
		assert!(!report.all_passed());
	}

	#[tokio::test]
	async fn report_preserves_declaration_order() {
		let trace = Trace::default();
		let report = Runner::new(vec![
			Case::new("first", passing),
			Case::new("second", passing),
		])
		.run(&trace)
		.await;

		let names: Vec<_> = report.outcomes.iter().map(|o| o.name).collect();
		assert_eq!(names, vec!["first", "second"]);
	}

	#[tokio::test]
	async fn hooks_wrap_every_case_and_teardown_runs_after_failure() {
		let trace = Trace::default();
		Runner::new(vec![
			Case::new("first", passing),
			Case::new("second", failing),
		])
		.before_each(setup)
		.after_each(teardown)
		.run(&trace)
		.await;

		assert_eq!(
			*trace.log.lock().unwrap(),
			vec!["setup", "case", "teardown", "setup", "failing case", "teardown"]
		);
	}

	#[tokio::test]
	async fn a_failing_setup_fails_only_its_own_case() {
		let trace = Trace::default();
		let report = Runner::new(vec![
			Case::new("first", passing),
			Case::new("second", passing),
		])
		.before_each(flaky_setup)
		.run(&trace)
		.await;

		assert_eq!(report.outcomes[0].status, CaseStatus::Failed);
		assert_eq!(report.outcomes[1].status, CaseStatus::Passed);
		// The first case body never ran; the second did.
		assert_eq!(*trace.log.lock().unwrap(), vec!["setup", "case"]);
	}

	#[tokio::test]
	async fn failure_messages_carry_the_assertion_text() {
		let trace = Trace::default();
		let report = Runner::new(vec![Case::new("only", failing)]).run(&trace).await;

		let message = report.outcomes[0].error.as_deref().unwrap();
		assert!(message.contains("expected 2, got 3"), "got: {message}");
	}
}
