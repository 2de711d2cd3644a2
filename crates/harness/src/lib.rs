//! Browser-session harness for the Speak Ukrainian end-to-end suite.
//!
//! Wraps a WebDriver session ([`Session`]) with the pieces the suite needs:
//! bounded-deadline waits, explicit click strategies, text-content element
//! lookup, and a sequential case runner that isolates failures per case.
//!
//! The browser is always reached through an external WebDriver remote end
//! (chromedriver by default); nothing here talks to the page except through
//! that driver.

mod click;
mod config;
mod error;
mod query;
mod runner;
mod session;
mod wait;

pub use click::{ClickStrategy, require_clickable};
pub use config::SuiteConfig;
pub use error::{Error, Result};
pub use query::xpath_literal;
pub use runner::{BoxFut, Case, CaseFn, CaseOutcome, CaseStatus, Runner, SuiteReport};
pub use session::Session;

pub use fantoccini::elements::Element;
