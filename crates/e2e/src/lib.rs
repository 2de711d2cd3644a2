//! End-to-end coverage of the Speak Ukrainian login modal.
//!
//! The page model and the ordered case list live here so the binary and
//! the integration test drive the exact same suite.

pub mod logging;
pub mod pages;
pub mod report;
pub mod suite;
