//! `traffic-survey` library crate.
//!
//! The binary (`survey`) is a thin wrapper around this library so that:
//!
//! - the aggregation core is testable without spawning processes
//! - report formatting and histogram rendering can be reused elsewhere
//! - the interactive loop can be driven from tests with in-memory I/O

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod plot;
pub mod report;
pub mod survey;
