//! Reporting utilities: the fixed-template text report.

pub mod format;

pub use format::*;
