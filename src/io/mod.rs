//! Input/output helpers.
//!
//! - survey CSV ingest + header validation (`ingest`)
//! - append-only results file (`results`)

pub mod ingest;
pub mod results;

pub use ingest::*;
pub use results::*;
