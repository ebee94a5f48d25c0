//! Terminal rendering of the per-junction hourly table.

pub mod histogram;

pub use histogram::*;
