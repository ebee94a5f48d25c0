//! Survey aggregation core: row normalization, the single-pass accumulator,
//! and the finalized metrics snapshot.

pub mod aggregate;
pub mod metrics;
pub mod normalize;

pub use aggregate::*;
pub use metrics::*;
pub use normalize::*;
