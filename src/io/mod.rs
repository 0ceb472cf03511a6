//! Input/output helpers.
//!
//! - raw transaction CSV ingest (`ingest`)
//! - combined dataset read/write (`dataset`)
//! - chart-spec JSON read/write (`export`)

pub mod dataset;
pub mod export;
pub mod ingest;

pub use dataset::*;
pub use export::*;
pub use ingest::*;
