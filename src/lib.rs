//! `morsel-sales` library crate.
//!
//! The binary (`morsel`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the combiner and the chart builder stay reusable behind other front-ends
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod chart;
pub mod cli;
pub mod combine;
pub mod domain;
pub mod error;
pub mod io;
pub mod plot;
pub mod report;
