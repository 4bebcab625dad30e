//! binnet-io: Dataset loading and report output for binnet.
//!
//! This crate reads the delimited container and path files into typed
//! records, owns them as a [`Dataset`], and renders listings as text.
//!

mod dataset;
mod error;
pub mod records;
pub mod table;
mod writer;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use table::{LoadOptions, Table};
pub use writer::ReportWriter;
