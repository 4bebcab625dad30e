//! binnet-algorithms: Station clustering and report assembly.
//!
//! - **Stations** - containers sharing a location merged into one node,
//!   with adjacency derived from the path table
//! - **Reports** - the filtered container listing and the station listing
//!
#![warn(missing_docs)]

mod report;
pub mod station;

pub use report::{filtered_listing, station_listing, ContainerEntry, StationEntry};
pub use station::{
    Station, StationClustering, StationConfig, StationGraph, StationId, StationLookup,
    DEFAULT_TOLERANCE_SCALE,
};
