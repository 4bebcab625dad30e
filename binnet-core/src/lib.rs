//! binnet-core: Core records and traits for waste container networks.
//!
//! This crate provides the typed container and path records, the
//! neighbor lookup abstraction shared by the store and the clustering
//! pass, and the filter engine used by the container listing.
//!

pub mod container;
pub mod error;
pub mod filter;
pub mod numeric;
pub mod path;
pub mod waste;

pub use container::{Container, Coord};
pub use error::{Error, Result};
pub use filter::{CapacityRange, FilterCriteria, MAX_WASTE_CODES};
pub use numeric::{parse_leading_f64, parse_leading_i64};
pub use path::{Neighbor, NeighborSource, Path};
pub use waste::WasteType;
