//! Container records and planar coordinates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::WasteType;

/// Planar coordinate of a container.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    /// X coordinate (latitude in the source data).
    pub x: f64,
    /// Y coordinate (longitude in the source data).
    pub y: f64,
}

impl Coord {
    /// Creates a new coordinate.
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Computes the planar Euclidean distance to another coordinate.
    #[inline]
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Checks whether two coordinates denote the same place.
    ///
    /// The distance is multiplied by `scale` and rounded to the nearest
    /// integer; the coordinates coincide when that rounds to zero.
    #[inline]
    #[must_use]
    pub fn coincides(&self, other: &Self, scale: f64) -> bool {
        // Rounds to zero exactly when the scaled distance is below one half.
        self.distance(other) * scale < 0.5
    }
}

/// A single waste container, decoded once from a dataset row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Container {
    /// Unique identifier.
    pub id: String,
    /// Location of the container.
    pub coord: Coord,
    /// Waste category collected.
    pub waste_type: WasteType,
    /// Parsed capacity; filters compare its truncated integer value.
    pub capacity: f64,
    /// Capacity exactly as written in the dataset.
    pub capacity_text: String,
    /// Optional display name.
    pub name: Option<String>,
    /// Optional street name.
    pub street: Option<String>,
    /// Optional house number.
    pub number: Option<String>,
    /// Whether the container is publicly accessible.
    pub is_public: bool,
}

impl Container {
    /// Creates a container with no name or address.
    #[must_use]
    pub fn new(id: impl Into<String>, x: f64, y: f64, waste_type: WasteType, capacity: f64) -> Self {
        Self {
            id: id.into(),
            coord: Coord::new(x, y),
            waste_type,
            capacity,
            capacity_text: capacity.to_string(),
            name: None,
            street: None,
            number: None,
            is_public: false,
        }
    }

    /// Sets the capacity text shown in listings, keeping the parsed value.
    #[must_use]
    pub fn with_capacity_text(mut self, text: impl Into<String>) -> Self {
        self.capacity_text = text.into();
        self
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the street and house number.
    #[must_use]
    pub fn with_address(mut self, street: impl Into<String>, number: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self.number = Some(number.into());
        self
    }

    /// Sets the public access flag.
    #[must_use]
    pub fn with_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// Capacity truncated toward zero, as used by capacity filters.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn capacity_truncated(&self) -> i64 {
        // Saturating float-to-int cast; NaN becomes 0.
        self.capacity.trunc() as i64
    }

    /// Street name, or an empty string when absent.
    #[must_use]
    pub fn street_or_empty(&self) -> &str {
        self.street.as_deref().unwrap_or("")
    }

    /// Multi-line human readable description of every field.
    #[must_use]
    pub fn describe(&self) -> String {
        const MISSING: &str = "Not available";

        format!(
            "ID: {}\nX: {:.2}\nY: {:.2}\nWaste Type: {}\nCapacity: {:.2}\n\
             Name: {}\nStreet: {}\nNumber: {}\nIs Public: {}\n",
            self.id,
            self.coord.x,
            self.coord.y,
            self.waste_type,
            self.capacity,
            self.name.as_deref().unwrap_or(MISSING),
            self.street.as_deref().unwrap_or(MISSING),
            self.number.as_deref().unwrap_or(MISSING),
            if self.is_public { "Yes" } else { "No" },
        )
    }
}
