//! Paths between containers and neighbor resolution.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A direct, unordered connection between two containers.
///
/// Duplicate paths between the same pair are allowed; each one yields
/// its own neighbor entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Path {
    /// First endpoint container id.
    pub a: String,
    /// Second endpoint container id.
    pub b: String,
    /// Length of the connection.
    pub distance: f64,
}

impl Path {
    /// Creates a new path.
    #[must_use]
    pub fn new(a: impl Into<String>, b: impl Into<String>, distance: f64) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            distance,
        }
    }

    /// Returns the endpoint opposite to `id`, or `None` if `id` is not an endpoint.
    #[inline]
    #[must_use]
    pub fn other_end(&self, id: &str) -> Option<&str> {
        if self.a == id {
            Some(self.b.as_str())
        } else if self.b == id {
            Some(self.a.as_str())
        } else {
            None
        }
    }
}

/// A container directly connected to some source container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a> {
    /// Id of the connected container.
    pub id: &'a str,
    /// Length of the connecting path.
    pub distance: f64,
}

/// Trait for anything that can resolve the direct neighbors of a container.
///
/// Implementations return one entry per path touching the container, in
/// path order. An unknown id yields an empty list.
pub trait NeighborSource {
    /// Returns the direct neighbors of `container_id`.
    fn neighbors_of(&self, container_id: &str) -> Vec<Neighbor<'_>>;
}

impl NeighborSource for [Path] {
    fn neighbors_of(&self, container_id: &str) -> Vec<Neighbor<'_>> {
        self.iter()
            .filter_map(|path| {
                path.other_end(container_id).map(|id| Neighbor {
                    id,
                    distance: path.distance,
                })
            })
            .collect()
    }
}

impl NeighborSource for Vec<Path> {
    fn neighbors_of(&self, container_id: &str) -> Vec<Neighbor<'_>> {
        self.as_slice().neighbors_of(container_id)
    }
}
