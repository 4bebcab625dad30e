//! Station clustering.
//!
//! Containers are visited in input order. A container whose coordinates
//! coincide with an existing station's representative point joins that
//! station; otherwise it founds a new one. Every path touching the
//! container then links its station to the station of the neighbor.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use binnet_core::{Container, Coord, NeighborSource, WasteType};

/// Scale applied to the distance before rounding in the coincidence test.
///
/// Two points are the same place when `round(distance * 1e14) == 0`.
pub const DEFAULT_TOLERANCE_SCALE: f64 = 1e14;

/// Identifier of a station, starting at 1 in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StationId(pub usize);

impl StationId {
    fn from_index(index: usize) -> Self {
        Self(index + 1)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a neighbor container id is mapped to its station.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StationLookup {
    /// Only a station's founding container identifies it. Links to
    /// containers that merged into a station later are not seen.
    #[default]
    Founding,
    /// Any member container identifies its station.
    AnyMember,
}

/// Configuration for station clustering.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StationConfig {
    /// Scale for the coincidence test, see [`DEFAULT_TOLERANCE_SCALE`].
    pub tolerance_scale: f64,
    /// Neighbor-to-station lookup mode.
    pub lookup: StationLookup,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            tolerance_scale: DEFAULT_TOLERANCE_SCALE,
            lookup: StationLookup::Founding,
        }
    }
}

impl StationConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tolerance scale.
    #[must_use]
    pub fn with_tolerance_scale(mut self, scale: f64) -> Self {
        self.tolerance_scale = scale;
        self
    }

    /// Sets the lookup mode.
    #[must_use]
    pub fn with_lookup(mut self, lookup: StationLookup) -> Self {
        self.lookup = lookup;
        self
    }
}

/// One or more containers at the same location.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Station {
    id: StationId,
    location: Coord,
    members: Vec<String>,
    waste_types: Vec<WasteType>,
    neighbors: BTreeSet<StationId>,
}

impl Station {
    fn found(id: StationId, container: &Container) -> Self {
        Self {
            id,
            location: container.coord,
            members: vec![container.id.clone()],
            waste_types: vec![container.waste_type.clone()],
            neighbors: BTreeSet::new(),
        }
    }

    fn absorb(&mut self, container: &Container) {
        self.members.push(container.id.clone());
        let code = container.waste_type.code();
        if !self.waste_types.iter().any(|known| known.code() == code) {
            self.waste_types.push(container.waste_type.clone());
        }
    }

    /// Station identifier.
    #[must_use]
    pub fn id(&self) -> StationId {
        self.id
    }

    /// Coordinates of the founding container.
    #[must_use]
    pub fn location(&self) -> Coord {
        self.location
    }

    /// Id of the container that created the station.
    #[must_use]
    pub fn founder(&self) -> &str {
        self.members.first().map_or("", String::as_str)
    }

    /// Member container ids in input order, founder first.
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// Waste types with distinct codes in first-seen order.
    ///
    /// Unrecognised labels share one code, so only the first is kept.
    #[must_use]
    pub fn waste_types(&self) -> &[WasteType] {
        &self.waste_types
    }

    /// Waste type codes concatenated in first-seen order, e.g. `"PB"`.
    #[must_use]
    pub fn type_codes(&self) -> String {
        self.waste_types.iter().map(WasteType::code).collect()
    }

    /// Adjacent stations in ascending id order.
    pub fn neighbors(&self) -> impl Iterator<Item = StationId> + '_ {
        self.neighbors.iter().copied()
    }

    /// Checks whether `other` is adjacent.
    #[must_use]
    pub fn is_adjacent(&self, other: StationId) -> bool {
        self.neighbors.contains(&other)
    }
}

/// Stations in creation order with their adjacency.
#[derive(Debug, Clone, Default)]
pub struct StationGraph {
    stations: Vec<Station>,
    founders: HashMap<String, usize>,
    members: HashMap<String, usize>,
}

impl StationGraph {
    /// All stations in ascending id order.
    #[must_use]
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Number of stations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if no station exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Station with the given id, if any.
    #[must_use]
    pub fn get(&self, id: StationId) -> Option<&Station> {
        id.0.checked_sub(1).and_then(|index| self.stations.get(index))
    }

    /// Station a container was assigned to, if the container was seen.
    #[must_use]
    pub fn station_of(&self, container_id: &str) -> Option<&Station> {
        self.members
            .get(container_id)
            .and_then(|&index| self.stations.get(index))
    }

    /// Number of undirected station links.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.stations.iter().map(|s| s.neighbors.len()).sum::<usize>() / 2
    }

    fn find_coincident(&self, coord: &Coord, scale: f64) -> Option<usize> {
        self.stations
            .iter()
            .position(|station| station.location.coincides(coord, scale))
    }

    fn lookup(&self, container_id: &str, mode: StationLookup) -> Option<usize> {
        match mode {
            StationLookup::Founding => self.founders.get(container_id).copied(),
            StationLookup::AnyMember => self.members.get(container_id).copied(),
        }
    }

    fn push(&mut self, container: &Container) -> usize {
        let index = self.stations.len();
        let id = StationId::from_index(index);
        self.stations.push(Station::found(id, container));
        self.founders.entry(container.id.clone()).or_insert(index);
        log::debug!("station {id} founded by container {}", container.id);
        index
    }

    fn link(&mut self, a: usize, b: usize) {
        let id_a = StationId::from_index(a);
        let id_b = StationId::from_index(b);
        let mut inserted = false;
        if let Some(station) = self.stations.get_mut(a) {
            inserted |= station.neighbors.insert(id_b);
        }
        if let Some(station) = self.stations.get_mut(b) {
            inserted |= station.neighbors.insert(id_a);
        }
        if inserted {
            log::trace!("linked station {} <-> {}", id_a, id_b);
        }
    }
}

/// Groups containers into stations and derives station adjacency.
#[derive(Debug, Clone, Default)]
pub struct StationClustering {
    config: StationConfig,
}

impl StationClustering {
    /// Creates a clustering pass with the given configuration.
    #[must_use]
    pub fn new(config: StationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &StationConfig {
        &self.config
    }

    /// Clusters `containers` in order, resolving paths through `neighbors`.
    ///
    /// The result depends only on the input order, so running the pass
    /// twice over the same data yields identical stations.
    pub fn cluster<N>(&self, containers: &[Container], neighbors: &N) -> StationGraph
    where
        N: NeighborSource + ?Sized,
    {
        let mut graph = StationGraph::default();

        for container in containers {
            let coincident = graph.find_coincident(&container.coord, self.config.tolerance_scale);
            let index = match coincident {
                Some(index) => {
                    if let Some(station) = graph.stations.get_mut(index) {
                        station.absorb(container);
                        log::debug!(
                            "container {} merged into station {}",
                            container.id,
                            station.id
                        );
                    }
                    index
                }
                None => graph.push(container),
            };
            graph.members.entry(container.id.clone()).or_insert(index);

            for neighbor in neighbors.neighbors_of(&container.id) {
                match graph.lookup(neighbor.id, self.config.lookup) {
                    Some(other) if other != index => graph.link(index, other),
                    _ => {}
                }
            }
        }

        log::info!(
            "clustered {} containers into {} stations with {} links",
            containers.len(),
            graph.len(),
            graph.edge_count()
        );
        graph
    }
}
