//! Report assembly for the two listing modes.

use binnet_core::{Container, FilterCriteria, NeighborSource};

use crate::station::{StationGraph, StationId};

/// A container that passed the filter, with its direct neighbors.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerEntry<'a> {
    /// The matching container.
    pub container: &'a Container,
    /// Neighbor container ids in path order, duplicates included.
    pub neighbors: Vec<&'a str>,
}

/// A station with its type codes and sorted adjacency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationEntry {
    /// Station identifier.
    pub id: StationId,
    /// Waste type codes in first-seen order.
    pub type_codes: String,
    /// Adjacent station ids, ascending.
    pub neighbors: Vec<StationId>,
}

/// Builds the filtered container listing in input order.
pub fn filtered_listing<'a, N>(
    containers: &'a [Container],
    neighbors: &'a N,
    criteria: &FilterCriteria,
) -> Vec<ContainerEntry<'a>>
where
    N: NeighborSource + ?Sized,
{
    let entries: Vec<ContainerEntry<'a>> = containers
        .iter()
        .filter(|container| criteria.matches(container))
        .map(|container| ContainerEntry {
            container,
            neighbors: neighbors
                .neighbors_of(&container.id)
                .into_iter()
                .map(|neighbor| neighbor.id)
                .collect(),
        })
        .collect();

    log::info!(
        "{} of {} containers match the filter",
        entries.len(),
        containers.len()
    );
    entries
}

/// Builds the station listing in ascending station id order.
#[must_use]
pub fn station_listing(graph: &StationGraph) -> Vec<StationEntry> {
    graph
        .stations()
        .iter()
        .map(|station| {
            let mut neighbors: Vec<StationId> = station.neighbors().collect();
            neighbors.sort_unstable();
            StationEntry {
                id: station.id(),
                type_codes: station.type_codes(),
                neighbors,
            }
        })
        .collect()
}
