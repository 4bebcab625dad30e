//! The loaded container and path dataset.

use std::collections::HashMap;
use std::path::Path as FsPath;

use binnet_core::{Container, Neighbor, NeighborSource, Path};

use crate::records::{decode_container, decode_path, CONTAINER_COLUMNS, PATH_COLUMNS};
use crate::{LoadOptions, Result, Table};

/// Containers and paths of one run, owned and read-only after loading.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    containers: Vec<Container>,
    paths: Vec<Path>,
    by_id: HashMap<String, usize>,
}

impl Dataset {
    /// Loads both files. The containers file is read first; any failure
    /// aborts the whole load.
    ///
    /// # Errors
    /// Returns an error if either file cannot be read or has a row of the
    /// wrong width.
    pub fn load<C, P>(containers: C, paths: P, options: &LoadOptions) -> Result<Self>
    where
        C: AsRef<FsPath>,
        P: AsRef<FsPath>,
    {
        let container_table = Table::load(containers, CONTAINER_COLUMNS, options)?;
        let path_table = Table::load(paths, PATH_COLUMNS, options)?;
        Ok(Self::from_tables(&container_table, &path_table))
    }

    /// Decodes already loaded tables.
    #[must_use]
    pub fn from_tables(containers: &Table, paths: &Table) -> Self {
        Self::from_parts(
            containers.rows().map(decode_container).collect(),
            paths.rows().map(decode_path).collect(),
        )
    }

    /// Builds a dataset from decoded records.
    #[must_use]
    pub fn from_parts(containers: Vec<Container>, paths: Vec<Path>) -> Self {
        let mut by_id = HashMap::with_capacity(containers.len());
        for (index, container) in containers.iter().enumerate() {
            // First occurrence wins for duplicated ids.
            by_id.entry(container.id.clone()).or_insert(index);
        }
        Self {
            containers,
            paths,
            by_id,
        }
    }

    /// All containers in file order.
    #[must_use]
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// All paths in file order.
    #[must_use]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Container at row `index`, if any.
    #[must_use]
    pub fn container(&self, index: usize) -> Option<&Container> {
        self.containers.get(index)
    }

    /// Path at row `index`, if any.
    #[must_use]
    pub fn path(&self, index: usize) -> Option<&Path> {
        self.paths.get(index)
    }

    /// Looks up a container by id.
    #[must_use]
    pub fn find_container(&self, id: &str) -> Option<&Container> {
        self.by_id
            .get(id)
            .and_then(|&index| self.containers.get(index))
    }
}

impl NeighborSource for Dataset {
    fn neighbors_of(&self, container_id: &str) -> Vec<Neighbor<'_>> {
        self.paths.neighbors_of(container_id)
    }
}
