//! Trait definitions for external interactions
//!
//! These traits define the boundary between the normalization core and
//! infrastructure. Implementations live outside this workspace's core
//! crates; `argmap-ingest` ships an in-memory one for tests and demos.

use crate::{ArgumentMap, MapId};

/// Trait for persisting normalized argument maps
///
/// The pipeline produces an [`ArgumentMap`] and hands it to this
/// collaborator; mapping the record onto actual storage (including the
/// label-tree path column) is entirely the implementor's concern.
pub trait MapStore {
    /// Error type for store operations
    type Error;

    /// Persist a normalized map, returning its new identifier
    fn create_map(&mut self, map: ArgumentMap) -> Result<MapId, Self::Error>;

    /// Fetch a previously stored map by id
    fn get_map(&self, id: MapId) -> Result<Option<ArgumentMap>, Self::Error>;
}
