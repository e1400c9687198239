//! In-memory storage collaborator
//!
//! Real deployments put a database behind [`MapStore`]; this
//! implementation exists for tests, demos, and the CLI.

use argmap_domain::traits::MapStore;
use argmap_domain::{ArgumentMap, MapId};
use std::collections::HashMap;

/// A [`MapStore`] that keeps everything in a HashMap
#[derive(Debug, Default)]
pub struct MemoryStore {
    maps: HashMap<MapId, ArgumentMap>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of maps stored
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    /// Whether the store holds no maps
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

impl MapStore for MemoryStore {
    type Error = String;

    fn create_map(&mut self, map: ArgumentMap) -> Result<MapId, Self::Error> {
        let id = MapId::new();
        self.maps.insert(id, map);
        Ok(id)
    }

    fn get_map(&self, id: MapId) -> Result<Option<ArgumentMap>, Self::Error> {
        Ok(self.maps.get(&id).cloned())
    }
}
