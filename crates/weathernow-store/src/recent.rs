//! Recently viewed places, most recent first.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use weathernow_weather::Place;

use crate::error::StorageError;
use crate::kv::KeyValueStore;

pub const RECENT_KEY: &str = "recent";
pub const RECENT_CAPACITY: usize = 6;

/// Ordered, name-unique, capped list of places
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecencyList {
    places: Vec<Place>,
}

impl RecencyList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `place` to the front, dropping any older entry with the same
    /// name and anything past capacity.
    pub fn add(&mut self, place: Place) {
        self.places.retain(|p| p.name != place.name);
        self.places.insert(0, place);
        self.places.truncate(RECENT_CAPACITY);
    }

    pub fn clear(&mut self) {
        self.places.clear();
    }

    pub fn first(&self) -> Option<&Place> {
        self.places.first()
    }

    pub fn get(&self, index: usize) -> Option<&Place> {
        self.places.get(index)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Place> {
        self.places.iter()
    }
}

/// Persisted recency list
#[derive(Clone)]
pub struct RecentStore {
    store: Arc<dyn KeyValueStore>,
}

impl RecentStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Stored list; empty when unset or malformed
    pub fn list(&self) -> Result<RecencyList, StorageError> {
        let Some(raw) = self.store.get(RECENT_KEY)? else {
            return Ok(RecencyList::new());
        };

        match serde_json::from_str::<Vec<Place>>(&raw) {
            Ok(places) => {
                // Re-apply the list invariants in case the file was edited by hand
                let mut list = RecencyList::new();
                for place in places.into_iter().rev() {
                    list.add(place);
                }
                Ok(list)
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed stored {}: {}", RECENT_KEY, e);
                Ok(RecencyList::new())
            }
        }
    }

    /// Record a lookup and persist the updated list
    pub fn add(&self, place: Place) -> Result<RecencyList, StorageError> {
        let mut list = self.list()?;
        tracing::debug!("Recording recent place {}", place.name);
        list.add(place);
        self.save(&list)?;
        Ok(list)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(RECENT_KEY)?;
        tracing::info!("Recent places cleared");
        Ok(())
    }

    fn save(&self, list: &RecencyList) -> Result<(), StorageError> {
        let json = serde_json::to_string(list).map_err(|source| StorageError::Serialize {
            key: RECENT_KEY.to_string(),
            source,
        })?;
        self.store.set(RECENT_KEY, &json)
    }
}
