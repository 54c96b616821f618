//! The collection store: single source of truth for user collections.
//!
//! Every mutation is snapshot-commit atomic: the next state is built on a
//! clone, serialized, and handed to the backend *before* it replaces the
//! in-memory state. A failed save therefore leaves the store exactly as it
//! was, and a successful return means the mutation is already durable.

use rand::Rng;

use crate::error::{PokebinderError, Result};
use crate::models::collection::now_millis;
use crate::models::{Card, Collection, CollectionCard, StoreState};
use crate::store::backend::StorageBackend;

// ---------------------------------------------------------------------------
// CollectionUpdate
// ---------------------------------------------------------------------------

/// Partial update for a collection's own fields. `None` leaves the field
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct CollectionUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// CollectionStore
// ---------------------------------------------------------------------------

/// Owns the full set of user collections and the active-collection pointer,
/// persisting through an injected [`StorageBackend`].
pub struct CollectionStore {
    state: StoreState,
    backend: Box<dyn StorageBackend>,
}

impl CollectionStore {
    /// Open a store, loading any previously persisted state.
    ///
    /// An unparseable blob is reported on stderr and replaced with an empty
    /// store rather than failing -- stored state must never brick the
    /// application. A dangling active pointer is reset to the first
    /// collection, or cleared if there are none.
    pub fn open(backend: Box<dyn StorageBackend>) -> Result<Self> {
        let state = match backend.load()? {
            Some(blob) => match serde_json::from_str::<StoreState>(&blob) {
                Ok(state) => state,
                Err(e) => {
                    eprintln!("Corrupt collection data: {} -- starting empty", e);
                    StoreState::default()
                }
            },
            None => StoreState::default(),
        };

        let mut store = Self { state, backend };
        store.normalize_active();
        Ok(store)
    }

    // -- Reads -----------------------------------------------------------------

    /// All collections, in insertion order.
    pub fn collections(&self) -> &[Collection] {
        &self.state.collections
    }

    /// Look up a collection by id.
    pub fn get_collection(&self, id: &str) -> Option<&Collection> {
        self.state.collections.iter().find(|c| c.id == id)
    }

    /// Id of the active collection, if any.
    pub fn active_id(&self) -> Option<&str> {
        self.state.active.as_deref()
    }

    /// The active collection, or `None` if the store is empty.
    pub fn get_active_collection(&self) -> Option<&Collection> {
        let id = self.state.active.as_deref()?;
        self.get_collection(id)
    }

    /// Market value of a collection. Returns `0.0` for an unknown id.
    pub fn calculate_collection_value(&self, id: &str) -> f64 {
        self.get_collection(id)
            .map(Collection::market_value)
            .unwrap_or(0.0)
    }

    // -- Collection-level mutations ---------------------------------------------

    /// Create a collection and make it active.
    ///
    /// The name must be non-empty after trimming whitespace.
    pub fn create_collection(&mut self, name: &str, description: &str) -> Result<Collection> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PokebinderError::InvalidArgument(
                "collection name must not be empty".to_string(),
            ));
        }

        let now = now_millis();
        let collection = Collection {
            id: new_collection_id(),
            name: name.to_string(),
            description: description.to_string(),
            cards: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        let mut next = self.state.clone();
        next.collections.push(collection.clone());
        next.active = Some(collection.id.clone());
        self.commit(next)?;

        Ok(collection)
    }

    /// Merge name/description updates into a collection.
    pub fn update_collection(&mut self, id: &str, updates: CollectionUpdate) -> Result<()> {
        if let Some(ref name) = updates.name {
            if name.trim().is_empty() {
                return Err(PokebinderError::InvalidArgument(
                    "collection name must not be empty".to_string(),
                ));
            }
        }

        let mut next = self.state.clone();
        let collection = find_collection_mut(&mut next, id)?;

        if let Some(name) = updates.name {
            collection.name = name.trim().to_string();
        }
        if let Some(description) = updates.description {
            collection.description = description;
        }
        collection.updated_at = now_millis();

        self.commit(next)
    }

    /// Delete a collection.
    ///
    /// If it was active, the active pointer moves to the first remaining
    /// collection, or to none if the store is now empty.
    pub fn delete_collection(&mut self, id: &str) -> Result<()> {
        if self.get_collection(id).is_none() {
            return Err(PokebinderError::NotFound(format!("collection '{}'", id)));
        }

        let mut next = self.state.clone();
        next.collections.retain(|c| c.id != id);

        if next.active.as_deref() == Some(id) {
            next.active = next.collections.first().map(|c| c.id.clone());
        }

        self.commit(next)
    }

    /// Point the active-collection pointer at an existing collection.
    pub fn set_active_collection(&mut self, id: &str) -> Result<()> {
        if self.get_collection(id).is_none() {
            return Err(PokebinderError::NotFound(format!("collection '{}'", id)));
        }

        let mut next = self.state.clone();
        next.active = Some(id.to_string());
        self.commit(next)
    }

    // -- Card-level mutations ----------------------------------------------------

    /// Add `quantity` copies of a card to a collection.
    ///
    /// If the card is already present its quantity is incremented; the rest
    /// of the stored entry is left as-is. `quantity` must be at least 1.
    pub fn add_card(&mut self, collection_id: &str, card: Card, quantity: u32) -> Result<()> {
        if quantity == 0 {
            return Err(PokebinderError::InvalidArgument(
                "quantity must be a positive integer".to_string(),
            ));
        }

        let mut next = self.state.clone();
        let collection = find_collection_mut(&mut next, collection_id)?;

        match collection.cards.iter_mut().find(|c| c.card.id == card.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(quantity);
            }
            None => {
                collection.cards.push(CollectionCard { card, quantity });
            }
        }
        collection.updated_at = now_millis();

        self.commit(next)
    }

    /// Set the stored quantity of a card.
    ///
    /// A quantity of 0 removes the entry: the store never persists a
    /// non-positive quantity.
    pub fn update_card_quantity(
        &mut self,
        collection_id: &str,
        card_id: &str,
        quantity: u32,
    ) -> Result<()> {
        let mut next = self.state.clone();
        let collection = find_collection_mut(&mut next, collection_id)?;

        if !collection.cards.iter().any(|c| c.card.id == card_id) {
            return Err(PokebinderError::NotFound(format!(
                "card '{}' in collection '{}'",
                card_id, collection_id
            )));
        }

        if quantity == 0 {
            collection.cards.retain(|c| c.card.id != card_id);
        } else if let Some(entry) = collection.cards.iter_mut().find(|c| c.card.id == card_id) {
            entry.quantity = quantity;
        }
        collection.updated_at = now_millis();

        self.commit(next)
    }

    /// Remove a card from a collection entirely.
    ///
    /// Removing a card that is not present is a no-op (nothing is
    /// persisted); the collection itself must exist.
    pub fn remove_card(&mut self, collection_id: &str, card_id: &str) -> Result<()> {
        if self.get_collection(collection_id).is_none() {
            return Err(PokebinderError::NotFound(format!(
                "collection '{}'",
                collection_id
            )));
        }

        let mut next = self.state.clone();
        let collection = find_collection_mut(&mut next, collection_id)?;

        let before = collection.cards.len();
        collection.cards.retain(|c| c.card.id != card_id);
        if collection.cards.len() == before {
            return Ok(());
        }
        collection.updated_at = now_millis();

        self.commit(next)
    }

    // -- Private helpers -----------------------------------------------------------

    /// Persist `next` and, only on success, make it the current state.
    fn commit(&mut self, next: StoreState) -> Result<()> {
        let blob = serde_json::to_string(&next)?;
        self.backend.save(&blob)?;
        self.state = next;
        Ok(())
    }

    /// Reset a dangling active pointer after load.
    fn normalize_active(&mut self) {
        let valid = self
            .state
            .active
            .as_deref()
            .map_or(false, |id| self.state.collections.iter().any(|c| c.id == id));

        if !valid {
            self.state.active = self.state.collections.first().map(|c| c.id.clone());
        }
    }
}

/// Generate a collision-resistant collection id: creation time in hex plus
/// a random suffix. Uniqueness only needs to hold within one local store.
fn new_collection_id() -> String {
    format!("{:x}-{:04x}", now_millis(), rand::thread_rng().gen::<u16>())
}

fn find_collection_mut<'a>(state: &'a mut StoreState, id: &str) -> Result<&'a mut Collection> {
    state
        .collections
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or_else(|| PokebinderError::NotFound(format!("collection '{}'", id)))
}
