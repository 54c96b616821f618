use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::models::card::Card;

// ---------------------------------------------------------------------------
// CollectionCard — a catalog card plus how many copies the user owns
// ---------------------------------------------------------------------------

/// A card entry inside a collection.
///
/// Invariant: `quantity >= 1`. The store removes an entry instead of ever
/// persisting a zero quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCard {
    #[serde(flatten)]
    pub card: Card,
    pub quantity: u32,
}

// ---------------------------------------------------------------------------
// Collection — a user-named group of cards with per-card quantities
// ---------------------------------------------------------------------------

/// A user collection.
///
/// `cards` is ordered (insertion order) and unique by card id: adding a card
/// that is already present increments its quantity rather than appending a
/// duplicate entry. Timestamps are unix epoch milliseconds; `updated_at` is
/// refreshed by every mutation, including card-level ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cards: Vec<CollectionCard>,
    pub created_at: u64,
    pub updated_at: u64,
}

impl Collection {
    /// Total number of physical cards (sum of quantities).
    pub fn total_cards(&self) -> u64 {
        self.cards.iter().map(|c| u64::from(c.quantity)).sum()
    }

    /// Number of distinct card entries.
    pub fn unique_cards(&self) -> usize {
        self.cards.len()
    }

    /// Market value of the collection: `quantity × market price` summed over
    /// all entries, with each card's price resolved through
    /// [`Card::market_price`]. Recomputed on every call, never persisted.
    pub fn market_value(&self) -> f64 {
        self.cards
            .iter()
            .map(|c| c.card.market_price() * f64::from(c.quantity))
            .sum()
    }

    /// Look up an entry by card id.
    pub fn get_card(&self, card_id: &str) -> Option<&CollectionCard> {
        self.cards.iter().find(|c| c.card.id == card_id)
    }
}

// ---------------------------------------------------------------------------
// StoreState — the full persisted state of the collection store
// ---------------------------------------------------------------------------

/// Everything the collection store persists, as one serializable blob:
/// the ordered collection list plus the active-collection pointer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    #[serde(default)]
    pub collections: Vec<Collection>,
    #[serde(default)]
    pub active: Option<String>,
}

/// Current wall-clock time as unix epoch milliseconds.
///
/// Clamps to 0 if the system clock reports a pre-epoch time.
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
