//! Shared fixtures for the pokebinder integration tests.
//!
//! Provides small card constructors and an in-memory collection store so
//! tests never touch the network or the real data directory.

#![allow(dead_code)]

use pokebinder::models::card::{PricePoints, Tcgplayer, TcgplayerPrices};
use pokebinder::{Card, CollectionStore, MemoryBackend};

/// A minimal Pokémon card with the given id and printed rarity.
pub fn card(id: &str, rarity: Option<&str>) -> Card {
    Card {
        id: id.to_string(),
        name: format!("Card {}", id),
        supertype: Some("Pokémon".to_string()),
        rarity: rarity.map(|r| r.to_string()),
        ..Default::default()
    }
}

/// An Energy card.
pub fn energy(id: &str) -> Card {
    Card {
        id: id.to_string(),
        name: format!("Energy {}", id),
        supertype: Some("Energy".to_string()),
        ..Default::default()
    }
}

/// A common card with a normal-finish market price.
pub fn priced(id: &str, market: f64) -> Card {
    let mut c = card(id, Some("Common"));
    c.tcgplayer = Some(Tcgplayer {
        prices: Some(TcgplayerPrices {
            normal: Some(PricePoints {
                market: Some(market),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    });
    c
}

/// A fresh collection store backed by memory.
pub fn store() -> CollectionStore {
    CollectionStore::open(Box::new(MemoryBackend::new())).unwrap()
}
