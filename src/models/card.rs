use serde::{Deserialize, Serialize};

use crate::models::set::SetRecord;

// ---------------------------------------------------------------------------
// Card — a single catalog card as returned by the pokemontcg.io API
// ---------------------------------------------------------------------------

/// A card from the upstream catalog.
///
/// Catalog data is read-only reference data: nothing in this crate ever
/// mutates a card after it has been fetched. `id` is the primary key for
/// every lookup and is globally unique across the catalog.
///
/// Only the fields this crate consults are modeled explicitly; the upstream
/// API may omit any of the optional ones, and every consumer of an optional
/// field documents its fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    /// Card category, e.g. `"Pokémon"`, `"Trainer"`, `"Energy"`.
    pub supertype: Option<String>,
    #[serde(default)]
    pub subtypes: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    /// Printed rarity string, e.g. `"Common"`, `"Rare Holo"`. Missing for
    /// some promo and energy printings.
    pub rarity: Option<String>,
    pub number: Option<String>,
    pub set: Option<SetRecord>,
    pub images: Option<CardImages>,
    pub attacks: Option<Vec<Attack>>,
    pub tcgplayer: Option<Tcgplayer>,
}

impl Card {
    /// Resolve the card's market price by walking the finish-variant
    /// fallback chain: holofoil → normal → reverse holofoil → first
    /// edition → unlimited. The first variant with a non-zero market
    /// value wins; a card with no usable price resolves to `0.0`.
    pub fn market_price(&self) -> f64 {
        let prices = match self.tcgplayer.as_ref().and_then(|t| t.prices.as_ref()) {
            Some(p) => p,
            None => return 0.0,
        };

        [
            &prices.holofoil,
            &prices.normal,
            &prices.reverse_holofoil,
            &prices.first_edition,
            &prices.unlimited,
        ]
        .into_iter()
        .filter_map(|variant| variant.as_ref().and_then(|p| p.market))
        .find(|market| *market > 0.0)
        .unwrap_or(0.0)
    }

    /// Whether this is an Energy card (compared case-insensitively, since
    /// upstream casing is not guaranteed).
    pub fn is_energy(&self) -> bool {
        self.supertype
            .as_deref()
            .map_or(false, |s| s.eq_ignore_ascii_case("energy"))
    }

    /// The rarity bucket this card sorts into for pack generation.
    pub fn rarity_bucket(&self) -> RarityBucket {
        RarityBucket::from_rarity(self.rarity.as_deref())
    }
}

// ---------------------------------------------------------------------------
// RarityBucket — normalized rarity partition used by the pack generator
// ---------------------------------------------------------------------------

/// Partition key for the pack generator's rarity-biased draws.
///
/// Rarity strings are normalized to lowercase before matching; anything
/// unrecognized (or a missing rarity) falls into [`Common`](Self::Common).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RarityBucket {
    Common,
    Uncommon,
    Rare,
    RareHolo,
    RareUltra,
    RareSecret,
}

impl RarityBucket {
    /// Map a printed rarity string onto a bucket.
    pub fn from_rarity(rarity: Option<&str>) -> Self {
        match rarity.map(|r| r.trim().to_ascii_lowercase()).as_deref() {
            Some("uncommon") => RarityBucket::Uncommon,
            Some("rare") => RarityBucket::Rare,
            Some("rare holo") => RarityBucket::RareHolo,
            Some("rare ultra") => RarityBucket::RareUltra,
            Some("rare secret") => RarityBucket::RareSecret,
            _ => RarityBucket::Common,
        }
    }
}

// ---------------------------------------------------------------------------
// Sub-structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardImages {
    pub small: Option<String>,
    pub large: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    pub name: String,
    #[serde(default)]
    pub cost: Vec<String>,
    pub converted_energy_cost: Option<u32>,
    pub damage: Option<String>,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tcgplayer {
    pub url: Option<String>,
    pub updated_at: Option<String>,
    pub prices: Option<TcgplayerPrices>,
}

/// TCGplayer price data keyed by finish variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TcgplayerPrices {
    pub holofoil: Option<PricePoints>,
    pub normal: Option<PricePoints>,
    pub reverse_holofoil: Option<PricePoints>,
    pub first_edition: Option<PricePoints>,
    pub unlimited: Option<PricePoints>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoints {
    pub low: Option<f64>,
    pub mid: Option<f64>,
    pub high: Option<f64>,
    pub market: Option<f64>,
    pub direct_low: Option<f64>,
}
