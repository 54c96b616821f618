//! Card model tests: price fallback chain, rarity buckets, and the
//! serialized shapes this crate depends on.

mod common;

use common::card;
use pokebinder::models::card::{PricePoints, Tcgplayer, TcgplayerPrices};
use pokebinder::{Card, CollectionCard, RarityBucket};

fn points(market: f64) -> Option<PricePoints> {
    Some(PricePoints {
        market: Some(market),
        ..Default::default()
    })
}

fn with_prices(prices: TcgplayerPrices) -> Card {
    let mut c = card("priced", Some("Common"));
    c.tcgplayer = Some(Tcgplayer {
        prices: Some(prices),
        ..Default::default()
    });
    c
}

// ---------------------------------------------------------------------------
// market_price
// ---------------------------------------------------------------------------

#[test]
fn market_price_prefers_holofoil() {
    let c = with_prices(TcgplayerPrices {
        holofoil: points(10.0),
        normal: points(2.0),
        ..Default::default()
    });
    assert_eq!(c.market_price(), 10.0);
}

#[test]
fn market_price_walks_the_fallback_chain() {
    let c = with_prices(TcgplayerPrices {
        reverse_holofoil: points(4.2),
        unlimited: points(1.0),
        ..Default::default()
    });
    assert_eq!(c.market_price(), 4.2);
}

#[test]
fn market_price_skips_zero_valued_variants() {
    let c = with_prices(TcgplayerPrices {
        holofoil: points(0.0),
        normal: points(2.0),
        ..Default::default()
    });
    assert_eq!(c.market_price(), 2.0);
}

#[test]
fn market_price_defaults_to_zero() {
    assert_eq!(card("bare", None).market_price(), 0.0);

    let no_market = with_prices(TcgplayerPrices {
        normal: Some(PricePoints {
            low: Some(0.5),
            ..Default::default()
        }),
        ..Default::default()
    });
    assert_eq!(no_market.market_price(), 0.0);
}

// ---------------------------------------------------------------------------
// Rarity buckets
// ---------------------------------------------------------------------------

#[test]
fn rarity_bucket_normalizes_case_and_whitespace() {
    assert_eq!(
        RarityBucket::from_rarity(Some("Rare Holo")),
        RarityBucket::RareHolo
    );
    assert_eq!(
        RarityBucket::from_rarity(Some("UNCOMMON")),
        RarityBucket::Uncommon
    );
    assert_eq!(
        RarityBucket::from_rarity(Some("  rare secret ")),
        RarityBucket::RareSecret
    );
}

#[test]
fn unknown_or_missing_rarity_defaults_to_common() {
    assert_eq!(RarityBucket::from_rarity(None), RarityBucket::Common);
    assert_eq!(
        RarityBucket::from_rarity(Some("Promo")),
        RarityBucket::Common
    );
    assert_eq!(
        RarityBucket::from_rarity(Some("Amazing Rare")),
        RarityBucket::Common
    );
}

#[test]
fn is_energy_matches_case_insensitively() {
    let mut c = card("e", None);
    c.supertype = Some("Energy".to_string());
    assert!(c.is_energy());
    c.supertype = Some("ENERGY".to_string());
    assert!(c.is_energy());
    c.supertype = Some("Trainer".to_string());
    assert!(!c.is_energy());
    c.supertype = None;
    assert!(!c.is_energy());
}

// ---------------------------------------------------------------------------
// Serialized shapes
// ---------------------------------------------------------------------------

#[test]
fn card_deserializes_from_api_shape() {
    let value = serde_json::json!({
        "id": "base1-4",
        "name": "Charizard",
        "supertype": "Pokémon",
        "subtypes": ["Stage 2"],
        "types": ["Fire"],
        "rarity": "Rare Holo",
        "number": "4",
        "set": {
            "id": "base1",
            "name": "Base",
            "printedTotal": 102,
            "images": {"logo": "https://images.pokemontcg.io/base1/logo.png"}
        },
        "images": {
            "small": "https://images.pokemontcg.io/base1/4.png",
            "large": "https://images.pokemontcg.io/base1/4_hires.png"
        },
        "attacks": [{
            "name": "Fire Spin",
            "cost": ["Fire", "Fire", "Fire", "Fire"],
            "convertedEnergyCost": 4,
            "damage": "100",
            "text": "Discard 2 Energy cards attached to Charizard."
        }],
        "tcgplayer": {
            "updatedAt": "2024/01/01",
            "prices": {
                "holofoil": {"low": 200.0, "market": 350.5},
                "reverseHolofoil": {"market": 0.0},
                "firstEdition": {"market": 9000.0}
            }
        },
        "flavorText": "Spits fire that is hot enough to melt boulders."
    });

    let c: Card = serde_json::from_value(value).unwrap();
    assert_eq!(c.id, "base1-4");
    assert_eq!(c.set.as_ref().unwrap().printed_total, Some(102));
    assert_eq!(c.attacks.as_ref().unwrap()[0].converted_energy_cost, Some(4));
    assert_eq!(c.rarity_bucket(), RarityBucket::RareHolo);
    assert_eq!(c.market_price(), 350.5);
}

#[test]
fn collection_card_flattens_card_fields() {
    let entry = CollectionCard {
        card: card("xy7-54", Some("Rare")),
        quantity: 3,
    };

    let value = serde_json::to_value(&entry).unwrap();
    // Card fields and quantity live at the same level in the stored blob.
    assert_eq!(value["id"], "xy7-54");
    assert_eq!(value["quantity"], 3);

    let back: CollectionCard = serde_json::from_value(value).unwrap();
    assert_eq!(back, entry);
}
