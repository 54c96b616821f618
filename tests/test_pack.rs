//! Pack generator tests with seeded randomness.

mod common;

use common::{card, energy};
use pokebinder::pack::{generate_pack, CARDS_PER_PACK};
use pokebinder::{Card, PokebinderError, RarityBucket};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A pool with every bucket populated.
fn full_pool() -> Vec<Card> {
    vec![
        card("c1", Some("Common")),
        card("c2", Some("Common")),
        card("c3", Some("Common")),
        card("c4", Some("Common")),
        card("u1", Some("Uncommon")),
        card("u2", Some("Uncommon")),
        card("r1", Some("Rare")),
        card("h1", Some("Rare Holo")),
        card("h2", Some("Rare Holo")),
        energy("e1"),
        energy("e2"),
    ]
}

// ---------------------------------------------------------------------------
// Length and positional invariants
// ---------------------------------------------------------------------------

#[test]
fn pack_is_exactly_ten_cards() {
    let pool = full_pool();
    for seed in 0..20 {
        let pack = generate_pack(&pool, &mut rng(seed)).unwrap();
        assert_eq!(pack.len(), CARDS_PER_PACK);
    }
}

#[test]
fn last_card_comes_from_best_rare_bucket() {
    let pool = full_pool();
    // Holos exist, so the rare slot must never fall back to plain rare.
    for seed in 0..20 {
        let pack = generate_pack(&pool, &mut rng(seed)).unwrap();
        assert_eq!(pack[9].rarity_bucket(), RarityBucket::RareHolo);
    }
}

#[test]
fn second_to_last_is_energy_when_available() {
    let pool = full_pool();
    for seed in 0..20 {
        let pack = generate_pack(&pool, &mut rng(seed)).unwrap();
        assert!(pack[8].is_energy(), "slot 9 was {:?}", pack[8].id);
    }
}

#[test]
fn rare_slot_priority_prefers_ultra_over_secret() {
    let pool = vec![
        card("c1", Some("Common")),
        card("s1", Some("Rare Secret")),
        card("ul1", Some("Rare Ultra")),
    ];
    for seed in 0..20 {
        let pack = generate_pack(&pool, &mut rng(seed)).unwrap();
        assert_eq!(pack[9].id, "ul1");
    }
}

#[test]
fn rare_slot_falls_back_to_plain_rare() {
    let pool = vec![
        card("c1", Some("Common")),
        card("c2", Some("Common")),
        card("r1", Some("Rare")),
    ];
    for seed in 0..20 {
        let pack = generate_pack(&pool, &mut rng(seed)).unwrap();
        assert_eq!(pack[9].id, "r1");
    }
}

#[test]
fn commons_only_pool_still_fills_every_slot() {
    let pool = vec![card("c1", Some("Common")), card("c2", Some("Common"))];
    let pack = generate_pack(&pool, &mut rng(7)).unwrap();
    assert_eq!(pack.len(), CARDS_PER_PACK);
    for c in &pack {
        assert_eq!(c.rarity_bucket(), RarityBucket::Common);
    }
}

#[test]
fn energy_slot_falls_back_to_common() {
    // Only commons and rare holos, no energy anywhere.
    let pool = vec![
        card("c1", Some("Common")),
        card("c2", Some("Common")),
        card("h1", Some("Rare Holo")),
    ];
    for seed in 0..20 {
        let pack = generate_pack(&pool, &mut rng(seed)).unwrap();
        assert_eq!(pack.len(), CARDS_PER_PACK);
        assert_eq!(pack[9].rarity_bucket(), RarityBucket::RareHolo);
        assert!(!pack[8].is_energy());
        assert_eq!(pack[8].rarity_bucket(), RarityBucket::Common);
    }
}

// ---------------------------------------------------------------------------
// Distribution
// ---------------------------------------------------------------------------

#[test]
fn front_slots_hold_exactly_three_uncommons() {
    let pool = full_pool();
    for seed in 0..20 {
        let pack = generate_pack(&pool, &mut rng(seed)).unwrap();
        let uncommons = pack[..8]
            .iter()
            .filter(|c| c.rarity_bucket() == RarityBucket::Uncommon)
            .count();
        assert_eq!(uncommons, 3);
    }
}

#[test]
fn missing_uncommon_bucket_fills_with_commons() {
    let pool = vec![
        card("c1", Some("Common")),
        card("h1", Some("Rare Holo")),
        energy("e1"),
    ];
    let pack = generate_pack(&pool, &mut rng(3)).unwrap();
    for c in &pack[..8] {
        assert_eq!(c.id, "c1");
    }
}

#[test]
fn unrecognized_rarity_lands_in_common_bucket() {
    // "Promo" is not a known rarity, so these cards must be drawable as
    // commons rather than being dropped from the pool.
    let pool = vec![card("p1", Some("Promo")), card("p2", None)];
    let pack = generate_pack(&pool, &mut rng(11)).unwrap();
    assert_eq!(pack.len(), CARDS_PER_PACK);
    for c in &pack {
        assert!(c.id == "p1" || c.id == "p2");
    }
}

// ---------------------------------------------------------------------------
// Degenerate pools
// ---------------------------------------------------------------------------

#[test]
fn single_card_pool_yields_ten_copies() {
    let pool = vec![card("only", Some("Common"))];
    let pack = generate_pack(&pool, &mut rng(1)).unwrap();
    assert_eq!(pack.len(), CARDS_PER_PACK);
    assert!(pack.iter().all(|c| c.id == "only"));
}

#[test]
fn empty_pool_is_an_error() {
    let err = generate_pack(&[], &mut rng(1)).unwrap_err();
    assert!(matches!(err, PokebinderError::EmptyPool(_)));
}

// ---------------------------------------------------------------------------
// Injected randomness
// ---------------------------------------------------------------------------

#[test]
fn same_seed_produces_same_pack() {
    let pool = full_pool();
    let a = generate_pack(&pool, &mut rng(99)).unwrap();
    let b = generate_pack(&pool, &mut rng(99)).unwrap();
    assert_eq!(a, b);
}
