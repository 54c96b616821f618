//! Booster pack simulator.
//!
//! Generates a 10-card pack from a set's card pool, mirroring the slot
//! layout of a physical booster: the last card is the best rare available,
//! the second-to-last is an energy card, three slots are uncommons, and the
//! rest are commons. Every slot falls back gracefully when its bucket is
//! empty, so any non-empty pool always yields a full pack.
//!
//! Randomness is injected: the selection functions are generic over
//! [`rand::Rng`], so tests drive them with a seeded generator.

use std::collections::HashMap;

use rand::prelude::*;

use crate::catalog::CatalogClient;
use crate::error::{PokebinderError, Result};
use crate::models::{Card, RarityBucket};

/// Cards in a booster pack.
pub const CARDS_PER_PACK: usize = 10;

/// Uncommon slots per pack (when the pool has uncommons at all).
pub const UNCOMMONS_PER_PACK: usize = 3;

/// Rare-slot bucket preference, best first.
const RARE_SLOT_PRIORITY: [RarityBucket; 3] = [
    RarityBucket::RareHolo,
    RarityBucket::RareUltra,
    RarityBucket::RareSecret,
];

// ---------------------------------------------------------------------------
// PackGenerator
// ---------------------------------------------------------------------------

/// Simulates opening booster packs for a chosen set.
///
/// Fetches the set's full card pool from the catalog (the only suspension
/// point of the whole operation), then runs the pure sampling logic in
/// [`generate_pack`].
pub struct PackGenerator<'a> {
    catalog: &'a CatalogClient,
}

impl<'a> PackGenerator<'a> {
    /// Create a generator bound to the given catalog client.
    pub fn new(catalog: &'a CatalogClient) -> Self {
        Self { catalog }
    }

    /// Open a single pack from the given set using the thread-local RNG.
    pub fn open_pack(&self, set_id: &str) -> Result<Vec<Card>> {
        self.open_pack_with(set_id, &mut thread_rng())
    }

    /// Open a single pack, drawing randomness from the supplied generator.
    pub fn open_pack_with<R: Rng + ?Sized>(&self, set_id: &str, rng: &mut R) -> Result<Vec<Card>> {
        let pool = self.catalog.cards_in_set(set_id)?;
        if pool.is_empty() {
            return Err(PokebinderError::EmptyPool(format!(
                "set '{}' has no cards",
                set_id
            )));
        }
        generate_pack(&pool, rng)
    }

    /// Open a box of `packs` packs from the same set.
    ///
    /// The pool is fetched once and reused for every pack.
    pub fn open_box(&self, set_id: &str, packs: usize) -> Result<Vec<Vec<Card>>> {
        let pool = self.catalog.cards_in_set(set_id)?;
        if pool.is_empty() {
            return Err(PokebinderError::EmptyPool(format!(
                "set '{}' has no cards",
                set_id
            )));
        }

        let mut rng = thread_rng();
        let mut box_contents = Vec::with_capacity(packs);
        for _ in 0..packs {
            box_contents.push(generate_pack(&pool, &mut rng)?);
        }
        Ok(box_contents)
    }
}

// ---------------------------------------------------------------------------
// Pure generation
// ---------------------------------------------------------------------------

/// Generate one pack from an in-memory card pool.
///
/// Always returns exactly [`CARDS_PER_PACK`] cards for a non-empty pool;
/// an empty pool is an [`EmptyPool`](PokebinderError::EmptyPool) error.
/// Slot layout:
///
/// - index 9: a card from the best non-empty rare bucket (holo → ultra →
///   secret → plain rare → whole pool)
/// - index 8: an energy card (→ common → whole pool)
/// - indices 0..8: three uncommons when available, commons for the rest
///   (→ whole pool), shuffled among themselves (Fisher–Yates)
///
/// Draws within a bucket are uniform and with replacement.
pub fn generate_pack<R: Rng + ?Sized>(pool: &[Card], rng: &mut R) -> Result<Vec<Card>> {
    if pool.is_empty() {
        return Err(PokebinderError::EmptyPool(
            "cannot open a pack from an empty pool".to_string(),
        ));
    }

    let parts = PartitionedPool::from_pool(pool);

    // Rare slot: best available bucket in priority order.
    let rare_slot = RARE_SLOT_PRIORITY
        .iter()
        .find_map(|bucket| pick(parts.bucket(*bucket), rng))
        .or_else(|| pick(parts.bucket(RarityBucket::Rare), rng))
        .unwrap_or_else(|| any_card(pool, rng));

    // Energy slot, falling back to a common, then to anything.
    let energy_slot = pick(&parts.energy, rng)
        .or_else(|| pick(parts.bucket(RarityBucket::Common), rng))
        .unwrap_or_else(|| any_card(pool, rng));

    // Front slots: uncommons first, commons fill the rest.
    let mut front: Vec<&Card> = Vec::with_capacity(CARDS_PER_PACK - 2);

    let uncommons = parts.bucket(RarityBucket::Uncommon);
    if !uncommons.is_empty() {
        for _ in 0..UNCOMMONS_PER_PACK {
            front.push(uncommons[rng.gen_range(0..uncommons.len())]);
        }
    }

    let commons = parts.bucket(RarityBucket::Common);
    while front.len() < CARDS_PER_PACK - 2 {
        match pick(commons, rng) {
            Some(card) => front.push(card),
            None => front.push(any_card(pool, rng)),
        }
    }

    front.shuffle(rng);

    let mut pack: Vec<Card> = front.into_iter().cloned().collect();
    pack.push(energy_slot.clone());
    pack.push(rare_slot.clone());

    Ok(pack)
}

// ---------------------------------------------------------------------------
// Pool partitioning
// ---------------------------------------------------------------------------

/// A card pool split into the energy partition and rarity buckets.
struct PartitionedPool<'a> {
    energy: Vec<&'a Card>,
    buckets: HashMap<RarityBucket, Vec<&'a Card>>,
}

impl<'a> PartitionedPool<'a> {
    fn from_pool(pool: &'a [Card]) -> Self {
        let mut energy = Vec::new();
        let mut buckets: HashMap<RarityBucket, Vec<&'a Card>> = HashMap::new();

        for card in pool {
            if card.is_energy() {
                energy.push(card);
            } else {
                buckets.entry(card.rarity_bucket()).or_default().push(card);
            }
        }

        Self { energy, buckets }
    }

    fn bucket(&self, bucket: RarityBucket) -> &[&'a Card] {
        self.buckets.get(&bucket).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Uniform draw from a bucket; `None` when the bucket is empty.
fn pick<'a, R: Rng + ?Sized>(cards: &[&'a Card], rng: &mut R) -> Option<&'a Card> {
    cards.choose(rng).copied()
}

/// Uniform draw over the whole pool. Callers check non-emptiness first.
fn any_card<'a, R: Rng + ?Sized>(pool: &'a [Card], rng: &mut R) -> &'a Card {
    &pool[rng.gen_range(0..pool.len())]
}
