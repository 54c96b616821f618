//! Pokémon TCG SDK for Rust.
//!
//! Provides a high-level client for the pokemontcg.io card catalog, a
//! persistent collection store for tracking owned cards, and a booster
//! pack simulator with realistic rarity distribution.
//!
//! # Quick start
//!
//! ```no_run
//! use pokebinder::Pokebinder;
//!
//! let mut binder = Pokebinder::builder().build().unwrap();
//!
//! // Browse the catalog
//! let sets = binder.catalog().sets().unwrap();
//!
//! // Open a booster pack
//! let pack = binder.packs().open_pack("base1").unwrap();
//!
//! // Track a collection
//! let coll = binder.collections_mut().create_collection("Binder", "").unwrap();
//! binder.collections_mut().add_card(&coll.id, pack[9].clone(), 1).unwrap();
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod pack;
pub mod query;
pub mod store;

#[cfg(feature = "async")]
pub use async_client::AsyncPokebinder;
pub use catalog::{CardPage, CatalogClient, SearchCardsParams};
pub use error::{PokebinderError, Result};
pub use models::{Card, Collection, CollectionCard, RarityBucket, SetRecord};
pub use pack::{generate_pack, PackGenerator, CARDS_PER_PACK};
pub use query::CatalogQuery;
pub use store::{CollectionStore, CollectionUpdate, FileBackend, MemoryBackend, StorageBackend};

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ---------------------------------------------------------------------------
// PokebinderBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`Pokebinder`] instance.
///
/// Use [`Pokebinder::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](PokebinderBuilder::build).
pub struct PokebinderBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
    data_dir: Option<PathBuf>,
    in_memory: bool,
}

impl Default for PokebinderBuilder {
    fn default() -> Self {
        Self {
            base_url: config::API_BASE.to_string(),
            api_key: env::var(config::API_KEY_ENV).ok(),
            timeout: Duration::from_secs(30),
            data_dir: None,
            in_memory: false,
        }
    }
}

impl PokebinderBuilder {
    /// Override the catalog base URL (useful for tests against a stub
    /// server). Defaults to the public pokemontcg.io v2 endpoint.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Set the pokemontcg.io API key.
    ///
    /// If not set, the `POKEMON_TCG_API_KEY` environment variable is used
    /// when present. Requests without a key still work at a reduced rate
    /// limit.
    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    /// Set the HTTP request timeout for catalog calls.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom directory for the persisted collection store.
    ///
    /// If not set, the platform-appropriate data directory is used
    /// (e.g. `~/.local/share/pokebinder` on Linux).
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keep collections in memory only, with no on-disk persistence.
    pub fn in_memory(mut self, in_memory: bool) -> Self {
        self.in_memory = in_memory;
        self
    }

    /// Build the SDK, initializing the catalog client and loading any
    /// previously persisted collections.
    ///
    /// No network request is made here; the catalog is only contacted by
    /// search and pack-opening calls.
    pub fn build(self) -> Result<Pokebinder> {
        let catalog = CatalogClient::new(&self.base_url, self.api_key, self.timeout)?;

        let backend: Box<dyn StorageBackend> = if self.in_memory {
            Box::new(MemoryBackend::new())
        } else {
            let dir = self.data_dir.unwrap_or_else(config::default_data_dir);
            Box::new(FileBackend::new(dir.join(config::STORAGE_FILE))?)
        };

        let store = CollectionStore::open(backend)?;
        Ok(Pokebinder { catalog, store })
    }
}

// ---------------------------------------------------------------------------
// Pokebinder
// ---------------------------------------------------------------------------

/// The main entry point for the SDK.
///
/// Owns the catalog client and the collection store, and exposes the pack
/// simulator as a lightweight borrowing wrapper. Created via
/// [`Pokebinder::builder()`].
pub struct Pokebinder {
    catalog: CatalogClient,
    store: CollectionStore,
}

impl Pokebinder {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> PokebinderBuilder {
        PokebinderBuilder::default()
    }

    /// Access the card catalog client.
    pub fn catalog(&self) -> &CatalogClient {
        &self.catalog
    }

    /// Read access to the collection store.
    pub fn collections(&self) -> &CollectionStore {
        &self.store
    }

    /// Mutable access to the collection store.
    ///
    /// All store mutations go through `&mut self`, so a `Pokebinder` shared
    /// across threads needs external synchronization (see
    /// [`AsyncPokebinder`](crate::async_client::AsyncPokebinder) with the
    /// `async` feature).
    pub fn collections_mut(&mut self) -> &mut CollectionStore {
        &mut self.store
    }

    /// Access the booster pack simulator.
    pub fn packs(&self) -> PackGenerator<'_> {
        PackGenerator::new(&self.catalog)
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for Pokebinder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pokebinder(catalog={}, collections={}, active={})",
            self.catalog.base_url(),
            self.store.collections().len(),
            self.store.active_id().unwrap_or("none"),
        )
    }
}
