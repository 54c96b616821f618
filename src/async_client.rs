//! Async wrapper around [`Pokebinder`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free. The
//! catalog client uses blocking HTTP internally, so this wrapper is the
//! supported way to call it from async code.
//!
//! # Example
//!
//! ```no_run
//! use pokebinder::AsyncPokebinder;
//!
//! #[tokio::main]
//! async fn main() {
//!     let binder = AsyncPokebinder::builder().build().await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let pack = binder.run(|b| b.packs().open_pack("base1")).await.unwrap();
//!
//!     let value = binder
//!         .run(|b| {
//!             let coll = b.collections_mut().create_collection("Binder", "")?;
//!             Ok(b.collections().calculate_collection_value(&coll.id))
//!         })
//!         .await
//!         .unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{PokebinderError, Result};
use crate::Pokebinder;

// ---------------------------------------------------------------------------
// AsyncPokebinderBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncPokebinder`] instance.
#[derive(Default)]
pub struct AsyncPokebinderBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
    data_dir: Option<PathBuf>,
    in_memory: bool,
}

impl AsyncPokebinderBuilder {
    /// Override the catalog base URL.
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// Set the pokemontcg.io API key.
    pub fn api_key(mut self, key: &str) -> Self {
        self.api_key = Some(key.to_string());
        self
    }

    /// Set the HTTP request timeout for catalog calls.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom directory for the persisted collection store.
    pub fn data_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.data_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keep collections in memory only.
    pub fn in_memory(mut self, in_memory: bool) -> Self {
        self.in_memory = in_memory;
        self
    }

    /// Build the async SDK, loading persisted collections on the blocking
    /// thread pool so the event loop is never blocked by disk I/O.
    pub async fn build(self) -> Result<AsyncPokebinder> {
        tokio::task::spawn_blocking(move || {
            let mut builder = Pokebinder::builder();
            if let Some(ref url) = self.base_url {
                builder = builder.base_url(url);
            }
            if let Some(ref key) = self.api_key {
                builder = builder.api_key(key);
            }
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(dir) = self.data_dir {
                builder = builder.data_dir(dir);
            }
            builder = builder.in_memory(self.in_memory);

            let binder = builder.build()?;
            Ok(AsyncPokebinder {
                inner: Arc::new(Mutex::new(binder)),
            })
        })
        .await
        .map_err(|e| PokebinderError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncPokebinder
// ---------------------------------------------------------------------------

/// Async wrapper around [`Pokebinder`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`Pokebinder`] sits
/// behind a [`Mutex`], which also provides the per-store mutual exclusion
/// required when the collection store is shared by concurrent callers.
pub struct AsyncPokebinder {
    inner: Arc<Mutex<Pokebinder>>,
}

impl AsyncPokebinder {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncPokebinderBuilder {
        AsyncPokebinderBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives `&mut Pokebinder` and should return a
    /// `Result<T>`; it holds the lock for the duration of the call, so one
    /// logical operation is in flight at a time.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Pokebinder) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let binder = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = binder
                .lock()
                .map_err(|_| PokebinderError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&mut guard)
        })
        .await
        .map_err(|e| PokebinderError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Open a booster pack asynchronously.
    ///
    /// Convenience wrapper around [`run()`](Self::run).
    pub async fn open_pack(&self, set_id: &str) -> Result<Vec<crate::Card>> {
        let set_id = set_id.to_string();
        self.run(move |b| b.packs().open_pack(&set_id)).await
    }
}
