pub mod backend;
pub mod collections;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use collections::{CollectionStore, CollectionUpdate};
