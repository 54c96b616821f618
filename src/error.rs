#[derive(Debug, thiserror::Error)]
pub enum PokebinderError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Empty card pool: {0}")]
    EmptyPool(String),
}

pub type Result<T> = std::result::Result<T, PokebinderError>;
