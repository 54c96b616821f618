use std::path::PathBuf;

pub const API_BASE: &str = "https://api.pokemontcg.io/v2";

/// Environment variable consulted for the pokemontcg.io API key when the
/// builder is not given one explicitly. Requests work without a key, just
/// at a lower rate limit.
pub const API_KEY_ENV: &str = "POKEMON_TCG_API_KEY";

/// File name of the serialized collection store inside the data directory.
pub const STORAGE_FILE: &str = "collections.json";

/// Page size used when paging through a whole set's card pool.
/// 250 is the maximum the API allows per page.
pub const SET_PAGE_SIZE: u32 = 250;

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("pokebinder")
    } else {
        PathBuf::from(".pokebinder")
    }
}
