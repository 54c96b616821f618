//! HTTP client for the pokemontcg.io card catalog.
//!
//! A thin typed wrapper over the v2 REST API. Every failure mode on this
//! boundary -- connection errors, non-2xx statuses, payloads that do not
//! match the expected shape -- surfaces as
//! [`PokebinderError::CatalogUnavailable`], except a 404 on a direct id
//! lookup, which is [`PokebinderError::NotFound`].

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config;
use crate::error::{PokebinderError, Result};
use crate::models::{Card, SetRecord};
use crate::query::CatalogQuery;

// ---------------------------------------------------------------------------
// SearchCardsParams
// ---------------------------------------------------------------------------

/// Parameters for the card search. All fields are optional; when `None`,
/// the corresponding filter is skipped.
#[derive(Debug, Clone, Default)]
pub struct SearchCardsParams {
    /// Card name. Exact match unless it contains `*`, which switches the
    /// term to the API's wildcard syntax.
    pub name: Option<String>,
    pub types: Option<String>,
    pub rarity: Option<String>,
    pub set_id: Option<String>,
    pub supertype: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

// ---------------------------------------------------------------------------
// CardPage
// ---------------------------------------------------------------------------

/// One page of card search results.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPage {
    #[serde(default)]
    pub data: Vec<Card>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total_count: u32,
}

/// Envelope for endpoints returning a single object under `data`.
#[derive(Debug, Deserialize)]
struct Single<T> {
    data: T,
}

/// Envelope for endpoints returning a bare list under `data`.
#[derive(Debug, Deserialize)]
struct Listing<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

// ---------------------------------------------------------------------------
// CatalogClient
// ---------------------------------------------------------------------------

/// Read-only client for the pokemontcg.io catalog.
pub struct CatalogClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl CatalogClient {
    /// Create a client against the given base URL.
    ///
    /// `api_key`, when present, is sent as the `X-Api-Key` header on every
    /// request.
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| {
                PokebinderError::CatalogUnavailable(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -- Card search ---------------------------------------------------------

    /// Search for cards with the given filters, one page at a time.
    pub fn search_cards(&self, params: &SearchCardsParams) -> Result<CardPage> {
        let mut q = CatalogQuery::new();

        if let Some(ref name) = params.name {
            if name.contains('*') {
                q.field_raw("name", name);
            } else {
                q.field("name", name);
            }
        }
        if let Some(ref types) = params.types {
            q.field("types", types);
        }
        if let Some(ref rarity) = params.rarity {
            q.field("rarity", rarity);
        }
        if let Some(ref set_id) = params.set_id {
            q.field("set.id", set_id);
        }
        if let Some(ref supertype) = params.supertype {
            q.field("supertype", supertype);
        }

        let mut query: Vec<(&str, String)> = Vec::new();
        if !q.is_empty() {
            query.push(("q", q.build()));
        }
        query.push(("page", params.page.unwrap_or(1).to_string()));
        query.push(("pageSize", params.page_size.unwrap_or(20).to_string()));

        self.get("/cards", &query)
    }

    /// Retrieve a single card by its id. A 404 maps to `NotFound`.
    pub fn get_card(&self, id: &str) -> Result<Card> {
        let single: Single<Card> = self.get(&format!("/cards/{}", id), &[])?;
        Ok(single.data)
    }

    /// Fetch the complete card pool for a set, paging until the API reports
    /// no more results. This is the pack generator's pool source.
    pub fn cards_in_set(&self, set_id: &str) -> Result<Vec<Card>> {
        let q = CatalogQuery::new().field("set.id", set_id).build();

        let mut pool: Vec<Card> = Vec::new();
        let mut page: u32 = 1;

        loop {
            let result: CardPage = self.get(
                "/cards",
                &[
                    ("q", q.clone()),
                    ("page", page.to_string()),
                    ("pageSize", config::SET_PAGE_SIZE.to_string()),
                ],
            )?;

            let fetched = result.data.len() as u32;
            pool.extend(result.data);

            if fetched < config::SET_PAGE_SIZE || pool.len() as u32 >= result.total_count {
                break;
            }
            page += 1;
        }

        Ok(pool)
    }

    // -- Sets and enumerations ------------------------------------------------

    /// List all card sets.
    pub fn sets(&self) -> Result<Vec<SetRecord>> {
        let listing: Listing<SetRecord> = self.get("/sets", &[])?;
        Ok(listing.data)
    }

    /// List the rarity strings the catalog knows about.
    pub fn rarities(&self) -> Result<Vec<String>> {
        let listing: Listing<String> = self.get("/rarities", &[])?;
        Ok(listing.data)
    }

    /// List the card types (Fire, Water, ...).
    pub fn types(&self) -> Result<Vec<String>> {
        let listing: Listing<String> = self.get("/types", &[])?;
        Ok(listing.data)
    }

    /// List the card subtypes.
    pub fn subtypes(&self) -> Result<Vec<String>> {
        let listing: Listing<String> = self.get("/subtypes", &[])?;
        Ok(listing.data)
    }

    /// List the card supertypes (Pokémon, Trainer, Energy).
    pub fn supertypes(&self) -> Result<Vec<String>> {
        let listing: Listing<String> = self.get("/supertypes", &[])?;
        Ok(listing.data)
    }

    // -- Private helpers -------------------------------------------------------

    /// GET `path` with the given query parameters and deserialize the body.
    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.client.get(&url).query(query);
        if let Some(ref key) = self.api_key {
            request = request.header("X-Api-Key", key);
        }

        let response = request.send().map_err(|e| {
            PokebinderError::CatalogUnavailable(format!("request to {} failed: {}", url, e))
        })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(PokebinderError::NotFound(format!(
                "catalog resource {} does not exist",
                path
            )));
        }

        let response = response.error_for_status().map_err(|e| {
            PokebinderError::CatalogUnavailable(format!("{} returned an error status: {}", url, e))
        })?;

        response.json().map_err(|e| {
            PokebinderError::CatalogUnavailable(format!("malformed response from {}: {}", url, e))
        })
    }
}
