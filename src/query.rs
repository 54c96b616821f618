//! Search-query builder for the pokemontcg.io `q` parameter.
//!
//! The catalog API takes a Lucene-style query string of space-separated
//! `field:value` terms. Values are quoted by default so names containing
//! spaces or colons stay a single term. Builder methods return `&mut Self`
//! for chaining.
//!
//! # Example
//!
//! ```rust
//! use pokebinder::CatalogQuery;
//! let q = CatalogQuery::new()
//!     .field("name", "Charizard")
//!     .field("set.id", "base1")
//!     .build();
//! assert_eq!(q, r#"name:"Charizard" set.id:"base1""#);
//! ```

/// Builds pokemontcg.io search query strings.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    terms: Vec<String>,
}

impl CatalogQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a quoted `field:"value"` term.
    ///
    /// Double quotes inside the value are stripped -- the API has no escape
    /// syntax for them.
    pub fn field(&mut self, field: &str, value: &str) -> &mut Self {
        let cleaned = value.replace('"', "");
        self.terms.push(format!("{}:\"{}\"", field, cleaned));
        self
    }

    /// Add an unquoted `field:value` term.
    ///
    /// Use this for wildcard searches (e.g. `name:char*`), which the API
    /// only honors outside quotes.
    pub fn field_raw(&mut self, field: &str, value: &str) -> &mut Self {
        self.terms.push(format!("{}:{}", field, value));
        self
    }

    /// Add a negated term: `-field:"value"`.
    pub fn not_field(&mut self, field: &str, value: &str) -> &mut Self {
        let cleaned = value.replace('"', "");
        self.terms.push(format!("-{}:\"{}\"", field, cleaned));
        self
    }

    /// Add an inclusive range term: `field:[lo TO hi]`.
    ///
    /// Either bound may be `"*"` for an open end.
    pub fn range(&mut self, field: &str, lo: &str, hi: &str) -> &mut Self {
        self.terms.push(format!("{}:[{} TO {}]", field, lo, hi));
        self
    }

    /// Whether any terms have been added.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Build the final query string (terms joined by spaces, implicit AND).
    pub fn build(&self) -> String {
        self.terms.join(" ")
    }
}
