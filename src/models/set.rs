use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SetRecord — a card set, both standalone and embedded in a Card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub series: Option<String>,
    pub printed_total: Option<u32>,
    pub total: Option<u32>,
    pub release_date: Option<String>,
    pub images: Option<SetImages>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetImages {
    pub symbol: Option<String>,
    pub logo: Option<String>,
}
