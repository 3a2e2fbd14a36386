use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const PRICES_URL: &str = "https://publicacionexterna.azurewebsites.net/publicaciones/prices";
pub const PLACES_URL: &str = "https://publicacionexterna.azurewebsites.net/publicaciones/places";

pub const PRICES_FILE: &str = "precios.xml";
pub const PLACES_FILE: &str = "estaciones.xml";

/// The two published datasets, in the order they are downloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Prices,
    Places,
}

impl SourceKind {
    pub const ALL: [SourceKind; 2] = [SourceKind::Prices, SourceKind::Places];

    pub fn default_url(self) -> &'static str {
        match self {
            SourceKind::Prices => PRICES_URL,
            SourceKind::Places => PLACES_URL,
        }
    }

    pub fn default_filename(self) -> &'static str {
        match self {
            SourceKind::Prices => PRICES_FILE,
            SourceKind::Places => PLACES_FILE,
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Prices => f.write_str("prices"),
            SourceKind::Places => f.write_str("places"),
        }
    }
}

/// Where a dataset comes from and which file (relative to the storage root) receives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub kind: SourceKind,
    pub url: String,
    pub destination: String,
}

impl Source {
    pub fn new(kind: SourceKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
            destination: kind.default_filename().to_string(),
        }
    }
}

/// Raw response body. Status and content type are kept for reporting only.
#[derive(Debug, Clone)]
pub struct Payload {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusPolicy {
    /// Persist the body whatever the status code.
    #[default]
    Lenient,
    /// Refuse non-2xx responses; nothing is written for that source.
    Strict,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchReport {
    pub kind: SourceKind,
    pub url: String,
    pub destination: String,
    pub status: u16,
    pub content_type: Option<String>,
    pub bytes: usize,
    pub fetched_at: DateTime<Utc>,
}
