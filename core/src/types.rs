//! Domain DTOs for the product catalog API.
//!
//! # Design
//! These types mirror the Remote Product Store's schema but are defined
//! independently from the mock-server crate. Field names stay in the store's
//! wire vocabulary (`titulo`, `preco`, ...) so no serde renames are needed on
//! the structs themselves. Integration tests catch any schema drift.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// The fixed set of product categories accepted by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Livros")]
    Books,
    #[serde(rename = "Eletrônicos")]
    Electronics,
    #[serde(rename = "Móveis")]
    Furniture,
    #[serde(rename = "Roupas")]
    Clothing,
    #[serde(rename = "Esportes")]
    Sports,
    #[serde(rename = "Outros")]
    Other,
}

impl Category {
    /// Every category, in the order the sell form offers them.
    pub const ALL: [Category; 6] = [
        Category::Books,
        Category::Electronics,
        Category::Furniture,
        Category::Clothing,
        Category::Sports,
        Category::Other,
    ];

    /// Wire label used by the store.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Books => "Livros",
            Category::Electronics => "Eletrônicos",
            Category::Furniture => "Móveis",
            Category::Clothing => "Roupas",
            Category::Sports => "Esportes",
            Category::Other => "Outros",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label is not one of the store's category names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A product as stored and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u64,
    pub titulo: String,
    pub descricao: String,
    pub preco: f64,
    pub categoria: Category,
    pub vendedor: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "store_timestamp"
    )]
    pub data_criacao: Option<NaiveDateTime>,
}

/// The store writes naive UTC timestamps, but an RFC 3339 value with an
/// offset is accepted too and normalized to UTC.
fn store_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Ok(ts) = raw.parse::<NaiveDateTime>() {
        return Ok(Some(ts));
    }
    DateTime::parse_from_rfc3339(&raw)
        .map(|ts| Some(ts.naive_utc()))
        .map_err(serde::de::Error::custom)
}

/// Request payload for creating a new product. The store assigns `id` and
/// `data_criacao`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub titulo: String,
    pub descricao: String,
    pub preco: f64,
    pub categoria: Category,
    pub vendedor: String,
}
