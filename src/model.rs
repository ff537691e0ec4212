use std::{fs::read_to_string, path::Path};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use typed_floats::tf64::NonNaNFinite;

pub const LOCATIONS_PATH: &str = "Data/locations.json";

/// Decodes a field as `T`, treating a missing, null or mistyped value as `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// One store from the location directory.
///
/// `state` may be absent, in which case the store belongs to no region.
/// Coordinates that are missing or not numbers decode as `None`; such a
/// store never gets a heatmap entry. `county` and `url` default to empty
/// strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationRecord {
    pub store_number: String,
    #[serde(default, deserialize_with = "lenient")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub lng: Option<f64>,
    #[serde(default)]
    pub county: String,
    #[serde(default)]
    pub url: String,
}

/// A store's menu, with categories and items kept in file order.
#[derive(Debug, Default, Deserialize)]
pub struct MenuRecord {
    #[serde(default)]
    pub categories: IndexMap<String, Vec<MenuItem>>,
}

#[derive(Debug, Deserialize)]
pub struct MenuItem {
    // unnamed items, or names that aren't strings, never match a product
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(default)]
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapEntry {
    pub store_number: String,
    pub lat: f64,
    pub lng: f64,
    pub price: NonNaNFinite,
    pub county: String,
    pub url: String,
}

impl HeatmapEntry {
    /// `None` when the store has no coordinates.
    pub fn new(location: &LocationRecord, price: NonNaNFinite) -> Option<Self> {
        Some(Self {
            store_number: location.store_number.clone(),
            lat: location.lat?,
            lng: location.lng?,
            price,
            county: location.county.clone(),
            url: location.url.clone(),
        })
    }
}

pub fn load_locations(path: &Path) -> Result<Vec<LocationRecord>> {
    let text =
        read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}
