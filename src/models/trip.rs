use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient::{
    deserialize_bool, deserialize_id, deserialize_optional_f64, deserialize_optional_i64,
    deserialize_optional_id, deserialize_string_list,
};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Trip {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub adult_price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub child_price: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_bool")]
    pub has_discount: bool,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub discount_percentage: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_bool")]
    pub discount_always_available: bool,
    #[serde(default, deserialize_with = "deserialize_bool")]
    pub discount_requires_min_people: bool,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub duration: Option<i64>,
    #[serde(default)]
    pub duration_unit: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub maxim_person: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_bool")]
    pub child_allowed: bool,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    pub package_id: Option<String>,
    /// Raw upstream value, possibly re-encoded several times.
    #[serde(default)]
    pub included: Value,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Package {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_bool")]
    pub is_image_list: bool,
}

/// Query for trip listings, mirrors `/trips?limit&exclude`.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct TripQuery {
    pub limit: Option<u32>,
    pub exclude: Option<String>,
    pub package_id: Option<String>,
}
