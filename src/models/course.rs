use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient::{
    deserialize_id, deserialize_lenient_vec, deserialize_optional_f64, deserialize_optional_i64,
    deserialize_string_list,
};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Course {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub price: Option<f64>,
    #[serde(default)]
    pub course_level: Option<String>,
    /// Length in days.
    #[serde(default, deserialize_with = "deserialize_optional_f64")]
    pub course_duration: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub images: Vec<String>,
    #[serde(default)]
    pub included: Value,
    #[serde(default, deserialize_with = "deserialize_lenient_vec")]
    pub contents: Vec<CourseContent>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Video,
    Pdf,
    Text,
    Quiz,
    Audio,
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CourseContent {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub order: Option<i64>,
    pub content_type: ContentType,
    #[serde(default)]
    pub content_url: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}
