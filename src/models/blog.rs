use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient::{deserialize_lenient_vec, deserialize_string_list};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Text {
        #[serde(default)]
        content: String,
    },
    Image {
        url: String,
        #[serde(default)]
        caption: Option<String>,
        #[serde(default)]
        alt: Option<String>,
    },
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BlogPost {
    pub title: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_vec")]
    pub content: Vec<Block>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured_image: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Clone)]
pub struct BlogPostView {
    #[serde(flatten)]
    pub post: BlogPost,
    pub reading_time_minutes: u32,
}

#[derive(Debug, Serialize, Clone)]
pub struct BlogSummary {
    pub title: String,
    pub subject: Option<String>,
    pub featured_image: Option<String>,
    pub tags: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub reading_time_minutes: u32,
}
