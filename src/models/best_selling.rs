use serde::{Deserialize, Serialize};

use super::course::Course;
use super::lenient::{deserialize_id, deserialize_optional_i64};
use super::trip::Trip;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Course,
    Trip,
}

/// A ranking entry as the API returns it: a pointer to one course or trip,
/// with the referenced record embedded when it still exists.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BestSellingEntry {
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    pub item_type: ItemType,
    #[serde(default, deserialize_with = "deserialize_id")]
    pub item_id: String,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub ranking_position: Option<i64>,
    #[serde(default)]
    pub course: Option<Course>,
    #[serde(default)]
    pub trip: Option<Trip>,
}

pub enum BestSellingItem {
    Course(Course),
    Trip(Trip),
}

impl BestSellingEntry {
    /// Resolves the referenced record for this entry's type. Ranking entries
    /// may outlive the item they point to (or embed one without an id), in
    /// which case this is `None`.
    pub fn into_item(self) -> Option<BestSellingItem> {
        match self.item_type {
            ItemType::Course => self
                .course
                .filter(|course| !course.id.is_empty())
                .map(BestSellingItem::Course),
            ItemType::Trip => self
                .trip
                .filter(|trip| !trip.id.is_empty())
                .map(BestSellingItem::Trip),
        }
    }
}

/// Body for creating a ranking entry from the admin back-office.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NewBestSellingEntry {
    pub item_type: ItemType,
    pub item_id: String,
    pub ranking_position: i64,
}

/// Uniform display model for both courses and trips.
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BestSellingDisplay {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub price: Option<f64>,
    pub child_price: Option<f64>,
    pub href: String,
    pub rank: i64,
    pub included: Vec<String>,
    pub duration: Option<f64>,
    pub duration_unit: Option<String>,
    pub has_discount: bool,
    pub discount_percentage: Option<f64>,
}
