use crate::models::best_selling::{BestSellingDisplay, BestSellingEntry, BestSellingItem, ItemType};
use crate::services::included_normalizer::normalize_included;

pub struct BestSellingService;

impl BestSellingService {
    /// Map one ranking entry to the uniform display model. Entries pointing to
    /// a course or trip that no longer exists yield `None`.
    pub fn normalize(entry: BestSellingEntry) -> Option<BestSellingDisplay> {
        let rank = entry.ranking_position.unwrap_or(i64::MAX);
        let item = entry.into_item()?;

        Some(match item {
            BestSellingItem::Course(course) => BestSellingDisplay {
                href: format!("/courses/{}", course.id),
                item_type: ItemType::Course,
                name: course.name,
                description: course.description.unwrap_or_default(),
                image: course.images.into_iter().next(),
                price: course.price,
                child_price: None,
                rank,
                included: normalize_included(&course.included),
                duration: course.course_duration,
                duration_unit: Some("days".to_string()),
                has_discount: false,
                discount_percentage: None,
                id: course.id,
            },
            BestSellingItem::Trip(trip) => BestSellingDisplay {
                href: format!("/trips/{}", trip.id),
                item_type: ItemType::Trip,
                name: trip.name,
                description: trip.description.unwrap_or_default(),
                image: trip.images.into_iter().next(),
                price: trip.adult_price,
                child_price: trip.child_price,
                rank,
                included: normalize_included(&trip.included),
                duration: trip.duration.map(|d| d as f64),
                duration_unit: trip.duration_unit,
                has_discount: trip.has_discount,
                discount_percentage: trip.discount_percentage,
                id: trip.id,
            },
        })
    }

    /// Normalize a full ranking, dropping dangling entries and ordering by rank.
    pub fn normalize_all(entries: Vec<BestSellingEntry>) -> Vec<BestSellingDisplay> {
        let total = entries.len();
        let mut items: Vec<BestSellingDisplay> =
            entries.into_iter().filter_map(Self::normalize).collect();

        if items.len() < total {
            log::warn!(
                "Skipped {} best-selling entries pointing to missing items",
                total - items.len()
            );
        }

        items.sort_by_key(|item| item.rank);
        items
    }
}
