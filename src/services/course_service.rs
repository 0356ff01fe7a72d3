use serde::Serialize;

use crate::config::AppConfig;
use crate::models::course::{Course, CourseContent};
use crate::services::api_client::{ApiResult, StoreApi};
use crate::services::duration_format::DurationFormatter;
use crate::services::included_normalizer::normalize_included;
use crate::services::pricing_service::PricingService;

#[derive(Debug, Serialize, Clone)]
pub struct CourseCard {
    pub id: String,
    pub name: String,
    pub description: String,
    pub level: Option<String>,
    pub image: Option<String>,
    pub href: String,
    pub duration: String,
    pub price: String,
    pub included: Vec<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct CourseDetail {
    #[serde(flatten)]
    pub card: CourseCard,
    pub images: Vec<String>,
    pub contents: Vec<CourseContent>,
}

pub struct CourseService;

impl CourseService {
    pub fn card(course: &Course, currency_symbol: &str) -> CourseCard {
        let price = PricingService::format_price(course.price, false, None);
        CourseCard {
            id: course.id.clone(),
            name: course.name.clone(),
            description: course.description.clone().unwrap_or_default(),
            level: course.course_level.clone(),
            image: course.images.first().cloned(),
            href: format!("/courses/{}", course.id),
            duration: DurationFormatter::course(course.course_duration),
            price: PricingService::format_amount(&price.original, currency_symbol),
            included: normalize_included(&course.included),
        }
    }

    /// Content items in display order; items without an order go last and
    /// keep their relative position.
    pub fn ordered_contents(mut contents: Vec<CourseContent>) -> Vec<CourseContent> {
        contents.sort_by_key(|c| c.order.unwrap_or(i64::MAX));
        contents
    }

    pub async fn list_cards(api: &dyn StoreApi, config: &AppConfig) -> ApiResult<Vec<CourseCard>> {
        let courses = api.list_courses().await?;
        Ok(courses
            .iter()
            .map(|course| Self::card(course, &config.currency_symbol))
            .collect())
    }

    pub async fn detail(api: &dyn StoreApi, id: &str, config: &AppConfig) -> ApiResult<CourseDetail> {
        let course = api.get_course_with_content(id).await?;
        Ok(CourseDetail {
            card: Self::card(&course, &config.currency_symbol),
            images: course.images,
            contents: Self::ordered_contents(course.contents),
        })
    }
}
