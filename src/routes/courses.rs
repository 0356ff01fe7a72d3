use actix_web::{web, HttpResponse};

use crate::config::AppConfig;
use crate::services::api_client::{ApiError, StoreApi};
use crate::services::course_service::CourseService;

/*
    /api/courses
*/
pub async fn get_all(
    api: web::Data<dyn StoreApi>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ApiError> {
    let courses = CourseService::list_cards(api.get_ref(), &config).await?;
    Ok(HttpResponse::Ok().json(courses))
}

/*
    /api/courses/{id}
*/
pub async fn get_by_id(
    api: web::Data<dyn StoreApi>,
    config: web::Data<AppConfig>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let detail = CourseService::detail(api.get_ref(), &id, &config).await?;
    Ok(HttpResponse::Ok().json(detail))
}
