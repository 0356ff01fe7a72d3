use actix_web::{web, HttpResponse};

use crate::config::AppConfig;
use crate::models::trip::TripQuery;
use crate::services::api_client::{ApiError, StoreApi};
use crate::services::trip_service::TripService;

/*
    /api/trips?limit&exclude
*/
pub async fn get_all(
    api: web::Data<dyn StoreApi>,
    config: web::Data<AppConfig>,
    query: web::Query<TripQuery>,
) -> Result<HttpResponse, ApiError> {
    let cards = TripService::list_cards(api.get_ref(), &query, &config).await?;
    Ok(HttpResponse::Ok().json(cards))
}

/*
    /api/trips/{id}
*/
pub async fn get_by_id(
    api: web::Data<dyn StoreApi>,
    config: web::Data<AppConfig>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let detail = TripService::detail(api.get_ref(), &id, &config).await?;
    Ok(HttpResponse::Ok().json(detail))
}
