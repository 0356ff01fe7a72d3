use actix_web::{web, HttpResponse};

use crate::services::api_client::{ApiError, StoreApi};
use crate::services::best_selling_service::BestSellingService;

/*
    /api/best-selling
*/
pub async fn get_all(api: web::Data<dyn StoreApi>) -> Result<HttpResponse, ApiError> {
    let entries = api.list_best_selling().await?;
    Ok(HttpResponse::Ok().json(BestSellingService::normalize_all(entries)))
}
