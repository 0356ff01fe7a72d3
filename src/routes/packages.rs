use actix_web::{web, HttpResponse};

use crate::config::AppConfig;
use crate::services::api_client::{ApiError, StoreApi};
use crate::services::trip_service::TripService;

/*
    /api/packages
*/
pub async fn get_all(api: web::Data<dyn StoreApi>) -> Result<HttpResponse, ApiError> {
    let packages = TripService::list_packages(api.get_ref()).await?;
    Ok(HttpResponse::Ok().json(packages))
}

/*
    /api/packages/{id}
*/
pub async fn get_by_id(
    api: web::Data<dyn StoreApi>,
    config: web::Data<AppConfig>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let detail = TripService::package_detail(api.get_ref(), &id, &config).await?;
    Ok(HttpResponse::Ok().json(detail))
}
