use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::middleware::auth::Session;
use crate::models::invoice::{PaymentRequest, PickupRequest};
use crate::services::api_client::{ApiError, StoreApi};
use crate::services::invoice_service::InvoiceService;
use crate::services::lookup_limiter::LookupLimiter;

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    #[serde(default)]
    pub ref_number: String,
}

fn client_key(req: &HttpRequest) -> String {
    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn enforce_limit(req: &HttpRequest, limiter: &LookupLimiter) -> Result<(), ApiError> {
    if limiter.check(&client_key(req)) {
        Ok(())
    } else {
        Err(ApiError::RateLimited)
    }
}

/*
    /api/invoices/{id}
*/
pub async fn get_by_id(
    api: web::Data<dyn StoreApi>,
    config: web::Data<AppConfig>,
    path: web::Path<String>,
    session: Session,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let view = InvoiceService::get(api.get_ref(), &id, Some(&session.token), &config).await?;
    Ok(HttpResponse::Ok().json(view))
}

/*
    POST /api/invoices/{id}/pay
*/
pub async fn pay(
    api: web::Data<dyn StoreApi>,
    path: web::Path<String>,
    input: web::Json<PaymentRequest>,
    session: Session,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let result = InvoiceService::pay(api.get_ref(), &id, &input, Some(&session.token)).await?;
    log::info!("Invoice {} paid by user {}", id, session.user_id());
    Ok(HttpResponse::Ok().json(result))
}

/*
    /api/invoices/lookup?ref_number=
*/
pub async fn lookup(
    req: HttpRequest,
    api: web::Data<dyn StoreApi>,
    config: web::Data<AppConfig>,
    limiter: web::Data<LookupLimiter>,
    query: web::Query<LookupQuery>,
) -> Result<HttpResponse, ApiError> {
    enforce_limit(&req, &limiter)?;
    let view = InvoiceService::lookup(api.get_ref(), &query.ref_number, &config).await?;
    Ok(HttpResponse::Ok().json(view))
}

/*
    PUT /api/invoices/lookup/pickup
*/
pub async fn pickup(
    req: HttpRequest,
    api: web::Data<dyn StoreApi>,
    config: web::Data<AppConfig>,
    limiter: web::Data<LookupLimiter>,
    input: web::Json<PickupRequest>,
) -> Result<HttpResponse, ApiError> {
    enforce_limit(&req, &limiter)?;
    let view = InvoiceService::set_picked_up(api.get_ref(), &input, &config).await?;
    Ok(HttpResponse::Ok().json(view))
}
