//! Client for the remote commerce API.
//!
//! Every piece of data this service renders comes from the upstream REST
//! API. `StoreApi` is the seam handlers depend on; `HttpStoreApi` is the
//! `reqwest` implementation used in production.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use async_trait::async_trait;
use reqwest::{Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{json, Value};
use url::Url;

use crate::config::AppConfig;
use crate::models::best_selling::{BestSellingEntry, NewBestSellingEntry};
use crate::models::blog::BlogPost;
use crate::models::bookings::{BookingCreated, BookingSubmission};
use crate::models::course::Course;
use crate::models::dashboard::{AnalyticsSummary, InvoiceSummary, RecentUser};
use crate::models::invoice::{Invoice, PaymentRequest, PickupRequest};
use crate::models::lenient::lenient_items;
use crate::models::trip::{Package, Trip, TripQuery};

pub const UPSTREAM_ERROR_MESSAGE: &str = "Upstream service error";

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ApiError {
    #[error("Upstream request failed: {0}")]
    Network(String),
    #[error("Not found")]
    NotFound,
    #[error("Authentication required")]
    Unauthorized,
    #[error("Insufficient permissions")]
    Forbidden,
    #[error("{0}")]
    Conflict(String),
    #[error("Too many requests, please try again later")]
    RateLimited,
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("Unexpected response from upstream: {0}")]
    Decode(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Map an upstream error status and body to an `ApiError`, pulling the
    /// server's own message out of a JSON body when there is one.
    pub fn from_status(status: u16, body: &str) -> Self {
        // Server-side failure details stay in the log, not in the response.
        if status >= 500 {
            log::warn!("Upstream error {}: {}", status, body.trim());
            return ApiError::Status {
                status,
                message: UPSTREAM_ERROR_MESSAGE.to_string(),
            };
        }

        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| {
                ["message", "error", "detail"]
                    .iter()
                    .find_map(|key| value.get(key).and_then(Value::as_str).map(str::to_string))
            })
            .unwrap_or_else(|| body.trim().to_string());

        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound,
            409 => ApiError::Conflict(message),
            429 => ApiError::RateLimited,
            _ => ApiError::Status { status, message },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Status { status: 400, .. } => StatusCode::BAD_REQUEST,
            ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Status { .. } | ApiError::Network(_) | ApiError::Decode(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[async_trait]
pub trait StoreApi: Send + Sync {
    async fn list_trips(&self, query: &TripQuery) -> ApiResult<Vec<Trip>>;
    async fn get_trip(&self, id: &str) -> ApiResult<Trip>;
    async fn list_packages(&self) -> ApiResult<Vec<Package>>;
    async fn get_package(&self, id: &str) -> ApiResult<Package>;
    async fn list_courses(&self) -> ApiResult<Vec<Course>>;
    async fn get_course_with_content(&self, id: &str) -> ApiResult<Course>;
    async fn list_best_selling(&self) -> ApiResult<Vec<BestSellingEntry>>;
    async fn create_best_selling(
        &self,
        entry: &NewBestSellingEntry,
        token: Option<&str>,
    ) -> ApiResult<BestSellingEntry>;
    async fn delete_best_selling(&self, id: &str, token: Option<&str>) -> ApiResult<()>;
    async fn get_blog_by_title(&self, title: &str) -> ApiResult<BlogPost>;
    async fn list_blogs_by_tag(&self, tag: &str) -> ApiResult<Vec<BlogPost>>;
    async fn create_booking(
        &self,
        booking: &BookingSubmission,
        token: Option<&str>,
    ) -> ApiResult<BookingCreated>;
    async fn get_invoice(&self, id: &str, token: Option<&str>) -> ApiResult<Invoice>;
    async fn pay_invoice(
        &self,
        id: &str,
        payment: &PaymentRequest,
        token: Option<&str>,
    ) -> ApiResult<Value>;
    async fn fastcheck_invoice(&self, ref_number: &str) -> ApiResult<Invoice>;
    async fn fast_pickup(&self, request: &PickupRequest) -> ApiResult<Value>;
    async fn analytics_summary(&self, token: Option<&str>) -> ApiResult<AnalyticsSummary>;
    async fn recent_users(&self, token: Option<&str>) -> ApiResult<Vec<RecentUser>>;
    async fn invoice_summary(&self, token: Option<&str>) -> ApiResult<InvoiceSummary>;
}

/// Split a configured path such as `/invoices/abc/fastcheck` into segments.
fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

pub struct HttpStoreApi {
    base_url: Url,
    client: reqwest::Client,
    fastcheck_path: String,
    fast_pickup_path: String,
}

impl HttpStoreApi {
    pub fn new(config: &AppConfig) -> ApiResult<Self> {
        let base_url = Url::parse(&config.api_url)
            .map_err(|e| ApiError::Config(format!("invalid API_URL: {}", e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::Config("API_URL cannot be a base URL".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(config.api_timeout)
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;

        Ok(Self {
            base_url,
            client,
            fastcheck_path: config.fastcheck_path.clone(),
            fast_pickup_path: config.fast_pickup_path.clone(),
        })
    }

    /// Build an endpoint URL from path segments; each segment is percent
    /// encoded, and an empty final segment yields a trailing slash.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn request(&self, method: Method, url: Url, token: Option<&str>) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let response = builder.send().await?;
        let status = response.status();
        let url = response.url().clone();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("Upstream {} responded {}", url.path(), status);
            return Err(ApiError::from_status(status.as_u16(), &body));
        }

        let body = response.text().await?;
        // Some write endpoints answer with an empty body.
        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        serde_json::from_str(body).map_err(|e| {
            log::error!("Failed to decode response from {}: {}", url.path(), e);
            ApiError::Decode(e.to_string())
        })
    }

    pub async fn get_data<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
        token: Option<&str>,
    ) -> ApiResult<T> {
        let mut url = self.endpoint(segments);
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        log::debug!("GET {}", url.path());
        self.send(self.request(Method::GET, url, token)).await
    }

    pub async fn post_data<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
        token: Option<&str>,
    ) -> ApiResult<T> {
        let url = self.endpoint(segments);
        log::debug!("POST {}", url.path());
        self.send(self.request(Method::POST, url, token).json(body))
            .await
    }

    pub async fn put_data<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
        token: Option<&str>,
    ) -> ApiResult<T> {
        let url = self.endpoint(segments);
        log::debug!("PUT {}", url.path());
        self.send(self.request(Method::PUT, url, token).json(body))
            .await
    }

    pub async fn delete_data(&self, segments: &[&str], token: Option<&str>) -> ApiResult<()> {
        let url = self.endpoint(segments);
        log::debug!("DELETE {}", url.path());
        let _: Value = self.send(self.request(Method::DELETE, url, token)).await?;
        Ok(())
    }
}

#[async_trait]
impl StoreApi for HttpStoreApi {
    async fn list_trips(&self, query: &TripQuery) -> ApiResult<Vec<Trip>> {
        let mut params = Vec::new();
        if let Some(limit) = query.limit {
            params.push(("limit", limit.to_string()));
        }
        if let Some(exclude) = &query.exclude {
            params.push(("exclude", exclude.clone()));
        }
        if let Some(package_id) = &query.package_id {
            params.push(("package_id", package_id.clone()));
        }
        self.get_data(&["trips", ""], &params, None).await
    }

    async fn get_trip(&self, id: &str) -> ApiResult<Trip> {
        self.get_data(&["trips", id], &[], None).await
    }

    async fn list_packages(&self) -> ApiResult<Vec<Package>> {
        self.get_data(&["packages", ""], &[], None).await
    }

    async fn get_package(&self, id: &str) -> ApiResult<Package> {
        self.get_data(&["packages", id], &[], None).await
    }

    async fn list_courses(&self) -> ApiResult<Vec<Course>> {
        self.get_data(&["courses"], &[], None).await
    }

    async fn get_course_with_content(&self, id: &str) -> ApiResult<Course> {
        self.get_data(&["courses", id, "with-content"], &[], None)
            .await
    }

    async fn list_best_selling(&self) -> ApiResult<Vec<BestSellingEntry>> {
        let entries: Vec<Value> = self.get_data(&["best-selling"], &[], None).await?;
        Ok(lenient_items(entries, "best-selling entry"))
    }

    async fn create_best_selling(
        &self,
        entry: &NewBestSellingEntry,
        token: Option<&str>,
    ) -> ApiResult<BestSellingEntry> {
        self.post_data(&["best-selling"], entry, token).await
    }

    async fn delete_best_selling(&self, id: &str, token: Option<&str>) -> ApiResult<()> {
        self.delete_data(&["best-selling", id], token).await
    }

    async fn get_blog_by_title(&self, title: &str) -> ApiResult<BlogPost> {
        self.get_data(&["blogs", "title", title], &[], None).await
    }

    async fn list_blogs_by_tag(&self, tag: &str) -> ApiResult<Vec<BlogPost>> {
        self.get_data(&["blogs", "tag", tag], &[], None).await
    }

    async fn create_booking(
        &self,
        booking: &BookingSubmission,
        token: Option<&str>,
    ) -> ApiResult<BookingCreated> {
        self.post_data(&["bookings"], booking, token).await
    }

    async fn get_invoice(&self, id: &str, token: Option<&str>) -> ApiResult<Invoice> {
        self.get_data(&["invoices", id], &[], token).await
    }

    async fn pay_invoice(
        &self,
        id: &str,
        payment: &PaymentRequest,
        token: Option<&str>,
    ) -> ApiResult<Value> {
        self.post_data(&["invoices", id, "pay"], payment, token)
            .await
    }

    async fn fastcheck_invoice(&self, ref_number: &str) -> ApiResult<Invoice> {
        let segments = path_segments(&self.fastcheck_path);
        self.get_data(&segments, &[("ref_number", ref_number.to_string())], None)
            .await
    }

    async fn fast_pickup(&self, request: &PickupRequest) -> ApiResult<Value> {
        let segments = path_segments(&self.fast_pickup_path);
        self.put_data(&segments, request, None).await
    }

    async fn analytics_summary(&self, token: Option<&str>) -> ApiResult<AnalyticsSummary> {
        self.get_data(&["analytics", "summary"], &[], token).await
    }

    async fn recent_users(&self, token: Option<&str>) -> ApiResult<Vec<RecentUser>> {
        self.get_data(&["users", "recent"], &[], token).await
    }

    async fn invoice_summary(&self, token: Option<&str>) -> ApiResult<InvoiceSummary> {
        self.get_data(&["invoices", "summary"], &[], token).await
    }
}
