#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use actix_web::{middleware::Logger, web, App};
use async_trait::async_trait;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};

use dive_storefront::config::AppConfig;
use dive_storefront::middleware::auth::Claims;
use dive_storefront::models::best_selling::{BestSellingEntry, NewBestSellingEntry};
use dive_storefront::models::blog::BlogPost;
use dive_storefront::models::bookings::{BookingCreated, BookingSubmission};
use dive_storefront::models::course::Course;
use dive_storefront::models::dashboard::{AnalyticsSummary, InvoiceSummary, RecentUser};
use dive_storefront::models::invoice::{Invoice, PaymentRequest, PickupRequest};
use dive_storefront::models::lenient::lenient_items;
use dive_storefront::models::trip::{Package, Trip, TripQuery};
use dive_storefront::routes;
use dive_storefront::services::api_client::{
    ApiError, ApiResult, StoreApi, UPSTREAM_ERROR_MESSAGE,
};
use dive_storefront::services::lookup_limiter::LookupLimiter;

pub const JWT_SECRET: &str = "integration-secret";

/// In-memory stand-in for the upstream API.
#[derive(Default)]
pub struct MockStoreApi {
    pub trips: Vec<Trip>,
    pub packages: Vec<Package>,
    pub courses: Vec<Course>,
    /// Raw ranking payload, decoded per entry like the HTTP client does.
    pub best_selling: Vec<Value>,
    pub blogs: Vec<BlogPost>,
    pub invoices: Vec<Invoice>,
    pub fail_related_trips: bool,
    pub fail_packages: bool,
    pub fail_recent_users: bool,
    pub fail_pickup: bool,
    pub booking_error: Option<ApiError>,
    pub bookings: Mutex<Vec<BookingSubmission>>,
    pub pickups: Mutex<Vec<PickupRequest>>,
    pub tokens_seen: Mutex<Vec<Option<String>>>,
}

impl MockStoreApi {
    fn record_token(&self, token: Option<&str>) {
        self.tokens_seen
            .lock()
            .unwrap()
            .push(token.map(str::to_string));
    }
}

#[async_trait]
impl StoreApi for MockStoreApi {
    async fn list_trips(&self, query: &TripQuery) -> ApiResult<Vec<Trip>> {
        if self.fail_related_trips && query.exclude.is_some() {
            return Err(ApiError::Network("connection reset".to_string()));
        }
        let mut trips: Vec<Trip> = self
            .trips
            .iter()
            .filter(|t| query.exclude.as_deref() != Some(t.id.as_str()))
            .filter(|t| match &query.package_id {
                Some(p) => t.package_id.as_deref() == Some(p.as_str()),
                None => true,
            })
            .cloned()
            .collect();
        if let Some(limit) = query.limit {
            trips.truncate(limit as usize);
        }
        Ok(trips)
    }

    async fn get_trip(&self, id: &str) -> ApiResult<Trip> {
        self.trips
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn list_packages(&self) -> ApiResult<Vec<Package>> {
        if self.fail_packages {
            return Err(ApiError::Network("timeout".to_string()));
        }
        Ok(self.packages.clone())
    }

    async fn get_package(&self, id: &str) -> ApiResult<Package> {
        if self.fail_packages {
            return Err(ApiError::Network("timeout".to_string()));
        }
        self.packages
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn list_courses(&self) -> ApiResult<Vec<Course>> {
        Ok(self.courses.clone())
    }

    async fn get_course_with_content(&self, id: &str) -> ApiResult<Course> {
        self.courses
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn list_best_selling(&self) -> ApiResult<Vec<BestSellingEntry>> {
        Ok(lenient_items(self.best_selling.clone(), "best-selling entry"))
    }

    async fn create_best_selling(
        &self,
        entry: &NewBestSellingEntry,
        token: Option<&str>,
    ) -> ApiResult<BestSellingEntry> {
        self.record_token(token);
        Ok(BestSellingEntry {
            id: "new".to_string(),
            item_type: entry.item_type,
            item_id: entry.item_id.clone(),
            ranking_position: Some(entry.ranking_position),
            course: None,
            trip: None,
        })
    }

    async fn delete_best_selling(&self, id: &str, token: Option<&str>) -> ApiResult<()> {
        self.record_token(token);
        if self.best_selling.iter().any(|e| e["id"] == id) {
            Ok(())
        } else {
            Err(ApiError::NotFound)
        }
    }

    async fn get_blog_by_title(&self, title: &str) -> ApiResult<BlogPost> {
        self.blogs
            .iter()
            .find(|b| b.title == title)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn list_blogs_by_tag(&self, tag: &str) -> ApiResult<Vec<BlogPost>> {
        Ok(self
            .blogs
            .iter()
            .filter(|b| b.tags.iter().any(|t| t == tag))
            .cloned()
            .collect())
    }

    async fn create_booking(
        &self,
        booking: &BookingSubmission,
        token: Option<&str>,
    ) -> ApiResult<BookingCreated> {
        self.record_token(token);
        if let Some(err) = &self.booking_error {
            return Err(err.clone());
        }
        let mut bookings = self.bookings.lock().unwrap();
        bookings.push(booking.clone());
        Ok(BookingCreated {
            id: Some(format!("bk-{}", bookings.len())),
        })
    }

    async fn get_invoice(&self, id: &str, token: Option<&str>) -> ApiResult<Invoice> {
        self.record_token(token);
        self.invoices
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn pay_invoice(
        &self,
        id: &str,
        payment: &PaymentRequest,
        token: Option<&str>,
    ) -> ApiResult<Value> {
        self.record_token(token);
        Ok(json!({"invoice_id": id, "status": "paid", "method": payment.payment_method}))
    }

    async fn fastcheck_invoice(&self, ref_number: &str) -> ApiResult<Invoice> {
        self.invoices
            .iter()
            .find(|i| i.invoice_number == ref_number)
            .cloned()
            .ok_or(ApiError::NotFound)
    }

    async fn fast_pickup(&self, request: &PickupRequest) -> ApiResult<Value> {
        if self.fail_pickup {
            return Err(ApiError::Status {
                status: 503,
                message: UPSTREAM_ERROR_MESSAGE.to_string(),
            });
        }
        self.pickups.lock().unwrap().push(request.clone());
        Ok(json!({"success": true}))
    }

    async fn analytics_summary(&self, token: Option<&str>) -> ApiResult<AnalyticsSummary> {
        self.record_token(token);
        Ok(AnalyticsSummary {
            total_bookings: 12,
            total_revenue: 1840.0,
            active_trips: 4,
            total_users: 30,
        })
    }

    async fn recent_users(&self, _token: Option<&str>) -> ApiResult<Vec<RecentUser>> {
        if self.fail_recent_users {
            return Err(ApiError::Status {
                status: 500,
                message: "boom".to_string(),
            });
        }
        Ok(Vec::new())
    }

    async fn invoice_summary(&self, _token: Option<&str>) -> ApiResult<InvoiceSummary> {
        Ok(InvoiceSummary {
            paid: 3,
            pending: 2,
            overdue: 1,
            outstanding_amount: 420.0,
        })
    }
}

pub struct TestApp {
    pub api: Arc<MockStoreApi>,
    pub config: AppConfig,
    pub limiter: Arc<LookupLimiter>,
}

impl TestApp {
    pub fn new(api: MockStoreApi) -> Self {
        let mut config = AppConfig::for_api("https://api.example.com");
        config.jwt_secret = Some(JWT_SECRET.to_string());
        let limiter = Arc::new(LookupLimiter::new(3, Duration::from_secs(60)));
        Self {
            api: Arc::new(api),
            config,
            limiter,
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let api: Arc<dyn StoreApi> = self.api.clone();
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::from(api))
            .app_data(web::Data::new(self.config.clone()))
            .app_data(web::Data::from(self.limiter.clone()))
            .configure(routes::config)
    }
}

pub fn token(role: Option<&str>) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: "diver@example.com".to_string(),
        exp: (now + 3600) as usize,
        iat: now as usize,
        user_id: "user-1".to_string(),
        role: role.map(str::to_string),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn bearer(role: Option<&str>) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token(role)))
}

pub fn trip(value: Value) -> Trip {
    serde_json::from_value(value).unwrap()
}

pub fn sample_trips() -> Vec<Trip> {
    vec![
        trip(json!({
            "id": 1,
            "name": "Giftun Island",
            "images": ["giftun.jpg"],
            "adult_price": 90,
            "child_price": 45,
            "has_discount": true,
            "discount_always_available": true,
            "discount_percentage": 10,
            "duration": 480,
            "maxim_person": 8,
            "child_allowed": true,
            "package_id": 10,
            "included": [json!(["Lunch", "Snorkel gear"]).to_string()]
        })),
        trip(json!({
            "id": 2,
            "name": "Dolphin House",
            "adult_price": "90.00",
            "has_discount": true,
            "discount_always_available": false,
            "discount_requires_min_people": true,
            "discount_percentage": 10,
            "duration": 45,
            "package_id": 10
        })),
        trip(json!({
            "id": 3,
            "name": "Night Dive",
            "adult_price": 120,
            "duration": 120
        })),
    ]
}

pub fn sample_packages() -> Vec<Package> {
    vec![serde_json::from_value(json!({
        "id": 10,
        "name": "Red Sea Week",
        "images": ["week.jpg"],
        "is_image_list": true
    }))
    .unwrap()]
}

pub fn sample_invoice() -> Invoice {
    serde_json::from_value(json!({
        "id": 77,
        "invoice_number": "INV-2026-077",
        "status": "pending",
        "items": [{"description": "Giftun Island x2", "quantity": 2, "unit_price": 90, "total": 180}],
        "subtotal_amount": 180,
        "tax_amount": "0",
        "discount_amount": 0,
        "total_amount": 180,
        "currency": "EUR",
        "payment_history": [],
        "picked_up": false
    }))
    .unwrap()
}
