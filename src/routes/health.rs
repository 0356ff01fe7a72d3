use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::config::AppConfig;
use crate::services::api_client::StoreApi;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(
    api: web::Data<dyn StoreApi>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let upstream_result = check_upstream(api.get_ref(), &config).await;
    health
        .services
        .insert("upstream_api".to_string(), upstream_result.clone());

    let session_result = check_sessions(&config);
    health
        .services
        .insert("sessions".to_string(), session_result.clone());

    // If any service is not ok, the overall status is degraded
    if upstream_result.status != "ok" || session_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

async fn check_upstream(api: &dyn StoreApi, config: &AppConfig) -> ServiceStatus {
    match tokio::time::timeout(config.api_timeout, api.list_packages()).await {
        Ok(Ok(_)) => ServiceStatus {
            status: "ok".to_string(),
            details: Some(format!("Reached {}", config.api_url)),
        },
        Ok(Err(e)) => {
            log::error!("Upstream health check failed: {}", e);

            ServiceStatus {
                status: "error".to_string(),
                details: Some(format!("Failed to reach upstream API: {}", e)),
            }
        }
        Err(_) => {
            log::error!("Upstream health check timed out after {:?}", config.api_timeout);

            ServiceStatus {
                status: "error".to_string(),
                details: Some("Upstream API timed out".to_string()),
            }
        }
    }
}

fn check_sessions(config: &AppConfig) -> ServiceStatus {
    match &config.jwt_secret {
        Some(_) => ServiceStatus {
            status: "ok".to_string(),
            details: Some("Session signing secret configured".to_string()),
        },
        None => ServiceStatus {
            status: "error".to_string(),
            details: Some("JWT_SECRET not configured".to_string()),
        },
    }
}
