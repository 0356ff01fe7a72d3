use std::env;
use std::time::Duration;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const API_TIMEOUT_SECS: u64 = 10;
const CURRENCY_SYMBOL: &str = "€";
const FASTCHECK_PATH: &str = "/invoices/k9dj3nf8s2mxp7q1wb5c/fastcheck";
const FAST_PICKUP_PATH: &str = "/invoices/m7x4w9h2t6n8v3qp5r1k/fast-pickup";
const LOOKUP_RATE_LIMIT: u32 = 10;
const LOOKUP_RATE_WINDOW_SECS: u64 = 60;
const RELATED_TRIPS_LIMIT: u32 = 3;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub api_url: String,
    pub api_timeout: Duration,
    /// Sessions are rejected when no secret is configured.
    pub jwt_secret: Option<String>,
    pub currency_symbol: String,
    pub fastcheck_path: String,
    pub fast_pickup_path: String,
    pub lookup_rate_limit: u32,
    pub lookup_rate_window: Duration,
    pub related_trips_limit: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = env::var("API_URL")
            .or_else(|_| env::var("NEXT_PUBLIC_API_URL"))
            .map_err(|_| ConfigError::Missing("API_URL"))?;

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| HOST.to_string()),
            port: parse_or("PORT", PORT),
            api_url: api_url.trim_end_matches('/').to_string(),
            api_timeout: Duration::from_secs(parse_or("API_TIMEOUT_SECS", API_TIMEOUT_SECS)),
            jwt_secret: env::var("JWT_SECRET").ok().filter(|s| !s.is_empty()),
            currency_symbol: env::var("CURRENCY_SYMBOL")
                .unwrap_or_else(|_| CURRENCY_SYMBOL.to_string()),
            fastcheck_path: env::var("FASTCHECK_PATH")
                .unwrap_or_else(|_| FASTCHECK_PATH.to_string()),
            fast_pickup_path: env::var("FAST_PICKUP_PATH")
                .unwrap_or_else(|_| FAST_PICKUP_PATH.to_string()),
            lookup_rate_limit: parse_or("LOOKUP_RATE_LIMIT", LOOKUP_RATE_LIMIT),
            lookup_rate_window: Duration::from_secs(parse_or(
                "LOOKUP_RATE_WINDOW_SECS",
                LOOKUP_RATE_WINDOW_SECS,
            )),
            related_trips_limit: parse_or("RELATED_TRIPS_LIMIT", RELATED_TRIPS_LIMIT),
        })
    }

    /// Defaults pointed at the given upstream; used by tests and local tooling.
    pub fn for_api(api_url: &str) -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_timeout: Duration::from_secs(API_TIMEOUT_SECS),
            jwt_secret: None,
            currency_symbol: CURRENCY_SYMBOL.to_string(),
            fastcheck_path: FASTCHECK_PATH.to_string(),
            fast_pickup_path: FAST_PICKUP_PATH.to_string(),
            lookup_rate_limit: LOOKUP_RATE_LIMIT,
            lookup_rate_window: Duration::from_secs(LOOKUP_RATE_WINDOW_SECS),
            related_trips_limit: RELATED_TRIPS_LIMIT,
        }
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
