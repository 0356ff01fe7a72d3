use std::future::{ready, Ready};

use actix_web::{
    dev::Payload, error::ErrorUnauthorized, web, Error, FromRequest, HttpMessage, HttpRequest,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

pub const SESSION_COOKIE: &str = "auth_token";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,     // subject (email)
    pub exp: usize,      // expiration time
    pub iat: usize,      // issued at
    pub user_id: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Request-scoped auth context. Handlers that need the signed-in user take a
/// `Session` (or `Option<Session>`) argument; the raw token is forwarded to
/// the upstream API as the bearer credential.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub claims: Claims,
}

impl Session {
    pub fn user_id(&self) -> &str {
        &self.claims.user_id
    }

    pub fn is_admin(&self) -> bool {
        self.claims.role.as_deref() == Some("admin")
    }
}

/// Bearer header first, then the session cookie set by the website.
pub fn token_from_request(req: &HttpRequest) -> Option<String> {
    let from_header = req
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty());

    from_header.or_else(|| {
        req.cookie(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|token| !token.is_empty())
    })
}

pub fn decode_session(token: &str, secret: &str) -> Result<Session, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.set_required_spec_claims(&["exp", "iat", "sub", "user_id"]);

    let data = decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)?;
    Ok(Session {
        token: token.to_string(),
        claims: data.claims,
    })
}

pub fn session_from_request(req: &HttpRequest) -> Result<Session, Error> {
    if let Some(session) = req.extensions().get::<Session>() {
        return Ok(session.clone());
    }

    let token = token_from_request(req).ok_or_else(|| ErrorUnauthorized("No authorization"))?;
    let secret = req
        .app_data::<web::Data<AppConfig>>()
        .and_then(|config| config.jwt_secret.clone())
        .ok_or_else(|| {
            log::error!("JWT_SECRET not configured, rejecting session");
            ErrorUnauthorized("Sessions are not available")
        })?;

    let session = decode_session(&token, &secret).map_err(|err| {
        log::debug!("Error decoding token: {:?}", err);
        ErrorUnauthorized("Invalid token")
    })?;
    req.extensions_mut().insert(session.clone());
    Ok(session)
}

impl FromRequest for Session {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(session_from_request(req))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret";

    fn token(role: Option<&str>, exp_offset: i64) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: "diver@example.com".to_string(),
            exp: (now + exp_offset) as usize,
            iat: now as usize,
            user_id: "u-1".to_string(),
            role: role.map(str::to_string),
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET.as_bytes())).unwrap()
    }

    fn config() -> web::Data<AppConfig> {
        let mut config = AppConfig::for_api("https://api.example.com");
        config.jwt_secret = Some(SECRET.to_string());
        web::Data::new(config)
    }

    #[test]
    fn test_session_from_header() {
        let req = TestRequest::default()
            .app_data(config())
            .insert_header(("Authorization", format!("Bearer {}", token(Some("admin"), 3600))))
            .to_http_request();

        let session = session_from_request(&req).unwrap();
        assert_eq!(session.user_id(), "u-1");
        assert!(session.is_admin());
    }

    #[test]
    fn test_session_from_cookie() {
        let req = TestRequest::default()
            .app_data(config())
            .cookie(actix_web::cookie::Cookie::new(SESSION_COOKIE, token(None, 3600)))
            .to_http_request();

        let session = session_from_request(&req).unwrap();
        assert!(!session.is_admin());
    }

    #[test]
    fn test_expired_and_missing_tokens_rejected() {
        let req = TestRequest::default()
            .app_data(config())
            .insert_header(("Authorization", format!("Bearer {}", token(None, -3600))))
            .to_http_request();
        assert!(session_from_request(&req).is_err());

        let req = TestRequest::default().app_data(config()).to_http_request();
        assert!(session_from_request(&req).is_err());
    }

    #[test]
    fn test_no_secret_rejects() {
        let req = TestRequest::default()
            .app_data(web::Data::new(AppConfig::for_api("https://api.example.com")))
            .insert_header(("Authorization", format!("Bearer {}", token(None, 3600))))
            .to_http_request();
        assert!(session_from_request(&req).is_err());
    }
}
