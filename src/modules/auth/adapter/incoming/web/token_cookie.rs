use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpResponse;
use serde::Serialize;
use utoipa::ToSchema;

use super::extractors::auth::TOKEN_COOKIE;
use crate::shared::api::ApiResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenData {
    pub token: String,
}

/// How the `token` cookie is issued alongside token responses.
#[derive(Debug, Clone)]
pub struct TokenCookieConfig {
    pub max_age_days: i64,
    /// Production only.
    pub secure: bool,
}

impl TokenCookieConfig {
    pub fn issue(&self, token: &str) -> Cookie<'static> {
        Cookie::build(TOKEN_COOKIE, token.to_string())
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(Duration::days(self.max_age_days))
            .finish()
    }

    /// Overwrites the cookie with a placeholder that expires in 10 seconds.
    pub fn cleared(&self) -> Cookie<'static> {
        Cookie::build(TOKEN_COOKIE, "none")
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(Duration::seconds(10))
            .finish()
    }

    /// `{success, data: {token}}` plus the cookie.
    pub fn token_response(&self, token: String) -> HttpResponse {
        let cookie = self.issue(&token);
        ApiResponse::success_with_cookie(TokenData { token }, cookie)
    }
}
