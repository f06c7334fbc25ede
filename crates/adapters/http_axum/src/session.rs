//! Session cookie handling.
//!
//! The cookie is `HttpOnly`, `SameSite=Lax`, scoped to `/` and lives for
//! seven days. `Secure` is added when the server is configured for HTTPS.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};

use gearguard_domain::session::{SESSION_COOKIE_NAME, SESSION_MAX_AGE_SECS, SessionToken};

/// Attributes applied to every session cookie the server emits.
#[derive(Debug, Clone, Copy, Default)]
pub struct CookieSettings {
    /// Add the `Secure` attribute.
    pub secure: bool,
}

impl CookieSettings {
    /// `Set-Cookie` value carrying `token`.
    #[must_use]
    pub fn issue(self, token: &SessionToken) -> String {
        self.render(token.as_str(), SESSION_MAX_AGE_SECS)
    }

    /// `Set-Cookie` value that expires the session immediately.
    #[must_use]
    pub fn clear(self) -> String {
        self.render("", 0)
    }

    fn render(self, value: &str, max_age: u64) -> String {
        let mut cookie = format!(
            "{SESSION_COOKIE_NAME}={value}; HttpOnly; SameSite=Lax; Path=/; Max-Age={max_age}"
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }

    /// Headers setting the cookie to `value`.
    pub(crate) fn headers(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(cookie) {
            headers.insert(SET_COOKIE, value);
        }
        headers
    }
}

/// Read the session token from the request's `Cookie` headers, if any.
#[must_use]
pub fn token_from_headers(headers: &HeaderMap) -> Option<SessionToken> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE_NAME && !value.is_empty())
        .map(|(_, value)| SessionToken::from_raw(value))
}
