use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::error;
use serde::Deserialize;

use crate::auth::form::Credentials;
use crate::config;
use crate::error::AuthError;

/// What the auth service answered: a status and its payload, which is the
/// session token on 200 and a human readable error otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthResponse {
    pub status: u16,
    pub data: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    Token { token: String },
    Error { error: String },
    Message { message: String },
    Text(String),
}

impl AuthResponse {
    pub fn from_body(status: u16, body: &str) -> Self {
        let data = match serde_json::from_str::<Payload>(body) {
            Ok(Payload::Token { token }) => token,
            Ok(Payload::Error { error }) => error,
            Ok(Payload::Message { message }) => message,
            Ok(Payload::Text(text)) => text,
            Err(_) => body.trim().to_string(),
        };
        let data = if data.is_empty() && status != 200 {
            "Login failed".to_string()
        } else {
            data
        };
        Self { status, data }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

#[allow(async_fn_in_trait)]
pub trait AuthService {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError>;
}

/// Talks to `POST /api/login` on the backend.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpAuthService {
    url: String,
    timeout_ms: u32,
}

impl Default for HttpAuthService {
    fn default() -> Self {
        Self {
            url: config::login_url(),
            timeout_ms: config::REQUEST_TIMEOUT_MS,
        }
    }
}

impl HttpAuthService {
    async fn send(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError> {
        let response = Request::post(&self.url)
            .json(credentials)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| {
                error!("Network request failed: {}", e);
                AuthError::Network(e.to_string())
            })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        Ok(AuthResponse::from_body(status, &body))
    }
}

impl AuthService for HttpAuthService {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthResponse, AuthError> {
        let request = self.send(credentials);
        let timeout = TimeoutFuture::new(self.timeout_ms);
        futures::pin_mut!(request, timeout);
        match select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => {
                error!("Login request timed out after {}ms", self.timeout_ms);
                Err(AuthError::Timeout)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_object_yields_token() {
        let resp = AuthResponse::from_body(200, r#"{"token":"tok-xyz"}"#);
        assert!(resp.is_success());
        assert_eq!(resp.data, "tok-xyz");
    }

    #[test]
    fn error_object_yields_message() {
        let resp = AuthResponse::from_body(401, r#"{"error":"Invalid credentials"}"#);
        assert!(!resp.is_success());
        assert_eq!(resp.data, "Invalid credentials");
    }

    #[test]
    fn message_object_and_json_string_are_unwrapped() {
        assert_eq!(
            AuthResponse::from_body(404, r#"{"message":"User not found"}"#).data,
            "User not found"
        );
        assert_eq!(AuthResponse::from_body(200, r#""tok-xyz""#).data, "tok-xyz");
    }

    #[test]
    fn plain_text_body_is_kept() {
        let resp = AuthResponse::from_body(429, "Too many attempts\n");
        assert_eq!(resp.data, "Too many attempts");
    }

    #[test]
    fn empty_error_body_gets_fallback() {
        assert_eq!(AuthResponse::from_body(500, "").data, "Login failed");
    }
}
