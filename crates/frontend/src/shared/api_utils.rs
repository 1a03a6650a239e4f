//! API utilities for frontend-backend communication
//!
//! Every REST call goes through the helpers below so that failures reach the
//! UI as one [`ApiError`] type and the access token is attached in one place.

use contracts::shared::error::ErrorBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::system::auth::storage;

/// Text shown to the user when the server gave no usable message
pub const FALLBACK_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Server { status: u16, message: Option<String> },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("failed to encode request: {0}")]
    Encode(String),
    #[error("browser window is not available")]
    NoWindow,
}

impl ApiError {
    /// Build a `Server` error from a non-2xx status and its raw body
    pub fn from_response_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.best_message().map(str::to_string));
        ApiError::Server { status, message }
    }

    /// Message for toasts: the server's own text, otherwise the fallback
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server {
                message: Some(m), ..
            } if !m.trim().is_empty() => m.clone(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }
}

/// Get the base URL for API requests
///
/// `API_BASE_URL` set at compile time wins; otherwise the base is derived
/// from the current window location with port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("API_BASE_URL") {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Path plus serialized query string (`/api/screens?page=0&size=10`)
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, qs))
    }
}

/// Full URL for a request; no base means there is no window to derive it from
fn endpoint(path: &str) -> Result<String, ApiError> {
    let base = api_base();
    if base.is_empty() {
        Err(ApiError::NoWindow)
    } else {
        Ok(format!("{}{}", base, path))
    }
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_response_body(status, &body);
    log::error!("{} {} -> {}", response.url(), status, error);
    Err(error)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    ensure_ok(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn send(request: Request) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| {
        log::error!("request failed: {}", e);
        ApiError::Network(e.to_string())
    })
}

/// `GET path` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let request = with_auth(Request::get(&endpoint(path)?))
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    read_json(send(request).await?).await
}

/// `POST path` with a JSON body and decode the JSON answer
pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let request = with_auth(Request::post(&endpoint(path)?))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    read_json(send(request).await?).await
}

/// `POST path` with a JSON body, ignoring whatever the server answers
pub async fn post_json_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let request = with_auth(Request::post(&endpoint(path)?))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    ensure_ok(send(request).await?).await.map(|_| ())
}

/// `POST path` with a multipart body; the browser sets the boundary header
pub async fn post_form(path: &str, form: web_sys::FormData) -> Result<(), ApiError> {
    let request = with_auth(Request::post(&endpoint(path)?))
        .body(form)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    ensure_ok(send(request).await?).await.map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::page::PageRequest;

    #[test]
    fn server_message_is_shown_verbatim() {
        let err = ApiError::from_response_body(409, r#"{"message":"Screen name already exists"}"#);
        assert_eq!(err.user_message(), "Screen name already exists");
    }

    #[test]
    fn unusable_bodies_fall_back_to_generic_text() {
        for body in ["", "<html>502</html>", r#"{"message":""}"#] {
            let err = ApiError::from_response_body(500, body);
            assert_eq!(err.user_message(), FALLBACK_MESSAGE);
        }
        assert_eq!(
            ApiError::Network("offline".into()).user_message(),
            FALLBACK_MESSAGE
        );
    }

    #[test]
    fn query_string_skips_missing_search() {
        let q = PageRequest {
            page: 2,
            size: 10,
            search: None,
        };
        assert_eq!(with_query("/api/screens", &q).unwrap(), "/api/screens?page=2&size=10");

        let q = PageRequest {
            search: Some("lobby".into()),
            ..q
        };
        assert_eq!(
            with_query("/api/screens", &q).unwrap(),
            "/api/screens?page=2&size=10&search=lobby"
        );
    }
}
