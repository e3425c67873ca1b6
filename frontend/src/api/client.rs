use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::types::ApiError;
use crate::config;

/// Thin HTTP client over the backend API. The base URL is resolved from
/// runtime config unless a test pins it with [`ApiClient::new_with_base_url`].
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn get_auth_headers(&self) -> Result<reqwest::header::HeaderMap, ApiError> {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(token) = stored_access_token() {
            headers.insert(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", token)
                    .parse()
                    .map_err(|_| ApiError::request_failed("Invalid token format"))?,
            );
        }
        Ok(headers)
    }

    fn handle_unauthorized_status(status: StatusCode) {
        #[cfg(target_arch = "wasm32")]
        if status == StatusCode::UNAUTHORIZED {
            Self::clear_auth_session();
            Self::redirect_to_login_if_needed();
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = status;
    }

    #[cfg(target_arch = "wasm32")]
    fn clear_auth_session() {
        if let Some(storage) = crate::utils::storage::local_storage() {
            let _ = storage.remove_item("access_token");
            let _ = storage.remove_item("refresh_token");
            let _ = storage.remove_item("current_user");
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn redirect_to_login_if_needed() {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if let Ok(pathname) = location.pathname() {
                if pathname == crate::router::LOGIN_PATH {
                    return;
                }
            }
            let _ = location.set_href(crate::router::LOGIN_PATH);
        }
    }

    /// Shared request path for every endpoint. Host tests intercept the
    /// built request through the mock registry; everything else goes out
    /// over the wire.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        authorized: bool,
    ) -> Result<T, ApiError> {
        let base_url = self.resolved_base_url().await;
        let url = format!("{}{}", base_url, path);

        let mut builder = self.client.request(method, &url);
        if authorized {
            builder = builder.headers(self.get_auth_headers()?);
        }
        if let Some(body) = &body {
            builder = builder.json(body);
        }
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = mock_support::find_responder(request.url().as_str()) {
            let mocked = responder.respond(&request)?;
            if (200..300).contains(&mocked.status) {
                return serde_json::from_value(mocked.body)
                    .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)));
            }
            let error = serde_json::from_value::<ApiError>(mocked.body).unwrap_or_else(|_| {
                ApiError::unknown(format!("Request failed with status {}", mocked.status))
            });
            return Err(error);
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        Self::handle_unauthorized_status(status);
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            let error = response
                .json::<ApiError>()
                .await
                .unwrap_or_else(|_| ApiError::unknown(format!("Request failed with status {}", status)));
            Err(error)
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn stored_access_token() -> Option<String> {
    crate::utils::storage::local_storage()
        .and_then(|storage| storage.get_item("access_token").ok().flatten())
}

// Host builds have no browser storage; tests exercise unauthenticated
// request paths through the mock registry instead.
#[cfg(not(target_arch = "wasm32"))]
fn stored_access_token() -> Option<String> {
    None
}
