use reqwest::Method;
use serde_json::{json, Value};

use super::client::ApiClient;
use super::types::{
    ApiError, ChangePasswordRequest, CompanySetupRequest, LoginRequest, LoginResponse,
    MessageResponse,
};

impl ApiClient {
    /// Unified login for every role; the backend decides which account
    /// table the credentials belong to.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let body = serde_json::to_value(&request)
            .map_err(|e| ApiError::unknown(format!("Failed to encode request: {}", e)))?;
        self.request(Method::POST, "/auth/login/", Some(body), false)
            .await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let _: Value = self
            .request(Method::POST, "/auth/logout/", Some(json!({})), true)
            .await?;
        Ok(())
    }

    /// Replaces a system-generated password. On success the backend clears
    /// the account's `temp_password` flag.
    pub async fn change_temp_password(
        &self,
        request: ChangePasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        let body = serde_json::to_value(&request)
            .map_err(|e| ApiError::unknown(format!("Failed to encode request: {}", e)))?;
        self.request(Method::POST, "/auth/change_temp_password/", Some(body), true)
            .await
    }

    /// Admin-only tenant setup. On success the backend sets
    /// `company_setup_completed`.
    pub async fn company_setup(
        &self,
        request: CompanySetupRequest,
    ) -> Result<MessageResponse, ApiError> {
        let body = serde_json::to_value(&request)
            .map_err(|e| ApiError::unknown(format!("Failed to encode request: {}", e)))?;
        self.request(Method::POST, "/auth/company_setup/", Some(body), true)
            .await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::MockBackend;

    #[tokio::test]
    async fn login_parses_user_and_tokens() {
        let backend = MockBackend::start();
        backend.stub(
            Method::POST,
            "/auth/login/",
            200,
            serde_json::json!({
                "user": {
                    "id": "u1",
                    "name": "Alice",
                    "email": "alice@example.com",
                    "role": "company_admin",
                    "temp_password": true,
                    "company_setup_completed": false
                },
                "access_token": "at-1",
                "refresh_token": "rt-1"
            }),
        );

        let client = ApiClient::new_with_base_url(backend.base_url());
        let response = client
            .login(LoginRequest {
                email: "alice@example.com".into(),
                password: "secret".into(),
            })
            .await
            .unwrap();
        assert_eq!(response.user.role, "company_admin");
        assert!(response.user.temp_password);
        assert_eq!(response.access_token, "at-1");
    }

    #[tokio::test]
    async fn login_propagates_backend_error() {
        let backend = MockBackend::start();
        backend.stub(
            Method::POST,
            "/auth/login/",
            401,
            serde_json::json!({ "error": "Invalid credentials" }),
        );

        let client = ApiClient::new_with_base_url(backend.base_url());
        let error = client
            .login(LoginRequest {
                email: "alice@example.com".into(),
                password: "wrong".into(),
            })
            .await
            .expect_err("should fail");
        assert_eq!(error.error, "Invalid credentials");
    }

    #[tokio::test]
    async fn change_temp_password_calls_unified_endpoint() {
        let backend = MockBackend::start();
        backend.stub(
            Method::POST,
            "/auth/change_temp_password/",
            200,
            serde_json::json!({ "message": "password updated" }),
        );

        let client = ApiClient::new_with_base_url(backend.base_url());
        let response = client
            .change_temp_password(ChangePasswordRequest {
                old_password: "temp".into(),
                new_password: "better-one".into(),
            })
            .await
            .unwrap();
        assert_eq!(response.message, "password updated");
    }
}
