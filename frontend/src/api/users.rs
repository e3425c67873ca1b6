use reqwest::Method;

use super::client::ApiClient;
use super::types::{ApiError, CompleteProfileRequest, MessageResponse};

impl ApiClient {
    /// Profile completion for non-admin roles. On success the backend sets
    /// `profile_completed`.
    pub async fn complete_profile(
        &self,
        request: CompleteProfileRequest,
    ) -> Result<MessageResponse, ApiError> {
        let body = serde_json::to_value(&request)
            .map_err(|e| ApiError::unknown(format!("Failed to encode request: {}", e)))?;
        self.request(Method::POST, "/users/complete_profile/", Some(body), true)
            .await
    }
}
