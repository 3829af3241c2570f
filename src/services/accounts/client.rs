use reqwest::Response;
use serde::Serialize;

use super::{SignupError, SignupRequest, SignupResponse};
use crate::services::http::ResponseExt;

#[derive(Debug, Clone)]
pub struct AccountsClient {
    http: reqwest::Client,
    base_url: String,
}

impl AccountsClient {
    pub fn new() -> Self {
        Self::with_base_url(
            option_env!("SIGNUP_API_URL")
                .unwrap_or("http://localhost:3000/api")
                .to_string(),
        )
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    async fn post_json<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response, SignupError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .json(body)
            .send()
            .await?;

        Ok(response)
    }

    pub async fn sign_up(&self, request: &SignupRequest) -> Result<SignupResponse, SignupError> {
        let response = self
            .post_json("signup", request)
            .await?
            .check_success()
            .await?;

        Ok(response.json().await?)
    }
}

impl Default for AccountsClient {
    fn default() -> Self {
        Self::new()
    }
}
