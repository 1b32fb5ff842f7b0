use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde_json::json;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::investment::Investment;
use crate::models::plan::PlanKey;
use crate::models::user::User;

use super::traits::BackendClient;

/// reqwest-backed `BackendClient` against the Tipstar REST backend.
///
/// Auth is a bearer token on every request once set. Error bodies are
/// `{"message": "..."}`; the message is surfaced in `CoreError::Api` when
/// parseable, the raw status otherwise.
pub struct HttpBackend {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Turn a non-success response into `CoreError::Api`, preferring the
    /// backend's own message field.
    async fn api_error(endpoint: &str, response: reqwest::Response) -> CoreError {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => format!("HTTP {status}"),
        };
        CoreError::Api {
            endpoint: endpoint.to_string(),
            message,
        }
    }
}

// ── Backend response types ──────────────────────────────────────────

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Deserialize)]
struct VerifyResponse {
    user: User,
}

#[derive(Deserialize)]
struct BalanceResponse {
    balance: f64,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl BackendClient for HttpBackend {
    fn name(&self) -> &str {
        "HttpBackend"
    }

    fn set_auth_token(&mut self, token: Option<&str>) {
        self.token = token.map(str::to_string);
    }

    async fn verify_token(&self, token: &str) -> Result<User, CoreError> {
        let endpoint = "/verify";
        let response = self
            .client
            .get(self.url(endpoint))
            .bearer_auth(token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(endpoint, response).await);
        }
        let body: VerifyResponse = response.json().await?;
        Ok(body.user)
    }

    async fn fetch_user(&self, user_id: &str) -> Result<User, CoreError> {
        let endpoint = format!("/api/users/{user_id}");
        let response = self
            .authorize(self.client.get(self.url(&endpoint)))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(&endpoint, response).await);
        }
        Ok(response.json().await?)
    }

    async fn fetch_wallet_balance(&self, user_id: &str) -> Result<f64, CoreError> {
        let endpoint = format!("/api/wallet/{user_id}/balance");
        let response = self
            .authorize(self.client.get(self.url(&endpoint)))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(&endpoint, response).await);
        }
        let body: BalanceResponse = response.json().await?;
        Ok(body.balance)
    }

    async fn fetch_active_investment(
        &self,
        user_id: &str,
    ) -> Result<Option<Investment>, CoreError> {
        let endpoint = format!("/investments/{user_id}");
        let response = self
            .authorize(self.client.get(self.url(&endpoint)))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::api_error(&endpoint, response).await);
        }
        Ok(Some(response.json().await?))
    }

    async fn create_investment(
        &self,
        user_id: &str,
        plan: PlanKey,
        amount: f64,
    ) -> Result<Investment, CoreError> {
        let endpoint = "/investments/create";
        let payload = json!({
            "userId": user_id,
            "planId": plan.to_string(),
            "amount": amount,
        });
        let response = self
            .authorize(self.client.post(self.url(endpoint)))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(endpoint, response).await);
        }
        Ok(response.json().await?)
    }

    async fn withdraw_investment(&self, investment_id: &str) -> Result<(), CoreError> {
        let endpoint = format!("/investments/{investment_id}/withdraw");
        let response = self
            .authorize(self.client.post(self.url(&endpoint)))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(CoreError::InvestmentNotFound(investment_id.to_string()));
        }
        if !response.status().is_success() {
            return Err(Self::api_error(&endpoint, response).await);
        }
        Ok(())
    }
}
