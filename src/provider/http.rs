//! HTTP client for the wallet provider API.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{RawSignRequest, WalletProvider};
use crate::error::{FlowError, FlowResult};
use crate::wallet::{ChainType, Wallet};

/// Client for the provider's REST API.
///
/// Every request carries the application id in an `x-app-id` header;
/// request and response bodies are camelCase JSON.
pub struct HttpWalletProvider {
    client: reqwest::Client,
    base_url: String,
    app_id: String,
}

#[derive(Deserialize)]
struct WalletListResponse {
    wallets: Vec<Wallet>,
}

#[derive(Deserialize)]
struct CreateWalletResponse {
    wallet: Wallet,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateWalletRequest {
    chain_type: ChainType,
}

#[derive(Deserialize)]
struct RawSignResponse {
    signature: String,
}

/// Error body shape returned by the provider on non-2xx responses.
#[derive(Deserialize)]
struct ProviderErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl HttpWalletProvider {
    pub fn new(base_url: impl Into<String>, app_id: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
            app_id: app_id.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Extract the provider's error message from a failed response, falling
    /// back to the HTTP status line when the body is not parseable.
    async fn error_from_response(response: reqwest::Response) -> FlowError {
        let status = response.status();
        match response.json::<ProviderErrorBody>().await {
            Ok(body) => FlowError::Provider(
                body.error
                    .or(body.message)
                    .unwrap_or_else(|| status.to_string()),
            ),
            Err(_) => FlowError::Provider(status.to_string()),
        }
    }
}

#[async_trait]
impl WalletProvider for HttpWalletProvider {
    async fn list_wallets(&self) -> FlowResult<Vec<Wallet>> {
        let response = self
            .client
            .get(self.url("/v1/wallets"))
            .header("x-app-id", &self.app_id)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body: WalletListResponse = response.json().await?;
        Ok(body.wallets)
    }

    async fn create_wallet(&self, chain: ChainType) -> FlowResult<Wallet> {
        tracing::info!(chain = %chain, "requesting wallet creation");

        let response = self
            .client
            .post(self.url("/v1/wallets"))
            .header("x-app-id", &self.app_id)
            .json(&CreateWalletRequest { chain_type: chain })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body: CreateWalletResponse = response.json().await?;
        Ok(body.wallet)
    }

    async fn raw_sign(&self, request: &RawSignRequest) -> FlowResult<String> {
        tracing::info!(wallet_id = %request.wallet_id, "requesting raw signature");

        let response = self
            .client
            .post(self.url("/v1/wallets/raw_sign"))
            .header("x-app-id", &self.app_id)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body: RawSignResponse = response.json().await?;
        Ok(body.signature)
    }
}
