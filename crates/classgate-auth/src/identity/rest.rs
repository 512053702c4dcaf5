//! REST client for an identity-toolkit style provider.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use classgate_core::config::identity::IdentityConfig;
use classgate_core::error::{AppError, ErrorKind};
use classgate_core::result::AppResult;

use super::{Identity, IdentityProvider};

/// HTTP adapter for the identity provider's REST API.
#[derive(Debug, Clone)]
pub struct RestIdentityProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CredentialRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OobCodeRequest<'a> {
    request_type: &'a str,
    id_token: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CredentialResponse {
    email: String,
    id_token: String,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderError,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    message: String,
}

impl RestIdentityProvider {
    /// Create the provider client from configuration.
    pub fn new(config: &IdentityConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build identity provider client",
                    e,
                )
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    fn endpoint(&self, operation: &str) -> String {
        format!("{}/{operation}?key={}", self.base_url, self.api_key)
    }

    /// POST a request and decode the response, surfacing the provider's
    /// own error message verbatim on rejection.
    async fn post<Req, Resp>(&self, operation: &str, body: &Req) -> AppResult<Resp>
    where
        Req: Serialize + Sync,
        Resp: for<'de> Deserialize<'de>,
    {
        debug!(operation, "Calling identity provider");

        let response = self
            .client
            .post(self.endpoint(operation))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Identity provider unreachable: {e}"),
                    e,
                )
            })?;

        if response.status().is_success() {
            response.json::<Resp>().await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Malformed identity provider response: {e}"),
                    e,
                )
            })
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ProviderErrorBody>(&text)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| format!("{status}: {text}"));
            Err(AppError::authentication(message))
        }
    }
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    async fn create_account(&self, email: &str, password: &str) -> AppResult<Identity> {
        let response: CredentialResponse = self
            .post(
                "accounts:signUp",
                &CredentialRequest {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;

        Ok(Identity {
            email: response.email,
            id_token: response.id_token,
        })
    }

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<Identity> {
        let response: CredentialResponse = self
            .post(
                "accounts:signInWithPassword",
                &CredentialRequest {
                    email,
                    password,
                    return_secure_token: true,
                },
            )
            .await?;

        Ok(Identity {
            email: response.email,
            id_token: response.id_token,
        })
    }

    async fn send_verification(&self, identity: &Identity) -> AppResult<()> {
        let _: serde_json::Value = self
            .post(
                "accounts:sendOobCode",
                &OobCodeRequest {
                    request_type: "VERIFY_EMAIL",
                    id_token: &identity.id_token,
                },
            )
            .await?;
        Ok(())
    }
}
