//! Live adapter for the `AliasSource` port using the platform HTTP API.

use reqwest::Client;
use serde::Deserialize;

use crate::ports::fetch::{AliasFuture, AliasRequest, AliasSource, ServerAlias};

/// Live alias source that calls the hosting platform's REST API.
pub struct LiveAliasSource {
    client: Client,
}

impl LiveAliasSource {
    /// Creates a new live alias source.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for LiveAliasSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Successful response body from the alias endpoint.
#[derive(Deserialize)]
struct AliasResponse {
    aliases: Vec<ServerAlias>,
}

/// Error response body from the platform API.
#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

/// Detail inside a platform API error response.
#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl AliasSource for LiveAliasSource {
    fn fetch_aliases(&self, request: &AliasRequest) -> AliasFuture<'_> {
        let endpoint = request.endpoint.clone();
        let token = request.token.clone();

        Box::pin(async move {
            let response = self
                .client
                .get(&endpoint)
                .bearer_auth(&token)
                .send()
                .await
                .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("alias request failed: {e}").into()
                })?;

            let status = response.status();
            let response_text =
                response.text().await.map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("failed to read alias response: {e}").into()
                })?;

            if !status.is_success() {
                let msg = serde_json::from_str::<ApiError>(&response_text)
                    .map(|e| e.error.message)
                    .unwrap_or(response_text);
                return Err(format!("platform API error ({}): {msg}", status.as_u16()).into());
            }

            let listing: AliasResponse = serde_json::from_str(&response_text).map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("failed to parse alias response: {e}").into()
                },
            )?;

            Ok(listing.aliases)
        })
    }
}
