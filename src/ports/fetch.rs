//! Alias download port for the platform API.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

/// Boxed future type alias used by [`AliasSource`] to keep the trait
/// dyn-compatible.
pub type AliasFuture<'a> = Pin<
    Box<dyn Future<Output = Result<Vec<ServerAlias>, Box<dyn Error + Send + Sync>>> + Send + 'a>,
>;

/// A request to download the account's server aliases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AliasRequest {
    /// The API endpoint to fetch from.
    pub endpoint: String,
    /// The account API token.
    pub token: String,
}

/// One remote server alias as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerAlias {
    /// Short name the user refers to the server by.
    pub name: String,
    /// Hostname or address of the server.
    pub host: String,
    /// Login user, when the platform assigns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// Downloads server aliases from the hosting platform.
pub trait AliasSource: Send + Sync {
    /// Fetches the alias list for the account identified by the request token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails (network, auth, rate-limit, etc.).
    fn fetch_aliases(&self, request: &AliasRequest) -> AliasFuture<'_>;
}
