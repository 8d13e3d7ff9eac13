//! Authentication strategies for Watson service clients.
//!
//! Exactly one strategy is active per client instance, resolved once at
//! construction and applied identically to every request:
//!
//! - [`Authenticator::iam`]: an IBM Cloud API key exchanged for a bearer
//!   token at the IAM endpoint; the token is cached and refreshed shortly
//!   before expiration.
//! - [`Authenticator::bearer`]: a caller-supplied bearer token attached
//!   verbatim.
//! - [`Authenticator::basic`]: username/password as an HTTP Basic header.
//! - [`Authenticator::no_auth`]: nothing attached.
//!
//! Credentials can be supplied explicitly or discovered through a
//! [`CredentialResolver`]; the crate ships [`EnvResolver`], which reads
//! `<SERVICE>_APIKEY` / `<SERVICE>_USERNAME` / `<SERVICE>_PASSWORD` /
//! `<SERVICE>_URL` from the environment (including a `.env` file).
//! A request-time failure to resolve or exchange credentials surfaces as
//! [`WatsonError::Auth`], never as a transport error.

use std::time::{Duration, Instant};

use base64::Engine as _;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::debug;
use url::form_urlencoded;

use crate::error::{WatsonError, WatsonResult};

/// IBM Cloud IAM token endpoint.
pub const IAM_TOKEN_URL: &str = "https://iam.cloud.ibm.com/identity/token";

/// Refresh the cached IAM token this long before it actually expires.
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(300);

// =============================================================================
// Credential resolution
// =============================================================================

/// Raw credential material for one service.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    /// Service endpoint override, if configured.
    pub url: Option<String>,
    /// IBM Cloud API key (exchanged for an IAM bearer token).
    pub api_key: Option<String>,
    /// Pre-obtained bearer token.
    pub bearer_token: Option<String>,
    /// Basic-auth username.
    pub username: Option<String>,
    /// Basic-auth password.
    pub password: Option<String>,
}

/// Resolves credentials for a named service.
///
/// Keeps process-wide environment reads out of the codec/transport layer:
/// the client only ever sees the resolved [`Credentials`].
pub trait CredentialResolver {
    fn resolve(&self, service_name: &str) -> WatsonResult<Credentials>;
}

/// Environment-backed resolver.
///
/// For a service named `conversation` it reads `CONVERSATION_APIKEY`,
/// `CONVERSATION_USERNAME`, `CONVERSATION_PASSWORD`, `CONVERSATION_URL`
/// (hyphens and spaces in the service name become underscores). A `.env`
/// file in the working directory is honored when present.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvResolver;

impl CredentialResolver for EnvResolver {
    fn resolve(&self, service_name: &str) -> WatsonResult<Credentials> {
        // Missing .env is fine; explicit env vars still apply.
        let _ = dotenvy::dotenv();

        let prefix = service_name.to_uppercase().replace(['-', ' '], "_");
        let read = |suffix: &str| {
            std::env::var(format!("{prefix}_{suffix}"))
                .ok()
                .filter(|v| !v.trim().is_empty())
        };

        let creds = Credentials {
            url: read("URL"),
            api_key: read("APIKEY").or_else(|| read("API_KEY")),
            bearer_token: read("BEARER_TOKEN"),
            username: read("USERNAME"),
            password: read("PASSWORD"),
        };

        if creds.api_key.is_none() && creds.bearer_token.is_none() && creds.username.is_none() {
            return Err(WatsonError::Auth(format!(
                "no credentials found in environment for service '{service_name}' \
                 (looked for {prefix}_APIKEY, {prefix}_BEARER_TOKEN, {prefix}_USERNAME)"
            )));
        }

        Ok(creds)
    }
}

// =============================================================================
// IAM token management
// =============================================================================

/// Cached IAM token with expiration tracking.
#[derive(Debug, Clone)]
struct IamToken {
    access_token: String,
    expires_at: Instant,
}

impl IamToken {
    fn is_expired(&self) -> bool {
        self.expires_at <= Instant::now() + TOKEN_EXPIRY_MARGIN
    }
}

/// IAM token response from IBM Cloud.
#[derive(Debug, Deserialize)]
struct IamTokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: u64,
}

/// Exchange an API key for an IAM bearer token.
async fn fetch_iam_token(http: &reqwest::Client, api_key: &str) -> WatsonResult<IamToken> {
    let encoded_api_key: String = form_urlencoded::byte_serialize(api_key.as_bytes()).collect();

    let response = http
        .post(IAM_TOKEN_URL)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(format!(
            "grant_type=urn:ibm:params:oauth:grant-type:apikey&apikey={encoded_api_key}"
        ))
        .send()
        .await
        .map_err(|e| WatsonError::Auth(format!("failed to request IAM token: {e}")))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(WatsonError::Auth(format!(
            "IAM token request failed ({status}): {body}"
        )));
    }

    let token_response: IamTokenResponse = response
        .json()
        .await
        .map_err(|e| WatsonError::Auth(format!("failed to parse IAM token response: {e}")))?;

    // Default to 1 hour if expires_in is not provided.
    let expires_in = if token_response.expires_in > 0 {
        token_response.expires_in
    } else {
        3600
    };
    let expires_at = Instant::now() + Duration::from_secs(expires_in);

    debug!(expires_in, "IAM token fetched");

    Ok(IamToken {
        access_token: token_response.access_token,
        expires_at,
    })
}

// =============================================================================
// Authenticator
// =============================================================================

/// Authentication strategy attached to every outgoing request.
#[derive(Debug)]
pub struct Authenticator {
    strategy: Strategy,
}

#[derive(Debug)]
enum Strategy {
    /// IBM Cloud API key; exchanged for a cached IAM bearer token.
    Iam {
        api_key: String,
        token: RwLock<Option<IamToken>>,
    },
    /// Pre-obtained bearer token, attached unchanged to every request.
    Bearer(String),
    /// HTTP Basic credentials.
    Basic { username: String, password: String },
    /// No authentication header.
    NoAuth,
}

impl Authenticator {
    /// IAM strategy from an API key.
    pub fn iam(api_key: impl Into<String>) -> WatsonResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(WatsonError::Auth("API key must not be empty".to_string()));
        }
        Ok(Self {
            strategy: Strategy::Iam {
                api_key,
                token: RwLock::new(None),
            },
        })
    }

    /// Bearer strategy from an existing token.
    pub fn bearer(token: impl Into<String>) -> WatsonResult<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(WatsonError::Auth(
                "bearer token must not be empty".to_string(),
            ));
        }
        Ok(Self {
            strategy: Strategy::Bearer(token),
        })
    }

    /// Basic strategy from username and password.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> WatsonResult<Self> {
        let username = username.into();
        let password = password.into();
        if username.trim().is_empty() {
            return Err(WatsonError::Auth("username must not be empty".to_string()));
        }
        Ok(Self {
            strategy: Strategy::Basic { username, password },
        })
    }

    /// No authentication header.
    pub fn no_auth() -> Self {
        Self {
            strategy: Strategy::NoAuth,
        }
    }

    /// Pick the strategy a set of resolved credentials implies:
    /// bearer token first, then API key, then basic.
    pub fn from_credentials(creds: &Credentials) -> WatsonResult<Self> {
        if let Some(token) = &creds.bearer_token {
            return Authenticator::bearer(token.clone());
        }
        if let Some(api_key) = &creds.api_key {
            return Authenticator::iam(api_key.clone());
        }
        if let Some(username) = &creds.username {
            return Authenticator::basic(
                username.clone(),
                creds.password.clone().unwrap_or_default(),
            );
        }
        Err(WatsonError::Auth(
            "credentials carry neither a bearer token, an API key, nor a username".to_string(),
        ))
    }

    /// Produce the `Authorization` header value for the next request, or
    /// `None` for [`Authenticator::no_auth`].
    ///
    /// For IAM this may perform a token exchange over `http`; the token is
    /// cached so subsequent calls are header-only.
    pub async fn authorization_header(
        &self,
        http: &reqwest::Client,
    ) -> WatsonResult<Option<String>> {
        match &self.strategy {
            Strategy::Iam { api_key, token } => {
                {
                    let guard = token.read().await;
                    if let Some(cached) = guard.as_ref() {
                        if !cached.is_expired() {
                            return Ok(Some(format!("Bearer {}", cached.access_token)));
                        }
                    }
                }

                let fresh = fetch_iam_token(http, api_key).await?;
                let header = format!("Bearer {}", fresh.access_token);
                *token.write().await = Some(fresh);
                Ok(Some(header))
            }
            Strategy::Bearer(token) => Ok(Some(format!("Bearer {token}"))),
            Strategy::Basic { username, password } => {
                let raw = format!("{username}:{password}");
                let encoded = base64::engine::general_purpose::STANDARD.encode(raw);
                Ok(Some(format!("Basic {encoded}")))
            }
            Strategy::NoAuth => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bearer_header_is_deterministic() {
        let auth = Authenticator::bearer("my-token").unwrap();
        let http = reqwest::Client::new();
        for _ in 0..3 {
            let header = auth.authorization_header(&http).await.unwrap();
            assert_eq!(header.as_deref(), Some("Bearer my-token"));
        }
    }

    #[tokio::test]
    async fn test_basic_header_encoding() {
        let auth = Authenticator::basic("user", "pass").unwrap();
        let http = reqwest::Client::new();
        let header = auth.authorization_header(&http).await.unwrap();
        // base64("user:pass")
        assert_eq!(header.as_deref(), Some("Basic dXNlcjpwYXNz"));
    }

    #[tokio::test]
    async fn test_noauth_attaches_nothing() {
        let http = reqwest::Client::new();
        let header = Authenticator::no_auth()
            .authorization_header(&http)
            .await
            .unwrap();
        assert!(header.is_none());
    }

    #[test]
    fn test_empty_api_key_rejected() {
        assert!(matches!(
            Authenticator::iam("  "),
            Err(WatsonError::Auth(_))
        ));
    }

    #[tokio::test]
    async fn test_from_credentials_prefers_bearer() {
        let creds = Credentials {
            bearer_token: Some("tok".to_string()),
            api_key: Some("key".to_string()),
            ..Default::default()
        };
        let auth = Authenticator::from_credentials(&creds).unwrap();
        let http = reqwest::Client::new();
        let header = auth.authorization_header(&http).await.unwrap();
        assert_eq!(header.as_deref(), Some("Bearer tok"));
    }

    #[test]
    fn test_from_credentials_empty_is_error() {
        let creds = Credentials::default();
        assert!(Authenticator::from_credentials(&creds).is_err());
    }

    #[test]
    fn test_iam_token_expiry_margin() {
        let expired = IamToken {
            access_token: "t".to_string(),
            expires_at: Instant::now() + Duration::from_secs(60),
        };
        assert!(expired.is_expired());

        let fresh = IamToken {
            access_token: "t".to_string(),
            expires_at: Instant::now() + Duration::from_secs(3600),
        };
        assert!(!fresh.is_expired());
    }
}
