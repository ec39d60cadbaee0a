//! Internal HTTP client that handles authentication, microversion negotiation
//! headers and automatic token refresh.

use crate::{
    auth::application::service::login_service::LoginService,
    core::domain::{
        error::{IronicError, IronicResult, ValidationError},
        model::{
            client_config::ClientConfig,
            ironic_connection::{AuthMethod, IronicConnection},
            ironic_session::IronicSession,
            resource::Collection,
        },
    },
};
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::{Client, StatusCode, header::ACCEPT};
use serde::Deserialize;
use std::num::NonZeroU32;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use url::Url;

const API_VERSION_HEADER: &str = "X-OpenStack-Ironic-API-Version";
const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// Internal HTTP client that manages authentication and provides methods to
/// call the Bare Metal API.
///
/// Every request carries the configured `X-OpenStack-Ironic-API-Version`
/// header and, when Keystone authentication is in use, `X-Auth-Token`. If a
/// request receives a `401 Unauthorized` response, the client authenticates
/// once more with the stored credentials and retries the request.
#[derive(Debug)]
pub struct ApiClient {
    http_client: Client,
    connection: Arc<IronicConnection>,
    session: Arc<RwLock<Option<IronicSession>>>,
    config: Arc<ClientConfig>,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl ApiClient {
    /// Creates a new `ApiClient`. The client starts without a session.
    ///
    /// # Errors
    /// Returns `IronicError::Connection` if the HTTP client cannot be built and
    /// a validation error for a zero rate limit.
    pub fn new(connection: IronicConnection, config: ClientConfig) -> IronicResult<Self> {
        let http_client = Client::builder()
            .danger_accept_invalid_certs(connection.accept_invalid_certs())
            .build()
            .map_err(|e| IronicError::Connection(e.to_string()))?;

        let rate_limiter = config
            .rate_limit
            .map(|rl| -> IronicResult<_> {
                let per_second = non_zero("requests_per_second", rl.requests_per_second)?;
                let burst = non_zero("burst_size", rl.burst_size)?;
                let quota = Quota::per_second(per_second).allow_burst(burst);
                Ok(Arc::new(DefaultDirectRateLimiter::direct(quota)))
            })
            .transpose()?;

        Ok(Self {
            http_client,
            connection: Arc::new(connection),
            session: Arc::new(RwLock::new(None)),
            config: Arc::new(config),
            rate_limiter,
        })
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &IronicConnection {
        &self.connection
    }

    /// Returns `true` if there is a session whose token (if any) is still fresh.
    pub async fn is_authenticated(&self) -> bool {
        let lock = self.session.read().await;
        lock.as_ref()
            .map(|s| !self.is_stale(s))
            .unwrap_or(false)
    }

    /// Establishes a session now instead of on the first request.
    pub async fn authenticate(&self) -> IronicResult<()> {
        self.refresh_session().await.map(|_| ())
    }

    /// Performs a GET request below the Bare Metal endpoint.
    ///
    /// `segments` are percent-encoded individually, so node names may contain
    /// reserved characters.
    ///
    /// # Errors
    /// Returns `IronicError` if the request fails, authentication cannot be
    /// refreshed, the API answers with an error status, or the response cannot
    /// be parsed.
    pub async fn get<T>(&self, segments: &[&str], query: &[(&str, &str)]) -> IronicResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.execute_get(segments, query).await
    }

    /// Fetches every page of a collection, following `next` links.
    ///
    /// Only the query string of a `next` link is used; the page is requested
    /// below the session endpoint, so the token never leaves that host.
    pub async fn list_all<C>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> IronicResult<Vec<C::Item>>
    where
        C: Collection,
    {
        let first: C = self.get(segments, query).await?;
        let (mut items, mut next) = first.into_page();
        while let Some(link) = next {
            debug!(next = %link, fetched = items.len(), "Following pagination link");
            let pairs = next_page_query(&link)?;
            let page_query: Vec<(&str, &str)> = pairs
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str()))
                .collect();
            let page: C = self.get(segments, &page_query).await?;
            let (more, following) = page.into_page();
            items.extend(more);
            next = following;
        }
        Ok(items)
    }

    /// Core request execution method. It ensures a session, sends the request,
    /// handles 401 by re-authenticating once, and parses the response.
    async fn execute_get<T>(&self, segments: &[&str], query: &[(&str, &str)]) -> IronicResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let session = self.ensure_session().await?;
        let response = self.send(&session, segments, query).await?;

        if response.status() == StatusCode::UNAUTHORIZED
            && matches!(self.connection.auth(), AuthMethod::Password(_))
        {
            debug!("Token rejected by the Bare Metal API, re-authenticating");
            let session = self.refresh_session().await?;
            // Retry exactly once
            let response = self.send(&session, segments, query).await?;
            return self.parse_response(response).await;
        }

        self.parse_response(response).await
    }

    async fn send(
        &self,
        session: &IronicSession,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> IronicResult<reqwest::Response> {
        if let Some(limiter) = &self.rate_limiter {
            limiter.until_ready().await;
        }

        let url = session.endpoint().join_segments(segments, query);
        debug!(method = "GET", url = %url, "Sending Bare Metal API request");

        let mut req_builder = self
            .http_client
            .get(url)
            .header(ACCEPT, "application/json")
            .header(API_VERSION_HEADER, self.config.api_version.header_value());
        if let Some(token) = session.token() {
            req_builder = req_builder.header(AUTH_TOKEN_HEADER, token.as_str());
        }

        req_builder
            .send()
            .await
            .map_err(|e| IronicError::Connection(format!("HTTP request failed: {}", e)))
    }

    async fn parse_response<T>(&self, response: reqwest::Response) -> IronicResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown".to_string());
            let message = extract_fault(&body);
            if status == StatusCode::UNAUTHORIZED {
                return Err(IronicError::Authentication(message));
            }
            return Err(IronicError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| IronicError::Connection(format!("Failed to parse response: {}", e)))
    }

    fn is_stale(&self, session: &IronicSession) -> bool {
        session
            .token()
            .is_some_and(|token| token.is_expired(self.config.token_lifetime))
    }

    /// Returns the current session, establishing or renewing it when needed.
    async fn ensure_session(&self) -> IronicResult<IronicSession> {
        {
            let guard = self.session.read().await;
            if let Some(session) = guard.as_ref() {
                if !self.is_stale(session) {
                    return Ok(session.clone());
                }
            }
        }
        self.refresh_session().await
    }

    /// Builds a fresh session: a Keystone login, or the configured endpoint
    /// when authentication is disabled.
    async fn refresh_session(&self) -> IronicResult<IronicSession> {
        let session = match self.connection.auth() {
            AuthMethod::None => {
                let endpoint = self.connection.endpoint_override().cloned().ok_or_else(|| {
                    IronicError::Config("No Bare Metal endpoint configured".to_string())
                })?;
                IronicSession::new(endpoint, None)
            }
            AuthMethod::Password(credentials) => {
                LoginService::new()
                    .execute(&self.http_client, &self.connection, credentials)
                    .await?
            }
        };
        let mut lock = self.session.write().await;
        *lock = Some(session.clone());
        Ok(session)
    }
}

fn non_zero(field: &str, value: u32) -> IronicResult<NonZeroU32> {
    NonZeroU32::new(value).ok_or_else(|| {
        IronicError::from(ValidationError::Field {
            field: field.to_string(),
            message: "Rate limit values must be greater than zero".to_string(),
        })
    })
}

/// Query parameters (`marker`, `limit`, filters) of a pagination link.
fn next_page_query(link: &str) -> IronicResult<Vec<(String, String)>> {
    let url = Url::parse(link).map_err(|e| {
        IronicError::Connection(format!("Invalid pagination link '{}': {}", link, e))
    })?;
    Ok(url.query_pairs().into_owned().collect())
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error_message: String,
}

#[derive(Deserialize)]
struct Fault {
    faultstring: String,
}

/// Extracts the human readable fault from an Ironic error body.
///
/// Ironic wraps errors as `{"error_message": "<json>"}` where the inner JSON
/// document carries a `faultstring`. Anything else is returned verbatim.
fn extract_fault(body: &str) -> String {
    let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) else {
        return body.trim().to_string();
    };
    match serde_json::from_str::<Fault>(&envelope.error_message) {
        Ok(fault) => fault.faultstring,
        Err(_) => envelope.error_message,
    }
}
