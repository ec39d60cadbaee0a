//! Tunables for the HTTP client.

use crate::core::domain::value_object::ApiVersion;
use std::time::Duration;

/// Client-side request rate limit (token bucket).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst_size: u32,
}

/// Behavioural configuration of the API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Microversion sent with every Bare Metal API request.
    pub api_version: ApiVersion,
    /// Age after which a Keystone token is renewed before use.
    pub token_lifetime: Duration,
    /// Optional rate limit; `None` disables limiting.
    pub rate_limit: Option<RateLimitConfig>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_version: ApiVersion::default(),
            // Keystone issues one-hour tokens by default; renew a little early.
            token_lifetime: Duration::from_secs(50 * 60),
            rate_limit: None,
        }
    }
}
