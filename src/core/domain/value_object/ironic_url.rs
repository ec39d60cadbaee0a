use crate::core::domain::error::ValidationError;
use url::Url;

const MAX_URL_LENGTH: usize = 2083;

/// A validated HTTP(S) base URL (Ironic endpoint or Keystone auth URL).
///
/// The stored URL always ends with a `/` so relative API paths can be
/// appended without dropping the last path segment of the base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IronicUrl(Url);

impl IronicUrl {
    /// Parses and validates a base URL.
    pub fn new(url: &str) -> Result<Self, ValidationError> {
        validate_url(url)?;
        let parsed = Url::parse(url.trim())
            .map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
        Ok(Self::new_unchecked(parsed))
    }

    /// Wraps an already parsed URL without validation.
    pub(crate) fn new_unchecked(url: Url) -> Self {
        Self::from_url(url)
    }

    fn from_url(mut url: Url) -> Self {
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);
        Self(url)
    }

    /// Returns the base URL.
    #[must_use]
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the base URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Builds an absolute URL by appending percent-encoded path segments
    /// and query pairs to this base.
    pub fn join_segments(&self, segments: &[&str], query: &[(&str, &str)]) -> Url {
        let mut url = self.0.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            path.extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }
}

/// Validates a base URL string.
pub(crate) fn validate_url(url: &str) -> Result<(), ValidationError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ValidationError::Field {
            field: "url".to_string(),
            message: "URL cannot be empty".to_string(),
        });
    }
    if url.len() > MAX_URL_LENGTH {
        return Err(ValidationError::Format(format!(
            "URL exceeds maximum length of {} characters",
            MAX_URL_LENGTH
        )));
    }
    let parsed =
        Url::parse(url).map_err(|e| ValidationError::Format(format!("Invalid URL format: {}", e)))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ValidationError::ConstraintViolation(format!(
            "Invalid scheme '{}'. Must be one of: http, https",
            parsed.scheme()
        )));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::Field {
            field: "url".to_string(),
            message: "URL must contain a host".to_string(),
        });
    }
    Ok(())
}
