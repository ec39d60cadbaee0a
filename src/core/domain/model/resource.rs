//! Shared pieces of Bare Metal API resources.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Free-form JSON object fields (`extra`, `driver_info`, `properties`, ...).
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// A hypermedia link attached to every Ironic resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Link {
    /// Target URL.
    pub href: String,
    /// Relation, `self` or `bookmark`.
    pub rel: String,
}

/// One page of a paginated Ironic collection.
///
/// Each collection wraps its items under a resource-specific key and carries
/// an absolute `next` URL while more pages remain.
pub trait Collection: DeserializeOwned + Send {
    type Item: Send;

    /// Splits the page into its items and the URL of the following page.
    fn into_page(self) -> (Vec<Self::Item>, Option<String>);
}
