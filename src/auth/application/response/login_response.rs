use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: TokenBody,
}

#[derive(Debug, Deserialize)]
pub struct TokenBody {
    #[serde(default)]
    pub expires_at: Option<String>,
    #[serde(default)]
    pub catalog: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogEntry {
    #[serde(rename = "type")]
    pub service_type: String,
    #[serde(default)]
    pub endpoints: Vec<CatalogEndpoint>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogEndpoint {
    pub interface: String,
    #[serde(default)]
    pub region_id: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    pub url: String,
}

impl TokenBody {
    /// Finds the URL of a service endpoint in the catalog.
    pub fn endpoint_url(
        &self,
        service_type: &str,
        interface: &str,
        region: Option<&str>,
    ) -> Option<&str> {
        self.catalog
            .iter()
            .filter(|entry| entry.service_type == service_type)
            .flat_map(|entry| entry.endpoints.iter())
            .find(|endpoint| {
                endpoint.interface == interface
                    && region.is_none_or(|region| {
                        endpoint.region_id.as_deref() == Some(region)
                            || endpoint.region.as_deref() == Some(region)
                    })
            })
            .map(|endpoint| endpoint.url.as_str())
    }
}
