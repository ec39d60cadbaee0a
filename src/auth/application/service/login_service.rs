use crate::{
    auth::application::{
        request::login_request::LoginRequest, response::login_response::LoginResponse,
    },
    core::domain::{
        error::{IronicError, IronicResult, ValidationError},
        model::{
            ironic_connection::{IronicConnection, KeystoneCredentials},
            ironic_session::IronicSession,
        },
        value_object::{AuthToken, IronicUrl},
    },
};

use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use tracing::{debug, info};

const SUBJECT_TOKEN_HEADER: &str = "X-Subject-Token";
const BAREMETAL_SERVICE_TYPE: &str = "baremetal";

/// Obtains a project-scoped Keystone token and resolves the Bare Metal
/// endpoint from the returned service catalog.
pub struct LoginService {
    default_headers: HeaderMap,
}

impl LoginService {
    pub fn new() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Self { default_headers }
    }

    pub async fn execute(
        &self,
        http_client: &Client,
        connection: &IronicConnection,
        credentials: &KeystoneCredentials,
    ) -> IronicResult<IronicSession> {
        let url = self.build_token_url(credentials.auth_url());
        let request = LoginRequest::from(credentials);
        debug!(url = %url, user = credentials.username().as_str(), "Requesting Keystone token");
        let response = self.send_request(http_client, &url, &request).await?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => {
                self.handle_successful_login(connection, response).await
            }
            StatusCode::UNAUTHORIZED => Err(IronicError::Authentication(
                "Invalid credentials provided".to_string(),
            )),
            StatusCode::BAD_REQUEST => Err(IronicError::from(ValidationError::Field {
                field: "request".to_string(),
                message: "Invalid authentication request format".to_string(),
            })),
            StatusCode::NOT_FOUND => Err(IronicError::Connection(
                "Identity token endpoint not found".to_string(),
            )),
            StatusCode::SERVICE_UNAVAILABLE => Err(IronicError::Connection(
                "Identity service is currently unavailable".to_string(),
            )),
            status => Err(IronicError::Connection(format!(
                "Unexpected response status from identity service: {}",
                status
            ))),
        }
    }

    /// `{auth_url}/v3/auth/tokens`, tolerating an auth URL that already ends in `/v3`.
    fn build_token_url(&self, auth_url: &IronicUrl) -> String {
        let base = auth_url.as_str().trim_end_matches('/');
        if base.ends_with("/v3") {
            format!("{}/auth/tokens", base)
        } else {
            format!("{}/v3/auth/tokens", base)
        }
    }

    async fn send_request(
        &self,
        client: &Client,
        url: &str,
        request: &LoginRequest,
    ) -> IronicResult<reqwest::Response> {
        client
            .post(url)
            .headers(self.default_headers.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| IronicError::Connection(e.to_string()))
    }

    async fn handle_successful_login(
        &self,
        connection: &IronicConnection,
        response: reqwest::Response,
    ) -> IronicResult<IronicSession> {
        let token = response
            .headers()
            .get(SUBJECT_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                IronicError::Authentication(format!(
                    "Identity service response is missing the {} header",
                    SUBJECT_TOKEN_HEADER
                ))
            })?
            .to_string();
        let token = AuthToken::new(token)?;

        let login_response = response.json::<LoginResponse>().await.map_err(|e| {
            IronicError::Connection(format!("Failed to parse token response: {}", e))
        })?;

        let endpoint = match connection.endpoint_override() {
            Some(endpoint) => endpoint.clone(),
            None => {
                let url = login_response
                    .token
                    .endpoint_url(
                        BAREMETAL_SERVICE_TYPE,
                        connection.interface(),
                        connection.region_name(),
                    )
                    .ok_or_else(|| {
                        IronicError::Config(format!(
                            "No {} endpoint for interface '{}'{} in the service catalog",
                            BAREMETAL_SERVICE_TYPE,
                            connection.interface(),
                            connection
                                .region_name()
                                .map(|r| format!(" and region '{}'", r))
                                .unwrap_or_default()
                        ))
                    })?;
                IronicUrl::new(url)?
            }
        };

        info!(
            endpoint = endpoint.as_str(),
            expires_at = login_response.token.expires_at.as_deref().unwrap_or("unknown"),
            "Authenticated against Keystone"
        );
        Ok(IronicSession::new(endpoint, Some(token)))
    }
}

impl Default for LoginService {
    fn default() -> Self {
        Self::new()
    }
}
