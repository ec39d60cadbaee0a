use crate::core::domain::value_object::{AuthToken, IronicUrl};

/// An established session: the resolved Bare Metal endpoint and, unless
/// running without authentication, the Keystone token to present.
#[derive(Debug, Clone)]
pub struct IronicSession {
    endpoint: IronicUrl,
    token: Option<AuthToken>,
}

impl IronicSession {
    pub fn new(endpoint: IronicUrl, token: Option<AuthToken>) -> Self {
        Self { endpoint, token }
    }

    pub fn endpoint(&self) -> &IronicUrl {
        &self.endpoint
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }
}
