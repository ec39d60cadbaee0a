//! Keystone v3 password authentication request body.

use crate::core::domain::model::ironic_connection::KeystoneCredentials;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub auth: AuthSection,
}

#[derive(Debug, Serialize)]
pub struct AuthSection {
    pub identity: Identity,
    pub scope: Scope,
}

#[derive(Debug, Serialize)]
pub struct Identity {
    pub methods: Vec<String>,
    pub password: PasswordMethod,
}

#[derive(Debug, Serialize)]
pub struct PasswordMethod {
    pub user: User,
}

#[derive(Debug, Serialize)]
pub struct User {
    pub name: String,
    pub domain: DomainRef,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct Scope {
    pub project: Project,
}

#[derive(Debug, Serialize)]
pub struct Project {
    pub name: String,
    pub domain: DomainRef,
}

#[derive(Debug, Serialize)]
pub struct DomainRef {
    pub name: String,
}

impl From<&KeystoneCredentials> for LoginRequest {
    fn from(credentials: &KeystoneCredentials) -> Self {
        Self {
            auth: AuthSection {
                identity: Identity {
                    methods: vec!["password".to_string()],
                    password: PasswordMethod {
                        user: User {
                            name: credentials.username().as_str().to_string(),
                            domain: DomainRef {
                                name: credentials.user_domain_name().to_string(),
                            },
                            password: credentials.password().as_str().to_string(),
                        },
                    },
                },
                scope: Scope {
                    project: Project {
                        name: credentials.project_name().to_string(),
                        domain: DomainRef {
                            name: credentials.project_domain_name().to_string(),
                        },
                    },
                },
            },
        }
    }
}
