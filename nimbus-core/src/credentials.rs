/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::env;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

/// AWS SDK credentials for signing requests.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
}

impl Credentials {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Credentials {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
        }
    }

    pub fn from_keys(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self::new(access_key_id, secret_access_key, None)
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }
}

// The secret key never appears in logs.
impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .finish()
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub enum CredentialsError {
    /// No credentials were available from this provider.
    CredentialsNotLoaded,
    /// The provider was configured but produced invalid data (eg. a
    /// malformed environment variable).
    InvalidConfiguration(Box<dyn Error + Send + Sync + 'static>),
    Unhandled(Box<dyn Error + Send + Sync + 'static>),
}

impl Display for CredentialsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CredentialsError::CredentialsNotLoaded => write!(f, "no credentials were available"),
            CredentialsError::InvalidConfiguration(err) => {
                write!(f, "invalid credentials configuration: {}", err)
            }
            CredentialsError::Unhandled(err) => write!(f, "{}", err),
        }
    }
}

impl Error for CredentialsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CredentialsError::InvalidConfiguration(err) | CredentialsError::Unhandled(err) => {
                Some(err.as_ref() as _)
            }
            _ => None,
        }
    }
}

/// A source of request-signing credentials.
///
/// Providers are consulted synchronously at signing time; static
/// credentials and the environment provider satisfy this directly.
pub trait ProvideCredentials: Send + Sync {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError>;
}

pub type CredentialsProvider = Arc<dyn ProvideCredentials>;

impl ProvideCredentials for Credentials {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError> {
        Ok(self.clone())
    }
}

/// Loads credentials from `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`
/// (+ optional `AWS_SESSION_TOKEN`).
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct EnvironmentVariableCredentialsProvider;

impl EnvironmentVariableCredentialsProvider {
    pub fn new() -> Self {
        Default::default()
    }
}

impl ProvideCredentials for EnvironmentVariableCredentialsProvider {
    fn provide_credentials(&self) -> Result<Credentials, CredentialsError> {
        let access_key_id = required_env("AWS_ACCESS_KEY_ID")?;
        let secret_access_key = required_env("AWS_SECRET_ACCESS_KEY")?;
        let session_token = match env::var("AWS_SESSION_TOKEN") {
            Ok(token) if !token.is_empty() => Some(token),
            _ => None,
        };
        Ok(Credentials::new(access_key_id, secret_access_key, session_token))
    }
}

fn required_env(key: &'static str) -> Result<String, CredentialsError> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        Ok(_) | Err(env::VarError::NotPresent) => Err(CredentialsError::CredentialsNotLoaded),
        Err(err) => Err(CredentialsError::InvalidConfiguration(Box::new(err))),
    }
}
