/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Cross-service AWS concepts: regions, signing scope identifiers, and
//! credentials.

pub mod credentials;
pub mod region;

pub use credentials::{Credentials, CredentialsError, CredentialsProvider, ProvideCredentials};
pub use region::{Region, SigningRegion};

use std::borrow::Cow;
use std::fmt;

/// The name a service signs under, eg. `kinesis`.
///
/// Usually equal to the endpoint prefix, but a handful of services sign
/// under a different name than they resolve endpoints with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningService(Cow<'static, str>);

impl SigningService {
    pub const fn from_static(service: &'static str) -> Self {
        SigningService(Cow::Borrowed(service))
    }
}

impl AsRef<str> for SigningService {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SigningService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
