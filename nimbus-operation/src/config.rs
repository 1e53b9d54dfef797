/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use nimbus_core::credentials::ProvideCredentials;
use nimbus_core::{CredentialsProvider, Region};
use nimbus_endpoint::{ResolveEndpoint, SharedEndpointResolver};
use nimbus_http::endpoint::Endpoint;
use nimbus_sig_auth::{SharedSigner, SignRequest};
use std::fmt;
use std::sync::Arc;

/// Shared client configuration.
///
/// One `Config` serves every service crate: region, credentials,
/// an optional endpoint resolver override, and an optional request
/// signer. All values are immutable once built; clients never mutate
/// configuration during a call.
#[derive(Clone)]
pub struct Config {
    region: Option<Region>,
    credentials_provider: Option<CredentialsProvider>,
    endpoint_resolver: Option<SharedEndpointResolver>,
    signer: Option<SharedSigner>,
    max_attempts: Option<u32>,
}

impl Config {
    pub fn builder() -> Builder {
        Default::default()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    pub fn credentials_provider(&self) -> Option<&CredentialsProvider> {
        self.credentials_provider.as_ref()
    }

    /// The configured endpoint resolver, when the service default is
    /// overridden.
    pub fn endpoint_resolver(&self) -> Option<&SharedEndpointResolver> {
        self.endpoint_resolver.as_ref()
    }

    pub fn signer(&self) -> Option<&SharedSigner> {
        self.signer.as_ref()
    }

    /// Total attempts per request (including the first), when the
    /// transport's default retry configuration is overridden.
    pub fn max_attempts(&self) -> Option<u32> {
        self.max_attempts
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("region", &self.region)
            .field("endpoint_override", &self.endpoint_resolver.is_some())
            .finish()
    }
}

#[derive(Default)]
pub struct Builder {
    region: Option<Region>,
    credentials_provider: Option<CredentialsProvider>,
    endpoint_resolver: Option<SharedEndpointResolver>,
    signer: Option<SharedSigner>,
    max_attempts: Option<u32>,
}

impl Builder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    pub fn credentials_provider(
        mut self,
        credentials_provider: impl ProvideCredentials + 'static,
    ) -> Self {
        self.credentials_provider = Some(Arc::new(credentials_provider));
        self
    }

    /// Replace the service's endpoint rules wholesale.
    pub fn endpoint_resolver(mut self, endpoint_resolver: impl ResolveEndpoint + 'static) -> Self {
        self.endpoint_resolver = Some(Arc::new(endpoint_resolver));
        self
    }

    /// Send every request to a fixed endpoint instead of the service's
    /// resolved one.
    pub fn endpoint_override(self, endpoint: Endpoint) -> Self {
        self.endpoint_resolver(endpoint)
    }

    /// Install the SigV4 signature implementation.
    pub fn signer(mut self, signer: impl SignRequest + 'static) -> Self {
        self.signer = Some(Arc::new(signer));
        self
    }

    /// Total attempts per request, including the first. `1` disables
    /// retries entirely.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    pub fn build(self) -> Config {
        Config {
            // fall back to the ambient region so that
            // `Config::builder().build()` works in a configured
            // environment
            region: self.region.or_else(Region::from_env),
            credentials_provider: self.credentials_provider,
            endpoint_resolver: self.endpoint_resolver,
            signer: self.signer,
            max_attempts: self.max_attempts,
        }
    }
}
