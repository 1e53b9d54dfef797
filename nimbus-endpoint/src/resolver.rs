/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use nimbus_core::region::Region;
use nimbus_core::{SigningRegion, SigningService};
use nimbus_http::endpoint::Endpoint;
use std::fmt;
use std::sync::Arc;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Endpoint resolution error.
#[derive(Debug)]
pub struct EndpointError {
    message: String,
    source: Option<BoxError>,
}

impl EndpointError {
    /// Create an [`EndpointError`] with a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(self, source: impl Into<BoxError>) -> Self {
        Self {
            source: Some(source.into()),
            ..self
        }
    }
}

impl fmt::Display for EndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EndpointError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|err| err.as_ref() as _)
    }
}

/// Context parameters an endpoint is resolved from.
///
/// Built per call from client configuration; operations without any
/// call-specific context (eg. a service health ping) resolve from the
/// empty parameter set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    region: Option<Region>,
}

impl Params {
    pub fn builder() -> ParamsBuilder {
        Default::default()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }
}

#[derive(Debug, Default)]
pub struct ParamsBuilder {
    region: Option<Region>,
}

impl ParamsBuilder {
    pub fn region(mut self, region: Option<Region>) -> Self {
        self.region = region;
        self
    }

    pub fn build(self) -> Params {
        Params {
            region: self.region,
        }
    }
}

/// A resolved endpoint together with its signing scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AwsEndpoint {
    endpoint: Endpoint,
    credential_scope: CredentialScope,
}

impl AwsEndpoint {
    pub fn new(endpoint: Endpoint, credential_scope: CredentialScope) -> Self {
        AwsEndpoint {
            endpoint,
            credential_scope,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn credential_scope(&self) -> &CredentialScope {
        &self.credential_scope
    }
}

/// The signing scope an endpoint requires, when it deviates from the
/// requested region and the service's own signing name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialScope {
    region: Option<SigningRegion>,
    service: Option<SigningService>,
}

impl CredentialScope {
    pub fn builder() -> CredentialScopeBuilder {
        Default::default()
    }

    pub fn region(&self) -> Option<&SigningRegion> {
        self.region.as_ref()
    }

    pub fn service(&self) -> Option<&SigningService> {
        self.service.as_ref()
    }
}

#[derive(Debug, Default)]
pub struct CredentialScopeBuilder {
    region: Option<SigningRegion>,
    service: Option<SigningService>,
}

impl CredentialScopeBuilder {
    pub fn region(mut self, region: SigningRegion) -> Self {
        self.region = Some(region);
        self
    }

    pub fn service(mut self, service: SigningService) -> Self {
        self.service = Some(service);
        self
    }

    pub fn build(self) -> CredentialScope {
        CredentialScope {
            region: self.region,
            service: self.service,
        }
    }
}

/// Resolves a request's endpoint from static rules plus per-call
/// [`Params`].
pub trait ResolveEndpoint: Send + Sync {
    fn resolve_endpoint(&self, params: &Params) -> Result<AwsEndpoint, EndpointError>;
}

pub type SharedEndpointResolver = Arc<dyn ResolveEndpoint>;

/// A literal endpoint is its own resolver: configuring one overrides
/// whatever the service's default rules would produce.
impl ResolveEndpoint for Endpoint {
    fn resolve_endpoint(&self, _params: &Params) -> Result<AwsEndpoint, EndpointError> {
        Ok(AwsEndpoint::new(self.clone(), CredentialScope::default()))
    }
}
