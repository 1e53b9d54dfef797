/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Endpoint resolution for Nimbus service clients.
//!
//! [`EndpointStage`] loads a [`ResolveEndpoint`] implementation and the
//! per-call [`Params`] from the request property bag, resolves the
//! endpoint, applies it to the request URI, and records the signing scope
//! for the downstream signing stage. Resolution happens strictly before
//! dispatch: any failure here short-circuits without network activity.

pub mod partition;
pub mod resolver;

pub use resolver::{
    AwsEndpoint, CredentialScope, EndpointError, Params, ResolveEndpoint, SharedEndpointResolver,
};

use nimbus_core::{SigningRegion, SigningService};
use nimbus_http::middleware::MapRequest;
use nimbus_http::operation::Request;
use nimbus_http::property_bag::PropertyBag;
use std::time::Instant;

pub fn set_endpoint_resolver(properties: &mut PropertyBag, resolver: SharedEndpointResolver) {
    properties.insert(resolver);
}

pub fn get_endpoint_resolver(properties: &PropertyBag) -> Option<&SharedEndpointResolver> {
    properties.get()
}

/// Middleware stage that resolves and applies the request endpoint.
///
/// Requires a [`SharedEndpointResolver`] in the property bag; reads
/// [`Params`] from the bag when present (operations without call context
/// resolve from the empty parameter set). On success the stage:
/// 1. rewrites the request URI onto the resolved endpoint, and
/// 2. inserts the [`SigningRegion`] (and a [`SigningService`] override,
///    when the endpoint's credential scope carries one) for the signing
///    stage.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct EndpointStage;

#[derive(Debug, thiserror::Error)]
pub enum EndpointStageError {
    #[error("no endpoint resolver was configured")]
    NoEndpointResolver,
    #[error("{0}")]
    ResolutionFailed(#[source] EndpointError),
}

impl From<EndpointStageError> for nimbus_types::Error {
    fn from(err: EndpointStageError) -> Self {
        // the provider's own message is the caller-visible message
        nimbus_types::Error::endpoint_resolution_failure(err.to_string())
    }
}

impl MapRequest for EndpointStage {
    type Error = EndpointStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut http_req, props| {
            let resolver =
                get_endpoint_resolver(props).ok_or(EndpointStageError::NoEndpointResolver)?;
            let params = props.get::<Params>().cloned().unwrap_or_default();
            let start = Instant::now();
            let endpoint = resolver
                .resolve_endpoint(&params)
                .map_err(EndpointStageError::ResolutionFailed)?;
            tracing::debug!(
                metric = "smithy.client.resolve_endpoint_duration",
                duration_us = start.elapsed().as_micros() as u64,
                endpoint = ?endpoint.endpoint().uri(),
                "resolved endpoint"
            );
            let signing_region = endpoint
                .credential_scope()
                .region()
                .cloned()
                .or_else(|| params.region().cloned().map(SigningRegion::from));
            if let Some(signing_region) = signing_region {
                props.insert(signing_region);
            }
            if let Some(signing_service) = endpoint.credential_scope().service() {
                props.insert::<SigningService>(signing_service.clone());
            }
            endpoint.endpoint().set_endpoint(http_req.uri_mut());
            Ok(http_req)
        })
    }
}

#[cfg(test)]
mod test {
    use crate::partition::{Metadata, Protocol};
    use crate::resolver::{CredentialScope, EndpointError, Params, ResolveEndpoint};
    use crate::{set_endpoint_resolver, EndpointStage, EndpointStageError};
    use http::Uri;
    use nimbus_core::{Region, SigningRegion, SigningService};
    use nimbus_http::body::SdkBody;
    use nimbus_http::middleware::MapRequest;
    use nimbus_http::operation;
    use std::sync::Arc;

    fn request_with(params: Option<Params>, resolver: Option<Arc<dyn ResolveEndpoint>>) -> operation::Request {
        let req = operation::Request::new(http::Request::new(SdkBody::from("")));
        {
            let mut props = req.properties();
            if let Some(params) = params {
                props.insert(params);
            }
            if let Some(resolver) = resolver {
                set_endpoint_resolver(&mut props, resolver);
            }
        }
        req
    }

    #[test]
    fn default_endpoint_updates_request() {
        let resolver = Arc::new(Metadata {
            uri_template: "kinesis.{region}.amazonaws.com",
            protocol: Protocol::Https,
            credential_scope: Default::default(),
        });
        let params = Params::builder().region(Some(Region::new("us-east-1"))).build();
        let req = request_with(Some(params), Some(resolver));
        let req = EndpointStage.apply(req).expect("should succeed");
        assert_eq!(
            req.properties().get(),
            Some(&SigningRegion::from_static("us-east-1"))
        );
        let (req, _props) = req.into_parts();
        assert_eq!(
            req.uri(),
            &Uri::from_static("https://kinesis.us-east-1.amazonaws.com/")
        );
    }

    #[test]
    fn credential_scope_overrides_signing_configuration() {
        let resolver = Arc::new(Metadata {
            uri_template: "budgets.amazonaws.com",
            protocol: Protocol::Https,
            credential_scope: CredentialScope::builder()
                .region(SigningRegion::from_static("us-east-1"))
                .service(SigningService::from_static("budgets"))
                .build(),
        });
        let params = Params::builder().region(Some(Region::new("eu-west-1"))).build();
        let req = request_with(Some(params), Some(resolver));
        let req = EndpointStage.apply(req).expect("should succeed");
        assert_eq!(
            req.properties().get(),
            Some(&SigningRegion::from_static("us-east-1"))
        );
        assert_eq!(
            req.properties().get(),
            Some(&SigningService::from_static("budgets"))
        );
    }

    #[test]
    fn missing_resolver_is_an_endpoint_failure() {
        let req = request_with(None, None);
        let err = EndpointStage.apply(req).expect_err("no resolver");
        assert!(matches!(err, EndpointStageError::NoEndpointResolver));
        let err: nimbus_types::Error = err.into();
        assert_eq!(err.kind(), nimbus_types::ErrorKind::EndpointResolutionFailure);
    }

    #[test]
    fn resolver_message_propagates() {
        struct Failing;
        impl ResolveEndpoint for Failing {
            fn resolve_endpoint(
                &self,
                _params: &Params,
            ) -> Result<crate::AwsEndpoint, EndpointError> {
                Err(EndpointError::message("boom"))
            }
        }
        let req = request_with(None, Some(Arc::new(Failing)));
        let err = EndpointStage.apply(req).expect_err("resolver fails");
        let err: nimbus_types::Error = err.into();
        assert_eq!(err.message(), Some("boom"));
    }
}
