/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Static endpoint metadata for the `aws` partition.

use crate::resolver::{AwsEndpoint, CredentialScope, EndpointError, Params, ResolveEndpoint};
use http::Uri;
use nimbus_http::endpoint::Endpoint;

/// The default endpoint rule for a service: a URI template with an
/// optional `{region}` placeholder.
///
/// Regionalized services use a template like
/// `kinesis.{region}.amazonaws.com`; global services pin a partition
/// endpoint and a credential scope, eg. `budgets.amazonaws.com` signed
/// as `us-east-1`.
#[derive(Clone, Debug)]
pub struct Metadata {
    pub uri_template: &'static str,
    pub protocol: Protocol,
    pub credential_scope: CredentialScope,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

impl ResolveEndpoint for Metadata {
    fn resolve_endpoint(&self, params: &Params) -> Result<AwsEndpoint, EndpointError> {
        let host = if self.uri_template.contains("{region}") {
            let region = params
                .region()
                .ok_or_else(|| EndpointError::message("a region was not configured"))?;
            self.uri_template.replace("{region}", region.as_ref())
        } else {
            self.uri_template.to_string()
        };
        let uri = format!("{}://{}", self.protocol.as_str(), host)
            .parse::<Uri>()
            .map_err(|err| {
                EndpointError::message(format!("invalid URI from endpoint template `{}`", self.uri_template))
                    .with_source(err)
            })?;
        Ok(AwsEndpoint::new(
            Endpoint::new(uri),
            self.credential_scope.clone(),
        ))
    }
}

#[cfg(test)]
mod test {
    use super::{Metadata, Protocol};
    use crate::resolver::{CredentialScope, Params, ResolveEndpoint};
    use http::Uri;
    use nimbus_core::Region;

    #[test]
    fn regionalized_template() {
        let metadata = Metadata {
            uri_template: "kinesis.{region}.amazonaws.com",
            protocol: Protocol::Https,
            credential_scope: CredentialScope::default(),
        };
        let endpoint = metadata
            .resolve_endpoint(&Params::builder().region(Some(Region::new("us-east-1"))).build())
            .expect("resolves");
        assert_eq!(
            endpoint.endpoint().uri(),
            &Uri::from_static("https://kinesis.us-east-1.amazonaws.com")
        );
    }

    #[test]
    fn region_is_required_by_regionalized_templates() {
        let metadata = Metadata {
            uri_template: "kinesis.{region}.amazonaws.com",
            protocol: Protocol::Https,
            credential_scope: CredentialScope::default(),
        };
        let err = metadata.resolve_endpoint(&Params::default()).unwrap_err();
        assert_eq!(err.to_string(), "a region was not configured");
    }

    #[test]
    fn global_endpoint_ignores_region() {
        let metadata = Metadata {
            uri_template: "budgets.amazonaws.com",
            protocol: Protocol::Https,
            credential_scope: CredentialScope::builder()
                .region(nimbus_core::SigningRegion::from_static("us-east-1"))
                .build(),
        };
        let endpoint = metadata
            .resolve_endpoint(&Params::builder().region(Some(Region::new("eu-west-1"))).build())
            .expect("resolves");
        assert_eq!(
            endpoint.endpoint().uri(),
            &Uri::from_static("https://budgets.amazonaws.com")
        );
        assert_eq!(
            endpoint.credential_scope().region().map(AsRef::as_ref),
            Some("us-east-1")
        );
    }
}
