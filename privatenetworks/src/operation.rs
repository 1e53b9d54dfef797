/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation descriptors for the AWS Private 5G API.

use crate::model::*;
use http::Method;
use nimbus_endpoint::SharedEndpointResolver;
use nimbus_http::operation::Operation;
use nimbus_middleware::DefaultResponseClassifier;
use nimbus_operation::{
    build_operation, BuildError, Config, JsonResponseHandler, OperationDescriptor, PathSegment,
    Protocol, RequiredField, SigningKind,
};

type OperationResult<O> =
    Result<Operation<JsonResponseHandler<O>, DefaultResponseClassifier>, BuildError>;

macro_rules! descriptor {
    ($name:literal, $method:expr, path: $path:expr, required: $required:expr) => {
        OperationDescriptor {
            name: $name,
            service: "privatenetworks",
            signing_name: "private-networks",
            api_version: "2021-12-03",
            method: $method,
            protocol: Protocol::RestJson,
            path: $path,
            query: &[],
            required: $required,
            signing: SigningKind::SigV4,
        }
    };
}

/// The health check resolves its endpoint from the empty parameter set
/// and carries no request object.
static PING: OperationDescriptor<()> = descriptor!(
    "Ping",
    Method::GET,
    path: &[PathSegment::Literal("ping")],
    required: &[]
);

static GET_NETWORK_SITE: OperationDescriptor<GetNetworkSiteInput> = descriptor!(
    "GetNetworkSite",
    Method::GET,
    path: &[
        PathSegment::Literal("v1/network-sites"),
        PathSegment::Label { name: "NetworkSiteArn", get: |input| input.network_site_arn.as_deref() },
    ],
    required: &[RequiredField {
        name: "NetworkSiteArn",
        is_set: |input| input.network_site_arn.is_some(),
    }]
);

static UPDATE_NETWORK_SITE: OperationDescriptor<UpdateNetworkSiteInput> = descriptor!(
    "UpdateNetworkSite",
    Method::PUT,
    path: &[PathSegment::Literal("v1/network-sites/site")],
    required: &[RequiredField {
        name: "NetworkSiteArn",
        is_set: |input| input.network_site_arn.is_some(),
    }]
);

static ACTIVATE_NETWORK_SITE: OperationDescriptor<ActivateNetworkSiteInput> = descriptor!(
    "ActivateNetworkSite",
    Method::POST,
    path: &[PathSegment::Literal("v1/network-sites/activate")],
    required: &[RequiredField {
        name: "NetworkSiteArn",
        is_set: |input| input.network_site_arn.is_some(),
    }]
);

pub(crate) fn ping(
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<PingOutput> {
    build_operation(&(), &PING, conf, resolver, JsonResponseHandler::new())
}

pub(crate) fn get_network_site(
    input: &GetNetworkSiteInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<GetNetworkSiteOutput> {
    build_operation(input, &GET_NETWORK_SITE, conf, resolver, JsonResponseHandler::new())
}

pub(crate) fn update_network_site(
    input: &UpdateNetworkSiteInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<UpdateNetworkSiteOutput> {
    build_operation(input, &UPDATE_NETWORK_SITE, conf, resolver, JsonResponseHandler::new())
}

pub(crate) fn activate_network_site(
    input: &ActivateNetworkSiteInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<ActivateNetworkSiteOutput> {
    build_operation(input, &ACTIVATE_NETWORK_SITE, conf, resolver, JsonResponseHandler::new())
}
