/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation descriptors for the Amazon Simple Workflow Service API.

use crate::model::*;
use http::Method;
use nimbus_endpoint::SharedEndpointResolver;
use nimbus_http::operation::Operation;
use nimbus_middleware::DefaultResponseClassifier;
use nimbus_operation::{
    build_operation, BuildError, Config, JsonResponseHandler, JsonVersion, OperationDescriptor,
    Protocol, RequiredField, SigningKind,
};

type OperationResult<O> =
    Result<Operation<JsonResponseHandler<O>, DefaultResponseClassifier>, BuildError>;

macro_rules! descriptor {
    ($name:literal, target: $target:literal, required: $required:expr) => {
        OperationDescriptor {
            name: $name,
            service: "swf",
            signing_name: "swf",
            api_version: "2012-01-25",
            method: Method::POST,
            protocol: Protocol::JsonRpc {
                target: $target,
                version: JsonVersion::V1_0,
            },
            path: &[],
            query: &[],
            required: $required,
            signing: SigningKind::SigV4,
        }
    };
}

static LIST_DOMAINS: OperationDescriptor<ListDomainsInput> = descriptor!(
    "ListDomains",
    target: "SimpleWorkflowService.ListDomains",
    required: &[RequiredField {
        name: "RegistrationStatus",
        is_set: |input| input.registration_status.is_some(),
    }]
);

static DESCRIBE_DOMAIN: OperationDescriptor<DescribeDomainInput> = descriptor!(
    "DescribeDomain",
    target: "SimpleWorkflowService.DescribeDomain",
    required: &[RequiredField { name: "Name", is_set: |input| input.name.is_some() }]
);

pub(crate) fn list_domains(
    input: &ListDomainsInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<ListDomainsOutput> {
    build_operation(input, &LIST_DOMAINS, conf, resolver, JsonResponseHandler::new())
}

pub(crate) fn describe_domain(
    input: &DescribeDomainInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<DescribeDomainOutput> {
    build_operation(input, &DESCRIBE_DOMAIN, conf, resolver, JsonResponseHandler::new())
}
