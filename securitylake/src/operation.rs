/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation descriptors for the Amazon Security Lake API.

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
            service: "securitylake",
            signing_name: "securitylake",
            api_version: "2018-05-10",
            method: $method,
            protocol: Protocol::RestJson,
            path: $path,
            query: &[],
            required: $required,
            signing: SigningKind::SigV4,
        }
    };
}

static CREATE_SUBSCRIBER: OperationDescriptor<CreateSubscriberInput> = descriptor!(
    "CreateSubscriber",
    Method::POST,
    path: &[PathSegment::Literal("v1/subscribers")],
    required: &[
        RequiredField { name: "SubscriberName", is_set: |input| input.subscriber_name.is_some() },
        RequiredField {
            name: "SubscriberIdentity",
            is_set: |input| input.subscriber_identity.is_some(),
        },
    ]
);

static GET_SUBSCRIBER: OperationDescriptor<GetSubscriberInput> = descriptor!(
    "GetSubscriber",
    Method::GET,
    path: &[
        PathSegment::Literal("v1/subscribers"),
        PathSegment::Label { name: "SubscriberId", get: |input| input.subscriber_id.as_deref() },
    ],
    required: &[RequiredField { name: "SubscriberId", is_set: |input| input.subscriber_id.is_some() }]
);

static DELETE_SUBSCRIBER: OperationDescriptor<DeleteSubscriberInput> = descriptor!(
    "DeleteSubscriber",
    Method::DELETE,
    path: &[
        PathSegment::Literal("v1/subscribers"),
        PathSegment::Label { name: "SubscriberId", get: |input| input.subscriber_id.as_deref() },
    ],
    required: &[RequiredField { name: "SubscriberId", is_set: |input| input.subscriber_id.is_some() }]
);

pub(crate) fn create_subscriber(
    input: &CreateSubscriberInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<CreateSubscriberOutput> {
    build_operation(input, &CREATE_SUBSCRIBER, conf, resolver, JsonResponseHandler::new())
}

pub(crate) fn get_subscriber(
    input: &GetSubscriberInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<GetSubscriberOutput> {
    build_operation(input, &GET_SUBSCRIBER, conf, resolver, JsonResponseHandler::new())
}

pub(crate) fn delete_subscriber(
    input: &DeleteSubscriberInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<DeleteSubscriberOutput> {
    build_operation(input, &DELETE_SUBSCRIBER, conf, resolver, JsonResponseHandler::new())
}
