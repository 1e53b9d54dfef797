/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation descriptors for the AWS Resource Access Manager API.

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
    ($name:literal, path: $path:expr, required: $required:expr) => {
        OperationDescriptor {
            name: $name,
            service: "ram",
            signing_name: "ram",
            api_version: "2018-01-04",
            method: Method::POST,
            protocol: Protocol::RestJson,
            path: $path,
            query: &[],
            required: $required,
            signing: SigningKind::SigV4,
        }
    };
}

static GET_PERMISSION: OperationDescriptor<GetPermissionInput> = descriptor!(
    "GetPermission",
    path: &[PathSegment::Literal("getpermission")],
    required: &[RequiredField {
        name: "PermissionArn",
        is_set: |input| input.permission_arn.is_some(),
    }]
);

static GET_RESOURCE_SHARE_ASSOCIATIONS: OperationDescriptor<GetResourceShareAssociationsInput> = descriptor!(
    "GetResourceShareAssociations",
    path: &[PathSegment::Literal("getresourceshareassociations")],
    required: &[RequiredField {
        name: "AssociationType",
        is_set: |input| input.association_type.is_some(),
    }]
);

static TAG_RESOURCE: OperationDescriptor<TagResourceInput> = descriptor!(
    "TagResource",
    path: &[PathSegment::Literal("tagresource")],
    required: &[
        RequiredField {
            name: "ResourceShareArn",
            is_set: |input| input.resource_share_arn.is_some(),
        },
        RequiredField { name: "Tags", is_set: |input| input.tags.is_some() },
    ]
);

pub(crate) fn get_permission(
    input: &GetPermissionInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<GetPermissionOutput> {
    build_operation(input, &GET_PERMISSION, conf, resolver, JsonResponseHandler::new())
}

pub(crate) fn get_resource_share_associations(
    input: &GetResourceShareAssociationsInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<GetResourceShareAssociationsOutput> {
    build_operation(
        input,
        &GET_RESOURCE_SHARE_ASSOCIATIONS,
        conf,
        resolver,
        JsonResponseHandler::new(),
    )
}

pub(crate) fn tag_resource(
    input: &TagResourceInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<TagResourceOutput> {
    build_operation(input, &TAG_RESOURCE, conf, resolver, JsonResponseHandler::new())
}
