/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation descriptors for the AWS IoT Core Device Advisor API.

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
            service: "iotdeviceadvisor",
            signing_name: "iotdeviceadvisor",
            api_version: "2020-09-18",
            method: $method,
            protocol: Protocol::RestJson,
            path: $path,
            query: &[],
            required: $required,
            signing: SigningKind::SigV4,
        }
    };
}

static CREATE_SUITE_DEFINITION: OperationDescriptor<CreateSuiteDefinitionInput> = descriptor!(
    "CreateSuiteDefinition",
    Method::POST,
    path: &[PathSegment::Literal("suiteDefinitions")],
    required: &[RequiredField {
        name: "SuiteDefinitionConfiguration",
        is_set: |input| input.suite_definition_configuration.is_some(),
    }]
);

static START_SUITE_RUN: OperationDescriptor<StartSuiteRunInput> = descriptor!(
    "StartSuiteRun",
    Method::POST,
    path: &[
        PathSegment::Literal("suiteDefinitions"),
        PathSegment::Label {
            name: "SuiteDefinitionId",
            get: |input| input.suite_definition_id.as_deref(),
        },
        PathSegment::Literal("suiteRuns"),
    ],
    required: &[
        RequiredField {
            name: "SuiteDefinitionId",
            is_set: |input| input.suite_definition_id.is_some(),
        },
        RequiredField {
            name: "SuiteRunConfiguration",
            is_set: |input| input.suite_run_configuration.is_some(),
        },
    ]
);

static GET_SUITE_RUN: OperationDescriptor<GetSuiteRunInput> = descriptor!(
    "GetSuiteRun",
    Method::GET,
    path: &[
        PathSegment::Literal("suiteDefinitions"),
        PathSegment::Label {
            name: "SuiteDefinitionId",
            get: |input| input.suite_definition_id.as_deref(),
        },
        PathSegment::Literal("suiteRuns"),
        PathSegment::Label { name: "SuiteRunId", get: |input| input.suite_run_id.as_deref() },
    ],
    required: &[
        RequiredField {
            name: "SuiteDefinitionId",
            is_set: |input| input.suite_definition_id.is_some(),
        },
        RequiredField { name: "SuiteRunId", is_set: |input| input.suite_run_id.is_some() },
    ]
);

pub(crate) fn create_suite_definition(
    input: &CreateSuiteDefinitionInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<CreateSuiteDefinitionOutput> {
    build_operation(input, &CREATE_SUITE_DEFINITION, conf, resolver, JsonResponseHandler::new())
}

pub(crate) fn start_suite_run(
    input: &StartSuiteRunInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<StartSuiteRunOutput> {
    build_operation(input, &START_SUITE_RUN, conf, resolver, JsonResponseHandler::new())
}

pub(crate) fn get_suite_run(
    input: &GetSuiteRunInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<GetSuiteRunOutput> {
    build_operation(input, &GET_SUITE_RUN, conf, resolver, JsonResponseHandler::new())
}
