/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation descriptors for the Amazon Kinesis Data Analytics v2 API.

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
            service: "kinesisanalyticsv2",
            signing_name: "kinesisanalytics",
            api_version: "2018-05-23",
            method: Method::POST,
            protocol: Protocol::JsonRpc {
                target: $target,
                version: JsonVersion::V1_1,
            },
            path: &[],
            query: &[],
            required: $required,
            signing: SigningKind::SigV4,
        }
    };
}

static DESCRIBE_APPLICATION: OperationDescriptor<DescribeApplicationInput> = descriptor!(
    "DescribeApplication",
    target: "KinesisAnalytics_20180523.DescribeApplication",
    required: &[RequiredField {
        name: "ApplicationName",
        is_set: |input| input.application_name.is_some(),
    }]
);

static START_APPLICATION: OperationDescriptor<StartApplicationInput> = descriptor!(
    "StartApplication",
    target: "KinesisAnalytics_20180523.StartApplication",
    required: &[RequiredField {
        name: "ApplicationName",
        is_set: |input| input.application_name.is_some(),
    }]
);

pub(crate) fn describe_application(
    input: &DescribeApplicationInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<DescribeApplicationOutput> {
    build_operation(input, &DESCRIBE_APPLICATION, conf, resolver, JsonResponseHandler::new())
}

pub(crate) fn start_application(
    input: &StartApplicationInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<StartApplicationOutput> {
    build_operation(input, &START_APPLICATION, conf, resolver, JsonResponseHandler::new())
}
