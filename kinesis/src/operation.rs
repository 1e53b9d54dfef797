/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation descriptors for the Amazon Kinesis Data Streams API.

use crate::event_stream::SubscribeToShardResponseHandler;
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
    ($name:literal, target: $target:literal, signing: $signing:expr, required: $required:expr) => {
        OperationDescriptor {
            name: $name,
            service: "kinesis",
            signing_name: "kinesis",
            api_version: "2013-12-02",
            method: Method::POST,
            protocol: Protocol::JsonRpc {
                target: $target,
                version: JsonVersion::V1_1,
            },
            path: &[],
            query: &[],
            required: $required,
            signing: $signing,
        }
    };
}

static CREATE_STREAM: OperationDescriptor<CreateStreamInput> = descriptor!(
    "CreateStream",
    target: "Kinesis_20131202.CreateStream",
    signing: SigningKind::SigV4,
    required: &[RequiredField { name: "StreamName", is_set: |input| input.stream_name.is_some() }]
);

static DESCRIBE_STREAM: OperationDescriptor<DescribeStreamInput> = descriptor!(
    "DescribeStream",
    target: "Kinesis_20131202.DescribeStream",
    signing: SigningKind::SigV4,
    required: &[RequiredField { name: "StreamName", is_set: |input| input.stream_name.is_some() }]
);

static PUT_RECORD: OperationDescriptor<PutRecordInput> = descriptor!(
    "PutRecord",
    target: "Kinesis_20131202.PutRecord",
    signing: SigningKind::SigV4,
    required: &[
        RequiredField { name: "StreamName", is_set: |input| input.stream_name.is_some() },
        RequiredField { name: "Data", is_set: |input| input.data.is_some() },
        RequiredField { name: "PartitionKey", is_set: |input| input.partition_key.is_some() },
    ]
);

// The streaming subscription dispatches unsigned; its response handler
// installs the event stream receiver instead of buffering the body.
static SUBSCRIBE_TO_SHARD: OperationDescriptor<SubscribeToShardInput> = descriptor!(
    "SubscribeToShard",
    target: "Kinesis_20131202.SubscribeToShard",
    signing: SigningKind::Unsigned,
    required: &[
        RequiredField { name: "ConsumerARN", is_set: |input| input.consumer_arn.is_some() },
        RequiredField { name: "ShardId", is_set: |input| input.shard_id.is_some() },
        RequiredField {
            name: "StartingPosition",
            is_set: |input| input.starting_position.is_some(),
        },
    ]
);

pub(crate) fn create_stream(
    input: &CreateStreamInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<CreateStreamOutput> {
    build_operation(input, &CREATE_STREAM, conf, resolver, JsonResponseHandler::new())
}

pub(crate) fn describe_stream(
    input: &DescribeStreamInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<DescribeStreamOutput> {
    build_operation(input, &DESCRIBE_STREAM, conf, resolver, JsonResponseHandler::new())
}

pub(crate) fn put_record(
    input: &PutRecordInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<PutRecordOutput> {
    build_operation(input, &PUT_RECORD, conf, resolver, JsonResponseHandler::new())
}

pub(crate) fn subscribe_to_shard(
    input: &SubscribeToShardInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> Result<
    Operation<SubscribeToShardResponseHandler, DefaultResponseClassifier>,
    BuildError,
> {
    build_operation(
        input,
        &SUBSCRIBE_TO_SHARD,
        conf,
        resolver,
        SubscribeToShardResponseHandler,
    )
}
