/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Data shapes for the Amazon Kinesis Data Streams API.

use nimbus_types::Blob;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateStreamInput {
    pub stream_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shard_count: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CreateStreamOutput {}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeStreamInput {
    pub stream_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_start_shard_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeStreamOutput {
    pub stream_description: Option<StreamDescription>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StreamDescription {
    pub stream_name: Option<String>,
    #[serde(rename = "StreamARN")]
    pub stream_arn: Option<String>,
    /// `CREATING`, `DELETING`, `ACTIVE`, or `UPDATING`.
    pub stream_status: Option<String>,
    pub shards: Option<Vec<Shard>>,
    pub has_more_shards: Option<bool>,
    pub retention_period_hours: Option<i32>,
    pub encryption_type: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Shard {
    pub shard_id: Option<String>,
    pub parent_shard_id: Option<String>,
    pub hash_key_range: Option<HashKeyRange>,
    pub sequence_number_range: Option<SequenceNumberRange>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct HashKeyRange {
    pub starting_hash_key: Option<String>,
    pub ending_hash_key: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SequenceNumberRange {
    pub starting_sequence_number: Option<String>,
    pub ending_sequence_number: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRecordInput {
    pub stream_name: Option<String>,
    /// The record payload, base64-encoded on the wire.
    #[serde(with = "nimbus_operation::json::blob", skip_serializing_if = "Option::is_none")]
    pub data: Option<Blob>,
    pub partition_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_hash_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_number_for_ordering: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRecordOutput {
    pub shard_id: Option<String>,
    pub sequence_number: Option<String>,
    pub encryption_type: Option<String>,
}

/// Where a shard subscription starts reading.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartingPosition {
    /// `AT_SEQUENCE_NUMBER`, `AFTER_SEQUENCE_NUMBER`, `AT_TIMESTAMP`,
    /// `TRIM_HORIZON`, or `LATEST`.
    #[serde(rename = "Type")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubscribeToShardInput {
    #[serde(rename = "ConsumerARN")]
    pub consumer_arn: Option<String>,
    pub shard_id: Option<String>,
    pub starting_position: Option<StartingPosition>,
}

/// A record delivered on a shard subscription.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    pub sequence_number: Option<String>,
    pub approximate_arrival_timestamp: Option<f64>,
    /// The record payload, base64-encoded on the wire.
    #[serde(with = "nimbus_operation::json::blob", default)]
    pub data: Option<Blob>,
    pub partition_key: Option<String>,
    pub encryption_type: Option<String>,
}

/// One event frame on a shard subscription.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubscribeToShardEvent {
    pub records: Option<Vec<Record>>,
    pub continuation_sequence_number: Option<String>,
    pub millis_behind_latest: Option<i64>,
}

/// Output of `SubscribeToShard`: a live event receiver rather than a
/// buffered response body.
#[derive(Debug)]
pub struct SubscribeToShardOutput {
    pub event_stream: nimbus_http::event_stream::Receiver<SubscribeToShardEvent>,
}
