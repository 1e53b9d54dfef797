/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client for Amazon Kinesis Data Streams.
//!
//! A JSON-RPC API under the `Kinesis_20131202` target prefix. Most
//! operations are plain request/response; `SubscribeToShard` is the
//! exception: its response is a live
//! `application/vnd.amazon.eventstream` stream of records that the
//! client surfaces as an [`event_stream`] receiver instead of a
//! buffered body.

pub mod endpoint;
pub mod event_stream;
pub mod model;

mod operation;

#[cfg(feature = "client")]
mod client;
#[cfg(feature = "client")]
pub use client::Client;

pub use nimbus_http::result::{SdkError, SdkSuccess};
pub use nimbus_operation::Config;

/// The service identifier used in telemetry and user agent strings.
pub const SERVICE_NAME: &str = "kinesis";
