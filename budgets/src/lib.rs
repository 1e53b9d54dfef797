/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client for AWS Budgets.
//!
//! Budgets is a JSON-RPC API: every operation is a POST to `/` carrying
//! an `X-Amz-Target` header. The service is global: requests resolve to
//! the partition endpoint and sign as `us-east-1` regardless of the
//! configured region.

pub mod endpoint;
pub mod model;

mod operation;

#[cfg(feature = "client")]
mod client;
#[cfg(feature = "client")]
pub use client::Client;

pub use nimbus_http::result::{SdkError, SdkSuccess};
pub use nimbus_operation::Config;

/// The service identifier used in telemetry and user agent strings.
pub const SERVICE_NAME: &str = "budgets";
