/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client for AWS Private 5G.
//!
//! Network sites are addressed by ARN through a REST-JSON interface
//! rooted at `/v1/network-sites`. The service also exposes a
//! parameterless health check, [`Client::ping`], which takes no request
//! object at all.

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
pub const SERVICE_NAME: &str = "privatenetworks";
