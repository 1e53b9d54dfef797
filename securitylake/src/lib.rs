/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client for Amazon Security Lake.
//!
//! Subscriber management over a REST-JSON interface rooted at
//! `/v1/subscribers`.

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
pub const SERVICE_NAME: &str = "securitylake";
