/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client for AWS Resource Access Manager.
//!
//! RAM's REST interface routes every operation as a POST to a lowercase
//! action path (eg. `POST /getpermission`); identifying ARNs travel in
//! the JSON body, not the path.

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
pub const SERVICE_NAME: &str = "ram";
