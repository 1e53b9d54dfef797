/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client for Amazon DocumentDB Elastic Clusters.
//!
//! Elastic clusters are addressed by ARN through a REST-JSON interface:
//! cluster lifecycle operations map onto `/cluster/<arn>` resources.
//!
//! ```no_run
//! # async fn example() -> Result<(), docdbelastic::SdkError> {
//! let conf = docdbelastic::Config::builder()
//!     .region(nimbus_core::Region::new("us-east-1"))
//!     .build();
//! let client = docdbelastic::Client::from_conf(conf);
//! let cluster = client
//!     .get_cluster(docdbelastic::model::GetClusterInput {
//!         cluster_arn: Some("arn:aws:docdb-elastic:us-east-1:123456789012:cluster/example".into()),
//!     })
//!     .await?;
//! # let _ = cluster;
//! # Ok(())
//! # }
//! ```

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
pub const SERVICE_NAME: &str = "docdbelastic";
