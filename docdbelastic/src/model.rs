/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Data shapes for the DocumentDB Elastic Clusters API.
//!
//! Inputs are plain data holders: public optional fields plus `Default`,
//! checked against the operation's required-field list at dispatch time.

use serde::{Deserialize, Serialize};

/// An elastic cluster as returned by the service.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub cluster_arn: Option<String>,
    pub cluster_name: Option<String>,
    pub status: Option<String>,
    pub admin_user_name: Option<String>,
    pub auth_type: Option<String>,
    pub cluster_endpoint: Option<String>,
    pub create_time: Option<String>,
    pub shard_capacity: Option<i32>,
    pub shard_count: Option<i32>,
    pub preferred_maintenance_window: Option<String>,
    pub subnet_ids: Option<Vec<String>>,
    pub vpc_security_group_ids: Option<Vec<String>>,
}

/// Summary form used by list operations.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterInList {
    pub cluster_arn: Option<String>,
    pub cluster_name: Option<String>,
    pub status: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClusterInput {
    pub cluster_name: Option<String>,
    pub admin_user_name: Option<String>,
    pub admin_user_password: Option<String>,
    pub auth_type: Option<String>,
    pub shard_capacity: Option<i32>,
    pub shard_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_security_group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_window: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateClusterOutput {
    pub cluster: Option<Cluster>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GetClusterInput {
    /// The ARN identifier of the cluster. Carried in the request path.
    #[serde(skip_serializing)]
    pub cluster_arn: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetClusterOutput {
    pub cluster: Option<Cluster>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DeleteClusterInput {
    /// The ARN identifier of the cluster to delete. Carried in the
    /// request path.
    #[serde(skip_serializing)]
    pub cluster_arn: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteClusterOutput {
    pub cluster: Option<Cluster>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ListClustersInput {
    #[serde(skip_serializing)]
    pub next_token: Option<String>,
    #[serde(skip_serializing)]
    pub max_results: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListClustersOutput {
    pub clusters: Option<Vec<ClusterInList>>,
    pub next_token: Option<String>,
}
