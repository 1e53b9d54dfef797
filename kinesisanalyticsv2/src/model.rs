/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Data shapes for the Amazon Kinesis Data Analytics v2 API.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationDetail {
    #[serde(rename = "ApplicationARN")]
    pub application_arn: Option<String>,
    pub application_name: Option<String>,
    pub application_description: Option<String>,
    /// `SQL-1_0`, `FLINK-1_18`, …
    pub runtime_environment: Option<String>,
    pub application_status: Option<String>,
    pub application_version_id: Option<i64>,
    pub create_timestamp: Option<f64>,
    pub last_update_timestamp: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeApplicationInput {
    pub application_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_additional_details: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeApplicationOutput {
    pub application_detail: Option<ApplicationDetail>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartApplicationInput {
    pub application_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StartApplicationOutput {
    pub operation_id: Option<String>,
}
