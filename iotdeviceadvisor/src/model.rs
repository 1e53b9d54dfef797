/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Data shapes for the AWS IoT Core Device Advisor API.

use serde::{Deserialize, Serialize};

/// The device a test suite runs against.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUnderTest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thing_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_arn: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteDefinitionConfiguration {
    pub suite_definition_name: Option<String>,
    pub root_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_permission_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub devices: Option<Vec<DeviceUnderTest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intended_for_qualification: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteRunConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_device: Option<DeviceUnderTest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_test_list: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel_run: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSuiteDefinitionInput {
    pub suite_definition_configuration: Option<SuiteDefinitionConfiguration>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSuiteDefinitionOutput {
    pub suite_definition_id: Option<String>,
    pub suite_definition_arn: Option<String>,
    pub suite_definition_name: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSuiteRunInput {
    /// The suite definition to run. Carried in the request path.
    #[serde(skip_serializing)]
    pub suite_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite_definition_version: Option<String>,
    pub suite_run_configuration: Option<SuiteRunConfiguration>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartSuiteRunOutput {
    pub suite_run_id: Option<String>,
    pub suite_run_arn: Option<String>,
    pub created_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GetSuiteRunInput {
    /// Carried in the request path.
    #[serde(skip_serializing)]
    pub suite_definition_id: Option<String>,
    /// Carried in the request path.
    #[serde(skip_serializing)]
    pub suite_run_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSuiteRunOutput {
    pub suite_definition_id: Option<String>,
    pub suite_definition_version: Option<String>,
    pub suite_run_id: Option<String>,
    pub suite_run_arn: Option<String>,
    pub suite_run_configuration: Option<SuiteRunConfiguration>,
    pub status: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}
