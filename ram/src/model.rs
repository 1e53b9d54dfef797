/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Data shapes for the AWS Resource Access Manager API.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub key: Option<String>,
    pub value: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceSharePermissionDetail {
    pub arn: Option<String>,
    pub version: Option<String>,
    pub default_version: Option<bool>,
    pub name: Option<String>,
    pub resource_type: Option<String>,
    pub permission: Option<String>,
    pub creation_time: Option<String>,
    pub last_updated_time: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceShareAssociation {
    pub resource_share_arn: Option<String>,
    pub resource_share_name: Option<String>,
    pub associated_entity: Option<String>,
    pub association_type: Option<String>,
    pub status: Option<String>,
    pub status_message: Option<String>,
    pub external: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPermissionInput {
    pub permission_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_version: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPermissionOutput {
    pub permission: Option<ResourceSharePermissionDetail>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResourceShareAssociationsInput {
    /// `PRINCIPAL` or `RESOURCE`.
    pub association_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_share_arns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResourceShareAssociationsOutput {
    pub resource_share_associations: Option<Vec<ResourceShareAssociation>>,
    pub next_token: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResourceInput {
    pub resource_share_arn: Option<String>,
    pub tags: Option<Vec<Tag>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TagResourceOutput {}
