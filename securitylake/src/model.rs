/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Data shapes for the Amazon Security Lake API.

use serde::{Deserialize, Serialize};

/// The AWS identity a subscriber assumes to consume data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwsIdentity {
    pub external_id: Option<String>,
    pub principal: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub subscriber_id: Option<String>,
    pub subscriber_arn: Option<String>,
    pub subscriber_name: Option<String>,
    pub subscriber_description: Option<String>,
    pub subscriber_status: Option<String>,
    pub subscriber_identity: Option<AwsIdentity>,
    pub access_types: Option<Vec<String>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriberInput {
    pub subscriber_name: Option<String>,
    pub subscriber_identity: Option<AwsIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_types: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriberOutput {
    pub subscriber: Option<Subscriber>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct GetSubscriberInput {
    /// The subscriber id. Carried in the request path.
    #[serde(skip_serializing)]
    pub subscriber_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetSubscriberOutput {
    pub subscriber: Option<Subscriber>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DeleteSubscriberInput {
    /// The subscriber id. Carried in the request path.
    #[serde(skip_serializing)]
    pub subscriber_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DeleteSubscriberOutput {}
