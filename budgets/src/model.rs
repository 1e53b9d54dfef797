/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Data shapes for the AWS Budgets API.

use serde::{Deserialize, Serialize};

/// A cost or usage amount with its unit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Spend {
    pub amount: Option<String>,
    pub unit: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Budget {
    pub budget_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_limit: Option<Spend>,
    /// `COST`, `USAGE`, `RI_UTILIZATION`, …
    pub budget_type: Option<String>,
    /// `DAILY`, `MONTHLY`, `QUARTERLY`, or `ANNUALLY`.
    pub time_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculated_spend: Option<CalculatedSpend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CalculatedSpend {
    pub actual_spend: Option<Spend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forecasted_spend: Option<Spend>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBudgetInput {
    pub account_id: Option<String>,
    pub budget: Option<Budget>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CreateBudgetOutput {}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeBudgetInput {
    pub account_id: Option<String>,
    pub budget_name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeBudgetOutput {
    pub budget: Option<Budget>,
}
