/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation descriptors for the AWS Budgets API.

use crate::model::*;
use http::Method;
use nimbus_endpoint::SharedEndpointResolver;
use nimbus_http::operation::Operation;
use nimbus_middleware::DefaultResponseClassifier;
use nimbus_operation::{
    build_operation, BuildError, Config, JsonResponseHandler, JsonVersion, OperationDescriptor,
    Protocol, RequiredField, SigningKind,
};

type OperationResult<O> =
    Result<Operation<JsonResponseHandler<O>, DefaultResponseClassifier>, BuildError>;

macro_rules! descriptor {
    ($name:literal, target: $target:literal, required: $required:expr) => {
        OperationDescriptor {
            name: $name,
            service: "budgets",
            signing_name: "budgets",
            api_version: "2016-10-20",
            method: Method::POST,
            protocol: Protocol::JsonRpc {
                target: $target,
                version: JsonVersion::V1_1,
            },
            path: &[],
            query: &[],
            required: $required,
            signing: SigningKind::SigV4,
        }
    };
}

static CREATE_BUDGET: OperationDescriptor<CreateBudgetInput> = descriptor!(
    "CreateBudget",
    target: "AWSBudgetServiceGateway.CreateBudget",
    required: &[
        RequiredField { name: "AccountId", is_set: |input| input.account_id.is_some() },
        RequiredField { name: "Budget", is_set: |input| input.budget.is_some() },
    ]
);

static DESCRIBE_BUDGET: OperationDescriptor<DescribeBudgetInput> = descriptor!(
    "DescribeBudget",
    target: "AWSBudgetServiceGateway.DescribeBudget",
    required: &[
        RequiredField { name: "AccountId", is_set: |input| input.account_id.is_some() },
        RequiredField { name: "BudgetName", is_set: |input| input.budget_name.is_some() },
    ]
);

pub(crate) fn create_budget(
    input: &CreateBudgetInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<CreateBudgetOutput> {
    build_operation(input, &CREATE_BUDGET, conf, resolver, JsonResponseHandler::new())
}

pub(crate) fn describe_budget(
    input: &DescribeBudgetInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<DescribeBudgetOutput> {
    build_operation(input, &DESCRIBE_BUDGET, conf, resolver, JsonResponseHandler::new())
}
