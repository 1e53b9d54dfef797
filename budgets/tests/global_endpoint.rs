/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use budgets::model::DescribeBudgetInput;
use budgets::{Client, Config};
use nimbus_client::test_connection::capture_request;
use nimbus_core::Region;

#[tokio::test]
async fn requests_resolve_to_the_partition_endpoint() {
    let (conn, rx) = capture_request(None);
    // the configured region must NOT leak into the endpoint
    let conf = Config::builder().region(Region::new("eu-central-1")).build();
    let client = Client::from_conf_conn(conf, conn);

    let _ = client
        .describe_budget(DescribeBudgetInput {
            account_id: Some("123456789012".to_string()),
            budget_name: Some("monthly".to_string()),
        })
        .await;

    let request = rx.expect_request();
    assert_eq!(request.method(), http::Method::POST);
    assert_eq!(request.uri().to_string(), "https://budgets.amazonaws.com/");
    assert_eq!(
        request.headers().get("x-amz-target").unwrap(),
        "AWSBudgetServiceGateway.DescribeBudget"
    );
    assert_eq!(
        request.headers().get("content-type").unwrap(),
        "application/x-amz-json-1.1"
    );
    let body: serde_json::Value =
        serde_json::from_slice(request.body().bytes().unwrap()).unwrap();
    assert_eq!(body["AccountId"], "123456789012");
    assert_eq!(body["BudgetName"], "monthly");
}

#[tokio::test]
async fn missing_budget_name_short_circuits() {
    let (conn, rx) = capture_request(None);
    let conf = Config::builder().region(Region::new("us-east-1")).build();
    let client = Client::from_conf_conn(conf, conn);

    let err = client
        .describe_budget(DescribeBudgetInput {
            account_id: Some("123456789012".to_string()),
            budget_name: None,
        })
        .await
        .expect_err("required field unset");
    assert_eq!(err.message(), Some("Missing required field [BudgetName]"));
    rx.expect_no_request();
}
