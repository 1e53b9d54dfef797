/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use iotdeviceadvisor::model::GetSuiteRunInput;
use iotdeviceadvisor::{Client, Config};
use nimbus_client::test_connection::capture_request;
use nimbus_core::Region;

#[tokio::test]
async fn suite_run_path_interleaves_both_identifiers() {
    let (conn, rx) = capture_request(None);
    let conf = Config::builder().region(Region::new("eu-west-1")).build();
    let client = Client::from_conf_conn(conf, conn);

    let _ = client
        .get_suite_run(GetSuiteRunInput {
            suite_definition_id: Some("def-123".to_string()),
            suite_run_id: Some("run-456".to_string()),
        })
        .await;

    let request = rx.expect_request();
    assert_eq!(request.method(), http::Method::GET);
    assert_eq!(
        request.uri().to_string(),
        "https://api.iotdeviceadvisor.eu-west-1.amazonaws.com/suiteDefinitions/def-123/suiteRuns/run-456"
    );
}

#[tokio::test]
async fn each_missing_identifier_is_reported_by_name() {
    let (conn, rx) = capture_request(None);
    let conf = Config::builder().region(Region::new("eu-west-1")).build();
    let client = Client::from_conf_conn(conf, conn);

    let err = client
        .get_suite_run(GetSuiteRunInput {
            suite_definition_id: Some("def-123".to_string()),
            suite_run_id: None,
        })
        .await
        .expect_err("run id unset");
    assert_eq!(err.message(), Some("Missing required field [SuiteRunId]"));

    let err = client
        .get_suite_run(GetSuiteRunInput::default())
        .await
        .expect_err("definition id unset");
    assert_eq!(
        err.message(),
        Some("Missing required field [SuiteDefinitionId]")
    );

    rx.expect_no_request();
}
