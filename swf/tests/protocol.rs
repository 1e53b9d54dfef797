/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use nimbus_client::test_connection::capture_request;
use nimbus_core::Region;
use swf::model::ListDomainsInput;
use swf::{Client, Config};

#[tokio::test]
async fn list_domains_speaks_json_1_0() {
    let (conn, rx) = capture_request(None);
    let conf = Config::builder().region(Region::new("us-east-1")).build();
    let client = Client::from_conf_conn(conf, conn);

    let _ = client
        .list_domains(ListDomainsInput {
            registration_status: Some("REGISTERED".to_string()),
            ..Default::default()
        })
        .await;

    let request = rx.expect_request();
    assert_eq!(request.method(), http::Method::POST);
    assert_eq!(request.uri().path(), "/");
    assert_eq!(
        request.headers().get("content-type").unwrap(),
        "application/x-amz-json-1.0"
    );
    assert_eq!(
        request.headers().get("x-amz-target").unwrap(),
        "SimpleWorkflowService.ListDomains"
    );
}

#[tokio::test]
async fn missing_registration_status_short_circuits() {
    let (conn, rx) = capture_request(None);
    let conf = Config::builder().region(Region::new("us-east-1")).build();
    let client = Client::from_conf_conn(conf, conn);

    let err = client
        .list_domains(ListDomainsInput::default())
        .await
        .expect_err("required field unset");
    assert_eq!(
        err.message(),
        Some("Missing required field [RegistrationStatus]")
    );
    rx.expect_no_request();
}
