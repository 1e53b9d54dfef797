/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use kinesisanalyticsv2::model::DescribeApplicationInput;
use kinesisanalyticsv2::{Client, Config};
use nimbus_client::test_connection::TestConnection;
use nimbus_core::Region;
use nimbus_http::body::SdkBody;
use nimbus_types::ErrorKind;

fn conf() -> Config {
    Config::builder().region(Region::new("us-east-1")).build()
}

fn input() -> DescribeApplicationInput {
    DescribeApplicationInput {
        application_name: Some("example".to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn namespaced_error_codes_are_sanitized() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(SdkBody::empty()).unwrap(),
        http::Response::builder()
            .status(400)
            .body(
                r#"{"__type":"com.amazonaws.kinesisanalytics#ResourceNotFoundException","message":"no such application"}"#,
            )
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn);

    let err = client.describe_application(input()).await.expect_err("service error");
    assert_eq!(err.kind(), ErrorKind::Service);
    assert_eq!(err.code(), Some("ResourceNotFoundException"));
    assert_eq!(err.message(), Some("no such application"));
    assert!(!err.retryable());
}

#[tokio::test]
async fn throttling_errors_carry_the_retryable_flag() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(SdkBody::empty()).unwrap(),
        http::Response::builder()
            .status(400)
            .body(r#"{"__type":"LimitExceededException","message":"slow down"}"#)
            .unwrap(),
    )]);
    // a single canned response: retries must not kick in
    let conf = Config::builder()
        .region(Region::new("us-east-1"))
        .max_attempts(1)
        .build();
    let client = Client::from_conf_conn(conf, conn);

    let err = client.describe_application(input()).await.expect_err("service error");
    assert_eq!(err.code(), Some("LimitExceededException"));
    assert!(err.retryable());
}

#[tokio::test]
async fn success_output_round_trips() {
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(SdkBody::empty()).unwrap(),
        http::Response::builder()
            .status(200)
            .body(
                r#"{"ApplicationDetail":{"ApplicationARN":"arn:aws:kinesisanalytics:us-east-1:123456789012:application/example","ApplicationName":"example","ApplicationStatus":"RUNNING","ApplicationVersionId":7}}"#,
            )
            .unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn);

    let output = client.describe_application(input()).await.expect("success");
    let detail = output.application_detail.expect("detail present");
    assert_eq!(detail.application_name.as_deref(), Some("example"));
    assert_eq!(detail.application_status.as_deref(), Some("RUNNING"));
    assert_eq!(detail.application_version_id, Some(7));
}
