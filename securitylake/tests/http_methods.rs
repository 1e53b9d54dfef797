/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The HTTP method of every operation is fixed at descriptor time,
//! independent of request content.

use nimbus_client::test_connection::capture_request;
use nimbus_core::Region;
use securitylake::model::{
    AwsIdentity, CreateSubscriberInput, DeleteSubscriberInput, GetSubscriberInput,
};
use securitylake::{Client, Config};

fn conf() -> Config {
    Config::builder().region(Region::new("us-east-1")).build()
}

#[tokio::test]
async fn get_subscriber_uses_get() {
    let (conn, rx) = capture_request(None);
    let client = Client::from_conf_conn(conf(), conn);
    let _ = client
        .get_subscriber(GetSubscriberInput {
            subscriber_id: Some("sub-1234".to_string()),
        })
        .await;
    let request = rx.expect_request();
    assert_eq!(request.method(), http::Method::GET);
    assert_eq!(request.uri().path(), "/v1/subscribers/sub-1234");
}

#[tokio::test]
async fn delete_subscriber_uses_delete() {
    let (conn, rx) = capture_request(None);
    let client = Client::from_conf_conn(conf(), conn);
    let _ = client
        .delete_subscriber(DeleteSubscriberInput {
            subscriber_id: Some("sub-1234".to_string()),
        })
        .await;
    let request = rx.expect_request();
    assert_eq!(request.method(), http::Method::DELETE);
    assert_eq!(request.uri().path(), "/v1/subscribers/sub-1234");
}

#[tokio::test]
async fn create_subscriber_uses_post() {
    let (conn, rx) = capture_request(None);
    let client = Client::from_conf_conn(conf(), conn);
    let _ = client
        .create_subscriber(CreateSubscriberInput {
            subscriber_name: Some("example".to_string()),
            subscriber_identity: Some(AwsIdentity {
                external_id: Some("ext-1".to_string()),
                principal: Some("123456789012".to_string()),
            }),
            ..Default::default()
        })
        .await;
    let request = rx.expect_request();
    assert_eq!(request.method(), http::Method::POST);
    assert_eq!(request.uri().path(), "/v1/subscribers");
    assert_eq!(
        request.headers().get("content-type").unwrap(),
        "application/json"
    );
}

#[tokio::test]
async fn missing_subscriber_id_short_circuits() {
    let (conn, rx) = capture_request(None);
    let client = Client::from_conf_conn(conf(), conn);
    let err = client
        .get_subscriber(GetSubscriberInput::default())
        .await
        .expect_err("required field unset");
    assert_eq!(err.message(), Some("Missing required field [SubscriberId]"));
    rx.expect_no_request();
}
