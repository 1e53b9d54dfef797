/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use nimbus_client::test_connection::capture_request;
use nimbus_core::Region;
use ram::model::{GetPermissionInput, Tag, TagResourceInput};
use ram::{Client, Config};

fn conf() -> Config {
    Config::builder().region(Region::new("us-west-2")).build()
}

#[tokio::test]
async fn get_permission_posts_the_arn_in_the_body() {
    let (conn, rx) = capture_request(None);
    let client = Client::from_conf_conn(conf(), conn);

    let _ = client
        .get_permission(GetPermissionInput {
            permission_arn: Some("arn:aws:ram::aws:permission/Example".to_string()),
            permission_version: None,
        })
        .await;

    let request = rx.expect_request();
    assert_eq!(request.method(), http::Method::POST);
    assert_eq!(request.uri().path(), "/getpermission");
    let body: serde_json::Value =
        serde_json::from_slice(request.body().bytes().unwrap()).unwrap();
    assert_eq!(body["permissionArn"], "arn:aws:ram::aws:permission/Example");
    // unset optional members are omitted from the wire shape
    assert!(body.get("permissionVersion").is_none());
}

#[tokio::test]
async fn missing_permission_arn_short_circuits() {
    let (conn, rx) = capture_request(None);
    let client = Client::from_conf_conn(conf(), conn);
    let err = client
        .get_permission(GetPermissionInput::default())
        .await
        .expect_err("required field unset");
    assert_eq!(err.message(), Some("Missing required field [PermissionArn]"));
    rx.expect_no_request();
}

#[tokio::test]
async fn tag_resource_requires_both_members() {
    let (conn, rx) = capture_request(None);
    let client = Client::from_conf_conn(conf(), conn);
    let err = client
        .tag_resource(TagResourceInput {
            resource_share_arn: Some("arn:aws:ram:us-west-2:123456789012:resource-share/x".into()),
            tags: None,
        })
        .await
        .expect_err("tags unset");
    assert_eq!(err.message(), Some("Missing required field [Tags]"));
    rx.expect_no_request();

    let (conn, rx) = capture_request(None);
    let client = Client::from_conf_conn(conf(), conn);
    let _ = client
        .tag_resource(TagResourceInput {
            resource_share_arn: Some("arn:aws:ram:us-west-2:123456789012:resource-share/x".into()),
            tags: Some(vec![Tag {
                key: Some("team".to_string()),
                value: Some("storage".to_string()),
            }]),
        })
        .await;
    assert_eq!(rx.expect_request().uri().path(), "/tagresource");
}
