/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use nimbus_client::test_connection::capture_request;
use nimbus_core::Region;
use nimbus_http::body::SdkBody;
use privatenetworks::model::{GetNetworkSiteInput, UpdateNetworkSiteInput};
use privatenetworks::{Client, Config};

fn conf() -> Config {
    Config::builder().region(Region::new("us-east-1")).build()
}

#[tokio::test]
async fn get_network_site_path_is_deterministic() {
    for _ in 0..2 {
        let (conn, rx) = capture_request(None);
        let client = Client::from_conf_conn(conf(), conn);
        let _ = client
            .get_network_site(GetNetworkSiteInput {
                network_site_arn: Some("arn:x".to_string()),
            })
            .await;
        let request = rx.expect_request();
        assert_eq!(request.method(), http::Method::GET);
        assert_eq!(request.uri().path(), "/v1/network-sites/arn:x");
    }
}

#[tokio::test]
async fn update_network_site_puts_to_the_site_path() {
    let (conn, rx) = capture_request(None);
    let client = Client::from_conf_conn(conf(), conn);
    let _ = client
        .update_network_site(UpdateNetworkSiteInput {
            network_site_arn: Some("arn:x".to_string()),
            description: Some("updated".to_string()),
            client_token: None,
        })
        .await;

    let request = rx.expect_request();
    assert_eq!(request.method(), http::Method::PUT);
    assert_eq!(request.uri().path(), "/v1/network-sites/site");
    let body: serde_json::Value =
        serde_json::from_slice(request.body().bytes().unwrap()).unwrap();
    assert_eq!(body["networkSiteArn"], "arn:x");
    assert_eq!(body["description"], "updated");
}

#[tokio::test]
async fn ping_resolves_from_the_empty_parameter_set() {
    let (conn, rx) = capture_request(Some(
        http::Response::builder()
            .status(200)
            .body(SdkBody::from(r#"{"status":"HEALTHY"}"#))
            .unwrap(),
    ));
    let client = Client::from_conf_conn(conf(), conn);

    let output = client.ping().await.expect("ping succeeds");
    assert_eq!(output.status.as_deref(), Some("HEALTHY"));

    let request = rx.expect_request();
    assert_eq!(request.method(), http::Method::GET);
    assert_eq!(
        request.uri().to_string(),
        "https://private-networks.us-east-1.amazonaws.com/ping"
    );
}
