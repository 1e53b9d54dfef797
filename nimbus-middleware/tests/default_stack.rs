/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! End-to-end tests of the default middleware stack over a client with
//! a test connection.

use bytes::Bytes;
use nimbus_client::test_connection::capture_request;
use nimbus_core::Region;
use nimbus_endpoint::partition::{Metadata, Protocol};
use nimbus_endpoint::{set_endpoint_resolver, Params};
use nimbus_http::body::SdkBody;
use nimbus_http::operation::{Metadata as OperationMetadata, Operation, Request};
use nimbus_http::response::ParseStrictResponse;
use nimbus_middleware::DefaultMiddleware;
use nimbus_sig_auth::OperationSigningConfig;
use nimbus_types::{Error, ErrorKind};
use std::sync::Arc;

#[derive(Clone)]
struct StringParser;

impl ParseStrictResponse for StringParser {
    type Output = Result<String, Error>;

    fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
        Ok(String::from_utf8_lossy(response.body()).to_string())
    }
}

fn operation(configure: impl FnOnce(&mut nimbus_http::property_bag::PropertyBag)) -> Operation<StringParser, ()> {
    let request = Request::new(
        http::Request::builder()
            .method("POST")
            .uri("/")
            .body(SdkBody::from("{}"))
            .expect("valid request"),
    );
    {
        let mut props = request.properties();
        props.insert(OperationSigningConfig::default_config());
        configure(&mut props);
    }
    Operation::new(request, StringParser)
        .with_metadata(OperationMetadata::new("TestOperation", "testservice"))
}

fn client<C>(conn: C) -> nimbus_client::Client<C, DefaultMiddleware> {
    nimbus_client::Builder::new()
        .connector(conn)
        .middleware(DefaultMiddleware::new())
        .build()
}

#[tokio::test]
async fn unset_endpoint_resolver_fails_before_dispatch() {
    let (conn, rx) = capture_request(None);
    let client = client(conn);

    let err = client
        .call(operation(|_props| {}))
        .await
        .expect_err("no endpoint resolver configured");
    assert_eq!(err.kind(), ErrorKind::EndpointResolutionFailure);
    assert_eq!(err.code(), Some("ENDPOINT_RESOLUTION_FAILURE"));

    rx.expect_no_request();
}

#[tokio::test]
async fn the_stack_resolves_decorates_and_dispatches() {
    let (conn, rx) = capture_request(Some(
        http::Response::builder()
            .status(200)
            .body(SdkBody::from("hello"))
            .unwrap(),
    ));
    let client = client(conn);

    let parsed = client
        .call(operation(|props| {
            props.insert(Params::builder().region(Some(Region::new("us-east-1"))).build());
            set_endpoint_resolver(
                props,
                Arc::new(Metadata {
                    uri_template: "testservice.{region}.amazonaws.com",
                    protocol: Protocol::Https,
                    credential_scope: Default::default(),
                }),
            );
        }))
        .await
        .expect("dispatch succeeds");
    assert_eq!(parsed, "hello");

    let request = rx.expect_request();
    assert_eq!(
        request.uri().to_string(),
        "https://testservice.us-east-1.amazonaws.com/"
    );
    let user_agent = request
        .headers()
        .get("user-agent")
        .expect("user agent set")
        .to_str()
        .unwrap();
    assert!(user_agent.starts_with("nimbus-sdk-rust/"), "{}", user_agent);
    assert_eq!(
        request.headers().get("user-agent"),
        request.headers().get("x-amz-user-agent"),
    );
}
