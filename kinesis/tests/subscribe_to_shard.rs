/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use kinesis::model::{StartingPosition, SubscribeToShardInput};
use kinesis::{Client, Config};
use nimbus_client::test_connection::capture_request;
use nimbus_core::{Credentials, Region};
use nimbus_eventstream::{Header, HeaderValue, Message};
use nimbus_http::body::SdkBody;
use nimbus_sig_auth::{SignRequest, SigningContext, SigningError};

fn input() -> SubscribeToShardInput {
    SubscribeToShardInput {
        consumer_arn: Some(
            "arn:aws:kinesis:us-east-1:123456789012:stream/telemetry/consumer/app:1".to_string(),
        ),
        shard_id: Some("shardId-000000000000".to_string()),
        starting_position: Some(StartingPosition {
            type_: Some("LATEST".to_string()),
            ..Default::default()
        }),
    }
}

fn event_frame(continuation: &str) -> Vec<u8> {
    let payload = format!(
        r#"{{"Records":[{{"SequenceNumber":"{}","Data":"aGVsbG8=","PartitionKey":"device-1"}}],"ContinuationSequenceNumber":"{}","MillisBehindLatest":0}}"#,
        continuation, continuation,
    );
    let mut encoded = Vec::new();
    Message::new(payload.into_bytes())
        .add_header(Header::new(":message-type", HeaderValue::String("event".into())))
        .add_header(Header::new(
            ":event-type",
            HeaderValue::String("SubscribeToShardEvent".into()),
        ))
        .write_to(&mut encoded)
        .unwrap();
    encoded
}

#[tokio::test]
async fn events_stream_out_of_the_response_body() {
    let mut body = event_frame("100");
    body.extend_from_slice(&event_frame("101"));
    let (conn, _rx) = capture_request(Some(
        http::Response::builder()
            .status(200)
            .body(SdkBody::from(body))
            .unwrap(),
    ));
    let conf = Config::builder().region(Region::new("us-east-1")).build();
    let client = Client::from_conf_conn(conf, conn);

    let mut output = client.subscribe_to_shard(input()).await.expect("subscribes");

    let first = output.event_stream.recv().await.unwrap().expect("first event");
    assert_eq!(first.continuation_sequence_number.as_deref(), Some("100"));
    let records = first.records.expect("records");
    assert_eq!(records[0].data.as_ref().unwrap().as_ref(), b"hello");

    let second = output.event_stream.recv().await.unwrap().expect("second event");
    assert_eq!(second.continuation_sequence_number.as_deref(), Some("101"));

    assert!(output.event_stream.recv().await.unwrap().is_none());
}

#[tokio::test]
async fn exception_frames_end_the_stream_with_an_error() {
    let mut body = event_frame("100");
    let mut exception = Vec::new();
    Message::new(&br#"{"message":"lease expired"}"#[..])
        .add_header(Header::new(
            ":message-type",
            HeaderValue::String("exception".into()),
        ))
        .add_header(Header::new(
            ":exception-type",
            HeaderValue::String("ResourceInUseException".into()),
        ))
        .write_to(&mut exception)
        .unwrap();
    body.extend_from_slice(&exception);

    let (conn, _rx) = capture_request(Some(
        http::Response::builder()
            .status(200)
            .body(SdkBody::from(body))
            .unwrap(),
    ));
    let conf = Config::builder().region(Region::new("us-east-1")).build();
    let client = Client::from_conf_conn(conf, conn);

    let mut output = client.subscribe_to_shard(input()).await.expect("subscribes");
    assert!(output.event_stream.recv().await.unwrap().is_some());
    let err = output.event_stream.recv().await.expect_err("exception frame");
    assert_eq!(err.code(), Some("ResourceInUseException"));
    assert_eq!(err.message(), Some("lease expired"));
}

struct PanickingSigner;

impl SignRequest for PanickingSigner {
    fn sign(
        &self,
        _context: &SigningContext<'_>,
        _request: &mut http::Request<&[u8]>,
    ) -> Result<(), SigningError> {
        panic!("the streaming subscription must not be signed");
    }
}

#[tokio::test]
async fn subscribe_to_shard_dispatches_unsigned() {
    let (conn, rx) = capture_request(Some(
        http::Response::builder()
            .status(200)
            .body(SdkBody::from(event_frame("100")))
            .unwrap(),
    ));
    // a signer is configured, but the descriptor marks this operation
    // unsigned, so it must never run
    let conf = Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys("akid", "sekrit"))
        .signer(PanickingSigner)
        .build();
    let client = Client::from_conf_conn(conf, conn);

    let _ = client.subscribe_to_shard(input()).await.expect("subscribes");
    let request = rx.expect_request();
    assert!(request.headers().get(http::header::AUTHORIZATION).is_none());
}
