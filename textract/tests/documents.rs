/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use nimbus_client::test_connection::{capture_request, TestConnection};
use nimbus_core::Region;
use nimbus_http::body::SdkBody;
use nimbus_types::Blob;
use textract::model::{AnalyzeDocumentInput, DetectDocumentTextInput, Document, S3Object};
use textract::{Client, Config};

fn conf() -> Config {
    Config::builder().region(Region::new("us-east-1")).build()
}

#[tokio::test]
async fn inline_documents_travel_as_base64() {
    let (conn, rx) = capture_request(None);
    let client = Client::from_conf_conn(conf(), conn);

    let _ = client
        .detect_document_text(DetectDocumentTextInput {
            document: Some(Document {
                bytes: Some(Blob::new("%PDF-1.7 fake")),
                s3_object: None,
            }),
        })
        .await;

    let request = rx.expect_request();
    assert_eq!(
        request.headers().get("x-amz-target").unwrap(),
        "Textract.DetectDocumentText"
    );
    let body: serde_json::Value =
        serde_json::from_slice(request.body().bytes().unwrap()).unwrap();
    assert_eq!(body["Document"]["Bytes"], "JVBERi0xLjcgZmFrZQ==");
    assert!(body["Document"].get("S3Object").is_none());
}

#[tokio::test]
async fn s3_documents_travel_by_reference() {
    let (conn, rx) = capture_request(None);
    let client = Client::from_conf_conn(conf(), conn);

    let _ = client
        .analyze_document(AnalyzeDocumentInput {
            document: Some(Document {
                bytes: None,
                s3_object: Some(S3Object {
                    bucket: Some("scans".to_string()),
                    name: Some("form.png".to_string()),
                    version: None,
                }),
            }),
            feature_types: Some(vec!["FORMS".to_string()]),
        })
        .await;

    let body: serde_json::Value =
        serde_json::from_slice(rx.expect_request().body().bytes().unwrap()).unwrap();
    assert_eq!(body["Document"]["S3Object"]["Bucket"], "scans");
    assert_eq!(body["FeatureTypes"][0], "FORMS");
    assert!(body["Document"].get("Bytes").is_none());
}

#[tokio::test]
async fn missing_feature_types_short_circuits() {
    let (conn, rx) = capture_request(None);
    let client = Client::from_conf_conn(conf(), conn);

    let err = client
        .analyze_document(AnalyzeDocumentInput {
            document: Some(Document::default()),
            feature_types: None,
        })
        .await
        .expect_err("required field unset");
    assert_eq!(err.message(), Some("Missing required field [FeatureTypes]"));
    rx.expect_no_request();
}

#[tokio::test]
async fn detected_blocks_round_trip() {
    let body = r#"{
        "DocumentMetadata": {"Pages": 1},
        "Blocks": [
            {"BlockType": "PAGE", "Id": "p-1", "Page": 1},
            {"BlockType": "LINE", "Id": "l-1", "Text": "Hello world", "Confidence": 99.1}
        ],
        "DetectDocumentTextModelVersion": "1.0"
    }"#;
    let conn = TestConnection::new(vec![(
        http::Request::builder().body(SdkBody::empty()).unwrap(),
        http::Response::builder().status(200).body(body).unwrap(),
    )]);
    let client = Client::from_conf_conn(conf(), conn);

    let output = client
        .detect_document_text(DetectDocumentTextInput {
            document: Some(Document {
                bytes: Some(Blob::new("fake")),
                s3_object: None,
            }),
        })
        .await
        .expect("success");

    assert_eq!(output.document_metadata.unwrap().pages, Some(1));
    let blocks = output.blocks.unwrap();
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[1].text.as_deref(), Some("Hello world"));
    assert_eq!(blocks[1].confidence, Some(99.1));
}
