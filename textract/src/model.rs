/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Data shapes for the Amazon Textract API.

use nimbus_types::Blob;
use serde::{Deserialize, Serialize};

/// An S3 object reference.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3Object {
    pub bucket: Option<String>,
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// The document to analyze: inline bytes (base64 on the wire) or an S3
/// reference.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Document {
    #[serde(with = "nimbus_operation::json::blob", skip_serializing_if = "Option::is_none")]
    pub bytes: Option<Blob>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_object: Option<S3Object>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentMetadata {
    pub pages: Option<i32>,
}

/// One detected item: a page, a line, or a word.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Block {
    /// `PAGE`, `LINE`, `WORD`, `TABLE`, `CELL`, `KEY_VALUE_SET`, …
    pub block_type: Option<String>,
    pub text: Option<String>,
    pub confidence: Option<f32>,
    pub id: Option<String>,
    pub page: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectDocumentTextInput {
    pub document: Option<Document>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DetectDocumentTextOutput {
    pub document_metadata: Option<DocumentMetadata>,
    pub blocks: Option<Vec<Block>>,
    pub detect_document_text_model_version: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnalyzeDocumentInput {
    pub document: Option<Document>,
    /// `TABLES`, `FORMS`, `SIGNATURES`, or `LAYOUT`.
    pub feature_types: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnalyzeDocumentOutput {
    pub document_metadata: Option<DocumentMetadata>,
    pub blocks: Option<Vec<Block>>,
    pub analyze_document_model_version: Option<String>,
}
