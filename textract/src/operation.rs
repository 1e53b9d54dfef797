/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation descriptors for the Amazon Textract API.

use crate::model::*;
use http::Method;
use nimbus_endpoint::SharedEndpointResolver;
use nimbus_http::operation::Operation;
use nimbus_middleware::DefaultResponseClassifier;
use nimbus_operation::{
    build_operation, BuildError, Config, JsonResponseHandler, JsonVersion, OperationDescriptor,
    Protocol, RequiredField, SigningKind,
};

type OperationResult<O> =
    Result<Operation<JsonResponseHandler<O>, DefaultResponseClassifier>, BuildError>;

macro_rules! descriptor {
    ($name:literal, target: $target:literal, required: $required:expr) => {
        OperationDescriptor {
            name: $name,
            service: "textract",
            signing_name: "textract",
            api_version: "2018-06-27",
            method: Method::POST,
            protocol: Protocol::JsonRpc {
                target: $target,
                version: JsonVersion::V1_1,
            },
            path: &[],
            query: &[],
            required: $required,
            signing: SigningKind::SigV4,
        }
    };
}

static DETECT_DOCUMENT_TEXT: OperationDescriptor<DetectDocumentTextInput> = descriptor!(
    "DetectDocumentText",
    target: "Textract.DetectDocumentText",
    required: &[RequiredField { name: "Document", is_set: |input| input.document.is_some() }]
);

static ANALYZE_DOCUMENT: OperationDescriptor<AnalyzeDocumentInput> = descriptor!(
    "AnalyzeDocument",
    target: "Textract.AnalyzeDocument",
    required: &[
        RequiredField { name: "Document", is_set: |input| input.document.is_some() },
        RequiredField { name: "FeatureTypes", is_set: |input| input.feature_types.is_some() },
    ]
);

pub(crate) fn detect_document_text(
    input: &DetectDocumentTextInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<DetectDocumentTextOutput> {
    build_operation(input, &DETECT_DOCUMENT_TEXT, conf, resolver, JsonResponseHandler::new())
}

pub(crate) fn analyze_document(
    input: &AnalyzeDocumentInput,
    conf: &Config,
    resolver: &SharedEndpointResolver,
) -> OperationResult<AnalyzeDocumentOutput> {
    build_operation(input, &ANALYZE_DOCUMENT, conf, resolver, JsonResponseHandler::new())
}
