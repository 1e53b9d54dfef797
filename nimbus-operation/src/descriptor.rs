/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::Method;

/// A declarative description of one service operation over an input
/// shape `I`.
///
/// Descriptors are `static` tables in the service crates; everything
/// request-shaped about an operation lives here and nowhere else.
pub struct OperationDescriptor<I: 'static> {
    /// The operation name as published by the service API, eg.
    /// `DeleteCluster`.
    pub name: &'static str,
    /// The service identifier used in metadata and telemetry, eg.
    /// `docdbelastic`.
    pub service: &'static str,
    /// The SigV4 signing name, eg. `docdb-elastic`.
    pub signing_name: &'static str,
    /// The service API version date, eg. `2022-11-28`.
    pub api_version: &'static str,
    /// The HTTP method. Fixed per operation, independent of input.
    pub method: Method,
    pub protocol: Protocol,
    /// Path template: literal segments interleaved with request-field
    /// labels. Empty for JSON-RPC operations (they POST to `/`).
    pub path: &'static [PathSegment<I>],
    /// Query string parameters derived from request fields. Unset fields
    /// are omitted.
    pub query: &'static [QueryParam<I>],
    /// Fields that must be set before any network activity happens.
    pub required: &'static [RequiredField<I>],
    pub signing: SigningKind,
}

/// How requests and responses are shaped on the wire.
pub enum Protocol {
    /// All operations POST to `/` with an `X-Amz-Target` header naming
    /// the operation; the input is the whole JSON body.
    JsonRpc {
        target: &'static str,
        version: JsonVersion,
    },
    /// Method and path vary per operation; labels are carried in the
    /// path and the remaining input fields in a JSON body on mutating
    /// methods.
    RestJson,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum JsonVersion {
    V1_0,
    V1_1,
}

impl JsonVersion {
    pub fn content_type(&self) -> &'static str {
        match self {
            JsonVersion::V1_0 => "application/x-amz-json-1.0",
            JsonVersion::V1_1 => "application/x-amz-json-1.1",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SigningKind {
    SigV4,
    /// Dispatched without authentication material, eg. streaming
    /// subscriptions.
    Unsigned,
}

/// A required input field: its API name (used verbatim in the
/// `MISSING_PARAMETER` message) and a predicate telling whether the
/// caller set it.
pub struct RequiredField<I: 'static> {
    pub name: &'static str,
    pub is_set: fn(&I) -> bool,
}

/// A query string parameter derived from a request field.
pub struct QueryParam<I: 'static> {
    pub name: &'static str,
    pub get: fn(&I) -> Option<String>,
}

/// One segment of a REST operation's path template.
pub enum PathSegment<I: 'static> {
    /// Written into the path as-is. May span multiple segments, eg.
    /// `v1/network-sites`.
    Literal(&'static str),
    /// Derived from a request field and path-escaped. The accessor
    /// returning `None` is a missing required field.
    Label {
        name: &'static str,
        get: fn(&I) -> Option<&str>,
    },
}
