/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The shared JSON response path: success bodies deserialize into the
//! operation output, error bodies unmarshal into the tagged
//! [`Error`](nimbus_types::Error).

use bytes::Bytes;
use http::Response;
use nimbus_http::response::ParseStrictResponse;
use nimbus_types::{retry, Error};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// Response handler for JSON operations producing output `O`.
///
/// An empty success body parses as `O::default()`: AWS JSON services
/// omit the body entirely for outputs with no members.
pub struct JsonResponseHandler<O> {
    _output: PhantomData<fn() -> O>,
}

impl<O> JsonResponseHandler<O> {
    pub fn new() -> Self {
        JsonResponseHandler {
            _output: PhantomData,
        }
    }
}

impl<O> Default for JsonResponseHandler<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> Clone for JsonResponseHandler<O> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<O> std::fmt::Debug for JsonResponseHandler<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "JsonResponseHandler")
    }
}

impl<O> ParseStrictResponse for JsonResponseHandler<O>
where
    O: DeserializeOwned + Default,
{
    type Output = Result<O, Error>;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output {
        if !response.status().is_success() {
            return Err(parse_generic_error(response));
        }
        let body = response.body();
        if body.is_empty() {
            return Ok(O::default());
        }
        serde_json::from_slice(body)
            .map_err(|err| Error::transport(format!("failed to parse response body: {}", err)))
    }
}

#[derive(Debug, Default, serde::Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type")]
    type_: Option<String>,
    #[serde(alias = "Code")]
    code: Option<String>,
    #[serde(alias = "Message", alias = "errorMessage")]
    message: Option<String>,
}

/// Unmarshal an AWS JSON error response into the tagged error.
///
/// The code is taken from the `x-amzn-errortype` header when present,
/// falling back to the body's `__type`/`code` member; either form may
/// carry a namespace prefix and a metadata suffix that are stripped.
pub fn parse_generic_error(response: &Response<Bytes>) -> Error {
    let body: ErrorBody = serde_json::from_slice(response.body()).unwrap_or_default();
    let code = response
        .headers()
        .get("x-amzn-errortype")
        .and_then(|value| value.to_str().ok())
        .map(|code| code.to_string())
        .or(body.type_)
        .or(body.code)
        .map(|code| sanitize_error_code(&code).to_string());
    let request_id = response
        .headers()
        .get("x-amzn-requestid")
        .and_then(|value| value.to_str().ok());

    let retryable = code
        .as_deref()
        .map(retry::retryable_code)
        .unwrap_or_default()
        || response.status().is_server_error();

    let mut builder = Error::service_builder().retryable(retryable);
    if let Some(code) = code {
        builder = builder.code(code);
    }
    if let Some(message) = body.message {
        builder = builder.message(message);
    }
    if let Some(request_id) = request_id {
        builder = builder.request_id(request_id);
    }
    builder.build()
}

/// Serde adapter for optional [`Blob`](nimbus_types::Blob) members,
/// which JSON protocols carry as base64 strings.
///
/// Usage: `#[serde(with = "nimbus_operation::json::blob", default, skip_serializing_if = "Option::is_none")]`.
pub mod blob {
    use nimbus_types::{base64, Blob};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(blob: &Option<Blob>, serializer: S) -> Result<S::Ok, S::Error> {
        match blob {
            Some(blob) => serializer.serialize_str(&base64::encode(blob)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Blob>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(encoded) => base64::decode(&encoded)
                .map(|bytes| Some(Blob::new(bytes)))
                .map_err(|err| D::Error::custom(format!("invalid base64: {}", err))),
            None => Ok(None),
        }
    }
}

// Error codes appear in several shapes on the wire:
//   FooError
//   com.amazonaws.kinesis#FooError
//   FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/
fn sanitize_error_code(code: &str) -> &str {
    let code = code.split(':').next().unwrap_or(code);
    match code.rsplit_once('#') {
        Some((_namespace, code)) => code,
        None => code,
    }
}
