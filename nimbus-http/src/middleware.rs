/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The framework-agnostic middleware interface and the response loading
//! path shared by all operations.

use crate::operation;
use crate::response::ParseHttpResponse;
use crate::result::{SdkError, SdkSuccess};
use crate::body::SdkBody;
use bytes::Bytes;
use http_body::Body;
use nimbus_types::Error;

/// A synchronous middleware stage that transforms an
/// [`operation::Request`].
///
/// Stages read configuration from the property bag and use it to augment
/// the request; endpoint resolution, user agent decoration, and signing
/// are all expressed as `MapRequest` implementations. Errors must convert
/// into the shared [`Error`] so their kind survives the tower stack.
pub trait MapRequest {
    /// The error type returned by this stage.
    ///
    /// Use [`std::convert::Infallible`] for stages that cannot fail.
    type Error: Into<Error>;

    /// Apply this stage to a request.
    ///
    /// Implementations normally use
    /// [`request.augment`](operation::Request::augment) to transform the
    /// owned `http::Request`.
    fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error>;
}

/// Load a response and parse it with `handler`.
///
/// Streaming-aware handlers may take the response before the body is
/// read (`parse_unloaded`); everything else is buffered and handed to
/// `parse_loaded`. Success and failure split into [`SdkSuccess`] and
/// [`SdkError`].
pub async fn load_response<T, H>(
    mut response: http::Response<SdkBody>,
    handler: &H,
) -> Result<SdkSuccess<T>, SdkError>
where
    H: ParseHttpResponse<SdkBody, Output = Result<T, Error>>,
{
    if let Some(parsed) = handler.parse_unloaded(&mut response) {
        return sdk_result(parsed, response);
    }

    let body = match read_body(response.body_mut()).await {
        Ok(body) => body,
        Err(err) => {
            return Err(SdkError::ResponseError {
                raw: response,
                err,
            });
        }
    };

    let response = response.map(|_| Bytes::from(body));
    let parsed = handler.parse_loaded(&response);
    sdk_result(parsed, response.map(SdkBody::from))
}

async fn read_body(body: &mut SdkBody) -> Result<Vec<u8>, Box<dyn std::error::Error + Send + Sync>> {
    let mut output = Vec::new();
    while let Some(chunk) = body.data().await {
        output.extend_from_slice(&chunk?);
    }
    Ok(output)
}

fn sdk_result<T>(
    parsed: Result<T, Error>,
    raw: http::Response<SdkBody>,
) -> Result<SdkSuccess<T>, SdkError> {
    match parsed {
        Ok(parsed) => Ok(SdkSuccess { raw, parsed }),
        Err(err) => Err(SdkError::ServiceError { raw, err }),
    }
}

#[cfg(test)]
mod test {
    use super::load_response;
    use crate::body::SdkBody;
    use crate::response::ParseStrictResponse;
    use crate::result::SdkError;
    use bytes::Bytes;
    use nimbus_types::Error;

    struct StringParser;

    impl ParseStrictResponse for StringParser {
        type Output = Result<String, Error>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            if response.status().is_success() {
                Ok(String::from_utf8_lossy(response.body()).to_string())
            } else {
                Err(Error::service_builder().code("Boom").build())
            }
        }
    }

    #[tokio::test]
    async fn success_is_wrapped_with_raw_response() {
        let response = http::Response::builder()
            .status(200)
            .body(SdkBody::from("hello"))
            .unwrap();
        let success = load_response(response, &StringParser).await.expect("success");
        assert_eq!(success.parsed, "hello");
        assert_eq!(success.raw.status(), 200);
    }

    #[tokio::test]
    async fn service_error_keeps_raw_response() {
        let response = http::Response::builder()
            .status(500)
            .body(SdkBody::from("{}"))
            .unwrap();
        match load_response::<String, _>(response, &StringParser).await {
            Err(SdkError::ServiceError { raw, err }) => {
                assert_eq!(raw.status(), 500);
                assert_eq!(err.code(), Some("Boom"));
            }
            other => panic!("expected service error, got {:?}", other.map(|s| s.parsed)),
        }
    }
}
