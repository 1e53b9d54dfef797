/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The response classifier used by all service operations.
//!
//! In order of priority:
//! 1. the `x-amz-retry-after` header is honored as an explicit retry,
//! 2. the error code is checked against the throttling and transient
//!    code tables,
//! 3. the HTTP status code is checked,
//! 4. the error's own retryable flag is consulted.

use nimbus_http::result::{SdkError, SdkSuccess};
use nimbus_http::retry::ClassifyResponse;
use nimbus_types::retry::{ErrorKind, RetryKind, THROTTLING_ERROR_CODES, TRANSIENT_ERROR_CODES};
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default)]
#[non_exhaustive]
pub struct DefaultResponseClassifier;

impl DefaultResponseClassifier {
    pub fn new() -> Self {
        DefaultResponseClassifier
    }
}

impl<T> ClassifyResponse<SdkSuccess<T>, SdkError> for DefaultResponseClassifier {
    fn classify(&self, result: Result<&SdkSuccess<T>, &SdkError>) -> RetryKind {
        let (raw, err) = match result {
            Ok(_) | Err(SdkError::ConstructionFailure(_)) => return RetryKind::NotRetryable,
            // no response was received; the request may or may not have
            // been sent
            Err(SdkError::DispatchFailure(_)) | Err(SdkError::ResponseError { .. }) => {
                return RetryKind::Error(ErrorKind::TransientError)
            }
            Err(SdkError::ServiceError { raw, err }) => (raw, err),
        };

        if let Some(retry_after) = raw
            .headers()
            .get("x-amz-retry-after")
            .and_then(|header| header.to_str().ok())
            .and_then(|header| header.parse::<u64>().ok())
        {
            return RetryKind::Explicit(Duration::from_millis(retry_after));
        }
        if let Some(code) = err.code() {
            if THROTTLING_ERROR_CODES.contains(&code) {
                return RetryKind::Error(ErrorKind::ThrottlingError);
            }
            if TRANSIENT_ERROR_CODES.contains(&code) {
                return RetryKind::Error(ErrorKind::TransientError);
            }
        }
        match raw.status().as_u16() {
            429 => RetryKind::Error(ErrorKind::ThrottlingError),
            408 => RetryKind::Error(ErrorKind::TransientError),
            500 | 502 | 503 | 504 => RetryKind::Error(ErrorKind::ServerError),
            _ if err.retryable() => RetryKind::Error(ErrorKind::ServerError),
            _ => RetryKind::NotRetryable,
        }
    }
}

#[cfg(test)]
mod test {
    use super::DefaultResponseClassifier;
    use nimbus_http::body::SdkBody;
    use nimbus_http::result::{SdkError, SdkSuccess};
    use nimbus_http::retry::ClassifyResponse;
    use nimbus_types::retry::{ErrorKind, RetryKind};
    use nimbus_types::Error;
    use std::time::Duration;

    fn service_error(status: u16, code: &str, retry_after: Option<&str>) -> SdkError {
        let mut response = http::Response::builder().status(status);
        if let Some(retry_after) = retry_after {
            response = response.header("x-amz-retry-after", retry_after);
        }
        SdkError::ServiceError {
            raw: response.body(SdkBody::empty()).unwrap(),
            err: Error::service_builder().code(code).build(),
        }
    }

    fn classify(err: &SdkError) -> RetryKind {
        DefaultResponseClassifier::new().classify(Err::<&SdkSuccess<()>, _>(err))
    }

    #[test]
    fn explicit_retry_after_wins() {
        let err = service_error(400, "ThrottlingException", Some("5000"));
        assert_eq!(classify(&err), RetryKind::Explicit(Duration::from_millis(5000)));
    }

    #[test]
    fn throttling_code_is_throttling() {
        let err = service_error(400, "ThrottlingException", None);
        assert_eq!(classify(&err), RetryKind::Error(ErrorKind::ThrottlingError));
    }

    #[test]
    fn server_errors_are_retryable() {
        let err = service_error(503, "InternalFailure", None);
        assert_eq!(classify(&err), RetryKind::Error(ErrorKind::ServerError));
    }

    #[test]
    fn modeled_errors_are_not_retryable() {
        let err = service_error(404, "ResourceNotFoundException", None);
        assert_eq!(classify(&err), RetryKind::NotRetryable);
    }

    #[test]
    fn construction_failures_never_retry() {
        let err = SdkError::ConstructionFailure(Error::missing_parameter("StreamName"));
        assert_eq!(classify(&err), RetryKind::NotRetryable);
    }

    #[test]
    fn dispatch_failures_are_transient() {
        let err = SdkError::DispatchFailure("connection reset".into());
        assert_eq!(classify(&err), RetryKind::Error(ErrorKind::TransientError));
    }
}
