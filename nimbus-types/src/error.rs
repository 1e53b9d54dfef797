/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The tagged error shared by every Nimbus service.
//!
//! Service APIs model many named error shapes, but from the caller's side
//! every failure carries the same four facts: what stage produced it, the
//! wire-level code, a human readable message, and whether a retry could
//! help. All operations in this SDK therefore return one [`Error`] type
//! instead of a per-service enum.

use std::fmt;

/// The stage of request dispatch that produced an [`Error`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required request field was not set. Detected before any network
    /// activity.
    MissingParameter,
    /// The endpoint provider failed (or was never configured). Detected
    /// before any network activity.
    EndpointResolutionFailure,
    /// Any other client-side failure to construct the request, e.g. input
    /// serialization.
    Construction,
    /// The HTTP exchange itself failed: connection errors, unparseable
    /// responses.
    Transport,
    /// The service returned a modeled error response.
    Service,
}

/// Error code surfaced for locally detected missing required fields.
pub const MISSING_PARAMETER: &str = "MISSING_PARAMETER";
/// Error code surfaced for endpoint resolution failures.
pub const ENDPOINT_RESOLUTION_FAILURE: &str = "ENDPOINT_RESOLUTION_FAILURE";

/// An error returned by a service operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    code: Option<String>,
    message: Option<String>,
    retryable: bool,
    request_id: Option<String>,
}

impl Error {
    /// An error for a required field that the caller left unset.
    ///
    /// The message format is load bearing: callers and tests match on
    /// `Missing required field [<FieldName>]`.
    pub fn missing_parameter(field: &str) -> Self {
        Error {
            kind: ErrorKind::MissingParameter,
            code: Some(MISSING_PARAMETER.to_string()),
            message: Some(format!("Missing required field [{}]", field)),
            retryable: false,
            request_id: None,
        }
    }

    /// An endpoint resolution failure carrying the provider's message.
    pub fn endpoint_resolution_failure(message: impl Into<String>) -> Self {
        Error {
            kind: ErrorKind::EndpointResolutionFailure,
            code: Some(ENDPOINT_RESOLUTION_FAILURE.to_string()),
            message: Some(message.into()),
            retryable: false,
            request_id: None,
        }
    }

    /// A client-side construction failure that is not a missing parameter.
    pub fn construction(message: impl Into<String>) -> Self {
        Error {
            kind: ErrorKind::Construction,
            code: None,
            message: Some(message.into()),
            retryable: false,
            request_id: None,
        }
    }

    /// A transport-level failure.
    pub fn transport(message: impl Into<String>) -> Self {
        Error {
            kind: ErrorKind::Transport,
            code: None,
            message: Some(message.into()),
            // connection-level failures are worth another attempt
            retryable: true,
            request_id: None,
        }
    }

    /// Start building a modeled service error.
    pub fn service_builder() -> Builder {
        Builder::default()
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the transport's retry strategy may re-dispatch the request.
    pub fn retryable(&self) -> bool {
        self.retryable
    }

    /// The service request id, when the response carried one.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code(), self.message()) {
            (Some(code), Some(msg)) => write!(f, "{}: {}", code, msg),
            (Some(code), None) => write!(f, "{}", code),
            (None, Some(msg)) => write!(f, "{}", msg),
            (None, None) => write!(f, "{:?} error", self.kind),
        }
    }
}

impl std::error::Error for Error {}

/// Builder for [`ErrorKind::Service`] errors, used by response
/// unmarshallers.
#[derive(Debug, Default)]
pub struct Builder {
    code: Option<String>,
    message: Option<String>,
    retryable: bool,
    request_id: Option<String>,
}

impl Builder {
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn build(self) -> Error {
        Error {
            kind: ErrorKind::Service,
            code: self.code,
            message: self.message,
            retryable: self.retryable,
            request_id: self.request_id,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Error, ErrorKind};

    #[test]
    fn missing_parameter_message_format() {
        let err = Error::missing_parameter("ClusterArn");
        assert_eq!(err.kind(), ErrorKind::MissingParameter);
        assert_eq!(err.code(), Some("MISSING_PARAMETER"));
        assert_eq!(err.message(), Some("Missing required field [ClusterArn]"));
        assert!(!err.retryable());
    }

    #[test]
    fn endpoint_failure_propagates_message() {
        let err = Error::endpoint_resolution_failure("boom");
        assert_eq!(err.kind(), ErrorKind::EndpointResolutionFailure);
        assert_eq!(err.message(), Some("boom"));
    }

    #[test]
    fn display_includes_code_and_message() {
        let err = Error::service_builder()
            .code("ResourceNotFoundException")
            .message("no such stream")
            .build();
        assert_eq!(err.to_string(), "ResourceNotFoundException: no such stream");
    }
}
