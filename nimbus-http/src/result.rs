/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use nimbus_types::{Error, ErrorKind};
use std::fmt;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A successful operation outcome: the parsed output plus the raw HTTP
/// response for callers that need to introspect it.
#[derive(Debug)]
pub struct SdkSuccess<T> {
    pub raw: http::Response<SdkBody>,
    pub parsed: T,
}

/// A failed operation outcome.
///
/// The variants follow the stages of dispatch; [`SdkError::kind`],
/// [`SdkError::code`] and [`SdkError::message`] expose the shared tagged
/// error view regardless of variant.
#[derive(Debug)]
pub enum SdkError {
    /// The request failed before dispatch: a missing required field,
    /// an endpoint resolution failure, or another construction problem.
    /// No network activity occurred.
    ConstructionFailure(Error),

    /// The request failed during dispatch. An HTTP response was not
    /// received; the request MAY have been sent.
    DispatchFailure(BoxError),

    /// A response was received but could not be understood (for example,
    /// the connection dropped while the body was being read).
    ResponseError {
        raw: http::Response<SdkBody>,
        err: BoxError,
    },

    /// The service returned a modeled error response.
    ServiceError {
        raw: http::Response<SdkBody>,
        err: Error,
    },
}

impl SdkError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            // the inner kind is authoritative: an unparseable success
            // response surfaces as a `Transport`-kinded service error
            SdkError::ConstructionFailure(err) | SdkError::ServiceError { err, .. } => err.kind(),
            SdkError::DispatchFailure(_) | SdkError::ResponseError { .. } => ErrorKind::Transport,
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.as_error().and_then(Error::code)
    }

    pub fn message(&self) -> Option<&str> {
        self.as_error().and_then(Error::message)
    }

    pub fn retryable(&self) -> bool {
        match self {
            SdkError::ConstructionFailure(_) => false,
            SdkError::DispatchFailure(_) | SdkError::ResponseError { .. } => true,
            SdkError::ServiceError { err, .. } => err.retryable(),
        }
    }

    /// The tagged error, for the variants that carry one.
    pub fn as_error(&self) -> Option<&Error> {
        match self {
            SdkError::ConstructionFailure(err) | SdkError::ServiceError { err, .. } => Some(err),
            _ => None,
        }
    }

    /// The raw HTTP response, when one was received.
    pub fn raw_response(&self) -> Option<&http::Response<SdkBody>> {
        match self {
            SdkError::ResponseError { raw, .. } | SdkError::ServiceError { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

impl fmt::Display for SdkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SdkError::ConstructionFailure(err) => {
                write!(f, "failed to construct request: {}", err)
            }
            SdkError::DispatchFailure(err) => write!(f, "failed to dispatch request: {}", err),
            SdkError::ResponseError { err, .. } => write!(f, "failed to read response: {}", err),
            SdkError::ServiceError { err, .. } => write!(f, "service error: {}", err),
        }
    }
}

impl std::error::Error for SdkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SdkError::ConstructionFailure(err) | SdkError::ServiceError { err, .. } => Some(err),
            SdkError::DispatchFailure(err) | SdkError::ResponseError { err, .. } => {
                Some(err.as_ref())
            }
        }
    }
}

// Pre-dispatch failures convert directly; service errors are attached to
// their raw response by the response loader instead.
impl From<Error> for SdkError {
    fn from(err: Error) -> Self {
        SdkError::ConstructionFailure(err)
    }
}
