/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Tower adapters that turn the Nimbus middleware primitives into a
//! request-dispatching service stack.
//!
//! The stack assembled by `nimbus-client` is, outermost first: the retry
//! policy, [`parse_response::ParseResponseLayer`], the configured
//! middleware (a stack of [`map_request::MapRequestLayer`]s), and
//! [`dispatch::DispatchLayer`] over the connector.

pub mod dispatch;
pub mod map_request;
pub mod parse_response;

use nimbus_types::Error;

/// An error occurred attempting to send an operation to a service.
#[derive(Debug)]
pub enum SendOperationError {
    /// The request could not be constructed; the typed error keeps its
    /// kind (missing parameter, endpoint resolution, …) so it can be
    /// surfaced unchanged in the outcome. These requests were never
    /// dispatched.
    RequestConstructionError(Error),

    /// The request was dispatched but the HTTP exchange failed.
    RequestDispatchError(Box<dyn std::error::Error + Send + Sync>),
}

impl std::fmt::Display for SendOperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SendOperationError::RequestConstructionError(err) => {
                write!(f, "failed to construct request: {}", err)
            }
            SendOperationError::RequestDispatchError(err) => {
                write!(f, "failed to dispatch request: {}", err)
            }
        }
    }
}

impl std::error::Error for SendOperationError {}

impl From<SendOperationError> for nimbus_http::result::SdkError {
    fn from(err: SendOperationError) -> Self {
        match err {
            SendOperationError::RequestConstructionError(err) => {
                nimbus_http::result::SdkError::ConstructionFailure(err)
            }
            SendOperationError::RequestDispatchError(err) => {
                nimbus_http::result::SdkError::DispatchFailure(err)
            }
        }
    }
}
