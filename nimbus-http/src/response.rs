/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::Response;

/// `ParseHttpResponse` turns HTTP responses into structured outputs.
///
/// The split between `parse_unloaded` and `parse_loaded` keeps parsing
/// code synchronous wherever possible: handlers that only need the fully
/// buffered body implement [`ParseStrictResponse`] and never see the
/// streaming body, while event-stream handlers take ownership of the body
/// in `parse_unloaded` before anything is buffered.
pub trait ParseHttpResponse<B> {
    /// Output type of the response parser, typically
    /// `Result<OperationOutput, Error>`.
    type Output;

    /// Parse an HTTP response without reading the body.
    ///
    /// Return `None` to indicate the body must be loaded first. Handlers
    /// that consume the body as a stream replace it (eg. with
    /// `std::mem::replace`) and return `Some`.
    fn parse_unloaded(&self, response: &mut http::Response<B>) -> Option<Self::Output>;

    /// Parse an HTTP response with a fully loaded body.
    fn parse_loaded(&self, response: &http::Response<Bytes>) -> Self::Output;
}

/// Convenience trait for handlers that always buffer the body.
pub trait ParseStrictResponse {
    type Output;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output;
}

impl<B, T> ParseHttpResponse<B> for T
where
    T: ParseStrictResponse,
{
    type Output = T::Output;

    fn parse_unloaded(&self, _response: &mut Response<B>) -> Option<Self::Output> {
        None
    }

    fn parse_loaded(&self, response: &Response<Bytes>) -> Self::Output {
        self.parse(response)
    }
}
