/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::SendOperationError;
use nimbus_http::body::SdkBody;
use nimbus_http::middleware::load_response;
use nimbus_http::operation;
use nimbus_http::operation::Operation;
use nimbus_http::response::ParseHttpResponse;
use nimbus_http::result::{SdkError, SdkSuccess};
use nimbus_types::Error;
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// `ParseResponseService` accepts [`Operation`]s, dispatches their
/// request through the inner service, and parses the HTTP response into
/// the operation's typed outcome.
#[derive(Clone)]
pub struct ParseResponseService<S, H, R> {
    inner: S,
    _handler: PhantomData<(H, R)>,
}

#[derive(Default)]
pub struct ParseResponseLayer<H, R> {
    _handler: PhantomData<(H, R)>,
}

impl<H, R> ParseResponseLayer<H, R> {
    pub fn new() -> Self {
        ParseResponseLayer {
            _handler: Default::default(),
        }
    }
}

impl<S, H, R> Layer<S> for ParseResponseLayer<H, R>
where
    S: Service<operation::Request>,
{
    type Service = ParseResponseService<S, H, R>;

    fn layer(&self, inner: S) -> Self::Service {
        ParseResponseService {
            inner,
            _handler: Default::default(),
        }
    }
}

type BoxedResultFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;

/// Generic parameter listing:
/// `S`: the inner service (the middleware + dispatch stack)
/// `H`: the response handler, producing `Result<T, Error>`
/// `R`: the retry classifier riding on the operation
/// `T`: the parsed operation output
impl<S, H, R, T> Service<Operation<H, R>> for ParseResponseService<S, H, R>
where
    S: Service<operation::Request, Response = http::Response<SdkBody>, Error = SendOperationError>,
    S::Future: Send + 'static,
    H: ParseHttpResponse<SdkBody, Output = Result<T, Error>> + Send + Sync + 'static,
{
    type Response = SdkSuccess<T>;
    type Error = SdkError;
    type Future = BoxedResultFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(|err| err.into())
    }

    fn call(&mut self, operation: Operation<H, R>) -> Self::Future {
        let (request, parts) = operation.into_request_response();
        let response = self.inner.call(request);
        let fut = async move {
            match response.await {
                Err(err) => Err(err.into()),
                Ok(response) => load_response(response, &parts.response_handler).await,
            }
        };
        Box::pin(fut)
    }
}
