/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::SendOperationError;
use nimbus_http::middleware::MapRequest;
use nimbus_http::operation;
use std::task::{Context, Poll};
use tower::{Layer, Service};

/// Adapts a synchronous [`MapRequest`] stage into a tower service.
///
/// Stage failures become
/// [`SendOperationError::RequestConstructionError`]s, short-circuiting the
/// stack before the connector is reached.
#[derive(Clone)]
pub struct MapRequestService<S, M> {
    inner: S,
    stage: M,
}

impl<S, M> Service<operation::Request> for MapRequestService<S, M>
where
    S: Service<operation::Request, Error = SendOperationError>,
    M: MapRequest,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = OrFirstError<S::Future>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: operation::Request) -> Self::Future {
        match self.stage.apply(req) {
            Err(err) => OrFirstError::First(Some(SendOperationError::RequestConstructionError(
                err.into(),
            ))),
            Ok(req) => OrFirstError::Inner(self.inner.call(req)),
        }
    }
}

/// Future that is either the inner service's future or an error produced
/// before the inner service was invoked.
#[pin_project::pin_project(project = OrFirstErrorProj)]
pub enum OrFirstError<F> {
    First(Option<SendOperationError>),
    Inner(#[pin] F),
}

impl<F, T> std::future::Future for OrFirstError<F>
where
    F: std::future::Future<Output = Result<T, SendOperationError>>,
{
    type Output = Result<T, SendOperationError>;

    fn poll(self: std::pin::Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            OrFirstErrorProj::First(err) => {
                Poll::Ready(Err(err.take().expect("polled after completion")))
            }
            OrFirstErrorProj::Inner(fut) => fut.poll(cx),
        }
    }
}

pub struct MapRequestLayer<M> {
    stage: M,
}

impl<M> MapRequestLayer<M> {
    pub fn for_stage(stage: M) -> Self {
        MapRequestLayer { stage }
    }
}

impl<M: Default> Default for MapRequestLayer<M> {
    fn default() -> Self {
        MapRequestLayer {
            stage: Default::default(),
        }
    }
}

impl<S, M> Layer<S> for MapRequestLayer<M>
where
    M: MapRequest + Clone,
{
    type Service = MapRequestService<S, M>;

    fn layer(&self, inner: S) -> Self::Service {
        MapRequestService {
            inner,
            stage: self.stage.clone(),
        }
    }
}
