/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The generic Nimbus service client.
//!
//! [`Client`] assembles the tower stack every operation runs through:
//! the retry policy, response parsing, the configured middleware, and
//! dispatch over a connector. Service crates wrap a `Client` and feed it
//! [`Operation`]s built by the operation engine.

#![warn(missing_debug_implementations)]

pub mod retry;

#[cfg(feature = "test-util")]
pub mod test_connection;

#[cfg(feature = "hyper")]
mod hyper_impls;

#[cfg(feature = "hyper")]
pub use hyper_impls::HyperAdapter;

#[cfg(feature = "native-tls")]
pub use hyper_impls::{conn, StandardConnector};

use nimbus_http::body::SdkBody;
use nimbus_http::operation::Operation;
use nimbus_http::response::ParseHttpResponse;
pub use nimbus_http::result::{SdkError, SdkSuccess};
use nimbus_http::retry::ClassifyResponse;
use nimbus_http_tower::dispatch::DispatchLayer;
use nimbus_http_tower::parse_response::ParseResponseLayer;
use nimbus_types::Error;
use std::time::Instant;
use tower::{Service, ServiceBuilder, ServiceExt};

/// A service client wired to a connector, a middleware stack, and a
/// retry policy.
///
/// The connector dictates how `http::Request`s become `http::Response`s;
/// in production that is a hyper client (see [`Builder::native_tls`]),
/// in tests a canned [`test_connection::TestConnection`]. The middleware
/// is a [`tower::Layer`] over the dispatch service, normally the default
/// stack from `nimbus-middleware`.
#[derive(Debug)]
pub struct Client<C, M, R = retry::Standard> {
    connector: C,
    middleware: M,
    retry_policy: R,
}

impl<C, M> Client<C, M> {
    /// Adjust the standard retry policy's configuration.
    pub fn set_retry_config(&mut self, config: retry::Config) {
        self.retry_policy.with_config(config);
    }
}

/// Builder for a [`Client`].
#[derive(Clone, Debug)]
pub struct Builder<C = (), M = (), R = retry::Standard> {
    connector: C,
    middleware: M,
    retry_policy: R,
}

impl Default for Builder<(), ()> {
    fn default() -> Self {
        Builder {
            connector: (),
            middleware: (),
            retry_policy: retry::Standard::default(),
        }
    }
}

impl Builder<(), ()> {
    /// Construct a new, unconfigured builder. A connector and middleware
    /// must be supplied before [`Builder::build`] produces a usable
    /// client.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C, M, R> Builder<C, M, R> {
    /// Specify the connector to dispatch requests with.
    pub fn connector<C2>(self, connector: C2) -> Builder<C2, M, R> {
        Builder {
            connector,
            middleware: self.middleware,
            retry_policy: self.retry_policy,
        }
    }

    /// Specify the middleware stack applied to every request before
    /// dispatch.
    pub fn middleware<M2>(self, middleware: M2) -> Builder<C, M2, R> {
        Builder {
            connector: self.connector,
            middleware,
            retry_policy: self.retry_policy,
        }
    }

    /// Replace the retry policy wholesale. To only adjust the standard
    /// policy's configuration use [`Builder::set_retry_config`].
    pub fn retry_policy<R2>(self, retry_policy: R2) -> Builder<C, M, R2> {
        Builder {
            connector: self.connector,
            middleware: self.middleware,
            retry_policy,
        }
    }

    /// Use a connector that directly maps each request to a response.
    pub fn map_connector<F, FF>(self, map: F) -> Builder<tower::util::ServiceFn<F>, M, R>
    where
        F: Fn(http::Request<SdkBody>) -> FF + Send,
        FF: std::future::Future<Output = Result<http::Response<SdkBody>, BoxError>>,
    {
        self.connector(tower::service_fn(map))
    }

    pub fn build(self) -> Client<C, M, R> {
        Client {
            connector: self.connector,
            middleware: self.middleware,
            retry_policy: self.retry_policy,
        }
    }
}

impl<C, M> Builder<C, M> {
    /// Adjust the standard retry policy's configuration.
    pub fn set_retry_config(&mut self, config: retry::Config) {
        self.retry_policy.with_config(config);
    }
}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

impl<C, M, R> Client<C, M, R>
where
    C: bounds::Connector,
    M: bounds::Middleware<C>,
    R: retry::NewRequestPolicy,
{
    /// Dispatch an operation and return its parsed output.
    ///
    /// The raw response is dropped for ergonomics; use
    /// [`Client::call_raw`] to keep it.
    pub async fn call<H, Retry, T>(&self, input: Operation<H, Retry>) -> Result<T, SdkError>
    where
        H: ParseHttpResponse<SdkBody, Output = Result<T, Error>> + Send + Sync + Clone + 'static,
        Retry: ClassifyResponse<SdkSuccess<T>, SdkError> + Send + Clone + 'static,
        R::Policy: tower::retry::Policy<Operation<H, Retry>, SdkSuccess<T>, SdkError> + Clone,
    {
        self.call_raw(input).await.map(|res| res.parsed)
    }

    /// Dispatch an operation, returning the parsed output together with
    /// the raw HTTP response.
    pub async fn call_raw<H, Retry, T>(
        &self,
        input: Operation<H, Retry>,
    ) -> Result<SdkSuccess<T>, SdkError>
    where
        H: ParseHttpResponse<SdkBody, Output = Result<T, Error>> + Send + Sync + Clone + 'static,
        Retry: ClassifyResponse<SdkSuccess<T>, SdkError> + Send + Clone + 'static,
        R::Policy: tower::retry::Policy<Operation<H, Retry>, SdkSuccess<T>, SdkError> + Clone,
    {
        let (rpc_method, rpc_service) = input
            .metadata()
            .map(|metadata| (metadata.name().to_owned(), metadata.service().to_owned()))
            .unwrap_or_default();
        let connector = self.connector.clone();
        let mut svc = ServiceBuilder::new()
            // a fresh policy instance is created per request; cross-request
            // retry state (the token bucket) is shared behind it
            .retry(self.retry_policy.new_request_policy())
            .layer(ParseResponseLayer::<H, Retry>::new())
            // middleware is applied first, then the request is dispatched
            // over the wire
            .layer(&self.middleware)
            .layer(DispatchLayer::new())
            .service(connector);
        let start = Instant::now();
        let result = svc.ready().await?.call(input).await;
        // observability only; the outcome passes through untouched
        tracing::debug!(
            metric = "smithy.client.duration",
            duration_us = start.elapsed().as_micros() as u64,
            rpc.method = %rpc_method,
            rpc.service = %rpc_service,
            success = result.is_ok(),
            "operation complete"
        );
        result
    }
}

/// Short-hands for the trait bounds `call` and `call_raw` require.
///
/// These have blanket implementations for all compatible types and
/// should never need to be implemented by hand.
pub mod bounds {
    use super::*;

    /// A low-level connector mapping [`http::Request`] to
    /// [`http::Response`].
    pub trait Connector:
        Service<
            http::Request<SdkBody>,
            Response = http::Response<SdkBody>,
            Error = <Self as Connector>::Error,
            Future = <Self as Connector>::Future,
        > + Send
        + Clone
        + 'static
    {
        /// Forwarding type to `<Self as Service>::Error` for bound
        /// inference.
        type Error: Into<BoxError> + Send + Sync + 'static;

        /// Forwarding type to `<Self as Service>::Future` for bound
        /// inference.
        type Future: Send + 'static;
    }

    impl<T> Connector for T
    where
        T: Service<http::Request<SdkBody>, Response = http::Response<SdkBody>>
            + Send
            + Clone
            + 'static,
        T::Error: Into<BoxError> + Send + Sync + 'static,
        T::Future: Send + 'static,
    {
        type Error = T::Error;
        type Future = T::Future;
    }

    /// A middleware service adjusting [`nimbus_http::operation::Request`]s.
    pub trait MiddlewareService:
        Service<
        nimbus_http::operation::Request,
        Response = http::Response<SdkBody>,
        Error = nimbus_http_tower::SendOperationError,
        Future = <Self as MiddlewareService>::Future,
    >
    {
        /// Forwarding type to `<Self as Service>::Future` for bound
        /// inference.
        type Future: Send + 'static;
    }

    impl<T> MiddlewareService for T
    where
        T: Service<
            nimbus_http::operation::Request,
            Response = http::Response<SdkBody>,
            Error = nimbus_http_tower::SendOperationError,
        >,
        T::Future: Send + 'static,
    {
        type Future = T::Future;
    }

    /// A middleware layer (i.e. factory) over the dispatch service.
    pub trait Middleware<C>:
        tower::Layer<
        nimbus_http_tower::dispatch::DispatchService<C>,
        Service = <Self as Middleware<C>>::Service,
    >
    {
        /// Forwarding type to `<Self as Layer>::Service` for bound
        /// inference.
        type Service: MiddlewareService + Send + Clone + 'static;
    }

    impl<T, C> Middleware<C> for T
    where
        T: tower::Layer<nimbus_http_tower::dispatch::DispatchService<C>>,
        T::Service: MiddlewareService + Send + Clone + 'static,
    {
        type Service = T::Service;
    }
}
