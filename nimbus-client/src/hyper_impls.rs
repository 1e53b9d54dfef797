/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::{retry, Builder};
use nimbus_http::body::SdkBody;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Adapts a [`hyper::Client`] into a connector: response bodies are
/// rewrapped as [`SdkBody`] so the rest of the stack stays independent
/// of hyper.
#[derive(Clone, Debug)]
pub struct HyperAdapter<C>(hyper::Client<C, SdkBody>);

impl<C> From<hyper::Client<C, SdkBody>> for HyperAdapter<C> {
    fn from(client: hyper::Client<C, SdkBody>) -> Self {
        HyperAdapter(client)
    }
}

impl<C> tower::Service<http::Request<SdkBody>> for HyperAdapter<C>
where
    C: hyper::client::connect::Connect + Clone + Send + Sync + 'static,
{
    type Response = http::Response<SdkBody>;
    type Error = hyper::Error;
    type Future =
        Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<SdkBody>) -> Self::Future {
        let fut = self.0.request(req);
        Box::pin(async move { Ok(fut.await?.map(SdkBody::from_body)) })
    }
}

impl<M, R> Builder<(), M, R> {
    /// Connect with a pre-configured hyper client.
    pub fn hyper<HC>(self, client: hyper::Client<HC, SdkBody>) -> Builder<HyperAdapter<HC>, M, R> {
        self.connector(HyperAdapter(client))
    }
}

/// The connector production clients use.
#[cfg(feature = "native-tls")]
pub type StandardConnector =
    HyperAdapter<hyper_tls::HttpsConnector<hyper::client::HttpConnector>>;

/// Standalone connector constructors.
#[cfg(feature = "native-tls")]
pub mod conn {
    use super::StandardConnector;
    use nimbus_http::body::SdkBody;

    /// A TLS-capable connector over the system's native TLS stack.
    pub fn https() -> StandardConnector {
        let https = hyper_tls::HttpsConnector::new();
        hyper::Client::builder().build::<_, SdkBody>(https).into()
    }
}

#[cfg(feature = "native-tls")]
impl<M: Default> crate::Client<StandardConnector, M, retry::Standard> {
    /// A client over a standard HTTPS connector with default middleware
    /// and retry configuration.
    pub fn https() -> Self {
        Builder::new()
            .connector(conn::https())
            .middleware(M::default())
            .build()
    }
}
