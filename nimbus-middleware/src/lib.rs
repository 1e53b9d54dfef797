/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The default middleware stack for Nimbus service clients.

pub mod retry;
pub mod user_agent;

pub use retry::DefaultResponseClassifier;
pub use user_agent::{ApiMetadata, SdkUserAgent, UserAgentStage};

use nimbus_endpoint::EndpointStage;
use nimbus_http_tower::map_request::{MapRequestLayer, MapRequestService};
use nimbus_sig_auth::SigningStage;
use tower::Layer;

/// The middleware every service client uses by default, applied to each
/// request in order:
/// 1. [`UserAgentStage`] decorates the request with user agent headers,
/// 2. [`EndpointStage`] resolves and applies the endpoint,
/// 3. [`SigningStage`] signs the request.
///
/// A failure in any stage short-circuits the stack before the connector
/// is reached.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct DefaultMiddleware;

impl DefaultMiddleware {
    pub fn new() -> Self {
        DefaultMiddleware
    }
}

/// The service produced by [`DefaultMiddleware`] over a dispatch service
/// `S`.
pub type DefaultMiddlewareService<S> = MapRequestService<
    MapRequestService<MapRequestService<S, SigningStage>, EndpointStage>,
    UserAgentStage,
>;

impl<S> Layer<S> for DefaultMiddleware {
    type Service = DefaultMiddlewareService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        let signing = MapRequestLayer::<SigningStage>::default().layer(inner);
        let endpoint = MapRequestLayer::<EndpointStage>::default().layer(signing);
        MapRequestLayer::<UserAgentStage>::default().layer(endpoint)
    }
}
