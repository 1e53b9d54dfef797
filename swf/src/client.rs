/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::endpoint;
use crate::model::*;
use crate::operation;
use nimbus_client::bounds::Connector;
use nimbus_endpoint::SharedEndpointResolver;
use nimbus_http::result::SdkError;
use nimbus_middleware::DefaultMiddleware;
use nimbus_operation::Config;
use std::fmt;
use std::sync::Arc;

/// Client for Amazon Simple Workflow Service.
pub struct Client<C> {
    client: nimbus_client::Client<C, DefaultMiddleware>,
    conf: Config,
    resolver: SharedEndpointResolver,
}

impl<C> fmt::Debug for Client<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("service", &crate::SERVICE_NAME)
            .field("conf", &self.conf)
            .finish()
    }
}

impl<C> Client<C> {
    /// Construct a client over a custom connector, eg. a test
    /// connection.
    pub fn from_conf_conn(conf: Config, conn: C) -> Self {
        let resolver = conf
            .endpoint_resolver()
            .cloned()
            .unwrap_or_else(|| Arc::new(endpoint::default_resolver()));
        let mut builder = nimbus_client::Builder::new()
            .connector(conn)
            .middleware(DefaultMiddleware::new());
        if let Some(max_attempts) = conf.max_attempts() {
            builder.set_retry_config(
                nimbus_client::retry::Config::default().with_max_attempts(max_attempts),
            );
        }
        Client {
            client: builder.build(),
            conf,
            resolver,
        }
    }

    pub fn conf(&self) -> &Config {
        &self.conf
    }
}

#[cfg(feature = "client")]
impl Client<nimbus_client::StandardConnector> {
    /// Construct a client over HTTPS.
    pub fn from_conf(conf: Config) -> Self {
        Self::from_conf_conn(conf, nimbus_client::conn::https())
    }
}

impl<C> Client<C>
where
    C: Connector,
{
    pub async fn list_domains(
        &self,
        input: ListDomainsInput,
    ) -> Result<ListDomainsOutput, SdkError> {
        let op = operation::list_domains(&input, &self.conf, &self.resolver)?;
        self.client.call(op).await
    }

    pub async fn describe_domain(
        &self,
        input: DescribeDomainInput,
    ) -> Result<DescribeDomainOutput, SdkError> {
        let op = operation::describe_domain(&input, &self.conf, &self.resolver)?;
        self.client.call(op).await
    }
}
