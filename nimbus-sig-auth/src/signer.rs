/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use nimbus_core::{Credentials, SigningRegion, SigningService};
use std::sync::Arc;
use std::time::SystemTime;

/// Everything a signer needs besides the request itself.
#[derive(Debug)]
pub struct SigningContext<'a> {
    pub credentials: &'a Credentials,
    pub region: &'a SigningRegion,
    pub service: &'a SigningService,
    pub time: SystemTime,
}

/// Failure to compute a request signature.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct SigningError {
    message: String,
}

impl SigningError {
    pub fn new(message: impl Into<String>) -> Self {
        SigningError {
            message: message.into(),
        }
    }
}

/// Computes authentication material for a request.
///
/// Implementations add signature headers (or query parameters) to the
/// request in place. The request body is presented as loaded bytes:
/// streaming bodies cannot be signed through this interface.
pub trait SignRequest: Send + Sync {
    fn sign(
        &self,
        context: &SigningContext<'_>,
        request: &mut http::Request<&[u8]>,
    ) -> Result<(), SigningError>;
}

pub type SharedSigner = Arc<dyn SignRequest>;

/// Whether an operation's request is signed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SigningRequirements {
    /// Never sign this request (eg. streaming subscriptions and
    /// anonymous operations).
    Disabled,

    /// Sign when a signer and credentials are configured; dispatch
    /// unsigned otherwise. This is the default: the signature
    /// implementation is an injected collaborator and its absence is a
    /// deployment choice, not a request construction error.
    Optional,

    /// Fail the request if it cannot be signed.
    Required,
}

/// Per-operation signing configuration, set by the operation builder.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct OperationSigningConfig {
    pub signing_requirements: SigningRequirements,
}

impl OperationSigningConfig {
    /// Configuration for ordinary SigV4-signed operations.
    pub fn default_config() -> Self {
        OperationSigningConfig {
            signing_requirements: SigningRequirements::Optional,
        }
    }

    /// Configuration for unsigned operations.
    pub fn unsigned() -> Self {
        OperationSigningConfig {
            signing_requirements: SigningRequirements::Disabled,
        }
    }
}
