/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request signing for Nimbus service clients.
//!
//! The signature computation itself is not implemented here: it is
//! injected through the [`signer::SignRequest`] trait, keeping the SDK
//! decoupled from any particular SigV4 implementation. This crate owns
//! the middleware that gathers the signing inputs (credentials, scope,
//! timestamp) from the request property bag and invokes the signer.

pub mod middleware;
pub mod signer;

pub use middleware::{SigningStage, SigningStageError};
pub use signer::{
    OperationSigningConfig, SharedSigner, SignRequest, SigningContext, SigningError,
    SigningRequirements,
};
