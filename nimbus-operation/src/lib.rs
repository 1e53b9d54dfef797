/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The generic operation engine behind every Nimbus service client.
//!
//! Service APIs in this SDK are tables of [`OperationDescriptor`]s: the
//! HTTP method, the path template, the required-field list, and the
//! signer kind, declared per operation. [`build_operation`] is the one
//! dispatcher those tables feed: it validates required fields, builds the
//! request path and body, and seeds the property bag that the middleware
//! stack consumes. There is no per-operation request-building code
//! anywhere else.

pub mod config;
pub mod descriptor;
pub mod json;

mod build;

pub use build::{build_operation, BuildError};
pub use config::Config;
pub use descriptor::{
    JsonVersion, OperationDescriptor, PathSegment, Protocol, QueryParam, RequiredField,
    SigningKind,
};
pub use json::JsonResponseHandler;
