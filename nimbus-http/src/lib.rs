/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Core HTTP primitives for the Nimbus SDK: request bodies, the operation
//! wrapper and its property bag, the synchronous middleware interface, and
//! response parsing into typed outcomes.

pub mod body;
pub mod endpoint;
#[cfg(feature = "event-stream")]
pub mod event_stream;
pub mod label;
pub mod middleware;
pub mod operation;
pub mod property_bag;
pub mod response;
pub mod result;
pub mod retry;
