/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Protocol-agnostic types shared by every Nimbus service crate: binary
//! blobs, the tagged error returned by all operations, and retry
//! classification vocabulary.

pub mod base64;
pub mod error;
pub mod retry;

pub use error::{Error, ErrorKind};

/// Binary data shape.
///
/// JSON protocols carry `Blob` members as base64 strings; service crates
/// attach their own serde adapters on top of [`base64`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Blob {
    inner: Vec<u8>,
}

impl Blob {
    pub fn new<T: Into<Vec<u8>>>(inp: T) -> Self {
        Blob { inner: inp.into() }
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.inner
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}
