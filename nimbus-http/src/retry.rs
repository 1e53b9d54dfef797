/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Classification of operation outcomes for the retry policy.
//!
//! For the retry vocabulary itself, see `nimbus_types::retry`.

use nimbus_types::retry::RetryKind;

/// Computes the retry disposition of a completed attempt.
///
/// `T`/`E` are the success and error halves of the operation outcome. A
/// classifier instance rides on each [`Operation`](crate::operation::Operation)
/// and is consulted by the client's retry policy.
pub trait ClassifyResponse<T, E>: Clone {
    fn classify(&self, result: Result<&T, &E>) -> RetryKind;
}

/// The unit classifier never retries; it is the default for operations
/// constructed without one.
impl<T, E> ClassifyResponse<T, E> for () {
    fn classify(&self, _result: Result<&T, &E>) -> RetryKind {
        RetryKind::NotRetryable
    }
}
