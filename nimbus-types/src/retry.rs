/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Types that describe when a response should be retried.

use std::time::Duration;

/// Classes of retryable failure.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    /// A connection level error such as a socket timeout or TLS
    /// negotiation failure. These may have had a side effect on the
    /// server, so non-idempotent operations should be careful with them.
    TransientError,

    /// The server explicitly told the client to back off (eg. a 429 or
    /// 503, or a modeled throttling code).
    ThrottlingError,

    /// A server error that is not explicit throttling but is still
    /// considered retryable.
    ServerError,

    /// Doesn't count against any budgets, eg. a 401 challenge.
    ClientError,
}

/// The retry disposition computed for a single response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RetryKind {
    /// Retry due to a specific error class.
    Error(ErrorKind),

    /// An explicit retry after the given delay (eg. from
    /// `x-amz-retry-after`). The duration is a suggestion and may be
    /// capped by the policy's maximum backoff.
    Explicit(Duration),

    /// This response should not be retried.
    NotRetryable,
}

/// Error codes that AWS services use to signal throttling.
pub const THROTTLING_ERROR_CODES: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "ThrottledException",
    "RequestThrottledException",
    "TooManyRequestsException",
    "ProvisionedThroughputExceededException",
    "RequestLimitExceeded",
    "LimitExceededException",
    "RequestThrottled",
    "SlowDown",
];

/// Error codes that indicate a transient failure worth retrying.
pub const TRANSIENT_ERROR_CODES: &[&str] = &["RequestTimeout", "RequestTimeoutException"];

/// Whether an error code belongs to either retryable code table.
pub fn retryable_code(code: &str) -> bool {
    THROTTLING_ERROR_CODES.contains(&code) || TRANSIENT_ERROR_CODES.contains(&code)
}

#[cfg(test)]
mod test {
    use super::retryable_code;

    #[test]
    fn code_tables() {
        assert!(retryable_code("ThrottlingException"));
        assert!(retryable_code("RequestTimeout"));
        assert!(!retryable_code("ResourceNotFoundException"));
    }
}
