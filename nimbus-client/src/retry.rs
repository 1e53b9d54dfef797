/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The standard retry policy: a token bucket shared across requests plus
//! exponential backoff per request.
//!
//! Retrying costs tokens from the shared quota (transient failures cost
//! more); a successful response refunds the last withdrawal. When the
//! bucket is empty, retrying stops regardless of the per-request attempt
//! budget.

use nimbus_http::operation::Operation;
use nimbus_http::result::{SdkError, SdkSuccess};
use nimbus_http::retry::ClassifyResponse;
use nimbus_types::retry::{ErrorKind, RetryKind};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const MAX_ATTEMPTS: u32 = 3;
const INITIAL_RETRY_TOKENS: usize = 500;
const RETRY_COST: usize = 5;
const TIMEOUT_RETRY_COST: usize = 10;

/// Configuration for [`Standard`].
#[derive(Clone)]
pub struct Config {
    initial_retry_tokens: usize,
    retry_cost: usize,
    no_retry_increment: usize,
    timeout_retry_cost: usize,
    max_attempts: u32,
    max_backoff: Duration,
    base: fn() -> f64,
}

impl Config {
    /// Total attempts per request, including the initial one.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_max_backoff(mut self, max_backoff: Duration) -> Self {
        self.max_backoff = max_backoff;
        self
    }

    pub fn with_initial_retry_tokens(mut self, initial_retry_tokens: usize) -> Self {
        self.initial_retry_tokens = initial_retry_tokens;
        self
    }

    /// Use a static base instead of a random one for exponential
    /// backoff, for deterministic tests.
    pub fn with_static_base(mut self, base: fn() -> f64) -> Self {
        self.base = base;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_retry_tokens: INITIAL_RETRY_TOKENS,
            retry_cost: RETRY_COST,
            no_retry_increment: 1,
            timeout_retry_cost: TIMEOUT_RETRY_COST,
            max_attempts: MAX_ATTEMPTS,
            max_backoff: Duration::from_secs(20),
            base: fastrand::f64,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("max_attempts", &self.max_attempts)
            .field("max_backoff", &self.max_backoff)
            .finish()
    }
}

/// Creates a fresh per-request retry policy from shared state.
pub trait NewRequestPolicy {
    type Policy;

    fn new_request_policy(&self) -> Self::Policy;
}

/// The standard retry policy. One instance per client; cross-request
/// state (the token bucket) lives here.
#[derive(Clone, Debug)]
pub struct Standard {
    shared: Arc<Mutex<Shared>>,
}

impl Standard {
    pub fn new(config: Config) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared::new(config))),
        }
    }

    pub fn with_config(&mut self, config: Config) -> &mut Self {
        self.shared.lock().unwrap().reconfigure(config);
        self
    }
}

impl Default for Standard {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl NewRequestPolicy for Standard {
    type Policy = RetryHandler;

    fn new_request_policy(&self) -> Self::Policy {
        RetryHandler {
            attempts: 0,
            shared: self.shared.clone(),
        }
    }
}

struct Shared {
    retry_quota: usize,
    last_withdrawal: Option<usize>,
    config: Config,
}

impl Shared {
    fn new(config: Config) -> Self {
        Shared {
            retry_quota: config.initial_retry_tokens,
            last_withdrawal: None,
            config,
        }
    }

    fn reconfigure(&mut self, config: Config) {
        self.retry_quota = self.retry_quota.min(config.initial_retry_tokens);
        self.config = config;
    }

    fn release_quota(&mut self) {
        self.retry_quota += self.last_withdrawal.unwrap_or(self.config.no_retry_increment);
    }

    fn withdraw_quota(&mut self, err: ErrorKind) -> bool {
        let retry_cost = if err == ErrorKind::TransientError {
            self.config.timeout_retry_cost
        } else {
            self.config.retry_cost
        };
        if retry_cost > self.retry_quota {
            false
        } else {
            self.last_withdrawal = Some(retry_cost);
            self.retry_quota -= retry_cost;
            true
        }
    }
}

impl std::fmt::Debug for Shared {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shared")
            .field("retry_quota", &self.retry_quota)
            .finish()
    }
}

/// Per-request retry state: the attempt counter plus a handle to the
/// shared token bucket.
#[derive(Clone, Debug)]
pub struct RetryHandler {
    attempts: u32,
    shared: Arc<Mutex<Shared>>,
}

impl RetryHandler {
    /// Computes the next handler state and backoff, or `None` when the
    /// request should not be retried.
    fn should_retry(&self, retry_kind: &RetryKind) -> Option<(Self, Duration)> {
        let mut shared = self.shared.lock().unwrap();
        let backoff = match retry_kind {
            RetryKind::Explicit(duration) => (*duration).min(shared.config.max_backoff),
            RetryKind::NotRetryable => return None,
            RetryKind::Error(kind) => {
                if self.attempts >= shared.config.max_attempts - 1 {
                    return None;
                }
                if !shared.withdraw_quota(*kind) {
                    tracing::debug!("retry quota exhausted, not retrying");
                    return None;
                }
                let base = (shared.config.base)();
                let backoff = base * 2u32.pow(self.attempts) as f64;
                Duration::from_secs_f64(backoff).min(shared.config.max_backoff)
            }
        };
        let next = RetryHandler {
            attempts: self.attempts + 1,
            shared: self.shared.clone(),
        };
        Some((next, backoff))
    }

    fn on_success(&self) {
        self.shared.lock().unwrap().release_quota();
    }

    #[cfg(test)]
    fn quota(&self) -> usize {
        self.shared.lock().unwrap().retry_quota
    }
}

impl<H, R, T> tower::retry::Policy<Operation<H, R>, SdkSuccess<T>, SdkError> for RetryHandler
where
    H: Clone,
    R: ClassifyResponse<SdkSuccess<T>, SdkError>,
{
    type Future = Pin<Box<dyn Future<Output = Self> + Send>>;

    fn retry(
        &self,
        req: &Operation<H, R>,
        result: Result<&SdkSuccess<T>, &SdkError>,
    ) -> Option<Self::Future> {
        if result.is_ok() {
            self.on_success();
            return None;
        }
        let retry_kind = req.retry_classifier().classify(result);
        let (next, backoff) = self.should_retry(&retry_kind)?;
        tracing::debug!(attempts = next.attempts, backoff = ?backoff, "retrying request");
        let fut = async move {
            tokio::time::sleep(backoff).await;
            next
        };
        Some(Box::pin(fut))
    }

    fn clone_request(&self, req: &Operation<H, R>) -> Option<Operation<H, R>> {
        req.try_clone()
    }
}

#[cfg(test)]
mod test {
    use super::{Config, NewRequestPolicy, RetryHandler, Standard};
    use nimbus_types::retry::{ErrorKind, RetryKind};
    use std::time::Duration;

    fn handler(config: Config) -> RetryHandler {
        Standard::new(config.with_static_base(|| 1_f64)).new_request_policy()
    }

    #[test]
    fn eventual_success() {
        let handler = handler(Config::default());
        let (handler, backoff) = handler
            .should_retry(&RetryKind::Error(ErrorKind::ServerError))
            .expect("should retry");
        assert_eq!(backoff, Duration::from_secs(1));
        assert_eq!(handler.quota(), 495);

        let (handler, backoff) = handler
            .should_retry(&RetryKind::Error(ErrorKind::ServerError))
            .expect("should retry");
        assert_eq!(backoff, Duration::from_secs(2));
        assert_eq!(handler.quota(), 490);

        handler.on_success();
        assert_eq!(handler.quota(), 495);
    }

    #[test]
    fn no_more_attempts() {
        let handler = handler(Config::default());
        let (handler, _) = handler
            .should_retry(&RetryKind::Error(ErrorKind::ServerError))
            .expect("should retry");
        let (handler, _) = handler
            .should_retry(&RetryKind::Error(ErrorKind::ServerError))
            .expect("should retry");
        assert!(handler
            .should_retry(&RetryKind::Error(ErrorKind::ServerError))
            .is_none());
    }

    #[test]
    fn empty_bucket_stops_retries() {
        let handler = handler(Config::default().with_initial_retry_tokens(5).with_max_attempts(5));
        let (handler, _) = handler
            .should_retry(&RetryKind::Error(ErrorKind::ServerError))
            .expect("should retry");
        assert_eq!(handler.quota(), 0);
        assert!(handler
            .should_retry(&RetryKind::Error(ErrorKind::ServerError))
            .is_none());
    }

    #[test]
    fn transient_errors_cost_more() {
        let handler = handler(Config::default());
        let (handler, _) = handler
            .should_retry(&RetryKind::Error(ErrorKind::TransientError))
            .expect("should retry");
        assert_eq!(handler.quota(), 490);
    }

    #[test]
    fn backoff_doubles_and_caps() {
        let handler =
            handler(Config::default().with_max_attempts(6).with_max_backoff(Duration::from_secs(3)));
        let expected = [1, 2, 3, 3];
        let mut current = handler;
        for secs in expected {
            let (next, backoff) = current
                .should_retry(&RetryKind::Error(ErrorKind::ServerError))
                .expect("should retry");
            assert_eq!(backoff, Duration::from_secs(secs));
            current = next;
        }
    }

    #[test]
    fn explicit_retry_honors_max_backoff() {
        let handler = handler(Config::default().with_max_backoff(Duration::from_secs(3)));
        let (_, backoff) = handler
            .should_retry(&RetryKind::Explicit(Duration::from_secs(10)))
            .expect("explicit retries always run");
        assert_eq!(backoff, Duration::from_secs(3));
    }

    #[test]
    fn not_retryable_stops() {
        let handler = handler(Config::default());
        assert!(handler.should_retry(&RetryKind::NotRetryable).is_none());
    }
}
