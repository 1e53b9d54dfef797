/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::header::{HeaderName, HeaderValue, InvalidHeaderValue, USER_AGENT};
use nimbus_http::middleware::MapRequest;
use nimbus_http::operation::Request;
use std::borrow::Cow;
use std::fmt;

const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

fn x_amz_user_agent() -> HeaderName {
    HeaderName::from_static("x-amz-user-agent")
}

/// Identifies the calling service API inside the user agent string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiMetadata {
    service_id: Cow<'static, str>,
    version: &'static str,
}

impl ApiMetadata {
    pub const fn new(service_id: &'static str, version: &'static str) -> Self {
        ApiMetadata {
            service_id: Cow::Borrowed(service_id),
            version,
        }
    }
}

impl fmt::Display for ApiMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "api/{}/{}", self.service_id, self.version)
    }
}

/// The `ua-string` sent with every request:
/// `nimbus-sdk-rust/<version> [api/<service>/<version>] os/<family> lang/rust`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SdkUserAgent {
    api_metadata: Option<ApiMetadata>,
}

impl SdkUserAgent {
    pub fn new() -> Self {
        SdkUserAgent { api_metadata: None }
    }

    pub fn for_api(api_metadata: ApiMetadata) -> Self {
        SdkUserAgent {
            api_metadata: Some(api_metadata),
        }
    }

    fn ua_header(&self) -> String {
        let mut ua = format!("nimbus-sdk-rust/{}", SDK_VERSION);
        if let Some(api) = &self.api_metadata {
            ua.push(' ');
            ua.push_str(&api.to_string());
        }
        ua.push_str(" os/");
        ua.push_str(os_family());
        ua.push_str(" lang/rust");
        ua
    }
}

impl Default for SdkUserAgent {
    fn default() -> Self {
        Self::new()
    }
}

fn os_family() -> &'static str {
    if cfg!(target_os = "linux") {
        "linux"
    } else if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else {
        "other"
    }
}

/// Middleware stage that sets the `user-agent` and `x-amz-user-agent`
/// headers from the [`SdkUserAgent`] in the property bag (or a default
/// one when the operation builder did not provide any).
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct UserAgentStage;

impl UserAgentStage {
    pub fn new() -> Self {
        UserAgentStage
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UserAgentStageError {
    #[error("generated user agent was not a valid header value")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

impl From<UserAgentStageError> for nimbus_types::Error {
    fn from(err: UserAgentStageError) -> Self {
        nimbus_types::Error::construction(err.to_string())
    }
}

impl MapRequest for UserAgentStage {
    type Error = UserAgentStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut req, props| {
            let ua = props.get::<SdkUserAgent>().cloned().unwrap_or_default();
            let header = HeaderValue::from_str(&ua.ua_header())?;
            req.headers_mut().insert(USER_AGENT, header.clone());
            req.headers_mut().insert(x_amz_user_agent(), header);
            Ok(req)
        })
    }
}

#[cfg(test)]
mod test {
    use super::{ApiMetadata, SdkUserAgent, UserAgentStage};
    use http::header::USER_AGENT;
    use nimbus_http::body::SdkBody;
    use nimbus_http::middleware::MapRequest;
    use nimbus_http::operation;

    #[test]
    fn ua_string_includes_api_metadata() {
        let ua = SdkUserAgent::for_api(ApiMetadata::new("kinesis", "0.1.0"));
        let header = ua.ua_header();
        assert!(header.starts_with("nimbus-sdk-rust/"), "{}", header);
        assert!(header.contains("api/kinesis/0.1.0"), "{}", header);
        assert!(header.ends_with("lang/rust"), "{}", header);
    }

    #[test]
    fn stage_sets_both_headers() {
        let req = operation::Request::new(http::Request::new(SdkBody::empty()));
        req.properties()
            .insert(SdkUserAgent::for_api(ApiMetadata::new("budgets", "0.1.0")));
        let req = UserAgentStage::new().apply(req).expect("applies");
        assert!(req.http().headers().get(USER_AGENT).is_some());
        assert_eq!(
            req.http().headers().get(USER_AGENT),
            req.http().headers().get("x-amz-user-agent"),
        );
    }
}
