/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::config::Config;
use crate::descriptor::{OperationDescriptor, PathSegment, Protocol, SigningKind};
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Method};
use nimbus_core::SigningService;
use nimbus_endpoint::{Params, SharedEndpointResolver};
use nimbus_http::body::SdkBody;
use nimbus_http::label;
use nimbus_http::operation::{Metadata, Operation, Request};
use nimbus_http::result::SdkError;
use nimbus_middleware::user_agent::{ApiMetadata, SdkUserAgent};
use nimbus_middleware::DefaultResponseClassifier;
use nimbus_sig_auth::OperationSigningConfig;
use serde::Serialize;

/// The request could not be built from the given input. Nothing was
/// dispatched.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing required field [{0}]")]
    MissingField(&'static str),
    #[error("failed to serialize request body: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("failed to construct HTTP request: {0}")]
    Http(#[from] http::Error),
}

impl From<BuildError> for nimbus_types::Error {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::MissingField(field) => nimbus_types::Error::missing_parameter(field),
            other => nimbus_types::Error::construction(other.to_string()),
        }
    }
}

impl From<BuildError> for SdkError {
    fn from(err: BuildError) -> Self {
        SdkError::ConstructionFailure(err.into())
    }
}

/// Build a dispatch-ready [`Operation`] from an operation descriptor.
///
/// This is the single request construction path shared by every service
/// operation:
/// 1. every descriptor-declared required field is checked, missing ones
///    short-circuit before any network activity;
/// 2. the path is built from the descriptor's template with labels
///    path-escaped, deterministically for a given input;
/// 3. the body and protocol headers are attached;
/// 4. the property bag is seeded from `conf` for the middleware stack
///    (endpoint params and resolver, signing configuration, credentials,
///    user agent).
pub fn build_operation<I, H>(
    input: &I,
    descriptor: &'static OperationDescriptor<I>,
    conf: &Config,
    resolver: &SharedEndpointResolver,
    handler: H,
) -> Result<Operation<H, DefaultResponseClassifier>, BuildError>
where
    I: Serialize,
{
    for field in descriptor.required {
        if !(field.is_set)(input) {
            return Err(BuildError::MissingField(field.name));
        }
    }

    let mut uri = build_path(input, descriptor)?;
    build_query(input, descriptor, &mut uri);
    let body = if has_body(&descriptor.method) {
        SdkBody::from(serde_json::to_vec(input)?)
    } else {
        SdkBody::empty()
    };

    let mut request = http::Request::builder()
        .method(descriptor.method.clone())
        .uri(uri);
    match &descriptor.protocol {
        Protocol::JsonRpc { target, version } => {
            request = request
                .header(CONTENT_TYPE, HeaderValue::from_static(version.content_type()))
                .header("x-amz-target", HeaderValue::from_static(target));
        }
        Protocol::RestJson => {
            if has_body(&descriptor.method) {
                request = request.header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
        }
    }
    let request = Request::new(request.body(body)?);

    {
        let mut props = request.properties();
        props.insert(Params::builder().region(conf.region().cloned()).build());
        nimbus_endpoint::set_endpoint_resolver(&mut props, resolver.clone());
        props.insert(match descriptor.signing {
            SigningKind::SigV4 => OperationSigningConfig::default_config(),
            SigningKind::Unsigned => OperationSigningConfig::unsigned(),
        });
        props.insert(SigningService::from_static(descriptor.signing_name));
        if let Some(credentials_provider) = conf.credentials_provider() {
            props.insert(credentials_provider.clone());
        }
        if let Some(signer) = conf.signer() {
            props.insert(signer.clone());
        }
        props.insert(SdkUserAgent::for_api(ApiMetadata::new(
            descriptor.service,
            descriptor.api_version,
        )));
    }

    Ok(Operation::new(request, handler)
        .with_metadata(Metadata::new(descriptor.name, descriptor.service))
        .with_retry_classifier(DefaultResponseClassifier::new()))
}

fn has_body(method: &Method) -> bool {
    *method != Method::GET && *method != Method::DELETE && *method != Method::HEAD
}

fn build_path<I>(
    input: &I,
    descriptor: &OperationDescriptor<I>,
) -> Result<String, BuildError> {
    let mut path = String::new();
    for segment in descriptor.path {
        path.push('/');
        match segment {
            PathSegment::Literal(literal) => path.push_str(literal),
            PathSegment::Label { name, get } => {
                let value = get(input).ok_or(BuildError::MissingField(*name))?;
                path.push_str(&label::fmt_segment(value));
            }
        }
    }
    if path.is_empty() {
        path.push('/');
    }
    Ok(path)
}

fn build_query<I>(input: &I, descriptor: &OperationDescriptor<I>, uri: &mut String) {
    let mut separator = '?';
    for param in descriptor.query {
        if let Some(value) = (param.get)(input) {
            uri.push(separator);
            separator = '&';
            uri.push_str(param.name);
            uri.push('=');
            uri.push_str(&label::fmt_query(&value));
        }
    }
}

#[cfg(test)]
mod test {
    use super::{build_path, BuildError};
    use crate::descriptor::{
        OperationDescriptor, PathSegment, Protocol, QueryParam, RequiredField, SigningKind,
    };
    use http::Method;

    #[derive(Default, serde::Serialize)]
    struct FakeInput {
        arn: Option<String>,
    }

    static FAKE: OperationDescriptor<FakeInput> = OperationDescriptor {
        name: "GetThing",
        service: "fakeservice",
        signing_name: "fakeservice",
        api_version: "2020-01-01",
        method: Method::GET,
        protocol: Protocol::RestJson,
        path: &[
            PathSegment::Literal("v1/things"),
            PathSegment::Label {
                name: "ThingArn",
                get: |input| input.arn.as_deref(),
            },
        ],
        query: &[],
        required: &[RequiredField {
            name: "ThingArn",
            is_set: |input| input.arn.is_some(),
        }],
        signing: SigningKind::SigV4,
    };

    #[test]
    fn path_building_is_deterministic() {
        let input = FakeInput {
            arn: Some("arn:x".to_string()),
        };
        let first = build_path(&input, &FAKE).unwrap();
        let second = build_path(&input, &FAKE).unwrap();
        assert_eq!(first, "/v1/things/arn:x");
        assert_eq!(first, second);
    }

    #[test]
    fn labels_are_escaped() {
        let input = FakeInput {
            arn: Some("a b/c".to_string()),
        };
        assert_eq!(build_path(&input, &FAKE).unwrap(), "/v1/things/a%20b%2Fc");
    }

    #[test]
    fn missing_label_is_a_missing_field() {
        let err = build_path(&FakeInput::default(), &FAKE).unwrap_err();
        assert!(matches!(err, BuildError::MissingField("ThingArn")));
        assert_eq!(err.to_string(), "Missing required field [ThingArn]");
    }

    #[test]
    fn unset_query_params_are_omitted() {
        #[derive(Default, serde::Serialize)]
        struct ListInput {
            next_token: Option<String>,
            max_results: Option<i32>,
        }
        static LIST: OperationDescriptor<ListInput> = OperationDescriptor {
            name: "ListThings",
            service: "fakeservice",
            signing_name: "fakeservice",
            api_version: "2020-01-01",
            method: Method::GET,
            protocol: Protocol::RestJson,
            path: &[PathSegment::Literal("v1/things")],
            query: &[
                QueryParam {
                    name: "nextToken",
                    get: |input: &ListInput| input.next_token.clone(),
                },
                QueryParam {
                    name: "maxResults",
                    get: |input: &ListInput| input.max_results.map(|n| n.to_string()),
                },
            ],
            required: &[],
            signing: SigningKind::SigV4,
        };

        let mut uri = build_path(&ListInput::default(), &LIST).unwrap();
        super::build_query(&ListInput::default(), &LIST, &mut uri);
        assert_eq!(uri, "/v1/things");

        let input = ListInput {
            next_token: Some("a&b".to_string()),
            max_results: Some(10),
        };
        let mut uri = build_path(&input, &LIST).unwrap();
        super::build_query(&input, &LIST, &mut uri);
        assert_eq!(uri, "/v1/things?nextToken=a%26b&maxResults=10");
    }
}
