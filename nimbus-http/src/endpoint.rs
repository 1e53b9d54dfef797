/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::uri::{Authority, InvalidUri, Uri};
use std::borrow::Cow;
use std::str::FromStr;

/// A resolved API endpoint.
///
/// Applying an endpoint to a request replaces the request URI's scheme
/// and authority and prepends any path carried by the endpoint, so a
/// custom endpoint such as `http://localhost:8000/prefix` composes with
/// operation paths like `/cluster/<arn>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    uri: Uri,
}

impl Endpoint {
    pub fn new(uri: Uri) -> Self {
        Endpoint { uri }
    }

    /// Parse an endpoint from a string, eg. a configured override URL.
    pub fn from_url(url: &str) -> Result<Self, InvalidUri> {
        Ok(Endpoint {
            uri: Uri::from_str(url)?,
        })
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Replace the endpoint parts of `uri`, keeping its operation path.
    pub fn set_endpoint(&self, uri: &mut Uri) {
        let authority = self
            .uri
            .authority()
            .map(Authority::as_str)
            .unwrap_or_default();
        let authority = Authority::from_str(authority).expect("authority is valid");
        let scheme = self
            .uri
            .scheme()
            .cloned()
            .unwrap_or(http::uri::Scheme::HTTPS);
        let new_uri = Uri::builder()
            .authority(authority)
            .scheme(scheme)
            .path_and_query(merge_paths(&self.uri, uri).as_ref())
            .build()
            .expect("valid uri");
        *uri = new_uri;
    }
}

fn merge_paths<'a>(endpoint: &'a Uri, uri: &'a Uri) -> Cow<'a, str> {
    if let Some(query) = endpoint.path_and_query().and_then(|pq| pq.query()) {
        tracing::warn!(query = %query, "query specified in endpoint will be ignored during endpoint resolution");
    }
    let endpoint_path = endpoint.path();
    let uri_path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("");
    if endpoint_path.is_empty() || endpoint_path == "/" {
        Cow::Borrowed(uri_path_and_query)
    } else {
        let ep_no_slash = endpoint_path.strip_suffix('/').unwrap_or(endpoint_path);
        let uri_path_no_slash = uri_path_and_query
            .strip_prefix('/')
            .unwrap_or(uri_path_and_query);
        Cow::Owned(format!("{}/{}", ep_no_slash, uri_path_no_slash))
    }
}

#[cfg(test)]
mod test {
    use super::Endpoint;
    use http::Uri;

    #[test]
    fn endpoint_replaces_scheme_and_authority() {
        let endpoint = Endpoint::from_url("https://kinesis.us-east-1.amazonaws.com").unwrap();
        let mut uri = Uri::from_static("/streams?limit=5");
        endpoint.set_endpoint(&mut uri);
        assert_eq!(
            uri,
            Uri::from_static("https://kinesis.us-east-1.amazonaws.com/streams?limit=5")
        );
    }

    #[test]
    fn endpoint_with_path_prefixes_operation_path() {
        for url in &[
            // trailing slashes normalize away
            "https://example.com/private",
            "https://example.com/private/",
        ] {
            let endpoint = Endpoint::from_url(url).unwrap();
            let mut uri = Uri::from_static("/cluster/arn%3Aaws");
            endpoint.set_endpoint(&mut uri);
            assert_eq!(uri, Uri::from_static("https://example.com/private/cluster/arn%3Aaws"));
        }
    }

    #[test]
    fn endpoint_with_empty_path() {
        let endpoint = Endpoint::from_url("http://localhost:8000").unwrap();
        let mut uri = Uri::from_static("/");
        endpoint.set_endpoint(&mut uri);
        assert_eq!(uri, Uri::from_static("http://localhost:8000/"));
    }

    #[test]
    fn scheme_defaults_to_https() {
        let endpoint = Endpoint::new(Uri::from_static("localhost:8000"));
        let mut uri = Uri::from_static("/ping");
        endpoint.set_endpoint(&mut uri);
        assert_eq!(uri, Uri::from_static("https://localhost:8000/ping"));
    }
}
