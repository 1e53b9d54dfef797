/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Escaping for request-field-derived URI path segments.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::borrow::Cow;

// Everything RFC 3986 forbids in a path segment. `:` is a legal pchar and
// is left alone so that ARN labels stay readable in request paths.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b']')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

// Query values additionally reserve the query delimiters.
const QUERY: &AsciiSet = &PATH_SEGMENT.add(b'&').add(b'+').add(b'=').add(b';');

/// Escape a request field value for use as a single path segment.
pub fn fmt_segment(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, PATH_SEGMENT).into()
}

/// Escape a request field value for use in the query string.
pub fn fmt_query(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, QUERY).into()
}

#[cfg(test)]
mod test {
    use super::fmt_segment;

    #[test]
    fn arns_pass_through() {
        assert_eq!(fmt_segment("arn:aws:kinesis:us-east-1:123:stream/foo").as_ref(),
                   "arn:aws:kinesis:us-east-1:123:stream%2Ffoo");
        assert_eq!(fmt_segment("arn:x").as_ref(), "arn:x");
    }

    #[test]
    fn reserved_characters_escape() {
        assert_eq!(fmt_segment("a b").as_ref(), "a%20b");
        assert_eq!(fmt_segment("a/b").as_ref(), "a%2Fb");
        assert_eq!(fmt_segment("50%").as_ref(), "50%25");
    }

    #[test]
    fn query_values_escape_delimiters() {
        use super::fmt_query;
        assert_eq!(fmt_query("a=b&c").as_ref(), "a%3Db%26c");
        assert_eq!(fmt_query("token").as_ref(), "token");
    }
}
