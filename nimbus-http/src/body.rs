/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use http_body::combinators::BoxBody;
use http_body::Body as _;
use std::error::Error;
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

type BodyError = Box<dyn Error + Send + Sync>;

/// The body type used for all requests and responses.
///
/// Most operations carry a single preloaded chunk; streaming responses
/// (event streams) wrap the connector's body instead. Only preloaded
/// bodies can be re-read, so retries are limited to them.
pub struct SdkBody(Inner);

enum Inner {
    Once(Option<Bytes>),
    Streaming(BoxBody<Bytes, BodyError>),
}

impl SdkBody {
    pub fn empty() -> Self {
        SdkBody(Inner::Once(None))
    }

    /// Wrap an arbitrary streaming body.
    pub fn from_body<B>(body: B) -> Self
    where
        B: http_body::Body<Data = Bytes> + Send + Sync + 'static,
        B::Error: Into<BodyError>,
    {
        SdkBody(Inner::Streaming(BoxBody::new(body.map_err(Into::into))))
    }

    /// The body contents, when the body is preloaded.
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.0 {
            Inner::Once(Some(bytes)) => Some(bytes),
            Inner::Once(None) => Some(&[]),
            Inner::Streaming(_) => None,
        }
    }

    /// Clone the body if it can be read again. Streaming bodies cannot.
    pub fn try_clone(&self) -> Option<Self> {
        match &self.0 {
            Inner::Once(bytes) => Some(SdkBody(Inner::Once(bytes.clone()))),
            Inner::Streaming(_) => None,
        }
    }

    fn poll_inner(&mut self, cx: &mut Context<'_>) -> Poll<Option<Result<Bytes, BodyError>>> {
        match &mut self.0 {
            Inner::Once(opt) => match opt.take() {
                Some(bytes) if !bytes.is_empty() => Poll::Ready(Some(Ok(bytes))),
                _ => Poll::Ready(None),
            },
            Inner::Streaming(body) => Pin::new(body).poll_data(cx),
        }
    }
}

impl fmt::Debug for SdkBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Inner::Once(Some(bytes)) => write!(f, "SdkBody({} bytes)", bytes.len()),
            Inner::Once(None) => write!(f, "SdkBody(empty)"),
            Inner::Streaming(_) => write!(f, "SdkBody(streaming)"),
        }
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody(Inner::Once(Some(Bytes::copy_from_slice(s.as_bytes()))))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::from(Bytes::from(s.into_bytes()))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody(Inner::Once(Some(bytes)))
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> Self {
        SdkBody::from(Bytes::from(data))
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner(cx)
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn size_hint(&self) -> http_body::SizeHint {
        match &self.0 {
            Inner::Once(Some(bytes)) => http_body::SizeHint::with_exact(bytes.len() as u64),
            Inner::Once(None) => http_body::SizeHint::with_exact(0),
            Inner::Streaming(body) => body.size_hint(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::SdkBody;
    use http_body::Body;

    #[test]
    fn once_body_is_cloneable() {
        let body = SdkBody::from("hello");
        let clone = body.try_clone().expect("preloaded bodies clone");
        assert_eq!(clone.bytes(), Some(b"hello".as_ref()));
        assert_eq!(body.size_hint().exact(), Some(5));
    }

    #[tokio::test]
    async fn once_body_polls_one_chunk() {
        let mut body = SdkBody::from("hello");
        let chunk = body.data().await.expect("one chunk").expect("no error");
        assert_eq!(&chunk[..], b"hello");
        assert!(body.data().await.is_none());
    }

    #[tokio::test]
    async fn empty_body_polls_none() {
        let mut body = SdkBody::empty();
        assert_eq!(body.bytes(), Some(&[][..]));
        assert!(body.data().await.is_none());
    }
}
