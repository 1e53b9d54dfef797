/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Receiver side of event stream operations.

use crate::body::SdkBody;
use http_body::Body;
use nimbus_eventstream::{FrameDecoder, UnmarshallMessage, UnmarshalledMessage};
use nimbus_types::Error;
use std::fmt;

/// Receives unmarshalled events from an event stream response body.
///
/// The response handler of a streaming operation takes ownership of the
/// HTTP body before it is buffered and wraps it in a `Receiver`; callers
/// then pull events with [`recv`](Receiver::recv) as frames arrive on the
/// wire.
pub struct Receiver<T> {
    unmarshaller: Box<dyn UnmarshallMessage<Output = T> + Send + Sync>,
    decoder: FrameDecoder,
    body: SdkBody,
    body_done: bool,
}

impl<T> Receiver<T> {
    pub fn new(
        unmarshaller: impl UnmarshallMessage<Output = T> + Send + Sync + 'static,
        body: SdkBody,
    ) -> Self {
        Receiver {
            unmarshaller: Box::new(unmarshaller),
            decoder: FrameDecoder::new(),
            body,
            body_done: false,
        }
    }

    /// Receive the next event, or `None` once the stream has ended.
    ///
    /// Modeled exceptions carried on the stream and frame-level
    /// corruption both surface as `Err`.
    pub async fn recv(&mut self) -> Result<Option<T>, Error> {
        loop {
            if let Some(message) = self
                .decoder
                .decode()
                .map_err(|err| Error::transport(format!("invalid event stream frame: {}", err)))?
            {
                match self.unmarshaller.unmarshall(&message).map_err(|err| {
                    Error::transport(format!("failed to unmarshall event: {}", err))
                })? {
                    UnmarshalledMessage::Event(event) => return Ok(Some(event)),
                    UnmarshalledMessage::Error(err) => return Err(err),
                }
            }
            if self.body_done {
                if self.decoder.has_pending_data() {
                    return Err(Error::transport(
                        "event stream ended mid-frame".to_string(),
                    ));
                }
                return Ok(None);
            }
            match self.body.data().await {
                Some(Ok(chunk)) => self.decoder.feed(&chunk),
                Some(Err(err)) => {
                    return Err(Error::transport(format!(
                        "failed to read event stream body: {}",
                        err
                    )))
                }
                None => self.body_done = true,
            }
        }
    }
}

impl<T> fmt::Debug for Receiver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Receiver")
    }
}

#[cfg(test)]
mod test {
    use super::Receiver;
    use crate::body::SdkBody;
    use nimbus_eventstream::{
        Error, Header, HeaderValue, Message, UnmarshallMessage, UnmarshalledMessage,
    };

    struct PayloadUnmarshaller;

    impl UnmarshallMessage for PayloadUnmarshaller {
        type Output = String;

        fn unmarshall(&self, message: &Message) -> Result<UnmarshalledMessage<String>, Error> {
            match message.header(":message-type").and_then(HeaderValue::as_str) {
                Some("event") => Ok(UnmarshalledMessage::Event(
                    String::from_utf8_lossy(message.payload()).to_string(),
                )),
                _ => Ok(UnmarshalledMessage::Error(
                    nimbus_types::Error::service_builder().code("InternalError").build(),
                )),
            }
        }
    }

    fn event(payload: &'static str) -> Message {
        Message::new(payload.as_bytes())
            .add_header(Header::new(":message-type", HeaderValue::String("event".into())))
    }

    #[tokio::test]
    async fn receives_all_events_then_none() {
        let mut encoded = Vec::new();
        event("one").write_to(&mut encoded).unwrap();
        event("two").write_to(&mut encoded).unwrap();
        let mut receiver = Receiver::new(PayloadUnmarshaller, SdkBody::from(encoded));

        assert_eq!(receiver.recv().await.unwrap(), Some("one".to_string()));
        assert_eq!(receiver.recv().await.unwrap(), Some("two".to_string()));
        assert_eq!(receiver.recv().await.unwrap(), None);
    }

    #[tokio::test]
    async fn exception_message_surfaces_as_error() {
        let mut encoded = Vec::new();
        Message::new(&b"{}"[..])
            .add_header(Header::new(":message-type", HeaderValue::String("exception".into())))
            .write_to(&mut encoded)
            .unwrap();
        let mut receiver = Receiver::new(PayloadUnmarshaller, SdkBody::from(encoded));
        let err = receiver.recv().await.unwrap_err();
        assert_eq!(err.code(), Some("InternalError"));
    }

    #[tokio::test]
    async fn truncated_stream_is_an_error() {
        let mut encoded = Vec::new();
        event("one").write_to(&mut encoded).unwrap();
        encoded.truncate(encoded.len() - 2);
        let mut receiver = Receiver::new(PayloadUnmarshaller, SdkBody::from(encoded));
        assert!(receiver.recv().await.is_err());
    }
}
