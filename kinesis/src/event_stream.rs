/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Event stream support for `SubscribeToShard`.

use crate::model::{SubscribeToShardEvent, SubscribeToShardOutput};
use bytes::Bytes;
use nimbus_eventstream::{Error, HeaderValue, Message, UnmarshallMessage, UnmarshalledMessage};
use nimbus_http::body::SdkBody;
use nimbus_http::event_stream::Receiver;
use nimbus_http::response::ParseHttpResponse;
use nimbus_operation::json::parse_generic_error;
use std::mem;

/// Unmarshals `SubscribeToShard` event frames into modeled events.
///
/// Events carry a JSON `SubscribeToShardEvent` payload; exceptions carry
/// their code in the `:exception-type` header and surface as the
/// stream's error.
#[derive(Clone, Debug, Default)]
pub(crate) struct SubscribeToShardEventUnmarshaller;

#[derive(Debug, Default, serde::Deserialize)]
struct ExceptionPayload {
    message: Option<String>,
}

impl UnmarshallMessage for SubscribeToShardEventUnmarshaller {
    type Output = SubscribeToShardEvent;

    fn unmarshall(
        &self,
        message: &Message,
    ) -> Result<UnmarshalledMessage<SubscribeToShardEvent>, Error> {
        let message_type = message.header(":message-type").and_then(HeaderValue::as_str);
        match message_type {
            Some("event") => {
                match message.header(":event-type").and_then(HeaderValue::as_str) {
                    Some("SubscribeToShardEvent") => serde_json::from_slice(message.payload())
                        .map(UnmarshalledMessage::Event)
                        .map_err(|err| Error::Unmarshalling(err.to_string())),
                    other => Err(Error::Unmarshalling(format!(
                        "unexpected event type {:?}",
                        other
                    ))),
                }
            }
            Some("exception") => {
                let code = message
                    .header(":exception-type")
                    .and_then(HeaderValue::as_str)
                    .unwrap_or("Unknown");
                let payload: ExceptionPayload =
                    serde_json::from_slice(message.payload()).unwrap_or_default();
                let mut builder = nimbus_types::Error::service_builder().code(code);
                if let Some(message) = payload.message {
                    builder = builder.message(message);
                }
                Ok(UnmarshalledMessage::Error(builder.build()))
            }
            other => Err(Error::Unmarshalling(format!(
                "unexpected message type {:?}",
                other
            ))),
        }
    }
}

/// Response handler for `SubscribeToShard`.
///
/// A successful response is taken before the body is buffered and
/// wrapped in a [`Receiver`]; error responses fall through to the
/// ordinary buffered JSON error path.
#[derive(Clone, Debug, Default)]
pub(crate) struct SubscribeToShardResponseHandler;

impl ParseHttpResponse<SdkBody> for SubscribeToShardResponseHandler {
    type Output = Result<SubscribeToShardOutput, nimbus_types::Error>;

    fn parse_unloaded(&self, response: &mut http::Response<SdkBody>) -> Option<Self::Output> {
        if !response.status().is_success() {
            // load the body so the error shape can be unmarshalled
            return None;
        }
        let body = mem::replace(response.body_mut(), SdkBody::empty());
        Some(Ok(SubscribeToShardOutput {
            event_stream: Receiver::new(SubscribeToShardEventUnmarshaller, body),
        }))
    }

    fn parse_loaded(&self, response: &http::Response<Bytes>) -> Self::Output {
        Err(parse_generic_error(response))
    }
}

#[cfg(test)]
mod test {
    use super::SubscribeToShardEventUnmarshaller;
    use nimbus_eventstream::{
        Header, HeaderValue, Message, UnmarshallMessage, UnmarshalledMessage,
    };

    fn string_header(name: &str, value: &str) -> Header {
        Header::new(name, HeaderValue::String(value.into()))
    }

    #[test]
    fn event_frames_unmarshall_into_events() {
        let message = Message::new(
            &br#"{"Records":[],"ContinuationSequenceNumber":"496","MillisBehindLatest":100}"#[..],
        )
        .add_header(string_header(":message-type", "event"))
        .add_header(string_header(":event-type", "SubscribeToShardEvent"));

        match SubscribeToShardEventUnmarshaller.unmarshall(&message).unwrap() {
            UnmarshalledMessage::Event(event) => {
                assert_eq!(event.continuation_sequence_number.as_deref(), Some("496"));
                assert_eq!(event.millis_behind_latest, Some(100));
            }
            other => panic!("expected event, got {:?}", other),
        }
    }

    #[test]
    fn exception_frames_unmarshall_into_errors() {
        let message = Message::new(&br#"{"message":"expired lease"}"#[..])
            .add_header(string_header(":message-type", "exception"))
            .add_header(string_header(":exception-type", "ResourceInUseException"));

        match SubscribeToShardEventUnmarshaller.unmarshall(&message).unwrap() {
            UnmarshalledMessage::Error(err) => {
                assert_eq!(err.code(), Some("ResourceInUseException"));
                assert_eq!(err.message(), Some("expired lease"));
            }
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_message_types_are_rejected() {
        let message = Message::new(&b"{}"[..]);
        assert!(SubscribeToShardEventUnmarshaller.unmarshall(&message).is_err());
    }
}
