/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Binary frame codec for `application/vnd.amazon.eventstream` response
//! streams.
//!
//! A frame is a prelude (total length, headers length, prelude CRC), a
//! header block, a payload, and a trailing CRC over the whole frame. The
//! [`frame::FrameDecoder`] accumulates body chunks and yields complete
//! [`frame::Message`]s; service crates supply an [`UnmarshallMessage`]
//! implementation that turns messages into modeled events.

pub mod frame;

pub use frame::{FrameDecoder, Header, HeaderValue, Message};

/// Raised when a frame violates the wire format.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid message length")]
    InvalidMessageLength,
    #[error("prelude checksum mismatch (expected 0x{0:x}, found 0x{1:x})")]
    PreludeChecksumMismatch(u32, u32),
    #[error("message checksum mismatch (expected 0x{0:x}, found 0x{1:x})")]
    MessageChecksumMismatch(u32, u32),
    #[error("invalid header name")]
    InvalidHeaderName,
    #[error("invalid headers length")]
    InvalidHeadersLength,
    #[error("invalid header value")]
    InvalidHeaderValue,
    #[error("invalid header value type 0x{0:x}")]
    InvalidHeaderValueType(u8),
    #[error("header value too long")]
    HeaderValueTooLong,
    #[error("message too long")]
    MessageTooLong,
    #[error("failed to unmarshall message: {0}")]
    Unmarshalling(String),
}

/// A successfully unmarshalled message: either a modeled event or a
/// modeled exception carried on the stream.
#[derive(Debug)]
pub enum UnmarshalledMessage<T> {
    Event(T),
    Error(nimbus_types::Error),
}

/// Converts an event stream [`Message`] into a modeled event type.
pub trait UnmarshallMessage {
    type Output;

    fn unmarshall(&self, message: &Message) -> Result<UnmarshalledMessage<Self::Output>, Error>;
}
