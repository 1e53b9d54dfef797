/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Event stream message frames and their serialization logic.

use crate::Error;
use bytes::{Buf, BufMut, Bytes, BytesMut};
use std::convert::TryFrom;
use std::mem::size_of;

const PRELUDE_LENGTH_BYTES: usize = 3 * size_of::<u32>();
const MESSAGE_CRC_LENGTH_BYTES: usize = size_of::<u32>();
const MIN_MESSAGE_LENGTH_BYTES: usize = PRELUDE_LENGTH_BYTES + MESSAGE_CRC_LENGTH_BYTES;
const MAX_HEADER_NAME_LEN: usize = 255;

const TYPE_TRUE: u8 = 0;
const TYPE_FALSE: u8 = 1;
const TYPE_BYTE: u8 = 2;
const TYPE_INT16: u8 = 3;
const TYPE_INT32: u8 = 4;
const TYPE_INT64: u8 = 5;
const TYPE_BYTE_ARRAY: u8 = 6;
const TYPE_STRING: u8 = 7;
const TYPE_TIMESTAMP: u8 = 8;
const TYPE_UUID: u8 = 9;

/// Event stream frame header value.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub enum HeaderValue {
    Bool(bool),
    Byte(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    ByteArray(Bytes),
    String(String),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    Uuid(u128),
}

impl HeaderValue {
    /// The string content, when this value is a string header.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HeaderValue::String(value) => Some(value),
            _ => None,
        }
    }

    fn read_from(buffer: &mut impl Buf) -> Result<HeaderValue, Error> {
        if buffer.remaining() < 1 {
            return Err(Error::InvalidHeaderValue);
        }
        let value_type = buffer.get_u8();
        macro_rules! fixed {
            ($buf:ident, $variant:ident, $repr:ty, $read:ident) => {
                if $buf.remaining() >= size_of::<$repr>() {
                    Ok(HeaderValue::$variant($buf.$read()))
                } else {
                    Err(Error::InvalidHeaderValue)
                }
            };
        }
        match value_type {
            TYPE_TRUE => Ok(HeaderValue::Bool(true)),
            TYPE_FALSE => Ok(HeaderValue::Bool(false)),
            TYPE_BYTE => fixed!(buffer, Byte, i8, get_i8),
            TYPE_INT16 => fixed!(buffer, Int16, i16, get_i16),
            TYPE_INT32 => fixed!(buffer, Int32, i32, get_i32),
            TYPE_INT64 => fixed!(buffer, Int64, i64, get_i64),
            TYPE_TIMESTAMP => fixed!(buffer, Timestamp, i64, get_i64),
            TYPE_UUID => fixed!(buffer, Uuid, u128, get_u128),
            TYPE_BYTE_ARRAY | TYPE_STRING => {
                if buffer.remaining() < size_of::<u16>() {
                    return Err(Error::InvalidHeaderValue);
                }
                let len = buffer.get_u16() as usize;
                if buffer.remaining() < len {
                    return Err(Error::InvalidHeaderValue);
                }
                let bytes = buffer.copy_to_bytes(len);
                if value_type == TYPE_STRING {
                    let value = String::from_utf8(bytes.to_vec())
                        .map_err(|_| Error::InvalidHeaderValue)?;
                    Ok(HeaderValue::String(value))
                } else {
                    Ok(HeaderValue::ByteArray(bytes))
                }
            }
            other => Err(Error::InvalidHeaderValueType(other)),
        }
    }

    fn write_to(&self, buffer: &mut impl BufMut) -> Result<(), Error> {
        match self {
            HeaderValue::Bool(value) => {
                buffer.put_u8(if *value { TYPE_TRUE } else { TYPE_FALSE })
            }
            HeaderValue::Byte(value) => {
                buffer.put_u8(TYPE_BYTE);
                buffer.put_i8(*value);
            }
            HeaderValue::Int16(value) => {
                buffer.put_u8(TYPE_INT16);
                buffer.put_i16(*value);
            }
            HeaderValue::Int32(value) => {
                buffer.put_u8(TYPE_INT32);
                buffer.put_i32(*value);
            }
            HeaderValue::Int64(value) => {
                buffer.put_u8(TYPE_INT64);
                buffer.put_i64(*value);
            }
            HeaderValue::ByteArray(value) => {
                buffer.put_u8(TYPE_BYTE_ARRAY);
                buffer.put_u16(checked(value.len(), Error::HeaderValueTooLong)?);
                buffer.put_slice(value);
            }
            HeaderValue::String(value) => {
                buffer.put_u8(TYPE_STRING);
                buffer.put_u16(checked(value.len(), Error::HeaderValueTooLong)?);
                buffer.put_slice(value.as_bytes());
            }
            HeaderValue::Timestamp(value) => {
                buffer.put_u8(TYPE_TIMESTAMP);
                buffer.put_i64(*value);
            }
            HeaderValue::Uuid(value) => {
                buffer.put_u8(TYPE_UUID);
                buffer.put_u128(*value);
            }
        }
        Ok(())
    }
}

/// Event stream frame header.
#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    name: String,
    value: HeaderValue,
}

impl Header {
    pub fn new(name: impl Into<String>, value: HeaderValue) -> Header {
        Header {
            name: name.into(),
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &HeaderValue {
        &self.value
    }

    fn read_from(buffer: &mut impl Buf) -> Result<Header, Error> {
        if buffer.remaining() < 2 {
            return Err(Error::InvalidHeadersLength);
        }
        let name_len = buffer.get_u8() as usize;
        if name_len == 0 || name_len > buffer.remaining() {
            return Err(Error::InvalidHeaderName);
        }
        let name = String::from_utf8(buffer.copy_to_bytes(name_len).to_vec())
            .map_err(|_| Error::InvalidHeaderName)?;
        let value = HeaderValue::read_from(buffer)?;
        Ok(Header::new(name, value))
    }

    fn write_to(&self, buffer: &mut impl BufMut) -> Result<(), Error> {
        if self.name.is_empty() || self.name.len() > MAX_HEADER_NAME_LEN {
            return Err(Error::InvalidHeaderName);
        }
        buffer.put_u8(self.name.len() as u8);
        buffer.put_slice(self.name.as_bytes());
        self.value.write_to(buffer)
    }
}

/// Event stream message.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    headers: Vec<Header>,
    payload: Bytes,
}

impl Message {
    /// Creates a new message with the given `payload`. Headers can be
    /// added later.
    pub fn new(payload: impl Into<Bytes>) -> Message {
        Message {
            headers: Vec::new(),
            payload: payload.into(),
        }
    }

    pub fn add_header(mut self, header: Header) -> Self {
        self.headers.push(header);
        self
    }

    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// The first header with the given name, if present.
    pub fn header(&self, name: &str) -> Option<&HeaderValue> {
        self.headers
            .iter()
            .find(|header| header.name() == name)
            .map(Header::value)
    }

    pub fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Reads a message from a complete frame. The caller (normally
    /// [`FrameDecoder`]) guarantees `frame` holds exactly one frame.
    pub fn read_from(frame: Bytes) -> Result<Message, Error> {
        if frame.len() < MIN_MESSAGE_LENGTH_BYTES {
            return Err(Error::InvalidMessageLength);
        }

        let mut buffer = frame.clone();
        let total_len = buffer.get_u32() as usize;
        let headers_len = buffer.get_u32() as usize;
        let prelude_crc = buffer.get_u32();
        let expected_crc = crc32(&frame[..PRELUDE_LENGTH_BYTES - size_of::<u32>()]);
        if expected_crc != prelude_crc {
            return Err(Error::PreludeChecksumMismatch(expected_crc, prelude_crc));
        }
        if total_len != frame.len() {
            return Err(Error::InvalidMessageLength);
        }
        if headers_len > total_len - MIN_MESSAGE_LENGTH_BYTES {
            return Err(Error::InvalidHeadersLength);
        }

        let mut header_buffer = buffer.split_to(headers_len);
        let mut headers = Vec::new();
        while header_buffer.has_remaining() {
            headers.push(Header::read_from(&mut header_buffer)?);
        }

        let payload = buffer.split_to(total_len - headers_len - MIN_MESSAGE_LENGTH_BYTES);
        let message_crc = buffer.get_u32();
        let expected_crc = crc32(&frame[..total_len - MESSAGE_CRC_LENGTH_BYTES]);
        if expected_crc != message_crc {
            return Err(Error::MessageChecksumMismatch(expected_crc, message_crc));
        }

        Ok(Message { headers, payload })
    }

    /// Writes the message to the given `buffer`.
    pub fn write_to(&self, buffer: &mut Vec<u8>) -> Result<(), Error> {
        let mut headers = Vec::new();
        for header in &self.headers {
            header.write_to(&mut headers)?;
        }

        let total_len = [
            PRELUDE_LENGTH_BYTES,
            headers.len(),
            self.payload.len(),
            MESSAGE_CRC_LENGTH_BYTES,
        ]
        .iter()
        .try_fold(0usize, |acc, len| acc.checked_add(*len))
        .and_then(|len| u32::try_from(len).ok())
        .ok_or(Error::MessageTooLong)?;

        let start = buffer.len();
        buffer.put_u32(total_len);
        buffer.put_u32(checked(headers.len(), Error::InvalidHeadersLength)?);
        let prelude_crc = crc32(&buffer[start..]);
        buffer.put_u32(prelude_crc);
        buffer.put_slice(&headers);
        buffer.put_slice(&self.payload);
        let message_crc = crc32(&buffer[start..]);
        buffer.put_u32(message_crc);
        Ok(())
    }
}

fn crc32(data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

fn checked<T: TryFrom<usize>>(len: usize, err: Error) -> Result<T, Error> {
    T::try_from(len).map_err(|_| err)
}

/// Incremental frame decoder.
///
/// Body chunks are pushed in with [`feed`](FrameDecoder::feed);
/// [`decode`](FrameDecoder::decode) yields a [`Message`] once a whole
/// frame has been buffered.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    buffer: BytesMut,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn feed(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Whether a partial frame is still buffered.
    pub fn has_pending_data(&self) -> bool {
        !self.buffer.is_empty()
    }

    pub fn decode(&mut self) -> Result<Option<Message>, Error> {
        if self.buffer.len() < size_of::<u32>() {
            return Ok(None);
        }
        let total_len =
            u32::from_be_bytes([self.buffer[0], self.buffer[1], self.buffer[2], self.buffer[3]])
                as usize;
        if total_len < MIN_MESSAGE_LENGTH_BYTES {
            return Err(Error::InvalidMessageLength);
        }
        if self.buffer.len() < total_len {
            return Ok(None);
        }
        let frame = self.buffer.split_to(total_len).freeze();
        Message::read_from(frame).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameDecoder, Header, HeaderValue, Message};
    use crate::Error;
    use bytes::Bytes;

    fn test_message() -> Message {
        Message::new(Bytes::from_static(br#"{"foo":"bar"}"#))
            .add_header(Header::new(":message-type", HeaderValue::String("event".into())))
            .add_header(Header::new(":event-type", HeaderValue::String("Example".into())))
            .add_header(Header::new("bool", HeaderValue::Bool(true)))
            .add_header(Header::new("int", HeaderValue::Int32(36)))
            .add_header(Header::new("ts", HeaderValue::Timestamp(1_590_000_000_000)))
            .add_header(Header::new("blob", HeaderValue::ByteArray(Bytes::from_static(b"\x01\x02"))))
    }

    #[test]
    fn write_then_read() {
        let message = test_message();
        let mut encoded = Vec::new();
        message.write_to(&mut encoded).unwrap();
        let decoded = Message::read_from(Bytes::from(encoded)).unwrap();
        assert_eq!(message, decoded);
        assert_eq!(decoded.header(":event-type").and_then(HeaderValue::as_str), Some("Example"));
    }

    #[test]
    fn decoder_handles_partial_and_multiple_frames() {
        let message = test_message();
        let mut encoded = Vec::new();
        message.write_to(&mut encoded).unwrap();
        message.write_to(&mut encoded).unwrap();

        let mut decoder = FrameDecoder::new();
        let mut decoded = Vec::new();
        for chunk in encoded.chunks(7) {
            decoder.feed(chunk);
            while let Some(frame) = decoder.decode().unwrap() {
                decoded.push(frame);
            }
        }
        assert_eq!(decoded, vec![message.clone(), message]);
        assert!(!decoder.has_pending_data());
    }

    #[test]
    fn prelude_corruption_is_detected() {
        let mut encoded = Vec::new();
        test_message().write_to(&mut encoded).unwrap();
        // flip a bit in the headers length
        encoded[5] ^= 0x01;
        let err = Message::read_from(Bytes::from(encoded)).unwrap_err();
        assert!(matches!(err, Error::PreludeChecksumMismatch(..)));
    }

    #[test]
    fn payload_corruption_is_detected() {
        let mut encoded = Vec::new();
        test_message().write_to(&mut encoded).unwrap();
        let last_payload_byte = encoded.len() - 5;
        encoded[last_payload_byte] ^= 0x01;
        let err = Message::read_from(Bytes::from(encoded)).unwrap_err();
        assert!(matches!(err, Error::MessageChecksumMismatch(..)));
    }

    #[test]
    fn empty_message() {
        let message = Message::new(Bytes::new());
        let mut encoded = Vec::new();
        message.write_to(&mut encoded).unwrap();
        assert_eq!(encoded.len(), 16);
        assert_eq!(Message::read_from(Bytes::from(encoded)).unwrap(), message);
    }

    #[test]
    fn truncated_frame_is_incomplete() {
        let mut encoded = Vec::new();
        test_message().write_to(&mut encoded).unwrap();
        let mut decoder = FrameDecoder::new();
        decoder.feed(&encoded[..encoded.len() - 1]);
        assert!(decoder.decode().unwrap().is_none());
        assert!(decoder.has_pending_data());
    }
}
