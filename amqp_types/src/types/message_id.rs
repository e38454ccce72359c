use crate::serde::{CodecErr, FormatCode, Primitive, Uuid, WriteLen};
use bytes::{Buf, Bytes, BytesMut};
use derive_more::From;
use std::fmt;

/// A message-id or correlation-id. AMQP restricts these to four types.
#[derive(From, PartialEq, Eq, Hash, Clone, Debug)]
pub enum MessageId {
    Ulong(u64),
    Uuid(Uuid),
    Binary(Bytes),
    String(String),
}

impl From<&str> for MessageId {
    fn from(s: &str) -> Self {
        Self::String(String::from(s))
    }
}

impl Primitive for MessageId {
    const TYPE_NAME: &'static str = "message-id";

    fn encode_size(&self) -> usize {
        match self {
            Self::Ulong(id) => id.encode_size(),
            Self::Uuid(id) => id.encode_size(),
            Self::Binary(id) => id.encode_size(),
            Self::String(id) => id.encode_size(),
        }
    }
    fn encode(&self, w: &mut BytesMut) -> WriteLen {
        match self {
            Self::Ulong(id) => id.encode(w),
            Self::Uuid(id) => id.encode(w),
            Self::Binary(id) => id.encode(w),
            Self::String(id) => id.encode(w),
        }
    }
    fn decode_body(code: FormatCode, r: &mut dyn Buf) -> Result<Self, CodecErr> {
        match code {
            FormatCode::Ulong0 | FormatCode::SmallUlong | FormatCode::Ulong => {
                u64::decode_body(code, r).map(Self::Ulong)
            }
            FormatCode::Uuid => Uuid::decode_body(code, r).map(Self::Uuid),
            FormatCode::Vbin8 | FormatCode::Vbin32 => Bytes::decode_body(code, r).map(Self::Binary),
            FormatCode::Str8 | FormatCode::Str32 => String::decode_body(code, r).map(Self::String),
            _ => Err(Self::unexpected(code)),
        }
    }
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ulong(id) => id.render(f),
            Self::Uuid(id) => id.render(f),
            Self::Binary(id) => id.render(f),
            Self::String(id) => id.render(f),
        }
    }
}
