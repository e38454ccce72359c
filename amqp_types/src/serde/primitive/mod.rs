use crate::serde::{CodecErr, FormatCode, FramingErr, WriteLen};
use bytes::{Buf, BytesMut};
use std::fmt;

mod fixed;
mod variable;

pub use fixed::*;
pub use variable::*;

/// The encoded size of a null value: its format code alone.
pub const NULL_SIZE: usize = FormatCode::SIZE;

/// A scalar that can occupy one field of a described list.
pub trait Primitive: Sized {
    /// Names the AMQP type, for error messages.
    const TYPE_NAME: &'static str;

    /// Bytes [`Primitive::encode`] will write, format code included.
    fn encode_size(&self) -> usize;

    fn encode(&self, w: &mut BytesMut) -> WriteLen;

    /// Reads the body that follows an already consumed format code.
    fn decode_body(code: FormatCode, r: &mut dyn Buf) -> Result<Self, CodecErr>;

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    fn unexpected(code: FormatCode) -> CodecErr {
        FramingErr::UnexpectedFormatCode {
            code,
            reading: Self::TYPE_NAME,
        }
        .into()
    }
}

pub fn opt_encode_size<T: Primitive>(val: Option<&T>) -> usize {
    match val {
        None => NULL_SIZE,
        Some(t) => t.encode_size(),
    }
}

/// Encodes the value, or the null marker in its place.
pub fn opt_encode<T: Primitive>(val: Option<&T>, w: &mut BytesMut) -> WriteLen {
    match val {
        None => WriteLen::from(FormatCode::Null.encode(w)),
        Some(t) => t.encode(w),
    }
}

pub fn opt_decode<T: Primitive>(r: &mut dyn Buf) -> Result<Option<T>, CodecErr> {
    match FormatCode::decode(r)? {
        FormatCode::Null => Ok(None),
        code => T::decode_body(code, r).map(Some),
    }
}

/// Adapts [`Primitive::render`] to [`fmt::Display`].
pub struct Rendered<'a, T>(pub &'a T);

impl<'a, T: Primitive> fmt::Display for Rendered<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}
