use crate::serde::{ensure_remaining, CodecErr, FormatCode, FramingErr, Primitive, WriteLen};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use derive_more::{Deref, Display, From, Into};
use std::fmt;
use std::mem;

/// Variable-width values carry their body length after the format code,
/// in one byte for the short form and four for the long form.
fn len_prefix_size(body_len: usize) -> usize {
    if body_len <= u8::MAX as usize {
        mem::size_of::<u8>()
    } else {
        mem::size_of::<u32>()
    }
}

fn encode_variable(short: FormatCode, long: FormatCode, body: &[u8], w: &mut BytesMut) -> WriteLen {
    let start = w.len();
    if body.len() <= u8::MAX as usize {
        short.encode(w);
        w.put_u8(body.len() as u8);
    } else {
        debug_assert!(u32::try_from(body.len()).is_ok());
        long.encode(w);
        w.put_u32(body.len() as u32);
    }
    w.put_slice(body);
    WriteLen::since(start, w)
}

fn decode_variable(is_short: bool, r: &mut dyn Buf) -> Result<Bytes, CodecErr> {
    let body_len = if is_short {
        ensure_remaining(r, mem::size_of::<u8>())?;
        r.get_u8() as usize
    } else {
        ensure_remaining(r, mem::size_of::<u32>())?;
        r.get_u32() as usize
    };
    ensure_remaining(r, body_len)?;
    Ok(r.copy_to_bytes(body_len))
}

fn decode_utf8(body: Bytes, reading: &'static str) -> Result<String, CodecErr> {
    /* A uniquely owned `Bytes` hands over its allocation without copying. */
    String::from_utf8(Vec::from(body)).map_err(|_| FramingErr::InvalidUtf8(reading).into())
}

impl Primitive for Bytes {
    const TYPE_NAME: &'static str = "binary";

    fn encode_size(&self) -> usize {
        FormatCode::SIZE + len_prefix_size(self.len()) + self.len()
    }
    fn encode(&self, w: &mut BytesMut) -> WriteLen {
        encode_variable(FormatCode::Vbin8, FormatCode::Vbin32, self, w)
    }
    fn decode_body(code: FormatCode, r: &mut dyn Buf) -> Result<Self, CodecErr> {
        match code {
            FormatCode::Vbin8 => decode_variable(true, r),
            FormatCode::Vbin32 => decode_variable(false, r),
            _ => Err(Self::unexpected(code)),
        }
    }
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for b in self.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl Primitive for String {
    const TYPE_NAME: &'static str = "string";

    fn encode_size(&self) -> usize {
        FormatCode::SIZE + len_prefix_size(self.len()) + self.len()
    }
    fn encode(&self, w: &mut BytesMut) -> WriteLen {
        encode_variable(FormatCode::Str8, FormatCode::Str32, self.as_bytes(), w)
    }
    fn decode_body(code: FormatCode, r: &mut dyn Buf) -> Result<Self, CodecErr> {
        let body = match code {
            FormatCode::Str8 => decode_variable(true, r)?,
            FormatCode::Str32 => decode_variable(false, r)?,
            _ => return Err(Self::unexpected(code)),
        };
        decode_utf8(body, Self::TYPE_NAME)
    }
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// A symbolic value from a constrained domain, e.g. a descriptor name or a MIME type.
/// On the wire it is ASCII; this crate accepts any UTF-8.
#[derive(From, Into, Deref, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub struct Symbol(String);

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(String::from(s))
    }
}

impl Primitive for Symbol {
    const TYPE_NAME: &'static str = "symbol";

    fn encode_size(&self) -> usize {
        FormatCode::SIZE + len_prefix_size(self.0.len()) + self.0.len()
    }
    fn encode(&self, w: &mut BytesMut) -> WriteLen {
        encode_variable(FormatCode::Sym8, FormatCode::Sym32, self.0.as_bytes(), w)
    }
    fn decode_body(code: FormatCode, r: &mut dyn Buf) -> Result<Self, CodecErr> {
        let body = match code {
            FormatCode::Sym8 => decode_variable(true, r)?,
            FormatCode::Sym32 => decode_variable(false, r)?,
            _ => return Err(Self::unexpected(code)),
        };
        decode_utf8(body, Self::TYPE_NAME).map(Self)
    }
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
