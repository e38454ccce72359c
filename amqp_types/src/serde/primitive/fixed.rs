use crate::serde::{ensure_remaining, CodecErr, FormatCode, Primitive, WriteLen};
use bytes::{Buf, BufMut, BytesMut};
use derive_more::{Deref, From, Into};
use std::fmt;
use std::mem;

pub(crate) fn take_array<const LEN: usize>(r: &mut dyn Buf) -> Result<[u8; LEN], CodecErr> {
    ensure_remaining(r, LEN)?;
    let mut buf = [0u8; LEN];
    r.copy_to_slice(&mut buf);
    Ok(buf)
}

impl Primitive for bool {
    const TYPE_NAME: &'static str = "boolean";

    fn encode_size(&self) -> usize {
        FormatCode::SIZE
    }
    fn encode(&self, w: &mut BytesMut) -> WriteLen {
        let code = if *self {
            FormatCode::BooleanTrue
        } else {
            FormatCode::BooleanFalse
        };
        WriteLen::from(code.encode(w))
    }
    fn decode_body(code: FormatCode, r: &mut dyn Buf) -> Result<Self, CodecErr> {
        match code {
            FormatCode::BooleanTrue => Ok(true),
            FormatCode::BooleanFalse => Ok(false),
            FormatCode::Boolean => {
                let [b] = take_array::<1>(r)?;
                Ok(b != 0)
            }
            _ => Err(Self::unexpected(code)),
        }
    }
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Primitive for u8 {
    const TYPE_NAME: &'static str = "ubyte";

    fn encode_size(&self) -> usize {
        FormatCode::SIZE + mem::size_of::<u8>()
    }
    fn encode(&self, w: &mut BytesMut) -> WriteLen {
        let start = w.len();
        FormatCode::Ubyte.encode(w);
        w.put_u8(*self);
        WriteLen::since(start, w)
    }
    fn decode_body(code: FormatCode, r: &mut dyn Buf) -> Result<Self, CodecErr> {
        match code {
            FormatCode::Ubyte => Ok(u8::from_be_bytes(take_array(r)?)),
            _ => Err(Self::unexpected(code)),
        }
    }
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// The three encodings of an unsigned integer: zero, one byte, or full width.
///
/// Size and write both go through [`UnsignedForm::choose`].
struct UnsignedForm {
    zero: FormatCode,
    small: FormatCode,
    full: FormatCode,
    full_width: usize,
}

impl UnsignedForm {
    const UINT: Self = Self {
        zero: FormatCode::Uint0,
        small: FormatCode::SmallUint,
        full: FormatCode::Uint,
        full_width: mem::size_of::<u32>(),
    };
    const ULONG: Self = Self {
        zero: FormatCode::Ulong0,
        small: FormatCode::SmallUlong,
        full: FormatCode::Ulong,
        full_width: mem::size_of::<u64>(),
    };

    /// The narrowest format code for `val`, and the width of the body following it.
    fn choose(&self, val: u64) -> (FormatCode, usize) {
        match val {
            0 => (self.zero, 0),
            1..=0xff => (self.small, mem::size_of::<u8>()),
            _ => (self.full, self.full_width),
        }
    }

    fn encode(&self, val: u64, w: &mut BytesMut) -> WriteLen {
        let start = w.len();
        let (code, width) = self.choose(val);
        code.encode(w);
        w.put_uint(val, width);
        WriteLen::since(start, w)
    }
}

impl Primitive for u32 {
    const TYPE_NAME: &'static str = "uint";

    fn encode_size(&self) -> usize {
        let (_, width) = UnsignedForm::UINT.choose(*self as u64);
        FormatCode::SIZE + width
    }
    fn encode(&self, w: &mut BytesMut) -> WriteLen {
        UnsignedForm::UINT.encode(*self as u64, w)
    }
    fn decode_body(code: FormatCode, r: &mut dyn Buf) -> Result<Self, CodecErr> {
        match code {
            FormatCode::Uint0 => Ok(0),
            FormatCode::SmallUint => Ok(u8::from_be_bytes(take_array(r)?) as u32),
            FormatCode::Uint => Ok(u32::from_be_bytes(take_array(r)?)),
            _ => Err(Self::unexpected(code)),
        }
    }
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Primitive for u64 {
    const TYPE_NAME: &'static str = "ulong";

    fn encode_size(&self) -> usize {
        let (_, width) = UnsignedForm::ULONG.choose(*self);
        FormatCode::SIZE + width
    }
    fn encode(&self, w: &mut BytesMut) -> WriteLen {
        UnsignedForm::ULONG.encode(*self, w)
    }
    fn decode_body(code: FormatCode, r: &mut dyn Buf) -> Result<Self, CodecErr> {
        match code {
            FormatCode::Ulong0 => Ok(0),
            FormatCode::SmallUlong => Ok(u8::from_be_bytes(take_array(r)?) as u64),
            FormatCode::Ulong => Ok(u64::from_be_bytes(take_array(r)?)),
            _ => Err(Self::unexpected(code)),
        }
    }
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Milliseconds since the Unix epoch.
#[derive(From, Into, Deref, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct Timestamp(i64);

impl Primitive for Timestamp {
    const TYPE_NAME: &'static str = "timestamp";

    fn encode_size(&self) -> usize {
        FormatCode::SIZE + mem::size_of::<i64>()
    }
    fn encode(&self, w: &mut BytesMut) -> WriteLen {
        let start = w.len();
        FormatCode::Timestamp.encode(w);
        w.put_i64(self.0);
        WriteLen::since(start, w)
    }
    fn decode_body(code: FormatCode, r: &mut dyn Buf) -> Result<Self, CodecErr> {
        match code {
            FormatCode::Timestamp => Ok(Self(i64::from_be_bytes(take_array(r)?))),
            _ => Err(Self::unexpected(code)),
        }
    }
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An RFC 4122 UUID, in network byte order.
#[derive(From, Into, Deref, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct Uuid([u8; 16]);

impl Primitive for Uuid {
    const TYPE_NAME: &'static str = "uuid";

    fn encode_size(&self) -> usize {
        FormatCode::SIZE + self.0.len()
    }
    fn encode(&self, w: &mut BytesMut) -> WriteLen {
        let start = w.len();
        FormatCode::Uuid.encode(w);
        w.put_slice(&self.0);
        WriteLen::since(start, w)
    }
    fn decode_body(code: FormatCode, r: &mut dyn Buf) -> Result<Self, CodecErr> {
        match code {
            FormatCode::Uuid => Ok(Self(take_array(r)?)),
            _ => Err(Self::unexpected(code)),
        }
    }
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if matches!(i, 4 | 6 | 8 | 10) {
                write!(f, "-")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}
