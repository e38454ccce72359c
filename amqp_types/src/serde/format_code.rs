use crate::serde::{ensure_remaining, CodecErr, FramingErr};
use bytes::{Buf, BufMut, BytesMut};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// The subset of AMQP 1.0 format codes this crate reads and writes.
///
/// Discriminants are the wire values, so they must never be renumbered.
#[repr(u8)]
#[derive(PartialEq, Eq, Hash, Clone, Copy, FromPrimitive, Debug)]
pub enum FormatCode {
    Described = 0x00,

    Null = 0x40,
    BooleanTrue = 0x41,
    BooleanFalse = 0x42,
    Uint0 = 0x43,
    Ulong0 = 0x44,
    List0 = 0x45,

    Ubyte = 0x50,
    SmallUint = 0x52,
    SmallUlong = 0x53,
    Boolean = 0x56,

    Uint = 0x70,

    Ulong = 0x80,
    Timestamp = 0x83,

    Uuid = 0x98,

    Vbin8 = 0xa0,
    Str8 = 0xa1,
    Sym8 = 0xa3,

    Vbin32 = 0xb0,
    Str32 = 0xb1,
    Sym32 = 0xb3,

    List8 = 0xc0,
    List32 = 0xd0,
}

impl FormatCode {
    pub const SIZE: usize = 1;

    pub fn encode(self, w: &mut BytesMut) -> usize {
        w.put_u8(self as u8);
        Self::SIZE
    }

    pub fn decode(r: &mut dyn Buf) -> Result<Self, CodecErr> {
        ensure_remaining(r, Self::SIZE)?;
        let int = r.get_u8();
        FormatCode::from_u8(int).ok_or_else(|| FramingErr::UnknownFormatCode(int).into())
    }

    /// Reads the next format code, and requires it to be `expected`.
    pub fn expect(r: &mut dyn Buf, expected: Self, reading: &'static str) -> Result<(), CodecErr> {
        let code = Self::decode(r)?;
        if code != expected {
            return Err(FramingErr::UnexpectedFormatCode { code, reading }.into());
        }
        Ok(())
    }
}
