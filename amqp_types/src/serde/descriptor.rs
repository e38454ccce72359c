use crate::serde::{CodecErr, FormatCode, FramingErr, Primitive, Symbol, WriteLen};
use bytes::{Buf, BytesMut};
use derive_more::Display;
use tracing::debug;

/// Identifies a composite type. Each schema owns exactly one.
///
/// Encoders always write the numeric `code`. Decoders accept either form.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct Descriptor {
    pub name: &'static str,
    pub code: u64,
}

impl Descriptor {
    pub const fn new(name: &'static str, code: u64) -> Self {
        Self { name, code }
    }

    /// Bytes taken by the described-type constructor plus the descriptor.
    pub fn encode_size(&self) -> usize {
        FormatCode::SIZE + self.code.encode_size()
    }

    pub fn encode(&self, w: &mut BytesMut) -> WriteLen {
        let mut w_len = WriteLen::from(FormatCode::Described.encode(w));
        w_len += self.code.encode(w);
        w_len
    }

    pub fn matches(&self, val: &DescriptorValue) -> bool {
        match val {
            DescriptorValue::Code(code) => *code == self.code,
            DescriptorValue::Name(name) => name.as_str() == self.name,
        }
    }
}

/// A descriptor as read off the wire.
#[derive(PartialEq, Eq, Hash, Clone, Debug, Display)]
pub enum DescriptorValue {
    #[display(fmt = "0x{:016x}", _0)]
    Code(u64),
    #[display(fmt = "\"{}\"", _0)]
    Name(Symbol),
}

impl DescriptorValue {
    /// Reads the described-type constructor, then the descriptor that follows it.
    pub fn decode(r: &mut dyn Buf) -> Result<Self, CodecErr> {
        FormatCode::expect(r, FormatCode::Described, "described type")?;

        let code = FormatCode::decode(r)?;
        match code {
            FormatCode::Ulong0 | FormatCode::SmallUlong | FormatCode::Ulong => {
                let code = u64::decode_body(code, r)?;
                Ok(Self::Code(code))
            }
            FormatCode::Sym8 | FormatCode::Sym32 => {
                let name = Symbol::decode_body(code, r)?;
                debug!(descriptor = name.as_str(), "Symbolic descriptor");
                Ok(Self::Name(name))
            }
            _ => Err(FramingErr::UnexpectedFormatCode {
                code,
                reading: "descriptor",
            }
            .into()),
        }
    }
}
