use crate::serde::{DescriptorValue, FormatCode};
use bytes::Buf;
use derive_more::{Display, From};
use std::error::Error;

/// The bytes are not a well-formed encoding.
#[derive(Debug, Display)]
pub enum FramingErr {
    #[display(fmt = "Truncated: {} bytes needed, {} remaining", needed, remaining)]
    Truncated { needed: usize, remaining: usize },

    #[display(fmt = "Unknown format code 0x{:02x}", _0)]
    UnknownFormatCode(u8),

    #[display(fmt = "Format code {:?} while reading {}", code, reading)]
    UnexpectedFormatCode {
        code: FormatCode,
        reading: &'static str,
    },

    #[display(fmt = "List size {} but fields occupy {} bytes", declared, consumed)]
    SizeMismatch { declared: usize, consumed: usize },

    #[display(fmt = "Invalid UTF-8 while reading {}", _0)]
    InvalidUtf8(&'static str),
}

/// The bytes are well-formed, but do not fit the schema being decoded.
#[derive(Debug, Display)]
pub enum SchemaErr {
    #[display(fmt = "{} fields transmitted, but {} declares {}", count, schema, declared)]
    ExcessFields {
        schema: &'static str,
        count: usize,
        declared: usize,
    },

    #[display(fmt = "Descriptor {} while reading {}", found, expected)]
    DescriptorMismatch {
        expected: &'static str,
        found: DescriptorValue,
    },

    #[display(fmt = "Unknown descriptor {}", _0)]
    UnknownDescriptor(DescriptorValue),
}

/// Either class is fatal to the message being decoded. Nothing partially decoded is returned.
#[derive(Debug, Display, From)]
pub enum CodecErr {
    Framing(FramingErr),
    Schema(SchemaErr),
}

impl CodecErr {
    pub fn is_framing(&self) -> bool {
        matches!(self, Self::Framing(_))
    }
    pub fn is_schema(&self) -> bool {
        matches!(self, Self::Schema(_))
    }
}

impl Error for FramingErr {}
impl Error for SchemaErr {}
impl Error for CodecErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Framing(e) => Some(e),
            Self::Schema(e) => Some(e),
        }
    }
}

pub fn ensure_remaining(r: &dyn Buf, needed: usize) -> Result<(), CodecErr> {
    let remaining = r.remaining();
    if remaining < needed {
        return Err(FramingErr::Truncated { needed, remaining }.into());
    }
    Ok(())
}
