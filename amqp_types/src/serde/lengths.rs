use crate::serde::{ensure_remaining, CodecErr, FormatCode, FramingErr};
use bytes::{Buf, BufMut, BytesMut};
use derive_more::{Add, AddAssign, Deref, From, Sum};
use std::mem;

/// Count of bytes written by an encode call.
#[derive(From, Deref, Add, AddAssign, Sum, PartialEq, Eq, Clone, Copy, Default, Debug)]
pub struct WriteLen(usize);

impl WriteLen {
    /// Bytes appended to `w` since it was `start` bytes long.
    pub fn since(start: usize, w: &BytesMut) -> Self {
        Self(w.len() - start)
    }
}

/// The three list representations. The encoder always picks the narrowest that fits.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ListFraming {
    Empty,
    Compact,
    Wide,
}

impl ListFraming {
    pub fn choose(count: usize, values_size: usize) -> Self {
        if count == 0 {
            Self::Empty
        } else if count <= u8::MAX as usize && values_size + mem::size_of::<u8>() <= u8::MAX as usize
        {
            Self::Compact
        } else {
            Self::Wide
        }
    }

    pub fn format_code(self) -> FormatCode {
        match self {
            Self::Empty => FormatCode::List0,
            Self::Compact => FormatCode::List8,
            Self::Wide => FormatCode::List32,
        }
    }

    /// Width of each of the `size` and `count` fields.
    pub fn width(self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Compact => mem::size_of::<u8>(),
            Self::Wide => mem::size_of::<u32>(),
        }
    }

    /// Bytes preceding the first field: the format code, `size`, and `count`.
    pub fn header_size(self) -> usize {
        FormatCode::SIZE + 2 * self.width()
    }

    pub fn encode(self, count: usize, values_size: usize, w: &mut BytesMut) -> WriteLen {
        let start = w.len();
        self.format_code().encode(w);

        /* `size` covers `count` as well as the fields. */
        let size = values_size + self.width();
        match self {
            Self::Empty => {}
            Self::Compact => {
                w.put_u8(size as u8);
                w.put_u8(count as u8);
            }
            Self::Wide => {
                debug_assert!(u32::try_from(size).is_ok());
                w.put_u32(size as u32);
                w.put_u32(count as u32);
            }
        }
        WriteLen::since(start, w)
    }
}

/// A list's framing as read off the wire.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ListHeader {
    pub framing: ListFraming,
    pub count: usize,
    /// Bytes occupied by the fields, i.e. `size` less the width of `count`.
    pub values_size: usize,
}

impl ListHeader {
    pub fn decode(r: &mut dyn Buf) -> Result<Self, CodecErr> {
        let code = FormatCode::decode(r)?;
        let framing = match code {
            FormatCode::List0 => ListFraming::Empty,
            FormatCode::List8 => ListFraming::Compact,
            FormatCode::List32 => ListFraming::Wide,
            _ => {
                return Err(FramingErr::UnexpectedFormatCode {
                    code,
                    reading: "list",
                }
                .into())
            }
        };

        let width = framing.width();
        ensure_remaining(r, 2 * width)?;
        let (size, count) = match framing {
            ListFraming::Empty => (0, 0),
            ListFraming::Compact => (r.get_u8() as usize, r.get_u8() as usize),
            ListFraming::Wide => (r.get_u32() as usize, r.get_u32() as usize),
        };

        if size < width {
            return Err(FramingErr::SizeMismatch {
                declared: size,
                consumed: width,
            }
            .into());
        }

        Ok(Self {
            framing,
            count,
            values_size: size - width,
        })
    }
}
