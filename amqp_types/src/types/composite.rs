use crate::config::DecodeOpts;
use crate::serde::{CodecErr, DescribedList, DescriptorValue, SchemaErr, WriteLen};
use crate::types::{Header, Properties, Received};
use bytes::{Buf, BytesMut};
use derive_more::{Display, From};
use tracing::debug;

/// Any described list this crate has a schema for, as selected by its descriptor.
#[derive(From, Display, PartialEq, Eq, Hash, Clone, Debug)]
pub enum Composite {
    Header(Header),
    Properties(Properties),
    Received(Received),
}

impl Composite {
    pub fn encode_size(&self) -> usize {
        match self {
            Self::Header(moi) => moi.encode_size(),
            Self::Properties(moi) => moi.encode_size(),
            Self::Received(moi) => moi.encode_size(),
        }
    }

    pub fn encode(&self, w: &mut BytesMut) -> WriteLen {
        match self {
            Self::Header(moi) => moi.encode(w),
            Self::Properties(moi) => moi.encode(w),
            Self::Received(moi) => moi.encode(w),
        }
    }

    /// Reads a descriptor, then the list under whichever schema it names.
    pub fn decode(r: &mut impl Buf, opts: &DecodeOpts) -> Result<Self, CodecErr> {
        let desc = DescriptorValue::decode(r)?;
        if Header::DESCRIPTOR.matches(&desc) {
            Header::decode_list(r, opts).map(Self::Header)
        } else if Properties::DESCRIPTOR.matches(&desc) {
            Properties::decode_list(r, opts).map(Self::Properties)
        } else if Received::DESCRIPTOR.matches(&desc) {
            Received::decode_list(r, opts).map(Self::Received)
        } else {
            debug!(%desc, "No schema for descriptor");
            Err(SchemaErr::UnknownDescriptor(desc).into())
        }
    }

    pub fn decode_solo(buf: &[u8]) -> Result<Self, CodecErr> {
        let mut r = buf;
        Self::decode(&mut r, &DecodeOpts::default())
    }
}
