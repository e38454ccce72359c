use crate::config::{DecodeOpts, ExcessFields};
use crate::serde::{
    ensure_remaining, opt_decode, opt_encode, opt_encode_size, CodecErr, Descriptor,
    DescriptorValue, FramingErr, ListFraming, ListHeader, Primitive, Rendered,
    SchemaErr, WriteLen,
};
use bytes::{Buf, Bytes, BytesMut};
use std::fmt;
use tracing::{debug, trace};

mod test;

/// One ordinal slot of a described-list schema.
///
/// A schema is an ordered table of these. The generic codec below never
/// looks at a schema's fields directly; every size, write, read and
/// rendering goes through the slot at that ordinal.
pub trait Field<S> {
    fn name(&self) -> &'static str;
    fn is_null(&self, moi: &S) -> bool;
    /// Bytes this slot occupies when it is not trailing. A null costs one byte.
    fn encode_size(&self, moi: &S) -> usize;
    fn encode(&self, moi: &S, w: &mut BytesMut) -> WriteLen;
    fn decode_assign(&self, moi: &mut S, r: &mut dyn Buf) -> Result<(), CodecErr>;
    /// Writes `name:value`. Writes nothing for a null.
    fn render(&self, moi: &S, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// A [`Field`] backed by an `Option<T>` member of the schema struct.
pub struct Slot<S, T> {
    name: &'static str,
    get: fn(&S) -> &Option<T>,
    get_mut: fn(&mut S) -> &mut Option<T>,
}

impl<S, T> Slot<S, T> {
    pub const fn new(
        name: &'static str,
        get: fn(&S) -> &Option<T>,
        get_mut: fn(&mut S) -> &mut Option<T>,
    ) -> Self {
        Self { name, get, get_mut }
    }
}

impl<S, T: Primitive> Field<S> for Slot<S, T> {
    fn name(&self) -> &'static str {
        self.name
    }
    fn is_null(&self, moi: &S) -> bool {
        (self.get)(moi).is_none()
    }
    fn encode_size(&self, moi: &S) -> usize {
        opt_encode_size((self.get)(moi).as_ref())
    }
    fn encode(&self, moi: &S, w: &mut BytesMut) -> WriteLen {
        opt_encode((self.get)(moi).as_ref(), w)
    }
    fn decode_assign(&self, moi: &mut S, r: &mut dyn Buf) -> Result<(), CodecErr> {
        *(self.get_mut)(moi) = opt_decode(r)?;
        Ok(())
    }
    fn render(&self, moi: &S, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.get)(moi) {
            None => Ok(()),
            Some(t) => write!(f, "{}:{}", self.name, Rendered(t)),
        }
    }
}

/// A composite type encoded as a descriptor followed by a list of nullable fields.
///
/// Implementors only declare their schema. [`Default`] must yield the all-null instance.
pub trait DescribedList: Default + Sized + 'static {
    /// Prefix used by the human-readable rendering, e.g. `header(...)`.
    const LABEL: &'static str;
    const DESCRIPTOR: Descriptor;
    /// In ordinal order. Ordinals are part of the wire format: only ever append.
    const FIELDS: &'static [&'static dyn Field<Self>];

    /// Number of slots the schema declares.
    fn field_count() -> usize {
        Self::FIELDS.len()
    }

    /// Number of fields that will be transmitted: trailing nulls are omitted.
    fn encoded_count(&self) -> usize {
        encoded_count(self)
    }

    /// Total bytes [`DescribedList::encode`] will write.
    fn encode_size(&self) -> usize {
        let (count, values_size) = sizes(self);
        Self::DESCRIPTOR.encode_size()
            + ListFraming::choose(count, values_size).header_size()
            + values_size
    }

    fn encode(&self, w: &mut BytesMut) -> WriteLen {
        encode(self, w)
    }

    fn encode_solo(&self) -> Bytes {
        let mut w = BytesMut::with_capacity(self.encode_size());
        self.encode(&mut w);
        w.freeze()
    }

    /// Reads `count` fields whose list framing was already consumed by the caller.
    ///
    /// Slots at ordinals `count` and above are left null.
    /// If `count` exceeds [`DescribedList::field_count`], the excess fields are
    /// left unread in `r`, or rejected, per `opts`.
    fn decode_fields(r: &mut impl Buf, count: usize, opts: &DecodeOpts) -> Result<Self, CodecErr> {
        decode_fields(r, count, opts)
    }

    /// Reads the list framing and the fields, when the descriptor was already consumed.
    fn decode_list(r: &mut impl Buf, opts: &DecodeOpts) -> Result<Self, CodecErr> {
        decode_list(r, opts)
    }

    /// Reads a whole described list, and verifies its descriptor.
    fn decode(r: &mut impl Buf, opts: &DecodeOpts) -> Result<Self, CodecErr> {
        let r: &mut dyn Buf = r;
        let desc = DescriptorValue::decode(r)?;
        if !Self::DESCRIPTOR.matches(&desc) {
            return Err(SchemaErr::DescriptorMismatch {
                expected: Self::DESCRIPTOR.name,
                found: desc,
            }
            .into());
        }
        decode_list(r, opts)
    }

    fn decode_solo(buf: &[u8]) -> Result<Self, CodecErr> {
        let mut r = buf;
        Self::decode(&mut r, &DecodeOpts::default())
    }

    /// Writes `label(name:value,...)`, listing non-null fields only.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", Self::LABEL)?;
        let mut rendered_ct = 0;
        for field in Self::FIELDS {
            if field.is_null(self) {
                continue;
            }
            if rendered_ct > 0 {
                write!(f, ",")?;
            }
            field.render(self, f)?;
            rendered_ct += 1;
        }
        write!(f, ")")
    }
}

fn encoded_count<S: DescribedList>(moi: &S) -> usize {
    S::FIELDS
        .iter()
        .rposition(|field| !field.is_null(moi))
        .map_or(0, |last_non_null| last_non_null + 1)
}

fn sizes<S: DescribedList>(moi: &S) -> (usize, usize) {
    let count = encoded_count(moi);
    let values_size = S::FIELDS[..count]
        .iter()
        .map(|field| field.encode_size(moi))
        .sum();
    (count, values_size)
}

fn encode<S: DescribedList>(moi: &S, w: &mut BytesMut) -> WriteLen {
    let (count, values_size) = sizes(moi);
    let framing = ListFraming::choose(count, values_size);

    let mut w_len = S::DESCRIPTOR.encode(w);
    w_len += framing.encode(count, values_size, w);

    let values_w_len = S::FIELDS[..count]
        .iter()
        .map(|field| field.encode(moi, w))
        .sum::<WriteLen>();
    debug_assert_eq!(
        values_size, *values_w_len,
        "{} fields wrote a different length than was computed",
        S::LABEL
    );
    w_len += values_w_len;

    trace!(
        descriptor = S::DESCRIPTOR.name,
        count,
        w_len = *w_len,
        "Encoded described list"
    );
    w_len
}

fn decode_fields<S: DescribedList>(
    r: &mut dyn Buf,
    count: usize,
    opts: &DecodeOpts,
) -> Result<S, CodecErr> {
    let declared = S::FIELDS.len();
    if count > declared {
        match opts.excess_fields {
            ExcessFields::Reject => {
                return Err(SchemaErr::ExcessFields {
                    schema: S::DESCRIPTOR.name,
                    count,
                    declared,
                }
                .into())
            }
            ExcessFields::Ignore => {
                debug!(
                    descriptor = S::DESCRIPTOR.name,
                    count, declared, "Ignoring fields beyond the schema"
                );
            }
        }
    }

    let mut moi = S::default();
    for field in &S::FIELDS[..count.min(declared)] {
        field.decode_assign(&mut moi, r)?;
    }
    Ok(moi)
}

fn decode_list<S: DescribedList>(r: &mut dyn Buf, opts: &DecodeOpts) -> Result<S, CodecErr> {
    let hdr = ListHeader::decode(r)?;
    ensure_remaining(r, hdr.values_size)?;

    /* Fields may not read past the list's declared size. */
    let mut body = Buf::take(&mut *r, hdr.values_size);
    let moi = decode_fields::<S>(&mut body, hdr.count, opts)?;

    let leftover = body.remaining();
    if leftover > 0 {
        if hdr.count <= S::FIELDS.len() {
            return Err(FramingErr::SizeMismatch {
                declared: hdr.values_size,
                consumed: hdr.values_size - leftover,
            }
            .into());
        }
        body.advance(leftover);
    }

    trace!(
        descriptor = S::DESCRIPTOR.name,
        count = hdr.count,
        size = hdr.values_size,
        "Decoded described list"
    );
    Ok(moi)
}

