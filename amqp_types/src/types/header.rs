use crate::serde::{DescribedList, Descriptor, Field, Slot};
use std::fmt;


/// The header section of a message: transport-level delivery details.
#[derive(PartialEq, Eq, Hash, Clone, Default, Debug)]
pub struct Header {
    pub durable: Option<bool>,
    pub priority: Option<u8>,
    /// Milliseconds.
    pub ttl: Option<u32>,
    pub first_acquirer: Option<bool>,
    pub delivery_count: Option<u32>,
}

impl Header {
    pub const NAME: &'static str = "amqp:header:list";
    pub const CODE: u64 = 0x0000_0000_0000_0070;
    pub const FIELD_COUNT: usize = <Self as DescribedList>::FIELDS.len();
}

impl DescribedList for Header {
    const LABEL: &'static str = "header";
    const DESCRIPTOR: Descriptor = Descriptor::new(Self::NAME, Self::CODE);
    const FIELDS: &'static [&'static dyn Field<Self>] = &[
        &Slot::<Self, bool>::new("durable", |h| &h.durable, |h| &mut h.durable),
        &Slot::<Self, u8>::new("priority", |h| &h.priority, |h| &mut h.priority),
        &Slot::<Self, u32>::new("ttl", |h| &h.ttl, |h| &mut h.ttl),
        &Slot::<Self, bool>::new(
            "first-acquirer",
            |h| &h.first_acquirer,
            |h| &mut h.first_acquirer,
        ),
        &Slot::<Self, u32>::new(
            "delivery-count",
            |h| &h.delivery_count,
            |h| &mut h.delivery_count,
        ),
    ];
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}
