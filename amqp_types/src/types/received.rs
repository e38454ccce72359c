use crate::serde::{DescribedList, Descriptor, Field, Slot};
use std::fmt;

/// Delivery state: how much of a message the receiver already holds.
#[derive(PartialEq, Eq, Hash, Clone, Default, Debug)]
pub struct Received {
    pub section_number: Option<u32>,
    pub section_offset: Option<u64>,
}

impl Received {
    pub const NAME: &'static str = "amqp:received:list";
    pub const CODE: u64 = 0x0000_0000_0000_0023;
    pub const FIELD_COUNT: usize = <Self as DescribedList>::FIELDS.len();
}

impl DescribedList for Received {
    const LABEL: &'static str = "received";
    const DESCRIPTOR: Descriptor = Descriptor::new(Self::NAME, Self::CODE);
    const FIELDS: &'static [&'static dyn Field<Self>] = &[
        &Slot::<Self, u32>::new(
            "section-number",
            |r| &r.section_number,
            |r| &mut r.section_number,
        ),
        &Slot::<Self, u64>::new(
            "section-offset",
            |r| &r.section_offset,
            |r| &mut r.section_offset,
        ),
    ];
}

impl fmt::Display for Received {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}
