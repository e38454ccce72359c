use crate::serde::{DescribedList, Descriptor, Field, Slot, Symbol, Timestamp};
use crate::types::MessageId;
use bytes::Bytes;
use std::fmt;


/// The properties section of a message: immutable, application-visible details.
#[derive(PartialEq, Eq, Hash, Clone, Default, Debug)]
pub struct Properties {
    pub message_id: Option<MessageId>,
    pub user_id: Option<Bytes>,
    pub to: Option<String>,
    pub subject: Option<String>,
    pub reply_to: Option<String>,
    pub correlation_id: Option<MessageId>,
    pub content_type: Option<Symbol>,
    pub content_encoding: Option<Symbol>,
    pub absolute_expiry_time: Option<Timestamp>,
    pub creation_time: Option<Timestamp>,
    pub group_id: Option<String>,
    pub group_sequence: Option<u32>,
    pub reply_to_group_id: Option<String>,
}

impl Properties {
    pub const NAME: &'static str = "amqp:properties:list";
    pub const CODE: u64 = 0x0000_0000_0000_0073;
    pub const FIELD_COUNT: usize = <Self as DescribedList>::FIELDS.len();
}

impl DescribedList for Properties {
    const LABEL: &'static str = "properties";
    const DESCRIPTOR: Descriptor = Descriptor::new(Self::NAME, Self::CODE);
    const FIELDS: &'static [&'static dyn Field<Self>] = &[
        &Slot::<Self, MessageId>::new("message-id", |p| &p.message_id, |p| &mut p.message_id),
        &Slot::<Self, Bytes>::new("user-id", |p| &p.user_id, |p| &mut p.user_id),
        &Slot::<Self, String>::new("to", |p| &p.to, |p| &mut p.to),
        &Slot::<Self, String>::new("subject", |p| &p.subject, |p| &mut p.subject),
        &Slot::<Self, String>::new("reply-to", |p| &p.reply_to, |p| &mut p.reply_to),
        &Slot::<Self, MessageId>::new(
            "correlation-id",
            |p| &p.correlation_id,
            |p| &mut p.correlation_id,
        ),
        &Slot::<Self, Symbol>::new(
            "content-type",
            |p| &p.content_type,
            |p| &mut p.content_type,
        ),
        &Slot::<Self, Symbol>::new(
            "content-encoding",
            |p| &p.content_encoding,
            |p| &mut p.content_encoding,
        ),
        &Slot::<Self, Timestamp>::new(
            "absolute-expiry-time",
            |p| &p.absolute_expiry_time,
            |p| &mut p.absolute_expiry_time,
        ),
        &Slot::<Self, Timestamp>::new(
            "creation-time",
            |p| &p.creation_time,
            |p| &mut p.creation_time,
        ),
        &Slot::<Self, String>::new("group-id", |p| &p.group_id, |p| &mut p.group_id),
        &Slot::<Self, u32>::new(
            "group-sequence",
            |p| &p.group_sequence,
            |p| &mut p.group_sequence,
        ),
        &Slot::<Self, String>::new(
            "reply-to-group-id",
            |p| &p.reply_to_group_id,
            |p| &mut p.reply_to_group_id,
        ),
    ];
}

impl fmt::Display for Properties {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}
