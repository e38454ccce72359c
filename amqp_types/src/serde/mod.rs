//! # Serialization format
//!
//! Every value starts with a one-byte constructor, called the format code
//! ([`FormatCode`]). The format code determines the width of whatever follows.
//! All multi-byte integers are big-endian.
//!
//! A null value of any type is the single byte `0x40`.
//!
//! A described list is a list preceded by a descriptor that names its schema.
//! The list's members are the schema's fields, in ordinal order.
//!
//! ```text
//! struct DescribedList {
//!     constructor:        u8 = 0x00,
//!     descriptor:         ulong {
//!         format_code:        u8 = 0x44 | 0x53 | 0x80,
//!         code:               [u8; 0 | 1 | 8],
//!     },
//!     list:               List0 | List8 | List32,
//! }
//!
//! struct List0 {
//!     format_code:        u8 = 0x45,
//! }
//!
//! struct List8 {
//!     format_code:        u8 = 0xc0,
//!     size:               u8,     // Counts `count` and all `fields`.
//!     count:              u8,
//!     fields:             [Field; count],
//! }
//!
//! struct List32 {
//!     format_code:        u8 = 0xd0,
//!     size:               u32,    // Counts `count` and all `fields`.
//!     count:              u32,
//!     fields:             [Field; count],
//! }
//!
//! // A null field is written as 0x40, unless every later field is also null.
//! // Trailing nulls are neither written nor counted.
//! ```
//!
//! A decoder may receive fewer fields than its schema declares (the peer is
//! older, or omitted trailing nulls); the missing slots stay null.
//! It may also receive more (the peer is newer); see [`crate::ExcessFields`].

mod described_list;
mod descriptor;
mod err;
mod format_code;
mod lengths;
mod primitive;

pub use described_list::*;
pub use descriptor::*;
pub use err::*;
pub use format_code::*;
pub use lengths::*;
pub use primitive::*;
