mod composite;
mod header;
mod message_id;
mod properties;
mod received;

pub use composite::*;
pub use header::*;
pub use message_id::*;
pub use properties::*;
pub use received::*;
