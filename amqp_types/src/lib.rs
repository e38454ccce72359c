pub mod config;
pub mod serde;
pub mod types;

pub use config::*;
