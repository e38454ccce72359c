pub mod evolution;
pub mod vectors;
