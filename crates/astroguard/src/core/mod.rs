pub mod field;
pub mod orbit;
pub mod rng;
