pub mod data;
pub mod templates;
pub mod generator;

pub use data::*;
pub use generator::*;
