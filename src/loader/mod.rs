pub mod cell;
pub mod workbook;
pub mod rows;

pub use cell::*;
pub use workbook::*;
pub use rows::*;
