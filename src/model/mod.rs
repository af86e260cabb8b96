pub mod row;
pub mod node;
pub mod schema;
pub mod hierarchy;

pub use row::*;
pub use node::*;
pub use schema::*;
pub use hierarchy::*;
