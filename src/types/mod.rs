//! Data types for the grid engine.

mod column;
mod row;
mod sort;

pub use column::*;
pub use row::*;
pub use sort::*;
