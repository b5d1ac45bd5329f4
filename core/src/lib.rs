pub use cell::*;
pub use error::*;
pub use field::*;
pub use generator::*;
pub use mines::*;
pub use types::*;

mod cell;
mod error;
mod field;
mod generator;
mod mines;
mod types;
