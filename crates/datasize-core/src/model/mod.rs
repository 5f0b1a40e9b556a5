//! Data model: the `ByteSize` value type and the unit table it is measured in.
//!
//! Re-exports the value type, the unit enum, and the static unit list.

pub mod size;
pub mod text;
pub mod unit;

pub use size::ByteSize;
pub use unit::{Unit, UNITS};
