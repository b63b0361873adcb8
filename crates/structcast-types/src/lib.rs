pub mod entry;
pub mod value;

pub use entry::{Entry, GROUP_MARKER};
pub use value::{Field, Record, Scalar, Value};
