//! Re-exports of the most commonly used items in the crate.

pub use crate::collections::{ArrayError, DynArray};
pub use crate::dynarray;
