//! Journal masks, counter formatting, errors, and the numbering model trait.
//!
//! Everything a concrete numbering rule is built from: the mask vocabulary
//! shared by the invoice journals, the counter padding/saturation rule, and
//! the extension-point trait the host calls.

mod counter;
mod error;
mod mask;
mod model;

pub use counter::*;
pub use error::*;
pub use mask::*;
pub use model::*;
