//! The normalized (CSL-JSON) side of the translation

mod record;
mod value;
mod variable;

pub use record::CslRecord;
pub use value::{CslValue, DateValue, Name};
pub use variable::{ValueKind, Variable};
