#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

mod dialect;
mod size_variant;
mod title;

pub use dialect::*;
pub use size_variant::*;
pub use title::*;
