#![warn(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

// these are not re-exported as they are somewhat niche.
// If the user needs them, they have to be qualified
pub mod library;
pub mod low_level;

// these modules are re-exported as they form the main part of the API
mod build;
mod generate;
mod high_level;
mod serialize;
mod validate;

pub use build::*;
pub use generate::*;
pub use high_level::*;
pub use library::{resolve, resolve_known, ResolvedAttribute};
pub use serialize::*;
pub use validate::*;
