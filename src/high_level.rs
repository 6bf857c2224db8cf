mod definition;
mod error;
mod name;

pub use definition::*;
pub use error::*;
pub use name::*;
