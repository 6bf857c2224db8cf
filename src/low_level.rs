//! Serde model of `description.xml`, one struct per element.
//!
//! Field order is element order, attributes are the `@`-prefixed fields.

mod attribute_definitions;
mod data_version;
mod dmx_modes;
mod gdtf;
mod geometries;
mod values;
mod wheels;
mod yes_no;

pub use attribute_definitions::*;
pub use data_version::*;
pub use dmx_modes::*;
pub use gdtf::*;
pub use geometries::*;
pub use values::*;
pub use wheels::*;
pub use yes_no::*;
