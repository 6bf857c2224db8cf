//! Static knowledge about channel names: the attribute table, quick-fill
//! presets and naming heuristics.

pub mod attributes;
pub mod presets;

pub use attributes::{resolve, resolve_known, ResolvedAttribute};
pub use presets::{accepts_channel_sets, is_continuous, preset_for, quick_fill};
