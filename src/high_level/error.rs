use crate::SerializationError;

/// Errors that abort building a fixture package.
///
/// Unknown channel names are never an error, they resolve to a custom
/// attribute. Broken wheel references are reported as
/// [`WheelProblem`](crate::WheelProblem)s instead.
#[derive(thiserror::Error, Debug)]
pub enum BuildError {
    #[error("cell count {0} is outside the supported range 1..=100")]
    CellCountOutOfRange(u32),
    #[error("channel set '{label}' starts at DMX {from} which is after its end at DMX {to}")]
    InvertedChannelSet { label: String, from: u8, to: u8 },
    #[error(transparent)]
    Serialization(#[from] SerializationError),
}
