use std::{fmt, str::FromStr};

use duplicate::duplicate_item;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use uuid::Uuid;

/// GDTF DMXValue in the `value/bytes` notation, e.g. `255/1`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, SerializeDisplay, derive_more::Display,
)]
#[display(fmt = "{}/{}", value, bytes)]
pub struct DmxValue {
    value: u32,
    bytes: u8,
}

impl DmxValue {
    pub const ZERO: DmxValue = DmxValue { value: 0, bytes: 1 };
    pub const FULL: DmxValue = DmxValue {
        value: 255,
        bytes: 1,
    };
}

#[duplicate_item(integer; [u8]; [u16])]
impl From<integer> for DmxValue {
    /// Single byte value for 8 bit types, two byte value for 16 bit types
    fn from(value: integer) -> Self {
        DmxValue {
            value: value.into(),
            bytes: std::mem::size_of::<integer>() as u8,
        }
    }
}

/// Physical value written with six decimal places, e.g. `0.039216`.
#[derive(Debug, Clone, Copy, PartialEq, SerializeDisplay, derive_more::Display, Default)]
#[display(fmt = "{:.6}", _0)]
pub struct PhysicalValue(pub f64);

impl PhysicalValue {
    pub const MIN: PhysicalValue = PhysicalValue(0.0);
    pub const MAX: PhysicalValue = PhysicalValue(1.0);
}

/// DMX address offsets of a channel, as written into the `Offset` attribute.
///
/// Consoles read the textual form, so the layout is fixed: `None` for a virtual
/// channel, `n` for a single byte and `coarse,fine` for a 16 bit channel.
/// Offsets are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeDisplay, DeserializeFromStr)]
pub enum ChannelOffset {
    Virtual,
    Single(u32),
    Pair(u32, u32),
}

impl fmt::Display for ChannelOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelOffset::Virtual => write!(f, "None"),
            ChannelOffset::Single(offset) => write!(f, "{offset}"),
            ChannelOffset::Pair(coarse, fine) => write!(f, "{coarse},{fine}"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum OffsetError {
    #[error("invalid Offset format '{0}'")]
    Invalid(String),
    #[error("DMX address offsets start at 1")]
    Zero,
    #[error("only one and two byte channels are supported, got {0} offsets")]
    UnsupportedByteCount(usize),
}

impl FromStr for ChannelOffset {
    type Err = OffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "None" {
            return Ok(ChannelOffset::Virtual);
        }

        let offsets = s
            .split(',')
            .map(|part| -> Result<u32, OffsetError> {
                let offset: u32 = part.parse().map_err(|_| OffsetError::Invalid(s.into()))?;
                if offset == 0 {
                    Err(OffsetError::Zero)?
                }
                Ok(offset)
            })
            .collect::<Result<Vec<u32>, OffsetError>>()?;

        match offsets[..] {
            [single] => Ok(ChannelOffset::Single(single)),
            [coarse, fine] => Ok(ChannelOffset::Pair(coarse, fine)),
            _ => Err(OffsetError::UnsupportedByteCount(offsets.len())),
        }
    }
}

impl ChannelOffset {
    /// First offset, `None` for virtual channels.
    pub fn start(&self) -> Option<u32> {
        match self {
            ChannelOffset::Virtual => None,
            ChannelOffset::Single(offset) | ChannelOffset::Pair(offset, _) => Some(*offset),
        }
    }
}

/// FixtureTypeID, written as upper case hyphenated GUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, SerializeDisplay)]
pub struct FixtureTypeId(pub Uuid);

impl FixtureTypeId {
    pub fn random() -> Self {
        FixtureTypeId(Uuid::new_v4())
    }
}

impl Default for FixtureTypeId {
    fn default() -> Self {
        FixtureTypeId(Uuid::nil())
    }
}

impl fmt::Display for FixtureTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = Uuid::encode_buffer();
        f.write_str(self.0.hyphenated().encode_upper(&mut buffer))
    }
}
