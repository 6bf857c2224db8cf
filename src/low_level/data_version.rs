use serde_with::{DeserializeFromStr, SerializeDisplay};

/// Represents the GDTF DataVersion
///
/// strum derives FromStr and Display, serde_with derives Serialize/Deserialize
/// based on that.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    strum::EnumString,
    strum::Display,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub enum DataVersion {
    #[strum(to_string = "1.0")]
    V1_0,
    /// Version targeted by the builder, MA3 and Vectorworks import it without
    /// complaints.
    #[strum(to_string = "1.1")]
    #[default]
    V1_1,
    #[strum(to_string = "1.2")]
    V1_2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_through_text() {
        assert_eq!(DataVersion::default().to_string(), "1.1");
        assert_eq!("1.2".parse::<DataVersion>(), Ok(DataVersion::V1_2));
        assert!("1.3".parse::<DataVersion>().is_err());
    }
}
