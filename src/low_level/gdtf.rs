use derivative::Derivative;
use serde::Serialize;

use crate::{
    low_level::{
        AttributeDefinitions, DataVersion, DmxModes, FixtureTypeId, Geometries, Wheels,
        YesNoEnum,
    },
    SafeName,
};

#[derive(Serialize, Debug, PartialEq, Default)]
#[serde(rename = "GDTF")]
pub struct LowLevelGdtf {
    #[serde(rename = "@DataVersion")]
    pub data_version: DataVersion,
    #[serde(rename = "FixtureType")]
    pub fixture_type: FixtureType,
}

#[derive(Serialize, Debug, PartialEq, Derivative)]
#[derivative(Default)]
pub struct FixtureType {
    #[serde(rename = "@Name")]
    #[derivative(Default(value = "crate::sanitize(\"\", \"Fixture\")"))]
    pub name: SafeName,
    #[serde(rename = "@ShortName")]
    pub short_name: String,
    #[serde(rename = "@LongName")]
    pub long_name: String,
    #[serde(rename = "@Manufacturer")]
    pub manufacturer: String,
    #[serde(rename = "@Description")]
    pub description: String,
    #[serde(rename = "@FixtureTypeID")]
    pub id: FixtureTypeId,
    /// Always written, consoles expect the attribute even without a thumbnail.
    #[serde(rename = "@Thumbnail")]
    pub thumbnail: String,
    #[serde(rename = "@RefFT")]
    pub ref_ft: String,
    #[serde(rename = "@CanHaveChildren")]
    pub can_have_children: YesNoEnum,
    #[serde(rename = "AttributeDefinitions")]
    pub attribute_definitions: AttributeDefinitions,
    #[serde(rename = "Wheels")]
    pub wheels: Wheels,
    #[serde(rename = "PhysicalDescriptions")]
    pub physical_descriptions: PhysicalDescriptions,
    #[serde(rename = "Models")]
    pub models: Empty,
    #[serde(rename = "Geometries")]
    pub geometries: Geometries,
    #[serde(rename = "DMXModes")]
    pub dmx_modes: DmxModes,
    #[serde(rename = "Revisions")]
    pub revisions: Revisions,
    #[serde(rename = "FTPresets")]
    pub ft_presets: Empty,
    #[serde(rename = "FTRDMInfo")]
    pub ft_rdm_info: Empty,
}

/// Element without attributes or children, e.g. `<Models/>`.
#[derive(Serialize, Debug, PartialEq, Default, Clone)]
pub struct Empty {}

#[derive(Serialize, Debug, PartialEq, Default)]
pub struct PhysicalDescriptions {
    #[serde(rename = "Emitters")]
    pub emitters: Empty,
    #[serde(rename = "Filters")]
    pub filters: Empty,
    #[serde(rename = "DMXProfiles")]
    pub dmx_profiles: Empty,
    #[serde(rename = "CRIs")]
    pub cris: Empty,
}

#[derive(Serialize, Debug, PartialEq, Default)]
pub struct Revisions {
    #[serde(rename = "Revision")]
    pub revisions: Vec<Revision>,
}

#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct Revision {
    #[serde(rename = "@UserID")]
    pub user_id: u32,
    #[serde(rename = "@Date")]
    pub date: String,
    #[serde(rename = "@Text")]
    pub text: String,
    #[serde(rename = "@ModifiedBy")]
    pub modified_by: String,
}

impl Revision {
    /// Fixed revision entry written into every generated fixture type.
    pub fn builder_stub() -> Self {
        Revision {
            user_id: 0,
            date: "2024-01-01T00:00:00".into(),
            text: "Created by GDTF Builder".into(),
            modified_by: "GDTFBuilder".into(),
        }
    }
}
