use std::fmt;

use serde::Serialize;
use serde_with::SerializeDisplay;

#[derive(Serialize, Debug, PartialEq, Default)]
pub struct AttributeDefinitions {
    #[serde(rename = "ActivationGroups")]
    pub activation_groups: ActivationGroups,
    #[serde(rename = "FeatureGroups")]
    pub feature_groups: FeatureGroups,
    #[serde(rename = "Attributes")]
    pub attributes: Attributes,
}

#[derive(Serialize, Debug, PartialEq, Default)]
pub struct ActivationGroups {
    #[serde(rename = "ActivationGroup")]
    pub children: Vec<ActivationGroup>,
}

#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct ActivationGroup {
    #[serde(rename = "@Name")]
    pub name: String,
}

#[derive(Serialize, Debug, PartialEq, Default)]
pub struct FeatureGroups {
    #[serde(rename = "FeatureGroup")]
    pub children: Vec<FeatureGroup>,
}

#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct FeatureGroup {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@Pretty")]
    pub pretty: String,
    #[serde(rename = "Feature")]
    pub features: Vec<Feature>,
}

#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct Feature {
    #[serde(rename = "@Name")]
    pub name: String,
}

#[derive(Serialize, Debug, PartialEq, Default)]
pub struct Attributes {
    #[serde(rename = "Attribute")]
    pub children: Vec<Attribute>,
}

#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct Attribute {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@Pretty")]
    pub pretty: String,
    #[serde(rename = "@ActivationGroup")]
    pub activation_group: String,
    /// `FeatureGroup.Feature`
    #[serde(rename = "@Feature")]
    pub feature: String,
    #[serde(rename = "@PhysicalUnit")]
    pub physical_unit: String,
    #[serde(rename = "@Color")]
    pub color: ColorCie,
}

/// CIE 1931 xyY color as written by GDTF, e.g. `0.3127,0.3290,100.000000`.
#[derive(Debug, Clone, Copy, PartialEq, SerializeDisplay)]
pub struct ColorCie {
    pub x: f64,
    pub y: f64,
    pub big_y: f64,
}

impl ColorCie {
    /// D65 white point at full brightness, used for every generated slot and
    /// attribute.
    pub const WHITE: ColorCie = ColorCie {
        x: 0.3127,
        y: 0.3290,
        big_y: 100.0,
    };
}

impl Default for ColorCie {
    fn default() -> Self {
        ColorCie::WHITE
    }
}

impl fmt::Display for ColorCie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4},{:.4},{:.6}", self.x, self.y, self.big_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_is_written_like_the_gdtf_builder() {
        assert_eq!(ColorCie::WHITE.to_string(), "0.3127,0.3290,100.000000");
    }

    #[test]
    fn feature_group_serialization() {
        let groups = FeatureGroups {
            children: vec![FeatureGroup {
                name: "Beam".into(),
                pretty: "Beam".into(),
                features: vec![
                    Feature {
                        name: "Beam".into(),
                    },
                    Feature {
                        name: "Zoom".into(),
                    },
                ],
            }],
        };
        assert_eq!(
            quick_xml::se::to_string(&groups).unwrap(),
            concat!(
                r#"<FeatureGroups><FeatureGroup Name="Beam" Pretty="Beam">"#,
                r#"<Feature Name="Beam"/><Feature Name="Zoom"/></FeatureGroup></FeatureGroups>"#
            )
        );
    }
}
