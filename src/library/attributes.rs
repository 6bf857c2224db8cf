//! Mapping of free-text channel names onto the GDTF attribute vocabulary.

use crate::sanitize;

/// Attribute of a channel together with the feature group, feature and
/// activation group it is declared under in `AttributeDefinitions`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedAttribute {
    pub attribute: String,
    pub feature_group: String,
    pub feature: String,
    pub activation_group: String,
}

impl ResolvedAttribute {
    fn from_row(row: &AttributeRow) -> Self {
        ResolvedAttribute {
            attribute: row.attribute.to_owned(),
            feature_group: row.feature_group.to_owned(),
            feature: row.feature.to_owned(),
            activation_group: row.activation_group.to_owned(),
        }
    }

    /// Value of the `Feature` attribute on an `Attribute` node.
    pub fn feature_path(&self) -> String {
        format!("{}.{}", self.feature_group, self.feature)
    }

    pub fn is_wheel_attribute(&self) -> bool {
        is_wheel_attribute(&self.attribute)
    }
}

#[derive(Debug)]
pub struct AttributeRow {
    /// Lower case channel name, also matched as substring.
    pub key: &'static str,
    pub attribute: &'static str,
    pub feature_group: &'static str,
    pub feature: &'static str,
    pub activation_group: &'static str,
}

const fn row(
    key: &'static str,
    attribute: &'static str,
    feature_group: &'static str,
    feature: &'static str,
    activation_group: &'static str,
) -> AttributeRow {
    AttributeRow {
        key,
        attribute,
        feature_group,
        feature,
        activation_group,
    }
}

/// Known channel names. Order matters: the first row whose key is contained in
/// a channel name wins.
pub const ATTRIBUTE_TABLE: &[AttributeRow] = &[
    row("dimmer", "Dimmer", "Dimming", "Intensity", "Dimmer"),
    row("intensity", "Dimmer", "Dimming", "Intensity", "Dimmer"),
    row("master", "Dimmer", "Dimming", "Intensity", "Dimmer"),
    row("pan", "Pan", "Position", "Position", "PanTilt"),
    row("tilt", "Tilt", "Position", "Position", "PanTilt"),
    row("pan speed", "PanRotate", "Position", "Position", "PanTilt"),
    row("tilt speed", "TiltRotate", "Position", "Position", "PanTilt"),
    row("red", "ColorAdd_R", "Color", "Color", "RGB"),
    row("green", "ColorAdd_G", "Color", "Color", "RGB"),
    row("blue", "ColorAdd_B", "Color", "Color", "RGB"),
    row("white", "ColorAdd_W", "Color", "Color", "RGBW"),
    row("amber", "ColorAdd_A", "Color", "Color", "RGBW"),
    row("lime", "ColorAdd_L", "Color", "Color", "RGBW"),
    row("uv", "ColorAdd_UV", "Color", "Color", "RGBW"),
    row("indigo", "ColorAdd_I", "Color", "Color", "RGBW"),
    row("cyan", "ColorSub_C", "Color", "Color", "CMY"),
    row("magenta", "ColorSub_M", "Color", "Color", "CMY"),
    row("yellow", "ColorSub_Y", "Color", "Color", "CMY"),
    row("cto", "CTO", "Color", "Color", "CTO"),
    row("ctb", "CTB", "Color", "Color", "CTB"),
    row("hue", "CIE_X", "Color", "Color", "HSB"),
    row("saturation", "CIE_Y", "Color", "Color", "HSB"),
    row("color wheel", "Color1", "Color", "Color", "ColorWheel"),
    row("colour wheel", "Color1", "Color", "Color", "ColorWheel"),
    row("color", "Color1", "Color", "Color", "ColorWheel"),
    row("colour", "Color1", "Color", "Color", "ColorWheel"),
    row("color mix", "ColorMixMode", "Color", "Color", "ColorWheel"),
    row("shutter", "Shutter1", "Beam", "Beam", "Shutter"),
    row("strobe", "Shutter1Strobe", "Beam", "Beam", "Shutter"),
    row("strobe rate", "Shutter1StrobeFreq", "Beam", "Beam", "Shutter"),
    row("strobe speed", "Shutter1StrobeFreq", "Beam", "Beam", "Shutter"),
    row("zoom", "Zoom", "Beam", "Beam", "Zoom"),
    row("focus", "Focus1", "Beam", "Beam", "Focus"),
    row("iris", "Iris", "Beam", "Beam", "Iris"),
    row("frost", "Frost1", "Beam", "Beam", "Frost"),
    row("diffusion", "Frost1", "Beam", "Beam", "Frost"),
    row("gobo", "Gobo1", "Gobo", "Gobo", "Gobo"),
    row("gobo wheel", "Gobo1", "Gobo", "Gobo", "Gobo"),
    row("gobo 1", "Gobo1", "Gobo", "Gobo", "Gobo"),
    row("gobo 2", "Gobo2", "Gobo", "Gobo", "Gobo"),
    row("gobo rotation", "Gobo1Pos", "Gobo", "Gobo", "Gobo"),
    row("gobo spin", "Gobo1PosRotate", "Gobo", "Gobo", "Gobo"),
    row("gobo index", "Gobo1Pos", "Gobo", "Gobo", "Gobo"),
    row("prism", "Prism1", "Beam", "Beam", "Prism"),
    row("prism rotation", "Prism1Pos", "Beam", "Beam", "Prism"),
    row("effects", "Effects1", "Beam", "Beam", "Effects"),
    row("effect", "Effects1", "Beam", "Beam", "Effects"),
    row("animation", "Effects1", "Beam", "Beam", "Effects"),
    row("effects speed", "EffectsSpeed", "Beam", "Beam", "Effects"),
    row("effects fade", "EffectsFade", "Beam", "Beam", "Effects"),
    row("blade 1", "Blade1A", "Shapers", "Shapers", "Blade"),
    row("blade 2", "Blade2A", "Shapers", "Shapers", "Blade"),
    row("blade 3", "Blade3A", "Shapers", "Shapers", "Blade"),
    row("blade 4", "Blade4A", "Shapers", "Shapers", "Blade"),
    row("blade rotation", "ShaperRot", "Shapers", "Shapers", "Blade"),
    row("macro", "Macro", "Control", "Control", "Macro"),
    row("scene", "Macro", "Control", "Control", "Macro"),
    row("program", "Macro", "Control", "Control", "Macro"),
    row("function", "Function", "Control", "Control", "Function"),
    row("control", "Function", "Control", "Control", "Function"),
    row("reset", "Function", "Control", "Control", "Function"),
    row("lamp", "LampControl", "Control", "Control", "Function"),
    row("fans", "Function", "Control", "Control", "Function"),
    row("speed", "EffectsSpeed", "Beam", "Beam", "Effects"),
    row("video", "VideoEffect1Type", "Control", "Control", "Function"),
    row("media", "VideoEffect1Type", "Control", "Control", "Function"),
];

/// Attributes whose channel sets are backed by a `Wheel`.
pub const WHEEL_ATTRIBUTES: &[&str] = &[
    "Color1",
    "Color2",
    "Gobo1",
    "Gobo2",
    "Gobo1Pos",
    "Gobo2Pos",
    "Prism1",
    "Effects1",
    "Animation1",
    "Macro",
    "LampControl",
    "Function",
    "Shutter1",
    "Shutter1Strobe",
];

pub fn is_wheel_attribute(attribute: &str) -> bool {
    WHEEL_ATTRIBUTES.contains(&attribute)
}

/// Resolve a channel name against [`ATTRIBUTE_TABLE`] only.
///
/// Matching is case-insensitive on the trimmed name. An exact key match is
/// preferred, otherwise the first key in table order that is a substring of the
/// name is used.
pub fn resolve_known(channel_name: &str) -> Option<ResolvedAttribute> {
    let clean = channel_name.trim().to_lowercase();
    ATTRIBUTE_TABLE
        .iter()
        .find(|r| r.key == clean)
        .or_else(|| ATTRIBUTE_TABLE.iter().find(|r| clean.contains(r.key)))
        .map(ResolvedAttribute::from_row)
}

/// Resolve a channel name to its attribute. Never fails.
///
/// Names that match nothing in [`ATTRIBUTE_TABLE`] get a custom attribute
/// named after the sanitized channel name, which also serves as feature group,
/// feature and activation group.
pub fn resolve(channel_name: &str) -> ResolvedAttribute {
    resolve_known(channel_name).unwrap_or_else(|| {
        let custom = String::from(sanitize(channel_name, "Custom"));
        ResolvedAttribute {
            attribute: custom.clone(),
            feature_group: custom.clone(),
            feature: custom.clone(),
            activation_group: custom,
        }
    })
}
