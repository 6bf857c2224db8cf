use derivative::Derivative;
use getset::{CopyGetters, Getters};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    library::presets::{looks_fine, looks_virtual},
    sanitize, BuildError, SafeName,
};

pub const DEFAULT_FIXTURE_NAME: &str = "Unknown Fixture";
pub const DEFAULT_MANUFACTURER: &str = "Generic";
pub const MAX_CELL_COUNT: u32 = 100;

/// Named sub-range of a channel's 0..=255 DMX range, shown as a snap position
/// on the console.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters)]
#[serde(try_from = "RawChannelSet")]
pub struct ChannelSet {
    #[getset(get_copy = "pub")]
    dmx_from: u8,
    #[getset(get_copy = "pub")]
    dmx_to: u8,
    /// Blank means the channel name is used as label.
    #[getset(get = "pub")]
    label: String,
}

impl ChannelSet {
    pub fn new<T: Into<String>>(dmx_from: u8, dmx_to: u8, label: T) -> Result<Self, BuildError> {
        let label = label.into();
        if dmx_from > dmx_to {
            return Err(BuildError::InvertedChannelSet {
                label,
                from: dmx_from,
                to: dmx_to,
            });
        }
        Ok(ChannelSet {
            dmx_from,
            dmx_to,
            label,
        })
    }

    pub fn physical_from(&self) -> f64 {
        physical(self.dmx_from)
    }

    pub fn physical_to(&self) -> f64 {
        physical(self.dmx_to)
    }
}

/// 8 bit DMX value as fraction of full, rounded to 6 decimal places
fn physical(dmx: u8) -> f64 {
    (f64::from(dmx) / 255.0 * 1e6).round() / 1e6
}

#[derive(Deserialize)]
struct RawChannelSet {
    dmx_from: u8,
    dmx_to: u8,
    #[serde(default)]
    label: String,
}

impl TryFrom<RawChannelSet> for ChannelSet {
    type Error = BuildError;

    fn try_from(raw: RawChannelSet) -> Result<Self, Self::Error> {
        ChannelSet::new(raw.dmx_from, raw.dmx_to, raw.label)
    }
}

/// Where a channel lives in the geometry tree.
///
/// Whether a channel is laid out on the body or on every cell is decided by the
/// list it is in. Only `Virtual` changes the layout: such channels get no DMX
/// address.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChannelRole {
    #[default]
    Body,
    Cell,
    Virtual,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelDefinition {
    pub name: String,
    /// Low byte of the preceding coarse channel.
    #[serde(default)]
    pub fine: bool,
    #[serde(default)]
    pub channel_sets: Vec<ChannelSet>,
    #[serde(default)]
    pub role: ChannelRole,
}

impl ChannelDefinition {
    pub fn new<T: Into<String>>(name: T) -> Self {
        ChannelDefinition {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Like [`ChannelDefinition::new`], but marks the channel as fine byte or
    /// virtual when its name looks like one.
    pub fn guess<T: Into<String>>(name: T) -> Self {
        let name = name.into();
        let fine = looks_fine(&name);
        let role = if looks_virtual(&name) {
            ChannelRole::Virtual
        } else {
            ChannelRole::Body
        };
        ChannelDefinition {
            name,
            fine,
            channel_sets: Vec::new(),
            role,
        }
    }

    /// Mark the channel as fine byte or virtual when its name looks like one,
    /// as [`ChannelDefinition::guess`] does. Flags already set are kept.
    ///
    /// Returns whether anything changed.
    pub fn apply_guess(&mut self) -> bool {
        let guessed = ChannelDefinition::guess(self.name.as_str());
        let mut changed = false;
        if guessed.fine && !self.fine {
            self.fine = true;
            changed = true;
        }
        if guessed.is_virtual() && !self.is_virtual() {
            self.role = ChannelRole::Virtual;
            changed = true;
        }
        changed
    }

    pub fn fine(mut self) -> Self {
        self.fine = true;
        self
    }

    pub fn virtual_channel(mut self) -> Self {
        self.role = ChannelRole::Virtual;
        self
    }

    pub fn with_channel_sets(mut self, channel_sets: Vec<ChannelSet>) -> Self {
        self.channel_sets = channel_sets;
        self
    }

    pub fn is_virtual(&self) -> bool {
        self.role == ChannelRole::Virtual
    }

    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }

    /// Label of a channel set, falling back to the channel name.
    pub fn set_label<'a>(&'a self, channel_set: &'a ChannelSet) -> &'a str {
        if channel_set.label.trim().is_empty() {
            &self.name
        } else {
            &channel_set.label
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Mode {
    pub name: String,
    /// Laid out once per mode on the body geometry.
    #[serde(default)]
    pub body_channels: Vec<ChannelDefinition>,
    /// Laid out once per cell, only when there are at least two cells.
    #[serde(default)]
    pub cell_channels: Vec<ChannelDefinition>,
}

impl Mode {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Mode {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_body(mut self, channels: Vec<ChannelDefinition>) -> Self {
        self.body_channels = channels;
        self
    }

    pub fn with_cells(mut self, channels: Vec<ChannelDefinition>) -> Self {
        self.cell_channels = channels;
        self
    }
}

/// Everything needed to generate one fixture type. Owned by the caller and only
/// read during generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Derivative)]
#[derivative(Default)]
pub struct FixtureDefinition {
    #[serde(default)]
    pub fixture_name: String,
    #[serde(default)]
    pub manufacturer: String,
    #[derivative(Default(value = "1"))]
    #[serde(default = "single_cell")]
    pub cell_count: u32,
    #[serde(default)]
    pub modes: Vec<Mode>,
}

fn single_cell() -> u32 {
    1
}

impl FixtureDefinition {
    pub fn new<T: Into<String>, S: Into<String>>(fixture_name: T, manufacturer: S) -> Self {
        FixtureDefinition {
            fixture_name: fixture_name.into(),
            manufacturer: manufacturer.into(),
            ..Default::default()
        }
    }

    pub fn with_cell_count(mut self, cell_count: u32) -> Self {
        self.cell_count = cell_count;
        self
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.modes.push(mode);
        self
    }

    pub fn fixture_name_or_default(&self) -> &str {
        non_blank_or(&self.fixture_name, DEFAULT_FIXTURE_NAME)
    }

    pub fn manufacturer_or_default(&self) -> &str {
        non_blank_or(&self.manufacturer, DEFAULT_MANUFACTURER)
    }

    /// Default file name of the package, e.g. `Pixel_Bar.gdtf`.
    pub fn package_file_name(&self) -> String {
        format!("{}.gdtf", self.fixture_name_or_default().replace(' ', "_"))
    }

    pub fn checked_cell_count(&self) -> Result<u32, BuildError> {
        if (1..=MAX_CELL_COUNT).contains(&self.cell_count) {
            Ok(self.cell_count)
        } else {
            Err(BuildError::CellCountOutOfRange(self.cell_count))
        }
    }

    pub fn is_multi_cell(&self) -> bool {
        self.cell_count >= 2
    }

    /// Modes that take part in generation, in order.
    ///
    /// Modes with a blank name are dropped. Names are compared after
    /// sanitizing, so `Mode A` and `Mode-A` are the same mode. When a name
    /// occurs more than once, the mode keeps the position of the first
    /// occurrence and the channels of the last one.
    pub fn normalized_modes(&self) -> Vec<&Mode> {
        let mut by_name: IndexMap<SafeName, &Mode> = IndexMap::new();
        for mode in self.modes.iter().filter(|m| !m.name.trim().is_empty()) {
            by_name.insert(sanitize(&mode.name, "Mode"), mode);
        }
        by_name.into_values().collect()
    }

    /// Channel lists that are actually laid out: body channels always, cell
    /// channels only for multi-cell fixtures.
    pub(crate) fn emitted_lists<'a>(&self, mode: &'a Mode) -> Vec<&'a [ChannelDefinition]> {
        if self.is_multi_cell() {
            vec![mode.body_channels.as_slice(), mode.cell_channels.as_slice()]
        } else {
            vec![mode.body_channels.as_slice()]
        }
    }
}

fn non_blank_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    match value.trim() {
        "" => default,
        trimmed => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_set_physical_values() -> Result<(), BuildError> {
        let set = ChannelSet::new(10, 19, "Open")?;
        assert_eq!(set.physical_from(), 0.039216);
        assert_eq!(set.physical_to(), 0.07451);
        let full = ChannelSet::new(0, 255, "")?;
        assert_eq!(full.physical_from(), 0.0);
        assert_eq!(full.physical_to(), 1.0);
        Ok(())
    }

    #[test]
    fn inverted_channel_set() {
        assert!(matches!(
            ChannelSet::new(20, 10, "Oops"),
            Err(BuildError::InvertedChannelSet { from: 20, to: 10, .. })
        ));
    }

    #[test]
    fn set_label_falls_back_to_channel_name() -> Result<(), BuildError> {
        let channel = ChannelDefinition::new("Gobo Wheel");
        assert_eq!(channel.set_label(&ChannelSet::new(0, 9, "  ")?), "Gobo Wheel");
        assert_eq!(channel.set_label(&ChannelSet::new(0, 9, "Dots")?), "Dots");
        Ok(())
    }

    #[test]
    fn guess_detects_fine_and_virtual() {
        assert!(ChannelDefinition::guess("Pan Fine").fine);
        assert!(ChannelDefinition::guess("Dimmer 16-bit").fine);
        assert!(!ChannelDefinition::guess("Pan").fine);
        assert!(ChannelDefinition::guess("Virtual Dimmer").is_virtual());
        assert!(!ChannelDefinition::guess("Virtual Strobe").is_virtual());
    }

    #[test]
    fn apply_guess_only_adds_flags() {
        let mut pan_fine = ChannelDefinition::new("Pan Fine");
        assert!(pan_fine.apply_guess());
        assert!(pan_fine.fine);
        assert!(!pan_fine.apply_guess());

        let mut dimmer = ChannelDefinition::new("Virtual Dimmer");
        assert!(dimmer.apply_guess());
        assert_eq!(dimmer.role, ChannelRole::Virtual);

        let mut tilt = ChannelDefinition::new("Tilt LSB").fine();
        assert!(!tilt.apply_guess());
        let mut red = ChannelDefinition::new("Red");
        assert!(!red.apply_guess());
        assert_eq!(red, ChannelDefinition::new("Red"));
    }

    #[test]
    fn defaults_for_blank_names() {
        let definition = FixtureDefinition::new("  ", "");
        assert_eq!(definition.fixture_name_or_default(), "Unknown Fixture");
        assert_eq!(definition.manufacturer_or_default(), "Generic");
        assert_eq!(definition.package_file_name(), "Unknown_Fixture.gdtf");
        let definition = FixtureDefinition::new(" Pixel Bar ", "Acme");
        assert_eq!(definition.fixture_name_or_default(), "Pixel Bar");
        assert_eq!(definition.package_file_name(), "Pixel_Bar.gdtf");
    }

    #[test]
    fn cell_count_range() {
        let definition = FixtureDefinition::default();
        assert_eq!(definition.cell_count, 1);
        assert!(definition.checked_cell_count().is_ok());
        assert!(matches!(
            definition.clone().with_cell_count(0).checked_cell_count(),
            Err(BuildError::CellCountOutOfRange(0))
        ));
        assert!(matches!(
            definition.with_cell_count(101).checked_cell_count(),
            Err(BuildError::CellCountOutOfRange(101))
        ));
    }

    #[test]
    fn normalized_modes() {
        let definition = FixtureDefinition::default()
            .with_mode(Mode::new("A").with_body(vec![ChannelDefinition::new("Dimmer")]))
            .with_mode(Mode::new("   "))
            .with_mode(Mode::new("B"))
            .with_mode(Mode::new("A").with_body(vec![ChannelDefinition::new("Strobe")]));
        let modes = definition.normalized_modes();
        assert_eq!(modes.len(), 2);
        assert_eq!(modes[0].name, "A");
        assert_eq!(modes[0].body_channels[0].name, "Strobe");
        assert_eq!(modes[1].name, "B");
    }

    #[test]
    fn modes_with_the_same_sanitized_name_merge() {
        let definition = FixtureDefinition::default()
            .with_mode(Mode::new("Mode A").with_body(vec![ChannelDefinition::new("Dimmer")]))
            .with_mode(Mode::new("Basic"))
            .with_mode(Mode::new("Mode-A").with_body(vec![ChannelDefinition::new("Strobe")]));
        let modes = definition.normalized_modes();
        let names: Vec<&str> = modes.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Mode-A", "Basic"]);
        assert_eq!(modes[0].body_channels[0].name, "Strobe");
    }
}
