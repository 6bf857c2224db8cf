use std::fmt;

use getset::Getters;
use log::info;

use crate::{
    build_description,
    low_level::{ChannelOffset, LowLevelGdtf},
    package_description, validate_wheel_references, BuildError, FixtureDefinition, WheelProblem,
};

/// A finished fixture package.
#[derive(Debug, Getters)]
#[getset(get = "pub")]
pub struct Generated {
    /// Text of `description.xml`
    description: String,
    /// The `.gdtf` file
    package: Vec<u8>,
    summary: Summary,
    /// Broken wheel references. The package is usable anyway, but consoles may
    /// drop the affected channels.
    warnings: Vec<WheelProblem>,
}

/// Build, serialize, package and check a fixture type in one go.
///
/// Nothing is returned unless all of it succeeds. Wheel reference problems do
/// not fail generation, they end up in [`Generated::warnings`].
pub fn generate(definition: &FixtureDefinition) -> Result<Generated, BuildError> {
    let gdtf = build_description(definition)?;
    let description = gdtf.serialize_description()?;
    let package = package_description(&description)?;
    let warnings = validate_wheel_references(&description);
    let summary = Summary::new(definition, &gdtf, package.len());

    info!("generated {}: {summary}", gdtf.fixture_type.name);
    Ok(Generated {
        description,
        package,
        summary,
        warnings,
    })
}

/// Key figures of a generated package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// DMX addresses taken by coarse channels over all modes. Fine bytes and
    /// virtual channels are not counted, cell channels count once per cell.
    pub dmx_channels: usize,
    /// Channel sets of the channel definitions, not repeated per cell.
    pub channel_sets: usize,
    pub modes: usize,
    /// Cell count of multi-cell fixtures
    pub cells: Option<u32>,
    /// Size of the package
    pub bytes: usize,
}

impl Summary {
    fn new(definition: &FixtureDefinition, gdtf: &LowLevelGdtf, bytes: usize) -> Self {
        let dmx_modes = &gdtf.fixture_type.dmx_modes.children;
        let dmx_channels = dmx_modes
            .iter()
            .flat_map(|m| &m.dmx_channels.children)
            .filter(|c| c.offset != ChannelOffset::Virtual)
            .count();

        let modes = definition.normalized_modes();
        let channel_sets: usize = modes
            .iter()
            .flat_map(|m| definition.emitted_lists(m))
            .flatten()
            .filter(|c| !c.fine && !c.is_blank())
            .map(|c| c.channel_sets.len())
            .sum();

        Summary {
            dmx_channels,
            channel_sets,
            modes: dmx_modes.len(),
            cells: definition.is_multi_cell().then_some(definition.cell_count),
            bytes,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} DMX channels · {} channel sets · {} mode(s)",
            self.dmx_channels, self.channel_sets, self.modes
        )?;
        if let Some(cells) = self.cells {
            write!(f, " · {cells} cells")?;
        }
        write!(f, " · {} bytes", thousands(self.bytes))
    }
}

/// `1234567` as `1,234,567`
fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{ChannelDefinition, ChannelSet, Mode};

    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(12345), "12,345");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn summary_display() {
        let mut summary = Summary {
            dmx_channels: 10,
            channel_sets: 8,
            modes: 1,
            cells: None,
            bytes: 4321,
        };
        assert_eq!(
            summary.to_string(),
            "10 DMX channels · 8 channel sets · 1 mode(s) · 4,321 bytes"
        );
        summary.cells = Some(3);
        assert_eq!(
            summary.to_string(),
            "10 DMX channels · 8 channel sets · 1 mode(s) · 3 cells · 4,321 bytes"
        );
    }

    #[test]
    fn summary_counts_physical_channels() -> Result<(), BuildError> {
        let definition = FixtureDefinition::new("Pixel Bar", "Acme")
            .with_cell_count(3)
            .with_mode(
                Mode::new("Standard")
                    .with_body(vec![
                        ChannelDefinition::new("Dimmer"),
                        ChannelDefinition::new("Dimmer Fine").fine(),
                        ChannelDefinition::new("Virtual Dimmer").virtual_channel(),
                        ChannelDefinition::new("Strobe").with_channel_sets(vec![
                            ChannelSet::new(0, 9, "Closed")?,
                            ChannelSet::new(10, 255, "Open")?,
                        ]),
                    ])
                    .with_cells(vec![
                        ChannelDefinition::new("Red"),
                        ChannelDefinition::new("Green"),
                        ChannelDefinition::new("Blue"),
                    ]),
            )
            .with_mode(Mode::new("Compact").with_body(vec![ChannelDefinition::new("Dimmer")]));
        let generated = generate(&definition)?;
        let summary = generated.summary();

        // 2 + 3 * 3 in the first mode, the second has no cell channels
        assert_eq!(summary.dmx_channels, 12);
        assert_eq!(summary.channel_sets, 2);
        assert_eq!(summary.modes, 2);
        assert_eq!(summary.cells, Some(3));
        assert_eq!(summary.bytes, generated.package().len());
        assert!(generated.warnings().is_empty());
        Ok(())
    }
}
