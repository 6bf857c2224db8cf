//! Assembly of the complete `description.xml` tree from a [`FixtureDefinition`].

mod layout;
mod wheels;

pub use layout::*;
pub use wheels::*;

use std::collections::BTreeSet;

use indexmap::IndexMap;
use log::debug;

use crate::{
    library::{resolve, ResolvedAttribute},
    low_level::{
        ActivationGroup, Attribute, AttributeDefinitions, ColorCie, DataVersion, DmxMode,
        DmxModes, Empty, Feature, FeatureGroup, FixtureType, FixtureTypeId, Geometries,
        GeometryType, LowLevelGdtf, PhysicalDescriptions, Position, Revision, Revisions,
        YesNoEnum,
    },
    sanitize, BuildError, FixtureDefinition, Mode, SafeName,
};

pub const DESCRIPTION: &str = "Generated by GDTF Builder";
const SHORT_NAME_LENGTH: usize = 8;
/// Distance between neighbouring cells along X, in meters.
const CELL_SPACING: f64 = 0.1;

/// Build the low level representation of the fixture type described by
/// `definition`.
///
/// Modes are taken from [`FixtureDefinition::normalized_modes`]. A fresh
/// FixtureTypeID is generated on every call.
pub fn build_description(definition: &FixtureDefinition) -> Result<LowLevelGdtf, BuildError> {
    let cell_count = definition.checked_cell_count()?;
    let modes = definition.normalized_modes();

    let name = sanitize(definition.fixture_name_or_default(), "Fixture");
    let registry = WheelRegistry::collect(&modes);
    let topology = Topology::new(cell_count);

    let dmx_modes = DmxModes {
        children: modes
            .iter()
            .map(|mode| topology.dmx_mode(mode, &registry))
            .collect(),
    };

    Ok(LowLevelGdtf {
        data_version: DataVersion::V1_1,
        fixture_type: FixtureType {
            short_name: short_name(&name),
            long_name: name.to_string(),
            name,
            manufacturer: sanitize(definition.manufacturer_or_default(), "Generic").into(),
            description: DESCRIPTION.into(),
            id: FixtureTypeId::random(),
            thumbnail: String::new(),
            ref_ft: String::new(),
            can_have_children: YesNoEnum::No,
            attribute_definitions: attribute_definitions(&modes),
            wheels: registry.wheels(&modes),
            physical_descriptions: PhysicalDescriptions::default(),
            models: Empty::default(),
            geometries: topology.geometries(),
            dmx_modes,
            revisions: Revisions {
                revisions: vec![Revision::builder_stub()],
            },
            ft_presets: Empty::default(),
            ft_rdm_info: Empty::default(),
        },
    })
}

/// Upper case alphanumerics of the name, at most 8 of them.
fn short_name(name: &SafeName) -> String {
    let short: String = name
        .as_str()
        .to_uppercase()
        .chars()
        .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
        .take(SHORT_NAME_LENGTH)
        .collect();
    match short.is_empty() {
        true => "FIXTURE".into(),
        false => short,
    }
}

/// Every attribute used by a channel of any mode, both channel lists, in
/// order of first use.
fn used_attributes(modes: &[&Mode]) -> IndexMap<String, ResolvedAttribute> {
    let mut used = IndexMap::new();
    for mode in modes {
        for definition in mode.body_channels.iter().chain(&mode.cell_channels) {
            if definition.fine || definition.is_blank() {
                continue;
            }
            let resolved = resolve(&definition.name);
            used.insert(resolved.attribute.clone(), resolved);
        }
    }
    used
}

fn attribute_definitions(modes: &[&Mode]) -> AttributeDefinitions {
    let used = used_attributes(modes);

    let mut definitions = AttributeDefinitions::default();

    let mut activation_groups: Vec<&str> = Vec::new();
    for resolved in used.values() {
        if !activation_groups.contains(&resolved.activation_group.as_str()) {
            activation_groups.push(&resolved.activation_group);
        }
    }
    definitions.activation_groups.children = activation_groups
        .into_iter()
        .map(|name| ActivationGroup { name: name.into() })
        .collect();

    let mut feature_groups: IndexMap<&str, BTreeSet<&str>> = IndexMap::new();
    for resolved in used.values() {
        feature_groups
            .entry(&resolved.feature_group)
            .or_default()
            .insert(&resolved.feature);
    }
    definitions.feature_groups.children = feature_groups
        .into_iter()
        .map(|(group, features)| FeatureGroup {
            name: group.into(),
            pretty: group.into(),
            features: features
                .into_iter()
                .map(|name| Feature { name: name.into() })
                .collect(),
        })
        .collect();

    definitions.attributes.children = used
        .values()
        .map(|resolved| Attribute {
            name: resolved.attribute.clone(),
            pretty: resolved.attribute.clone(),
            activation_group: resolved.activation_group.clone(),
            feature: resolved.feature_path(),
            physical_unit: "None".into(),
            color: ColorCie::WHITE,
        })
        .collect();

    definitions
}

/// Geometry layout: a lone body, or a body with one reference per cell to a
/// shared cell template.
struct Topology {
    body: SafeName,
    cell_template: SafeName,
    /// Empty for single cell fixtures.
    cells: Vec<SafeName>,
}

impl Topology {
    fn new(cell_count: u32) -> Self {
        let cells = match cell_count {
            0 | 1 => Vec::new(),
            n => (1..=n)
                .map(|i| sanitize(&format!("Cell_{i}"), "Cell"))
                .collect(),
        };
        Topology {
            body: sanitize("Body", "Geometry"),
            cell_template: sanitize("Cell", "Geometry"),
            cells,
        }
    }

    fn geometries(&self) -> Geometries {
        let references = self
            .cells
            .iter()
            .enumerate()
            .map(|(i, cell)| GeometryType::GeometryReference {
                name: cell.clone(),
                position: Position::TranslatedX(i as f64 * CELL_SPACING),
                geometry: self.cell_template.clone(),
            })
            .collect::<Vec<_>>();

        let mut children = vec![GeometryType::Geometry {
            name: self.body.clone(),
            model: String::new(),
            position: Position::Identity,
            children: references,
        }];
        if !self.cells.is_empty() {
            children.push(GeometryType::Geometry {
                name: self.cell_template.clone(),
                model: String::new(),
                position: Position::Identity,
                children: Vec::new(),
            });
        }
        Geometries { children }
    }

    /// Body channels go onto the body once, cell channels once per cell.
    /// Offsets run on across all passes of the mode.
    fn dmx_mode(&self, mode: &Mode, registry: &WheelRegistry) -> DmxMode {
        let name = sanitize(&mode.name, "Mode");
        let mut dmx_mode = DmxMode::new(name.clone(), self.body.clone());
        let channels = &mut dmx_mode.dmx_channels.children;

        let body_pass = GeometryPass {
            mode: &name,
            geometry: &self.body,
            wheels: registry.scope(GeometryScope::Body),
        };
        let mut next_offset = body_pass.lay_out(&mode.body_channels, 1, channels);

        for cell in &self.cells {
            let cell_pass = GeometryPass {
                mode: &name,
                geometry: cell,
                wheels: registry.scope(GeometryScope::Cell),
            };
            next_offset = cell_pass.lay_out(&mode.cell_channels, next_offset, channels);
        }

        debug!(
            "mode {name}: {} DMX channels, footprint {}",
            channels.len(),
            next_offset - 1
        );
        dmx_mode
    }
}
