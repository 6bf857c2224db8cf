use indexmap::IndexMap;
use log::debug;

use crate::{
    library::{attributes::is_wheel_attribute, resolve},
    low_level::{Slot, Wheel, Wheels},
    sanitize, ChannelDefinition, Mode, SafeName,
};

/// Wheel name by attribute.
pub type WheelLookup = IndexMap<String, SafeName>;

/// Which channel list of a mode a geometry is fed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum GeometryScope {
    Body,
    Cell,
}

impl GeometryScope {
    /// Prefix of wheel names in this scope. Cell wheels are prefixed so they
    /// never clash with a body wheel of the same channel name.
    fn wheel_prefix(self) -> &'static str {
        match self {
            GeometryScope::Body => "",
            GeometryScope::Cell => "Cell_",
        }
    }

    fn channels(self, mode: &Mode) -> &[ChannelDefinition] {
        match self {
            GeometryScope::Body => &mode.body_channels,
            GeometryScope::Cell => &mode.cell_channels,
        }
    }
}

/// Wheels of a fixture, registered per scope before anything is emitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WheelRegistry {
    body: WheelLookup,
    cell: WheelLookup,
}

impl WheelRegistry {
    /// Register a wheel for every wheel attribute that has channel sets in
    /// any of the modes. The first channel with a given attribute names the
    /// wheel of its scope.
    pub fn collect(modes: &[&Mode]) -> Self {
        let mut registry = WheelRegistry::default();
        for mode in modes {
            for scope in [GeometryScope::Body, GeometryScope::Cell] {
                for definition in scope.channels(mode).iter().filter(|c| has_wheel_slots(c)) {
                    let attribute = resolve(&definition.name).attribute;
                    if !is_wheel_attribute(&attribute) {
                        continue;
                    }
                    let lookup = registry.scope_mut(scope);
                    if lookup.contains_key(&attribute) {
                        continue;
                    }
                    let name =
                        sanitize(&definition.name, &attribute).prefixed(scope.wheel_prefix());
                    debug!("{scope} wheel {name} registered for {attribute}");
                    lookup.insert(attribute, name);
                }
            }
        }
        registry
    }

    pub fn scope(&self, scope: GeometryScope) -> &WheelLookup {
        match scope {
            GeometryScope::Body => &self.body,
            GeometryScope::Cell => &self.cell,
        }
    }

    fn scope_mut(&mut self, scope: GeometryScope) -> &mut WheelLookup {
        match scope {
            GeometryScope::Body => &mut self.body,
            GeometryScope::Cell => &mut self.cell,
        }
    }

    /// Both scopes in one lookup. Where body and cell share an attribute, the
    /// cell wheel wins.
    pub fn combined(&self) -> WheelLookup {
        let mut combined = self.body.clone();
        combined.extend(self.cell.iter().map(|(k, v)| (k.clone(), v.clone())));
        combined
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty() && self.cell.is_empty()
    }

    /// The `Wheels` element: one wheel per registered name, in order of first
    /// use. Slots are `Open` followed by one slot per channel set of the first
    /// channel using the wheel.
    pub fn wheels(&self, modes: &[&Mode]) -> Wheels {
        let mut wheels = Wheels::default();
        for mode in modes {
            for scope in [GeometryScope::Body, GeometryScope::Cell] {
                for definition in scope.channels(mode).iter().filter(|c| has_wheel_slots(c)) {
                    let attribute = resolve(&definition.name).attribute;
                    let Some(name) = self.scope(scope).get(&attribute) else {
                        continue;
                    };
                    if wheels.contains(name) {
                        continue;
                    }
                    let mut slots = vec![Slot::new(sanitize("Open", "Slot"))];
                    slots.extend(
                        definition
                            .channel_sets
                            .iter()
                            .map(|set| Slot::new(sanitize(definition.set_label(set), "Slot"))),
                    );
                    wheels.children.push(Wheel {
                        name: name.clone(),
                        slots,
                    });
                }
            }
        }
        wheels
    }
}

fn has_wheel_slots(definition: &ChannelDefinition) -> bool {
    !definition.fine && !definition.is_blank() && !definition.channel_sets.is_empty()
}
