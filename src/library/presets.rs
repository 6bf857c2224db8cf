//! Quick-fill channel sets, continuous channel names and name heuristics.

use log::{debug, warn};

use crate::{resolve_known, ChannelDefinition, ChannelSet};

/// `(dmx_from, dmx_to, label)`
pub type PresetRange = (u8, u8, &'static str);

/// Standard channel sets, keyed by a name that is matched case-insensitively
/// as substring of the channel name. The first matching key wins.
pub const PRESETS: &[(&str, &[PresetRange])] = &[
    (
        "Shutter",
        &[
            (0, 9, "Closed"),
            (10, 19, "Open"),
            (20, 129, "Strobe Slow-Fast"),
            (130, 139, "Open"),
            (140, 189, "Pulse"),
            (190, 199, "Open"),
            (200, 249, "Random Strobe"),
            (250, 255, "Open"),
        ],
    ),
    (
        "Strobe",
        &[(0, 9, "Closed"), (10, 19, "Open"), (20, 255, "Strobe Slow-Fast")],
    ),
    (
        "Macro",
        &[
            (0, 9, "Off"),
            (10, 19, "Macro 1"),
            (20, 29, "Macro 2"),
            (30, 39, "Macro 3"),
            (40, 49, "Macro 4"),
            (50, 59, "Macro 5"),
        ],
    ),
    (
        "Function",
        &[
            (0, 9, "No Function"),
            (10, 19, "Reset"),
            (20, 29, "Lamp On"),
            (30, 39, "Lamp Off"),
        ],
    ),
    (
        "Control",
        &[
            (0, 9, "No Function"),
            (10, 19, "Reset"),
            (20, 29, "Lamp On"),
            (30, 39, "Lamp Off"),
        ],
    ),
    (
        "Color Wheel",
        &[
            (0, 9, "Open"),
            (10, 19, "Color 1"),
            (20, 29, "Color 2"),
            (30, 39, "Color 3"),
            (40, 49, "Color 4"),
            (50, 59, "Color 5"),
            (60, 69, "Color 6"),
            (70, 79, "Color 7"),
            (80, 89, "Color 8"),
        ],
    ),
    (
        "Colour Wheel",
        &[
            (0, 9, "Open"),
            (10, 19, "Color 1"),
            (20, 29, "Color 2"),
            (30, 39, "Color 3"),
            (40, 49, "Color 4"),
            (50, 59, "Color 5"),
        ],
    ),
    (
        "Gobo Wheel",
        &[
            (0, 9, "Open"),
            (10, 19, "Gobo 1"),
            (20, 29, "Gobo 2"),
            (30, 39, "Gobo 3"),
            (40, 49, "Gobo 4"),
            (50, 59, "Gobo 5"),
            (60, 69, "Gobo 6"),
            (70, 79, "Gobo 7"),
        ],
    ),
    (
        "Gobo 1",
        &[
            (0, 9, "Open"),
            (10, 19, "Gobo 1"),
            (20, 29, "Gobo 2"),
            (30, 39, "Gobo 3"),
            (40, 49, "Gobo 4"),
            (50, 59, "Gobo 5"),
        ],
    ),
    (
        "Gobo 2",
        &[
            (0, 9, "Open"),
            (10, 19, "Gobo 1"),
            (20, 29, "Gobo 2"),
            (30, 39, "Gobo 3"),
            (40, 49, "Gobo 4"),
            (50, 59, "Gobo 5"),
        ],
    ),
    ("Prism", &[(0, 9, "No Prism"), (10, 255, "Prism")]),
    (
        "Effects",
        &[
            (0, 9, "No Effect"),
            (10, 19, "Effect 1"),
            (20, 29, "Effect 2"),
            (30, 39, "Effect 3"),
        ],
    ),
    (
        "Scene",
        &[
            (0, 9, "Off"),
            (10, 19, "Scene 1"),
            (20, 29, "Scene 2"),
            (30, 39, "Scene 3"),
            (40, 49, "Scene 4"),
            (50, 59, "Scene 5"),
        ],
    ),
    (
        "Program",
        &[
            (0, 9, "Off"),
            (10, 19, "Program 1"),
            (20, 29, "Program 2"),
            (30, 39, "Program 3"),
            (40, 49, "Program 4"),
        ],
    ),
];

/// Channel names that are plain faders and never get channel sets.
pub const CONTINUOUS: &[&str] = &[
    "Dimmer",
    "Dimmer Fine",
    "Pan",
    "Pan Fine",
    "Tilt",
    "Tilt Fine",
    "Red",
    "Green",
    "Blue",
    "White",
    "Amber",
    "Lime",
    "UV",
    "Indigo",
    "Cyan",
    "Magenta",
    "Yellow",
    "CTO",
    "CTB",
    "Hue",
    "Saturation",
    "Zoom",
    "Zoom Fine",
    "Focus",
    "Focus Fine",
    "Iris",
    "Pan Speed",
    "Tilt Speed",
    "Effects Speed",
    "Effects Fade",
    "Gobo Rotation",
    "Gobo Spin",
    "Gobo Index",
    "Prism Rotation",
    "Blade 1",
    "Blade 2",
    "Blade 3",
    "Blade 4",
    "Blade Rotation",
];

/// Suggested channel names by category, `(name, is_fine)`.
pub const CHANNEL_CATALOGUE: &[(&str, &[(&str, bool)])] = &[
    ("DIMMING", &[("Dimmer", false), ("Dimmer Fine", true)]),
    (
        "POSITION",
        &[
            ("Pan", false),
            ("Pan Fine", true),
            ("Tilt", false),
            ("Tilt Fine", true),
            ("Pan Speed", false),
            ("Tilt Speed", false),
        ],
    ),
    (
        "COLOR - RGB/W",
        &[
            ("Red", false),
            ("Green", false),
            ("Blue", false),
            ("White", false),
            ("Amber", false),
            ("Lime", false),
            ("UV", false),
            ("Indigo", false),
        ],
    ),
    (
        "COLOR - CMY",
        &[("Cyan", false), ("Magenta", false), ("Yellow", false)],
    ),
    (
        "COLOR - MISC",
        &[
            ("CTO", false),
            ("CTB", false),
            ("Hue", false),
            ("Saturation", false),
            ("Color Wheel", false),
            ("Color Mix", false),
        ],
    ),
    (
        "BEAM",
        &[
            ("Shutter", false),
            ("Strobe", false),
            ("Strobe Speed", false),
            ("Zoom", false),
            ("Zoom Fine", true),
            ("Focus", false),
            ("Focus Fine", true),
            ("Iris", false),
            ("Frost", false),
            ("Diffusion", false),
        ],
    ),
    (
        "GOBO",
        &[
            ("Gobo Wheel", false),
            ("Gobo 1", false),
            ("Gobo 2", false),
            ("Gobo Rotation", false),
            ("Gobo Index", false),
            ("Gobo Spin", false),
        ],
    ),
    (
        "PRISM / EFFECTS",
        &[
            ("Prism", false),
            ("Prism Rotation", false),
            ("Effects", false),
            ("Effects Speed", false),
            ("Effects Fade", false),
            ("Animation", false),
        ],
    ),
    (
        "SHAPERS",
        &[
            ("Blade 1", false),
            ("Blade 2", false),
            ("Blade 3", false),
            ("Blade 4", false),
            ("Blade Rotation", false),
        ],
    ),
    (
        "CONTROL",
        &[
            ("Macro", false),
            ("Scene", false),
            ("Program", false),
            ("Function", false),
            ("Control", false),
            ("Reset", false),
            ("Lamp", false),
            ("Fans", false),
            ("Speed", false),
        ],
    ),
];

const FINE_MARKERS: [&str; 5] = ["fine", " lsb", "16-bit", "16bit", "low byte"];

/// Whether the name suggests the low byte of a 16 bit channel.
pub fn looks_fine(channel_name: &str) -> bool {
    let lower = channel_name.to_lowercase();
    FINE_MARKERS.iter().any(|m| lower.contains(m))
}

/// Whether the name suggests a virtual dimmer without its own DMX address.
pub fn looks_virtual(channel_name: &str) -> bool {
    let lower = channel_name.to_lowercase();
    lower.contains("virtual") && lower.contains("dimmer")
}

pub fn is_continuous(channel_name: &str) -> bool {
    CONTINUOUS.contains(&channel_name)
}

/// Quick-fill channel sets for a channel name, if any preset applies.
pub fn preset_for(channel_name: &str) -> Option<&'static [PresetRange]> {
    let lower = channel_name.to_lowercase();
    PRESETS
        .iter()
        .find(|(key, _)| lower.contains(&key.to_lowercase()))
        .map(|(_, ranges)| *ranges)
}

/// Whether it makes sense to give this channel named channel sets: it has to
/// be a known, non-continuous coarse channel with a DMX address.
pub fn accepts_channel_sets(channel: &ChannelDefinition) -> bool {
    !channel.fine
        && !channel.is_virtual()
        && !is_continuous(&channel.name)
        && resolve_known(&channel.name).is_some()
}

/// Fill a channel without channel sets from its preset.
///
/// Returns whether channel sets were added.
pub fn quick_fill(channel: &mut ChannelDefinition) -> bool {
    if !channel.channel_sets.is_empty() || !accepts_channel_sets(channel) {
        return false;
    }
    let Some(ranges) = preset_for(&channel.name) else {
        return false;
    };
    // rows are checked by `presets_are_ordered_ranges`, a bad one leaves the
    // channel untouched instead of filling it partially
    let sets = ranges
        .iter()
        .map(|&(from, to, label)| ChannelSet::new(from, to, label))
        .collect::<Result<Vec<_>, _>>();
    channel.channel_sets = match sets {
        Ok(sets) => sets,
        Err(e) => {
            warn!("no quick-fill for '{}': {e}", channel.name);
            return false;
        }
    };
    debug!(
        "quick-filled '{}' with {} channel sets",
        channel.name,
        channel.channel_sets.len()
    );
    !channel.channel_sets.is_empty()
}
