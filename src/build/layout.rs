use log::debug;

use crate::{
    build::WheelLookup,
    library::resolve,
    low_level::{
        ChannelFunction, ChannelOffset, ChannelSet, DmxChannel, DmxValue, LogicalChannel,
        PhysicalValue, YesNoEnum,
    },
    sanitize, ChannelDefinition, SafeName,
};

/// One run of a channel list onto one geometry of one DMX mode.
#[derive(Debug, Clone, Copy)]
pub struct GeometryPass<'a> {
    pub mode: &'a SafeName,
    pub geometry: &'a SafeName,
    /// Wheels of the scope the geometry belongs to, by attribute.
    pub wheels: &'a WheelLookup,
}

impl GeometryPass<'_> {
    /// Append the DMX channels for `channels` to `out`, starting at
    /// `start_offset`, and return the next free offset.
    ///
    /// Entries with a blank name are skipped. A fine entry turns the offset of
    /// the last coarse channel into a pair and always takes an address, even
    /// when there is no coarse channel to attach to. Virtual channels get no
    /// address and are never paired.
    pub fn lay_out(
        &self,
        channels: &[ChannelDefinition],
        start_offset: u32,
        out: &mut Vec<DmxChannel>,
    ) -> u32 {
        let mut offset = start_offset;
        // index into `out` and start offset of the channel a fine byte attaches to
        let mut coarse: Option<(usize, u32)> = None;

        for definition in channels.iter().filter(|c| !c.is_blank()) {
            if definition.fine {
                if let Some((index, start)) = coarse.take() {
                    if let Some(channel) = out.get_mut(index) {
                        channel.offset = ChannelOffset::Pair(start, offset);
                    }
                }
                offset += 1;
                continue;
            }

            if definition.is_virtual() {
                out.push(self.channel(definition, ChannelOffset::Virtual));
                continue;
            }

            out.push(self.channel(definition, ChannelOffset::Single(offset)));
            coarse = Some((out.len() - 1, offset));
            offset += 1;
        }

        debug!(
            "mode {}: {} entries on {} use offsets {}..{}",
            self.mode,
            channels.len(),
            self.geometry,
            start_offset,
            offset
        );
        offset
    }

    fn channel(&self, definition: &ChannelDefinition, offset: ChannelOffset) -> DmxChannel {
        let resolved = resolve(&definition.name);
        let fallback = match offset.start() {
            Some(start) => format!("Ch{start}"),
            None => "ChV".into(),
        };
        let channel_name = sanitize(&definition.name, &fallback);

        let wheel = match definition.channel_sets.is_empty() {
            true => None,
            false => self.wheels.get(&resolved.attribute).cloned(),
        };
        let channel_sets = definition
            .channel_sets
            .iter()
            .enumerate()
            .map(|(i, set)| ChannelSet {
                name: sanitize(definition.set_label(set), &format!("Set{}", i + 1)),
                dmx_from: DmxValue::from(set.dmx_from()),
                physical_from: PhysicalValue(set.physical_from()),
                physical_to: PhysicalValue(set.physical_to()),
                wheel_slot_index: wheel.as_ref().map(|_| i as u32 + 1),
            })
            .collect::<Vec<_>>();

        DmxChannel {
            offset,
            geometry: self.geometry.to_string(),
            initial_function: format!(
                "{}.{}.{}.{}",
                self.mode, channel_name, resolved.attribute, resolved.attribute
            ),
            logical_channel: LogicalChannel {
                attribute: resolved.attribute.clone(),
                snap: YesNoEnum::from(!channel_sets.is_empty()),
                channel_function: ChannelFunction {
                    name: resolved.attribute.clone(),
                    attribute: resolved.attribute,
                    original_attribute: sanitize(&definition.name, "Ch").into(),
                    wheel,
                    channel_sets,
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{BuildError, ChannelSet as DefinedSet};

    use super::*;

    fn offsets(channels: &[DmxChannel]) -> Vec<String> {
        channels.iter().map(|c| c.offset.to_string()).collect()
    }

    #[test]
    fn fine_byte_pairs_with_previous_coarse_channel() {
        let mode = sanitize("Standard", "Mode");
        let body = sanitize("Body", "Geometry");
        let wheels = WheelLookup::new();
        let pass = GeometryPass {
            mode: &mode,
            geometry: &body,
            wheels: &wheels,
        };

        let mut out = Vec::new();
        let next = pass.lay_out(
            &[
                ChannelDefinition::new("Dimmer"),
                ChannelDefinition::new("Dimmer Fine").fine(),
                ChannelDefinition::new("Strobe"),
                ChannelDefinition::new("Macro"),
            ],
            1,
            &mut out,
        );

        assert_eq!(next, 5);
        assert_eq!(offsets(&out), vec!["1,2", "3", "4"]);
        assert_eq!(out[0].initial_function, "Standard.Dimmer.Dimmer.Dimmer");
        assert_eq!(out[1].logical_channel.attribute, "Shutter1Strobe");
        assert_eq!(out[2].geometry, "Body");
    }

    #[test]
    fn orphan_fine_byte_consumes_an_address() {
        let mode = sanitize("Standard", "Mode");
        let body = sanitize("Body", "Geometry");
        let wheels = WheelLookup::new();
        let pass = GeometryPass {
            mode: &mode,
            geometry: &body,
            wheels: &wheels,
        };

        let mut out = Vec::new();
        let next = pass.lay_out(
            &[
                ChannelDefinition::new("Pan Fine").fine(),
                ChannelDefinition::new("Tilt"),
                ChannelDefinition::new("Tilt Fine").fine(),
                ChannelDefinition::new("Tilt Fine").fine(),
            ],
            1,
            &mut out,
        );

        assert_eq!(next, 5);
        // the second fine byte has nothing left to attach to
        assert_eq!(offsets(&out), vec!["2,3"]);
    }

    #[test]
    fn virtual_channels_have_no_address() {
        let mode = sanitize("Standard", "Mode");
        let body = sanitize("Body", "Geometry");
        let wheels = WheelLookup::new();
        let pass = GeometryPass {
            mode: &mode,
            geometry: &body,
            wheels: &wheels,
        };

        let mut out = Vec::new();
        let next = pass.lay_out(
            &[
                ChannelDefinition::new("Red"),
                ChannelDefinition::new("Virtual Dimmer").virtual_channel(),
                ChannelDefinition::new("Red Fine").fine(),
                ChannelDefinition::new("   "),
                ChannelDefinition::new("Green"),
            ],
            7,
            &mut out,
        );

        assert_eq!(next, 10);
        assert_eq!(offsets(&out), vec!["7,8", "None", "9"]);
        assert_eq!(
            out[1].initial_function,
            "Standard.Virtual_Dimmer.Dimmer.Dimmer"
        );
    }

    #[test]
    fn unnamed_channels_fall_back_to_their_offset() {
        let mode = sanitize("Standard", "Mode");
        let body = sanitize("Body", "Geometry");
        let wheels = WheelLookup::new();
        let pass = GeometryPass {
            mode: &mode,
            geometry: &body,
            wheels: &wheels,
        };

        let mut out = Vec::new();
        pass.lay_out(
            &[
                ChannelDefinition::new("Dimmer"),
                ChannelDefinition::new("***"),
                ChannelDefinition::new("???").virtual_channel(),
            ],
            1,
            &mut out,
        );

        assert_eq!(out[1].initial_function, "Standard.Ch2.Custom.Custom");
        assert_eq!(out[1].logical_channel.channel_function.original_attribute, "Ch");
        assert_eq!(out[2].initial_function, "Standard.ChV.Custom.Custom");
    }

    #[test]
    fn channel_sets_reference_registered_wheels() -> Result<(), BuildError> {
        let mode = sanitize("Standard", "Mode");
        let body = sanitize("Body", "Geometry");
        let mut wheels = WheelLookup::new();
        wheels.insert("Gobo1".into(), sanitize("Gobo Wheel", "Gobo1"));
        let pass = GeometryPass {
            mode: &mode,
            geometry: &body,
            wheels: &wheels,
        };

        let sets = vec![
            DefinedSet::new(0, 9, "Open")?,
            DefinedSet::new(10, 19, "")?,
        ];
        let mut out = Vec::new();
        pass.lay_out(
            &[
                ChannelDefinition::new("Gobo Wheel").with_channel_sets(sets.clone()),
                ChannelDefinition::new("Zoom").with_channel_sets(sets),
                ChannelDefinition::new("Gobo Wheel"),
            ],
            1,
            &mut out,
        );

        let gobo = &out[0].logical_channel;
        assert_eq!(gobo.snap, YesNoEnum::Yes);
        assert_eq!(
            gobo.channel_function.wheel.as_ref().map(SafeName::as_str),
            Some("Gobo_Wheel")
        );
        let names: Vec<&str> = gobo
            .channel_function
            .channel_sets
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, vec!["Open", "Gobo_Wheel"]);
        let slots: Vec<Option<u32>> = gobo
            .channel_function
            .channel_sets
            .iter()
            .map(|s| s.wheel_slot_index)
            .collect();
        assert_eq!(slots, vec![Some(1), Some(2)]);
        assert_eq!(
            gobo.channel_function.channel_sets[1].physical_from,
            PhysicalValue(0.039216)
        );

        // not a wheel attribute
        let zoom = &out[1].logical_channel;
        assert_eq!(zoom.snap, YesNoEnum::Yes);
        assert_eq!(zoom.channel_function.wheel, None);
        assert!(zoom
            .channel_function
            .channel_sets
            .iter()
            .all(|s| s.wheel_slot_index.is_none()));

        // no channel sets, no wheel
        let plain = &out[2].logical_channel;
        assert_eq!(plain.snap, YesNoEnum::No);
        assert_eq!(plain.channel_function.wheel, None);
        Ok(())
    }
}
