use std::num::NonZeroU8;

use derivative::Derivative;
use serde::Serialize;

use crate::{
    low_level::{ChannelOffset, DmxValue, Empty, PhysicalValue, YesNoEnum},
    SafeName,
};

#[derive(Serialize, Debug, PartialEq, Default)]
pub struct DmxModes {
    #[serde(rename = "DMXMode")]
    pub children: Vec<DmxMode>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct DmxMode {
    #[serde(rename = "@Name")]
    pub name: SafeName,
    #[serde(rename = "@Geometry")]
    pub geometry: SafeName,
    #[serde(rename = "DMXChannels")]
    pub dmx_channels: DmxChannels,
    #[serde(rename = "Relations")]
    pub relations: Empty,
    #[serde(rename = "FTMacros")]
    pub ft_macros: Empty,
}

impl DmxMode {
    pub fn new(name: SafeName, geometry: SafeName) -> Self {
        DmxMode {
            name,
            geometry,
            dmx_channels: DmxChannels::default(),
            relations: Empty::default(),
            ft_macros: Empty::default(),
        }
    }
}

#[derive(Serialize, Debug, PartialEq, Default)]
pub struct DmxChannels {
    #[serde(rename = "DMXChannel")]
    pub children: Vec<DmxChannel>,
}

#[derive(Serialize, Debug, PartialEq, Derivative)]
#[derivative(Default)]
pub struct DmxChannel {
    /// The GDTF Builder never writes a DMXBreak of 0, so use NonZeroU8.
    #[derivative(Default(value = "NonZeroU8::MIN"))]
    #[serde(rename = "@DMXBreak")]
    pub dmx_break: NonZeroU8,
    #[derivative(Default(value = "ChannelOffset::Virtual"))]
    #[serde(rename = "@Offset")]
    pub offset: ChannelOffset,
    #[derivative(Default(value = "DmxValue::ZERO"))]
    #[serde(rename = "@Default")]
    pub default: DmxValue,
    #[derivative(Default(value = "DmxValue::FULL"))]
    #[serde(rename = "@Highlight")]
    pub highlight: DmxValue,
    #[serde(rename = "@Geometry")]
    pub geometry: String,
    /// `Mode.Channel.LogicalChannel.ChannelFunction`
    #[serde(rename = "@InitialFunction")]
    pub initial_function: String,
    #[serde(rename = "LogicalChannel")]
    pub logical_channel: LogicalChannel,
}

#[derive(Serialize, Debug, PartialEq, Derivative)]
#[derivative(Default)]
pub struct LogicalChannel {
    #[serde(rename = "@Attribute")]
    pub attribute: String,
    #[serde(rename = "@Snap")]
    pub snap: YesNoEnum,
    #[derivative(Default(value = "\"None\".into()"))]
    #[serde(rename = "@Master")]
    pub master: String,
    #[serde(rename = "@MibFade")]
    pub mib_fade: u32,
    #[serde(rename = "@DMXChangeTimeLimit")]
    pub dmx_change_time_limit: u32,
    #[serde(rename = "ChannelFunction")]
    pub channel_function: ChannelFunction,
}

/// Single channel function covering the full DMX range of its channel.
#[derive(Serialize, Debug, PartialEq, Derivative)]
#[derivative(Default)]
pub struct ChannelFunction {
    #[serde(rename = "@Name")]
    pub name: String,
    #[serde(rename = "@Attribute")]
    pub attribute: String,
    #[serde(rename = "@OriginalAttribute")]
    pub original_attribute: String,
    #[derivative(Default(value = "DmxValue::ZERO"))]
    #[serde(rename = "@DMXFrom")]
    pub dmx_from: DmxValue,
    #[derivative(Default(value = "DmxValue::ZERO"))]
    #[serde(rename = "@Default")]
    pub default: DmxValue,
    #[derivative(Default(value = "PhysicalValue::MIN"))]
    #[serde(rename = "@PhysicalFrom")]
    pub physical_from: PhysicalValue,
    #[derivative(Default(value = "PhysicalValue::MAX"))]
    #[serde(rename = "@PhysicalTo")]
    pub physical_to: PhysicalValue,
    #[serde(rename = "@RealFade")]
    pub real_fade: u32,
    #[serde(rename = "@RealAcceleration")]
    pub real_acceleration: u32,
    #[serde(rename = "@WheelSlotIndex")]
    pub wheel_slot_index: u32,
    #[serde(rename = "@Wheel", skip_serializing_if = "Option::is_none")]
    pub wheel: Option<SafeName>,
    #[serde(rename = "ChannelSet")]
    pub channel_sets: Vec<ChannelSet>,
}

#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct ChannelSet {
    #[serde(rename = "@Name")]
    pub name: SafeName,
    #[serde(rename = "@DMXFrom")]
    pub dmx_from: DmxValue,
    #[serde(rename = "@PhysicalFrom")]
    pub physical_from: PhysicalValue,
    #[serde(rename = "@PhysicalTo")]
    pub physical_to: PhysicalValue,
    /// 1-based slot of the wheel referenced by the channel function.
    #[serde(rename = "@WheelSlotIndex", skip_serializing_if = "Option::is_none")]
    pub wheel_slot_index: Option<u32>,
}
