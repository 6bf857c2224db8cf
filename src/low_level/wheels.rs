use serde::Serialize;

use crate::{low_level::ColorCie, SafeName};

#[derive(Serialize, Debug, PartialEq, Default)]
pub struct Wheels {
    #[serde(rename = "Wheel")]
    pub children: Vec<Wheel>,
}

impl Wheels {
    pub fn contains(&self, name: &SafeName) -> bool {
        self.children.iter().any(|w| &w.name == name)
    }
}

#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct Wheel {
    #[serde(rename = "@Name")]
    pub name: SafeName,
    #[serde(rename = "Slot")]
    pub slots: Vec<Slot>,
}

#[derive(Serialize, Debug, PartialEq, Clone)]
pub struct Slot {
    #[serde(rename = "@Name")]
    pub name: SafeName,
    #[serde(rename = "@Color")]
    pub color: ColorCie,
    /// Generated slots have no media, the attribute is still written.
    #[serde(rename = "@MediaFileName")]
    pub media_file_name: String,
}

impl Slot {
    pub fn new(name: SafeName) -> Self {
        Slot {
            name,
            color: ColorCie::WHITE,
            media_file_name: String::new(),
        }
    }
}
