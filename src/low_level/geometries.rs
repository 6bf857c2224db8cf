use std::fmt;

use serde::Serialize;
use serde_with::SerializeDisplay;

use crate::SafeName;

#[derive(Serialize, Debug, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Geometries {
    #[serde(default, rename = "$value")]
    pub children: Vec<GeometryType>,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub enum GeometryType {
    Geometry {
        #[serde(rename = "@Name")]
        name: SafeName,
        /// Generated geometries reference no model, written as empty string.
        #[serde(rename = "@Model")]
        model: String,
        #[serde(rename = "@Position")]
        position: Position,
        #[serde(default, rename = "$value")]
        children: Vec<GeometryType>,
    },
    GeometryReference {
        #[serde(rename = "@Name")]
        name: SafeName,
        #[serde(rename = "@Position")]
        position: Position,
        #[serde(rename = "@Geometry")]
        geometry: SafeName,
    },
}

impl GeometryType {
    pub fn name(&self) -> &SafeName {
        match self {
            GeometryType::Geometry { name, .. } | GeometryType::GeometryReference { name, .. } => {
                name
            }
        }
    }
}

/// 4x4 transform matrix of a geometry, row by row.
///
/// Only identity rotation and scale are produced. A translation along X keeps
/// its explicit offset in meters in the last row, even when it is zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, SerializeDisplay)]
pub enum Position {
    #[default]
    Identity,
    TranslatedX(f64),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Identity => write!(f, "1,0,0,0 0,1,0,0 0,0,1,0 0,0,0,1"),
            Position::TranslatedX(x) => write!(f, "1,0,0,0 0,1,0,0 0,0,1,0 {x:.3},0,0,1"),
        }
    }
}
