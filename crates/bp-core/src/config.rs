use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetConfig {
    pub graphics: GraphicsConfig,
    pub font: FontConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphicsConfig {
    /// Reference raster the named regions are cut from.
    pub source: String,
    pub regions: Vec<RegionSpec>,
    pub icons: Vec<IconSpec>,
}

/// Named rectangle of the reference raster. `w == 0 && h == 0` selects
/// whole-image mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionSpec {
    pub name: String,
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

/// Standalone image compiled whole, without a position header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconSpec {
    pub name: String,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontConfig {
    pub source: String,
    pub height: u8,
    pub descender: u8,
}

impl AssetConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            graphics: GraphicsConfig {
                source: "MacPaint 480x320.png".into(),
                regions: vec![
                    RegionSpec { name: "Tools".into(), x: 10, y: 29, w: 51, h: 197 },
                    RegionSpec { name: "Fills".into(), x: 72, y: 279, w: 401, h: 33 },
                    RegionSpec { name: "Tick".into(), x: 13, y: 254, w: 12, h: 9 },
                ],
                icons: vec![
                    IconSpec { name: "Icon".into(), source: "Icon.png".into() },
                    IconSpec { name: "Busy".into(), source: "Busy.png".into() },
                    IconSpec { name: "Disk".into(), source: "Disk.png".into() },
                ],
            },
            font: FontConfig {
                source: "Chicago-12.bdf".into(),
                height: 12,
                descender: 3,
            },
        }
    }
}
