/// Grid column count chosen by the user
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;

/// The only column counts the selector offers
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum GridColumns {
    Two,
    #[default]
    Four,
    Six,
}

impl GridColumns {
    pub const ALL: [GridColumns; 3] = [GridColumns::Two, GridColumns::Four, GridColumns::Six];

    /// Number of equal-width tracks
    pub fn count(self) -> usize {
        match self {
            GridColumns::Two => 2,
            GridColumns::Four => 4,
            GridColumns::Six => 6,
        }
    }

    /// Tile height for this layout, keeping tiles roughly 4:3 at the default window width
    pub fn tile_height(self) -> f32 {
        match self {
            GridColumns::Two => 360.0,
            GridColumns::Four => 180.0,
            GridColumns::Six => 120.0,
        }
    }
}

impl TryFrom<u8> for GridColumns {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(GridColumns::Two),
            4 => Ok(GridColumns::Four),
            6 => Ok(GridColumns::Six),
            other => Err(ConfigError::InvalidColumns(other)),
        }
    }
}

impl From<GridColumns> for u8 {
    fn from(columns: GridColumns) -> Self {
        columns.count() as u8
    }
}

impl fmt::Display for GridColumns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} per row", self.count())
    }
}
