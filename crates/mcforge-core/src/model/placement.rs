use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, Result};

/// Integer block position in world space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Componentwise translation by another position
    pub fn translated(self, by: BlockPos) -> Self {
        Self {
            x: self.x + by.x,
            y: self.y + by.y,
            z: self.z + by.z,
        }
    }
}

/// Horizontal footprint (x/z extent) of one chain layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footprint {
    pub x: i32,
    pub z: i32,
}

impl Footprint {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Both axes must be positive for the layout to be well defined
    ///
    /// # Errors
    /// `CoreError::InvalidFootprint` naming the offending axis.
    pub fn validate(&self) -> Result<()> {
        if self.x <= 0 {
            return Err(CoreError::InvalidFootprint {
                axis: 'x',
                value: self.x,
            });
        }
        if self.z <= 0 {
            return Err(CoreError::InvalidFootprint {
                axis: 'z',
                value: self.z,
            });
        }
        Ok(())
    }

    /// Number of cells in one Y layer
    pub fn layer_cells(&self) -> usize {
        (self.x as usize) * (self.z as usize)
    }
}

/// Where and how a compiled chain is placed in the world
///
/// When `relative` is true, `origin` is an offset from the anchor position
/// supplied at compile time (the spot the chain is triggered from);
/// otherwise it is an absolute world coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementConfig {
    pub relative: bool,
    pub origin: BlockPos,
    pub footprint: Footprint,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            relative: true,
            origin: BlockPos::new(5, 5, 5),
            footprint: Footprint::new(5, 5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translated() {
        let pos = BlockPos::new(1, 2, 3).translated(BlockPos::new(10, -2, 0));
        assert_eq!(pos, BlockPos::new(11, 0, 3));
    }

    #[test]
    fn test_footprint_validate_rejects_zero_x() {
        let err = Footprint::new(0, 5).validate().unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidFootprint {
                axis: 'x',
                value: 0
            }
        );
    }

    #[test]
    fn test_footprint_validate_rejects_negative_z() {
        let err = Footprint::new(3, -1).validate().unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidFootprint {
                axis: 'z',
                value: -1
            }
        );
    }

    #[test]
    fn test_footprint_layer_cells() {
        assert_eq!(Footprint::new(2, 2).layer_cells(), 4);
        assert_eq!(Footprint::new(5, 3).layer_cells(), 15);
    }

    #[test]
    fn test_default_matches_plugin_defaults() {
        let placement = PlacementConfig::default();
        assert!(placement.relative);
        assert_eq!(placement.origin, BlockPos::new(5, 5, 5));
        assert_eq!(placement.footprint, Footprint::new(5, 5));
    }
}
