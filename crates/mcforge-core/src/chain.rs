//! Chain compiler: lay a command batch out as a single placeable structure
//!
//! Commands are assigned to grid cells in row-major order within one Y
//! layer (x varies fastest, then z), and layers stack upward once a layer's
//! `footprint.x * footprint.z` cells are used. Completing the command at
//! cell `i` logically triggers cell `i + 1`; the link direction is the same
//! traversal as the placement, so the next-index relation fully describes
//! the chain.

use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, Result};
use crate::model::{BlockPos, CommandBatch, PlacementConfig};

/// One positioned command in a compiled chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandCell {
    pub position: BlockPos,
    pub command: String,
    pub sequence_index: usize,
}

/// A compiled, deployable command chain
///
/// Cells are stored in sequence order; `sequence_index` values cover
/// `0..len()` exactly once and all positions are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainArtifact {
    cells: Vec<CommandCell>,
}

impl ChainArtifact {
    /// Number of cells in the chain
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check whether the chain has no cells (empty batch input)
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in sequence order
    pub fn cells(&self) -> &[CommandCell] {
        &self.cells
    }

    /// The cell triggered after cell `index`, if any
    ///
    /// The last cell has no outgoing link.
    pub fn next_of(&self, index: usize) -> Option<&CommandCell> {
        self.cells.get(index + 1)
    }
}

/// Compile a command batch into a chain artifact
///
/// An empty batch compiles to an empty artifact. The compiler never rejects
/// a batch for size: layers accumulate along Y indefinitely. Identical
/// inputs always produce identical artifacts.
///
/// # Arguments
/// * `batch` - commands in execution order
/// * `placement` - origin, relative flag, and layer footprint
/// * `anchor` - trigger position; required when `placement.relative` is true,
///   ignored otherwise
///
/// # Errors
/// * `CoreError::InvalidFootprint` - footprint axis zero or negative
/// * `CoreError::MissingAnchor` - relative placement without an anchor
pub fn compile(
    batch: &CommandBatch,
    placement: &PlacementConfig,
    anchor: Option<BlockPos>,
) -> Result<ChainArtifact> {
    placement.footprint.validate()?;

    let base = if placement.relative {
        let anchor = anchor.ok_or(CoreError::MissingAnchor)?;
        placement.origin.translated(anchor)
    } else {
        placement.origin
    };

    let row = placement.footprint.x as usize;
    let layer = placement.footprint.layer_cells();

    let cells = batch
        .iter()
        .enumerate()
        .map(|(index, command)| CommandCell {
            position: BlockPos {
                x: base.x + (index % row) as i32,
                y: base.y + (index / layer) as i32,
                z: base.z + ((index / row) % (placement.footprint.z as usize)) as i32,
            },
            command: command.to_string(),
            sequence_index: index,
        })
        .collect();

    Ok(ChainArtifact { cells })
}
