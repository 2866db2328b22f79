//! Canned command source for tests and dry runs

use std::path::Path;

use mcforge_core::CommandBatch;

use crate::errors::{Result, SourceError};
use crate::CommandSource;

/// Command source that returns a fixed batch or a fixed error
///
/// Lets callers exercise compile/deliver flows without a generator
/// installed.
#[derive(Debug)]
pub struct StaticSource {
    outcome: std::result::Result<CommandBatch, String>,
}

impl StaticSource {
    /// Source that always yields the given batch
    pub fn batch(batch: CommandBatch) -> Self {
        Self {
            outcome: Ok(batch),
        }
    }

    /// Source that always fails with the given diagnostics
    pub fn failing(diagnostics: impl Into<String>) -> Self {
        Self {
            outcome: Err(diagnostics.into()),
        }
    }
}

impl CommandSource for StaticSource {
    fn generate(&self, _path: &Path) -> Result<CommandBatch> {
        match &self.outcome {
            Ok(batch) => Ok(batch.clone()),
            Err(diagnostics) => Err(SourceError::Diagnostics {
                diagnostics: diagnostics.clone(),
            }),
        }
    }
}
