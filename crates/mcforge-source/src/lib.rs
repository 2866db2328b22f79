//! mcforge source - command generation via an external generator
//!
//! The generator is a black box: hand it a source file path, get back one
//! batch of commands on stdout. Any diagnostic output is a hard failure.
//! The `CommandSource` trait is the seam that lets the CLI and tests swap
//! the real subprocess for a canned batch.

pub mod errors;
pub mod process;
pub mod r#static;

pub use errors::{Result, SourceError};
pub use process::ProcessSource;
pub use r#static::StaticSource;

use std::path::Path;

use mcforge_core::CommandBatch;

/// Produces one ordered command batch per invocation
pub trait CommandSource {
    /// Generate the batch for the given source file
    ///
    /// Blocking with respect to the calling action: the caller waits for
    /// the batch (or the error) before compiling or delivering.
    ///
    /// # Errors
    /// `SourceError` when the path is not a regular file, the generator
    /// cannot be launched, or it emits diagnostics.
    fn generate(&self, path: &Path) -> Result<CommandBatch>;
}
