//! External generator invocation (blocking subprocess)

use std::path::Path;
use std::process::Command;

use mcforge_core::CommandBatch;
use tracing::{debug, warn};

use crate::errors::{Result, SourceError};
use crate::CommandSource;

/// Command source backed by an external generator program
///
/// Runs `program <path>` synchronously and treats stdout as the generated
/// command text. Non-empty stderr is a hard failure and discards any
/// partial stdout, matching the generator contract: success means a clean
/// diagnostic stream.
#[derive(Debug, Clone)]
pub struct ProcessSource {
    program: String,
}

impl ProcessSource {
    /// Create a source that invokes the given generator program
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The configured generator program
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl CommandSource for ProcessSource {
    fn generate(&self, path: &Path) -> Result<CommandBatch> {
        if !path.is_file() {
            return Err(SourceError::NotAFile {
                path: path.to_path_buf(),
            });
        }

        debug!(program = %self.program, path = %path.display(), "invoking generator");

        let output = Command::new(&self.program)
            .arg(path)
            .output()
            .map_err(|source| SourceError::Launch {
                program: self.program.clone(),
                source,
            })?;

        let diagnostics = String::from_utf8_lossy(&output.stderr);
        if !diagnostics.is_empty() {
            warn!(program = %self.program, "generator emitted diagnostics");
            return Err(SourceError::Diagnostics {
                diagnostics: diagnostics.into_owned(),
            });
        }

        let text = String::from_utf8(output.stdout).map_err(|_| SourceError::NonUtf8Output)?;
        let batch = CommandBatch::from_text(&text);
        debug!(commands = batch.len(), "generator produced batch");
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use tempfile::NamedTempFile;

    fn script(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{body}").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_generate_returns_stdout_as_batch() {
        let file = script("echo 'say hello'\necho 'say world'");
        let source = ProcessSource::new("sh");

        let batch = source.generate(file.path()).unwrap();

        let commands: Vec<&str> = batch.iter().collect();
        assert_eq!(commands, ["say hello", "say world"]);
    }

    #[test]
    fn test_diagnostics_discard_partial_stdout() {
        let file = script("echo 'say partial'\necho 'boom' >&2");
        let source = ProcessSource::new("sh");

        let err = source.generate(file.path()).unwrap_err();

        match err {
            SourceError::Diagnostics { diagnostics } => {
                assert!(diagnostics.contains("boom"));
            }
            other => panic!("expected Diagnostics, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_path_is_not_a_file() {
        let source = ProcessSource::new("sh");
        let err = source
            .generate(Path::new("/definitely/not/here.php"))
            .unwrap_err();
        assert!(matches!(err, SourceError::NotAFile { .. }));
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = ProcessSource::new("sh");
        let err = source.generate(dir.path()).unwrap_err();
        assert!(matches!(err, SourceError::NotAFile { .. }));
    }

    #[test]
    fn test_unknown_program_fails_to_launch() {
        let file = script("echo hi");
        let source = ProcessSource::new("mcforge-no-such-generator");

        let err = source.generate(file.path()).unwrap_err();
        assert!(matches!(err, SourceError::Launch { .. }));
    }
}
