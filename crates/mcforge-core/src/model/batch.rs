/// Ordered batch of game commands produced by one generator invocation
///
/// Insertion order is execution order and is preserved end-to-end: the
/// chain compiler assigns cells in batch order and the wire encoder joins
/// the commands with newlines in batch order. A batch is immutable once
/// constructed; every command is a non-empty line. Batches only travel as
/// text (`from_text`/`to_text`), which keeps construction behind the
/// blank-line filtering here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBatch(Vec<String>);

impl CommandBatch {
    /// Build a batch from generator output text
    ///
    /// Splits on newlines and drops blank lines; remaining lines are kept
    /// verbatim, in order.
    pub fn from_text(text: &str) -> Self {
        Self(
            text.lines()
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Build a batch from individual command strings, dropping blank ones
    pub fn from_commands<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            commands
                .into_iter()
                .map(Into::into)
                .filter(|command| !command.trim().is_empty())
                .collect(),
        )
    }

    /// Number of commands in the batch
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the batch contains no commands
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Command at the given sequence position
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Iterate over commands in execution order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The batch as one newline-joined text block (the wire `commands` field)
    pub fn to_text(&self) -> String {
        self.0.join("\n")
    }
}
