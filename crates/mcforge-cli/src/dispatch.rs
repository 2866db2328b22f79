//! Action dispatch table
//!
//! Maps stable action identifiers to actions, built once at startup. The
//! identifiers are the external names of the tool's operations (the same
//! surface an editor integration would register) and are what `mcforge
//! run <action>` resolves through.

use std::collections::HashMap;

/// The operations mcforge can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Generate and deliver over TLS
    UploadSecure,
    /// Generate and deliver over plain TCP
    UploadInsecure,
    /// Generate and print the batch
    Preview,
    /// Generate and compile a chain artifact
    GenerateChain,
}

/// Identifier → action table
#[derive(Debug)]
pub struct Dispatcher {
    table: HashMap<&'static str, Action>,
}

impl Dispatcher {
    /// Build the table with every registered action
    pub fn new() -> Self {
        let mut table = HashMap::new();
        table.insert("upload_secure", Action::UploadSecure);
        table.insert("upload_insecure", Action::UploadInsecure);
        table.insert("preview", Action::Preview);
        table.insert("generate_chain", Action::GenerateChain);
        Self { table }
    }

    /// Resolve an action identifier
    pub fn resolve(&self, id: &str) -> Option<Action> {
        self.table.get(id).copied()
    }

    /// Registered identifiers, sorted, for error/help text
    pub fn action_ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.table.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_actions_registered() {
        let dispatcher = Dispatcher::new();
        assert_eq!(
            dispatcher.action_ids(),
            ["generate_chain", "preview", "upload_insecure", "upload_secure"]
        );
    }

    #[test]
    fn test_resolve_known_action() {
        let dispatcher = Dispatcher::new();
        assert_eq!(
            dispatcher.resolve("upload_secure"),
            Some(Action::UploadSecure)
        );
        assert_eq!(dispatcher.resolve("preview"), Some(Action::Preview));
    }

    #[test]
    fn test_resolve_unknown_action() {
        let dispatcher = Dispatcher::new();
        assert_eq!(dispatcher.resolve("mcide:upload_secure"), None);
        assert_eq!(dispatcher.resolve(""), None);
    }
}
