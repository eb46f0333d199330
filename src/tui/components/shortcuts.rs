//! Declarative builder for TUI shortcuts

use super::Shortcut;

/// Builder for creating shortcut lists with common groups
#[derive(Default)]
pub struct ShortcutsBuilder {
    shortcuts: Vec<Shortcut>,
}

impl ShortcutsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add h/l, j/k and g/G
    pub fn with_navigation(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("h/l", "Column"));
        self.shortcuts.push(Shortcut::new("j/k", "Up/Down"));
        self.shortcuts.push(Shortcut::new("g/G", "Top/Bottom"));
        self
    }

    /// Add the column management keys
    pub fn with_columns(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("c", "New Column"));
        self.shortcuts.push(Shortcut::new("r", "Rename"));
        self.shortcuts.push(Shortcut::new("D", "Delete Column"));
        self
    }

    /// Add q for quit
    pub fn with_quit(mut self) -> Self {
        self.shortcuts.push(Shortcut::new("q", "Quit"));
        self
    }

    pub fn add(mut self, key: &str, description: &str) -> Self {
        self.shortcuts.push(Shortcut::new(key, description));
        self
    }

    pub fn build(self) -> Vec<Shortcut> {
        self.shortcuts
    }
}
