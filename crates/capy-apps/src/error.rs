//! Error types for capy-apps

/// Reasons a desktop entry is rejected by the parser.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed line {line}")]
    Malformed { line: usize },

    #[error("Missing [Desktop Entry] field: {0}")]
    MissingField(&'static str),

    #[error("Entry is marked NoDisplay or Hidden")]
    NotDisplayed,
}

/// Launcher configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
