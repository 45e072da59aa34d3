//! Line-based input for the launcher panel.

/// One input event read from the terminal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LauncherInput {
    Down,
    Up,
    Confirm,
    Dismiss,
    Show,
    Reload,
    Quit,
    /// New query text.
    Query(String),
}

impl LauncherInput {
    /// Parse one line. Anything that is not a command is query text,
    /// including an empty line.
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);

        match line.trim() {
            "/down" | "/j" => LauncherInput::Down,
            "/up" | "/k" => LauncherInput::Up,
            "/enter" => LauncherInput::Confirm,
            "/esc" => LauncherInput::Dismiss,
            "/show" => LauncherInput::Show,
            "/reload" => LauncherInput::Reload,
            "/quit" | "/q" => LauncherInput::Quit,
            _ => LauncherInput::Query(line.to_string()),
        }
    }

    /// Events that still apply while the launcher is hidden.
    pub fn allowed_while_hidden(&self) -> bool {
        matches!(
            self,
            LauncherInput::Show | LauncherInput::Reload | LauncherInput::Quit
        )
    }
}
