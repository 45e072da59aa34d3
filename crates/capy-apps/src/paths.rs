//! Path helpers for XDG directories and config files.

use std::path::PathBuf;

const SYSTEM_APPLICATIONS: &str = "/usr/share/applications";
const LOCAL_APPLICATIONS: &str = "/usr/local/share/applications";

/// Get the .desktop directories in priority order.
/// System first, then local system, then per-user. Earlier directories win
/// when the same file name appears more than once.
pub fn get_application_directories() -> Vec<PathBuf> {
    let mut dirs = vec![
        PathBuf::from(SYSTEM_APPLICATIONS),
        PathBuf::from(LOCAL_APPLICATIONS),
    ];

    if let Some(user) = user_applications_dir() {
        dirs.push(user);
    }

    dirs
}

/// Per-user applications directory (`$XDG_DATA_HOME/applications`).
fn user_applications_dir() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
        .map(|data| data.join("applications"))
}

/// Get the launcher config file path.
/// Config is typically stored in ~/.config/CapyShell/launcher.json
pub fn get_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("CapyShell").join("launcher.json"))
}
