//! capy-apps: Application launcher engine for Linux desktops.
//!
//! Provides:
//! - Desktop entry parsing from .desktop files
//! - A sorted app index, deduplicated by file name across XDG directories
//! - Substring filtering and keyboard selection for a launcher list
//! - Shell command construction for launching the selected app

mod catalog;
mod collate;
mod config;
mod desktop_entry;
mod error;
mod filter;
mod launch;
mod launcher;
mod paths;
mod selection;

pub use catalog::{AppCatalog, AppEvent, AppIndex, build_index};
pub use config::{DEFAULT_MAX_RESULTS, DEFAULT_TERMINAL, LauncherConfig, MAX_RESULTS_LIMIT};
pub use desktop_entry::{
    DesktopApp, FALLBACK_ICON, parse_desktop_entry, parse_desktop_file, strip_field_codes,
};
pub use error::{ConfigError, EntryError};
pub use filter::{EmptyState, filter};
pub use launch::{LaunchRequest, SHELL_PERSIST_SUFFIX, build_command, shell_quote};
pub use launcher::{
    CommandSpawner, DEFAULT_DESCRIPTION, FilterState, Launcher, LauncherSurface, Row, RowContent,
    render_rows,
};
pub use paths::{get_application_directories, get_config_path};
pub use selection::Selection;

use std::sync::{Arc, OnceLock};

static CATALOG: OnceLock<Arc<AppCatalog>> = OnceLock::new();

/// Get the global app catalog instance.
/// The first call scans the configured directories once.
pub fn get_catalog() -> Arc<AppCatalog> {
    CATALOG
        .get_or_init(|| {
            let catalog = AppCatalog::new(LauncherConfig::load().application_directories());
            catalog.refresh();
            Arc::new(catalog)
        })
        .clone()
}
