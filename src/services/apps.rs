//! App catalog service shim.
//!
//! Runs catalog rescans off the input loop.

use capy_apps::AppCatalog;
use log::info;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Rescan the catalog on a background thread.
/// The new index arrives through the catalog's `AppEvent::Refresh`.
pub fn start_refresh(catalog: Arc<AppCatalog>) -> JoinHandle<()> {
    info!("Starting app catalog rescan in the background...");

    thread::spawn(move || catalog.refresh())
}
