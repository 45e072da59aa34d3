//! App Catalog implementation.

use crate::collate;
use crate::desktop_entry::{DesktopApp, parse_desktop_file};
use log::{debug, info};

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Events emitted when the catalog changes.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Refresh { count: usize },
}

/// Sorted, deduplicated snapshot of launchable apps.
/// Cloning shares the snapshot.
#[derive(Clone, Debug, Default)]
pub struct AppIndex {
    apps: Arc<[Arc<DesktopApp>]>,
}

impl AppIndex {
    /// Build an index from already parsed apps, sorting them by display name.
    pub fn from_apps(apps: Vec<DesktopApp>) -> Self {
        let mut apps: Vec<Arc<DesktopApp>> = apps.into_iter().map(Arc::new).collect();
        apps.sort_by(|a, b| collate::compare(&a.name, &b.name));

        Self { apps: apps.into() }
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<DesktopApp>> {
        self.apps.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<DesktopApp>> {
        self.apps.iter()
    }
}

/// Scan `dirs` in priority order and build the index.
///
/// Only immediate children ending in `.desktop` are considered. The first
/// accepted file for a given file name wins; later ones are ignored.
/// Missing or unreadable directories contribute nothing.
pub fn build_index(dirs: &[PathBuf]) -> AppIndex {
    let mut apps = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for dir in dirs {
        if !dir.is_dir() {
            debug!("Skipping missing application directory {}", dir.display());
            continue;
        }

        let walker = walkdir::WalkDir::new(dir)
            .follow_links(true)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker.into_iter().filter_map(|e| e.ok()) {
            let Some(file_name) = entry.file_name().to_str() else {
                continue;
            };
            if !file_name.ends_with(".desktop") || seen.contains(file_name) {
                continue;
            }

            if let Some(app) = parse_desktop_file(entry.path()) {
                seen.insert(file_name.to_string());
                apps.push(app);
            }
        }
    }

    AppIndex::from_apps(apps)
}

/// The main application catalog.
/// Holds the current index and rebuilds it only when asked to.
pub struct AppCatalog {
    /// Directories scanned on refresh, in priority order.
    dirs: Vec<PathBuf>,
    /// Current snapshot.
    index: RwLock<AppIndex>,
    /// Event sender for catalog updates.
    event_tx: tokio::sync::broadcast::Sender<AppEvent>,
}

impl AppCatalog {
    /// Create a new empty catalog over `dirs`.
    pub fn new(dirs: Vec<PathBuf>) -> Self {
        let (tx, _) = tokio::sync::broadcast::channel(16);

        Self {
            dirs,
            index: RwLock::new(AppIndex::default()),
            event_tx: tx,
        }
    }

    /// Rescan all directories and swap in the new index.
    /// Blocking; call at startup or on an explicit reload.
    pub fn refresh(&self) {
        info!("Scanning app catalog...");

        let index = build_index(&self.dirs);
        let count = index.len();

        match self.index.write() {
            Ok(mut guard) => *guard = index,
            Err(poisoned) => *poisoned.into_inner() = index,
        }

        // Notify listeners
        let _ = self.event_tx.send(AppEvent::Refresh { count });

        info!("App catalog refresh complete: {} apps.", count);
    }

    /// Current snapshot of the index.
    pub fn index(&self) -> AppIndex {
        match self.index.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Subscribe to catalog changes.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<AppEvent> {
        self.event_tx.subscribe()
    }
}
