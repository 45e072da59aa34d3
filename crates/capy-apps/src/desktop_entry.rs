//! Desktop entry parsing.

use crate::error::EntryError;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Icon token used when an entry has no `Icon` key.
pub const FALLBACK_ICON: &str = "application-x-executable";

const DESKTOP_ENTRY_GROUP: &str = "Desktop Entry";

/// Field codes stripped from `Exec` (the letter following `%`).
const FIELD_CODES: &[char] = &[
    'u', 'U', 'f', 'F', 'd', 'D', 'n', 'N', 'i', 'c', 'k', 'v', 'm',
];

/// Application parsed from a .desktop file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DesktopApp {
    /// Lowercased `Name`, used for matching.
    pub id: String,
    /// `Name` as written in the file.
    pub name: String,
    /// `Comment`, empty when absent.
    pub description: String,
    pub icon: String,
    /// `Exec` with field codes removed.
    pub exec: String,
    pub terminal: bool,
    pub source_path: PathBuf,
}

/// Parse a .desktop file into a DesktopApp.
/// Returns None for anything that should not show up in the launcher.
pub fn parse_desktop_file(path: &Path) -> Option<DesktopApp> {
    let result = fs::read_to_string(path)
        .map_err(EntryError::from)
        .and_then(|content| parse_desktop_entry(&content, path));

    match result {
        Ok(app) => Some(app),
        Err(e) => {
            debug!("Skipping {}: {}", path.display(), e);
            None
        }
    }
}

/// Parse the contents of a desktop entry.
/// `path` is only recorded on the result.
pub fn parse_desktop_entry(content: &str, path: &Path) -> Result<DesktopApp, EntryError> {
    let entries = read_group(content, DESKTOP_ENTRY_GROUP)?;

    if read_bool(&entries, "NoDisplay").unwrap_or(false)
        || read_bool(&entries, "Hidden").unwrap_or(false)
    {
        return Err(EntryError::NotDisplayed);
    }

    let name = entries
        .get("Name")
        .ok_or(EntryError::MissingField("Name"))?;
    let exec = entries
        .get("Exec")
        .ok_or(EntryError::MissingField("Exec"))?;

    Ok(DesktopApp {
        id: name.to_lowercase(),
        name: (*name).to_string(),
        description: entries
            .get("Comment")
            .map(|s| s.to_string())
            .unwrap_or_default(),
        icon: entries
            .get("Icon")
            .map(|s| s.to_string())
            .unwrap_or_else(|| FALLBACK_ICON.to_string()),
        exec: strip_field_codes(exec),
        terminal: read_bool(&entries, "Terminal").unwrap_or(false),
        source_path: path.to_path_buf(),
    })
}

/// Remove `%U`-style field codes from an Exec value and trim the result.
pub fn strip_field_codes(exec: &str) -> String {
    let mut cleaned = String::with_capacity(exec.len());
    let mut chars = exec.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            if let Some(&code) = chars.peek() {
                if FIELD_CODES.contains(&code) {
                    chars.next();
                    continue;
                }
            }
        }
        cleaned.push(c);
    }

    cleaned.trim().to_string()
}

/// Collect the key/value pairs of one group.
/// The whole file is checked for syntax, not just the requested group.
fn read_group<'a>(content: &'a str, group: &str) -> Result<HashMap<&'a str, &'a str>, EntryError> {
    let mut entries = HashMap::new();
    let mut current: Option<&str> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            current = Some(header);
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            return Err(EntryError::Malformed { line: idx + 1 });
        };

        match current {
            None => return Err(EntryError::Malformed { line: idx + 1 }),
            Some(g) if g == group => {
                entries.insert(key.trim(), value.trim());
            }
            Some(_) => {}
        }
    }

    Ok(entries)
}

/// Read a boolean key. Anything other than `true`/`false` counts as absent.
fn read_bool(entries: &HashMap<&str, &str>, key: &str) -> Option<bool> {
    match entries.get(key).copied() {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}
