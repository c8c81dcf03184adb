//! # Link Table Module
//!
//! Maps a completed selection to the Telegram channel link configured for it.
//! Keys look like `SITE_THIRD_YEAR_1ST_SEM`; any key without an entry resolves
//! to the default link.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::catalog::{all_combinations, Department, Semester, Year};

/// Link used when nothing else is configured
pub const FALLBACK_DEFAULT_LINK: &str = "https://t.me/your_default_channel";

/// Composite key identifying one (department, year, semester) combination
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkKey(String);

impl LinkKey {
    pub fn new(department: Department, year: Year, semester: Semester) -> Self {
        Self(format!(
            "{}_{}_YEAR_{}_SEM",
            department.code().to_uppercase(),
            year.code().to_uppercase(),
            semester.code().to_uppercase()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Configured channel links plus the default used for misses
#[derive(Debug, Clone)]
pub struct LinkTable {
    entries: HashMap<String, String>,
    default_link: String,
}

impl Default for LinkTable {
    fn default() -> Self {
        Self::new(FALLBACK_DEFAULT_LINK)
    }
}

impl LinkTable {
    pub fn new(default_link: impl Into<String>) -> Self {
        Self {
            entries: HashMap::new(),
            default_link: default_link.into(),
        }
    }

    pub fn with_entry(mut self, key: impl Into<String>, link: impl Into<String>) -> Self {
        self.insert(key, link);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, link: impl Into<String>) {
        self.entries.insert(key.into(), link.into());
    }

    pub fn default_link(&self) -> &str {
        &self.default_link
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured link for `key`, if any
    pub fn lookup(&self, key: &LinkKey) -> Option<&str> {
        self.entries.get(key.as_str()).map(String::as_str)
    }

    /// Link for `key`, falling back to the default link
    pub fn resolve(&self, key: &LinkKey) -> &str {
        match self.lookup(key) {
            Some(link) => link,
            None => {
                debug!(link_key = %key, "No link configured, using default link");
                &self.default_link
            }
        }
    }

    /// Read entries for every key the catalog can produce through `lookup`.
    ///
    /// Values are trimmed; empty values are ignored.
    pub fn load_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        for (department, year, semester) in all_combinations() {
            let key = LinkKey::new(department, year, semester);
            if let Some(link) = lookup(key.as_str()) {
                let link = link.trim();
                if !link.is_empty() {
                    self.insert(key.as_str(), link);
                }
            }
        }
    }

    /// Merge entries from a JSON object file (`{"KEY": "link", ...}`)
    pub fn load_json_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read link file {}", path.display()))?;
        let entries: HashMap<String, String> = serde_json::from_str(&content)
            .with_context(|| format!("Invalid link file {}", path.display()))?;

        debug!(path = %path.display(), entries = entries.len(), "Loaded link file");
        self.entries.extend(entries);
        Ok(())
    }
}
