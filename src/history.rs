//! Record of previously opened files, newest last.

use std::fs;
use std::io;
use std::path::Path;

use log::debug;

/// Read-only view of the navigation history consumed by the picker.
pub trait HistorySource {
    /// Ordered snapshot of previously visited identifiers, newest last.
    fn snapshot(&self) -> Vec<String>;
}

/// Default number of entries retained before the oldest are evicted.
pub const DEFAULT_HISTORY_SIZE: usize = 200;

/// Ordered, deduplicating store of opened files.
#[derive(Debug, Clone)]
pub struct NavigationHistory {
    entries: Vec<String>,
    max_entries: usize,
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}

impl NavigationHistory {
    /// Create an empty history bounded to `max_entries`.
    #[must_use]
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries: max_entries.max(1),
        }
    }

    /// Build a history from existing entries, oldest first.
    #[must_use]
    pub fn from_entries<I, S>(entries: I, max_entries: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut history = Self::new(max_entries);
        for entry in entries {
            history.record(entry);
        }
        history
    }

    /// Note that `path` was just opened, moving it to the newest position.
    pub fn record(&mut self, path: impl Into<String>) {
        let path = path.into();
        if let Some(position) = self.entries.iter().position(|entry| *entry == path) {
            self.entries.remove(position);
        }
        self.entries.push(path);

        if self.entries.len() > self.max_entries {
            let excess = self.entries.len() - self.max_entries;
            self.entries.drain(..excess);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Load a history from a JSON file; a missing file yields an empty
    /// history.
    pub fn load(path: &Path, max_entries: usize) -> io::Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no history file at {}", path.display());
                return Ok(Self::new(max_entries));
            }
            Err(err) => return Err(err),
        };

        let entries: Vec<String> = serde_json::from_str(&contents)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        Ok(Self::from_entries(entries, max_entries))
    }

    /// Persist the history as a JSON list, oldest first.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.entries)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        fs::write(path, contents)
    }
}

impl HistorySource for NavigationHistory {
    fn snapshot(&self) -> Vec<String> {
        self.entries.clone()
    }
}
