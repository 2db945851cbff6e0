//! Notebook index stored in `.zk/index.toml`

use crate::error::Result;
use crate::infrastructure::Notebook;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

const INDEX_FILE: &str = "index.toml";

/// One indexed note file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedNote {
    /// Path relative to the notebook root, `/`-separated
    pub path: String,
    pub size: u64,
    pub modified: DateTime<Utc>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct IndexFile {
    #[serde(default, rename = "note")]
    notes: Vec<IndexedNote>,
}

/// Outcome of an index refresh
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub added: usize,
    pub modified: usize,
    pub removed: usize,
    pub unchanged: usize,
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Indexed {} notes\n  + {} added\n  ~ {} modified\n  - {} removed",
            self.added + self.modified + self.unchanged,
            self.added,
            self.modified,
            self.removed
        )
    }
}

impl Notebook {
    /// Notes recorded by the last index refresh, sorted by path
    pub fn indexed_notes(&self) -> Result<Vec<IndexedNote>> {
        let path = self.data_path(INDEX_FILE);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let file: IndexFile = toml::from_str(&fs::read_to_string(path)?)?;
        Ok(file.notes)
    }

    /// Rescan the notebook and update the index.
    ///
    /// In verbose mode every change is printed as it is detected.
    pub fn index(&self, verbose: bool) -> Result<IndexStats> {
        let previous: BTreeMap<String, IndexedNote> = self
            .indexed_notes()?
            .into_iter()
            .map(|note| (note.path.clone(), note))
            .collect();

        let current = self.scan_notes()?;
        let mut stats = IndexStats::default();

        for note in &current {
            match previous.get(&note.path) {
                None => {
                    stats.added += 1;
                    if verbose {
                        println!("+ {}", note.path);
                    }
                }
                Some(old) if old != note => {
                    stats.modified += 1;
                    if verbose {
                        println!("~ {}", note.path);
                    }
                }
                Some(_) => stats.unchanged += 1,
            }
        }

        let current_paths: BTreeSet<&str> = current.iter().map(|n| n.path.as_str()).collect();
        for path in previous.keys() {
            if !current_paths.contains(path.as_str()) {
                stats.removed += 1;
                if verbose {
                    println!("- {}", path);
                }
            }
        }

        let file = IndexFile { notes: current };
        fs::write(self.data_path(INDEX_FILE), toml::to_string_pretty(&file)?)?;

        tracing::debug!(
            root = %self.root().display(),
            added = stats.added,
            modified = stats.modified,
            removed = stats.removed,
            "index refreshed"
        );
        Ok(stats)
    }

    fn scan_notes(&self) -> Result<Vec<IndexedNote>> {
        let extension = self.config().note.extension.as_str();
        let mut notes = Vec::new();

        let walker = WalkDir::new(self.root()).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if entry.path().extension().and_then(|e| e.to_str()) != Some(extension) {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(self.root()) else {
                continue;
            };
            let Some(path) = normalize_relative_path(rel) else {
                continue;
            };

            let metadata = entry.metadata().map_err(std::io::Error::from)?;
            notes.push(IndexedNote {
                path,
                size: metadata.len(),
                modified: DateTime::<Utc>::from(metadata.modified()?),
            });
        }

        notes.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(notes)
    }
}

fn normalize_relative_path(path: &Path) -> Option<String> {
    let parts: Vec<&str> = path
        .iter()
        .map(|part| part.to_str())
        .collect::<Option<_>>()?;
    Some(parts.join("/"))
}
