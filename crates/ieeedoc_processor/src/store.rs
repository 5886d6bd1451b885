/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Local persistence of the working paper.
//!
//! The paper lives in a small key-value blob store under two keys:
//! [`DOCUMENT_KEY`] holds the JSON paper and [`ACTIVE_SECTION_KEY`] the id of
//! the last viewed section. Loading never fails: a missing key or an
//! unreadable document falls back to the built-in template.
//!
//! Saves are debounced by [`Autosave`]: a burst of edits results in one
//! write once the editor has been quiet for the configured interval.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use ieeedoc_core::{embedded, Editor, PaperData};

use crate::io::{export_json, import_json};
use crate::ProcessorError;

pub const DOCUMENT_KEY: &str = "document";
pub const ACTIVE_SECTION_KEY: &str = "activeSectionId";

/// A string blob store.
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, ProcessorError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ProcessorError>;
    fn remove(&mut self, key: &str) -> Result<(), ProcessorError>;
}

/// In-memory store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ProcessorError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ProcessorError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), ProcessorError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// One file per key in a directory.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> Result<PathBuf, ProcessorError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ProcessorError::StoreError {
                key: key.to_string(),
                message: "keys must be ASCII letters, digits, '-' or '_'".to_string(),
            });
        }
        Ok(self.dir.join(key))
    }
}

impl BlobStore for DirStore {
    fn get(&self, key: &str) -> Result<Option<String>, ProcessorError> {
        let path = self.path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ProcessorError> {
        let path = self.path(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(path, value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), ProcessorError> {
        let path = self.path(key)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Load the stored paper and active section.
///
/// Falls back to the template (and its first section) when either key is
/// missing or the stored document does not parse.
pub fn load<S: BlobStore>(store: &S) -> Editor {
    let document = store.get(DOCUMENT_KEY).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not read stored document");
        None
    });
    let active = store.get(ACTIVE_SECTION_KEY).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not read active section");
        None
    });

    let (Some(document), Some(active)) = (document, active) else {
        tracing::debug!("no stored paper, starting from template");
        return Editor::new(embedded::template());
    };

    match import_json(&document) {
        Ok(paper) => Editor::with_active_section(paper, Some(active)),
        Err(e) => {
            tracing::warn!(error = %e, "stored document is unreadable, starting from template");
            Editor::new(embedded::template())
        }
    }
}

/// Store the paper and active section.
///
/// A paper without sections stores an empty active section id, so both
/// keys are always present after a save.
pub fn save<S: BlobStore>(store: &mut S, editor: &Editor) -> Result<(), ProcessorError> {
    store.set(DOCUMENT_KEY, &export_json(editor.snapshot())?)?;
    store.set(ACTIVE_SECTION_KEY, editor.active_section_id().unwrap_or_default())
}

/// Remove both keys. Used by reset.
pub fn clear<S: BlobStore>(store: &mut S) -> Result<(), ProcessorError> {
    store.remove(DOCUMENT_KEY)?;
    store.remove(ACTIVE_SECTION_KEY)
}

/// Replace the stored paper with `paper`, keeping the active section when
/// it still exists.
pub fn replace<S: BlobStore>(store: &mut S, paper: PaperData) -> Result<Editor, ProcessorError> {
    let active = store.get(ACTIVE_SECTION_KEY)?;
    let editor = Editor::with_active_section(paper, active);
    save(store, &editor)?;
    Ok(editor)
}

/// Debounces saves: at most one write per quiet period.
#[derive(Debug, Clone)]
pub struct Autosave {
    interval: Duration,
    last_change: Option<Instant>,
}

impl Default for Autosave {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl Autosave {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_change: None,
        }
    }

    /// Record a change at `now`. Restarts the quiet period.
    pub fn touch(&mut self, now: Instant) {
        self.last_change = Some(now);
    }

    pub fn is_dirty(&self) -> bool {
        self.last_change.is_some()
    }

    /// Whether there are unsaved changes and the editor has been quiet for
    /// the whole interval.
    pub fn due(&self, now: Instant) -> bool {
        self.last_change
            .is_some_and(|changed| now.saturating_duration_since(changed) >= self.interval)
    }

    /// Save if [`Autosave::due`]. Returns whether a write happened.
    pub fn flush_if_due<S: BlobStore>(
        &mut self,
        now: Instant,
        store: &mut S,
        editor: &Editor,
    ) -> Result<bool, ProcessorError> {
        if !self.due(now) {
            return Ok(false);
        }
        self.flush(store, editor)?;
        Ok(true)
    }

    /// Save now if there are unsaved changes.
    pub fn flush<S: BlobStore>(&mut self, store: &mut S, editor: &Editor) -> Result<(), ProcessorError> {
        if self.last_change.is_some() {
            save(store, editor)?;
            self.last_change = None;
        }
        Ok(())
    }
}
