use std::io;
use std::path::{Path, PathBuf};

use crate::error::OpenError;
use crate::pagination::page_start;
use crate::provider::{EntryKind, EntryProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Directory,
    File,
}

/// One navigable screen: a directory listing or the lines of a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    entries: Vec<String>,
    selected: usize,
    kind: ViewKind,
    path: PathBuf,
    pub help_visible: bool,
}

impl View {
    pub fn open<P: EntryProvider + ?Sized>(provider: &P, path: &Path) -> Result<Self, OpenError> {
        let (kind, entries) = read_entries(provider, path)?;
        Ok(Self {
            entries,
            selected: 0,
            kind,
            path: path.to_path_buf(),
            help_visible: kind == ViewKind::Directory,
        })
    }

    /// Builds a view from already-read entries.
    pub fn from_entries(kind: ViewKind, path: impl Into<PathBuf>, entries: Vec<String>) -> Self {
        Self {
            entries,
            selected: 0,
            kind,
            path: path.into(),
            help_visible: kind == ViewKind::Directory,
        }
    }

    /// Re-reads the entries in place. Selection is clamped, help flag kept.
    ///
    /// A path that switched between file and directory is an error and leaves
    /// the view as it was.
    pub fn refresh<P: EntryProvider + ?Sized>(&mut self, provider: &P) -> Result<(), OpenError> {
        let (kind, entries) = read_entries(provider, &self.path)?;
        if kind != self.kind {
            return Err(OpenError::KindChanged {
                path: self.path.clone(),
            });
        }
        self.entries = entries;
        self.selected = self.selected.min(self.last_index());
        Ok(())
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&str> {
        self.entries.get(self.selected).map(String::as_str)
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1).min(self.last_index());
    }

    pub fn jump_to_start(&mut self) {
        self.selected = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.selected = self.last_index();
    }

    pub fn page_up(&mut self, height: usize) {
        if let Some(start) = page_start(self.selected, height) {
            self.selected = start.saturating_sub(height);
        }
    }

    pub fn page_down(&mut self, height: usize) {
        if let Some(start) = page_start(self.selected, height) {
            self.selected = (start + height).min(self.last_index());
        }
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}

fn read_entries<P: EntryProvider + ?Sized>(
    provider: &P,
    path: &Path,
) -> Result<(ViewKind, Vec<String>), OpenError> {
    let io_err = |err: io::Error| OpenError::from_io(path, err);

    match provider.stat(path).map_err(io_err)? {
        EntryKind::Directory => {
            let entries = provider
                .list_dir(path)
                .map_err(io_err)?
                .into_iter()
                .filter(|entry| !entry.is_hidden() && entry.readable)
                .map(|entry| entry.name)
                .collect();
            Ok((ViewKind::Directory, entries))
        }
        EntryKind::File => {
            let bytes = provider.read_file(path).map_err(io_err)?;
            Ok((ViewKind::File, split_lines(&bytes)))
        }
    }
}

/// Splits on `'\n'` only; a trailing separator leaves a trailing empty line.
pub fn split_lines(bytes: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(bytes)
        .split('\n')
        .map(ToString::to_string)
        .collect()
}
