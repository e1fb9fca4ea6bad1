use std::path::Path;

use tracing::{debug, info};

use crate::error::OpenError;
use crate::provider::EntryProvider;
use crate::view::{View, ViewKind};

/// Current view plus the views it was reached from.
///
/// `history` is a stack: descending pushes the view being left, going back
/// pops it and restores it exactly as it was.
#[derive(Debug)]
pub struct Navigator {
    current: View,
    history: Vec<View>,
    running: bool,
}

impl Navigator {
    pub fn new(root: View) -> Self {
        Self {
            current: root,
            history: Vec::new(),
            running: true,
        }
    }

    pub fn open<P: EntryProvider + ?Sized>(provider: &P, path: &Path) -> Result<Self, OpenError> {
        let root = View::open(provider, path)?;
        info!(path = %path.display(), entries = root.entries().len(), "opened root view");
        Ok(Self::new(root))
    }

    pub fn current(&self) -> &View {
        &self.current
    }

    pub fn current_mut(&mut self) -> &mut View {
        &mut self.current
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn is_root(&self) -> bool {
        self.history.is_empty()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Opens the selected entry of a directory view.
    ///
    /// Returns `Ok(false)` when there is nothing to descend into. On error the
    /// current view stays active.
    pub fn descend<P: EntryProvider + ?Sized>(&mut self, provider: &P) -> Result<bool, OpenError> {
        if self.current.kind() != ViewKind::Directory {
            return Ok(false);
        }
        let Some(name) = self.current.selected_entry() else {
            return Ok(false);
        };

        let child_path = self.current.path().join(name);
        let child = View::open(provider, &child_path)?;
        debug!(path = %child_path.display(), depth = self.history.len() + 1, "descend");
        let parent = std::mem::replace(&mut self.current, child);
        self.history.push(parent);
        Ok(true)
    }

    /// Returns `false` on the root view.
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        debug!(path = %previous.path().display(), depth = self.history.len(), "back");
        self.current = previous;
        true
    }
}
