use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};

use menu_core::ViewKind;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher, recommended_watcher};

#[derive(Debug)]
pub enum WatchMessage {
    Changed,
    Error(String),
}

/// Watches a directory's direct children, or a single file, and posts a
/// message for every change that can alter what the view lists.
///
/// Files are watched through their parent directory so a save that renames a
/// new file into place keeps being reported.
pub fn start(
    path: &Path,
    kind: ViewKind,
) -> notify::Result<(RecommendedWatcher, Receiver<WatchMessage>)> {
    let (tx, rx) = mpsc::channel();

    let (watch_root, only) = match (kind, path.parent()) {
        (ViewKind::File, Some(parent)) => (parent.to_path_buf(), Some(path.to_path_buf())),
        _ => (path.to_path_buf(), None),
    };

    let mut watcher = recommended_watcher(move |result: notify::Result<Event>| match result {
        Ok(event) => {
            if !is_relevant(&event.kind) {
                return;
            }
            let matches_target = only.as_ref().is_none_or(|file| {
                event
                    .paths
                    .iter()
                    .any(|event_path| same_file(event_path, file))
            });
            if !matches_target {
                return;
            }
            let _ = tx.send(WatchMessage::Changed);
        }
        Err(err) => {
            let _ = tx.send(WatchMessage::Error(err.to_string()));
        }
    })?;

    watcher.watch(&watch_root, RecursiveMode::NonRecursive)?;
    Ok((watcher, rx))
}

fn is_relevant(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    )
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }

    let ca = canonical(a);
    ca.is_some() && ca == canonical(b)
}

fn canonical(path: &Path) -> Option<PathBuf> {
    fs::canonicalize(path).ok()
}
