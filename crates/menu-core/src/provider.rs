use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub readable: bool,
}

impl DirEntryInfo {
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Filesystem surface the navigator reads through.
///
/// `list_dir` returns entries in the order they should be shown; views never
/// reorder them.
pub trait EntryProvider {
    fn stat(&self, path: &Path) -> io::Result<EntryKind>;
    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>>;
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// `std::fs` backed provider. Directory entries come back sorted by name.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProvider;

impl EntryProvider for FsProvider {
    fn stat(&self, path: &Path) -> io::Result<EntryKind> {
        let meta = fs::metadata(path)?;
        if meta.is_dir() {
            Ok(EntryKind::Directory)
        } else {
            Ok(EntryKind::File)
        }
    }

    fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            // follows symlinks; a dangling link counts as unreadable
            let readable = fs::metadata(entry.path())
                .map(|meta| owner_can_read(&meta))
                .unwrap_or(false);
            entries.push(DirEntryInfo { name, readable });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

#[cfg(unix)]
fn owner_can_read(meta: &fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o400 != 0
}

#[cfg(not(unix))]
fn owner_can_read(_meta: &fs::Metadata) -> bool {
    true
}
