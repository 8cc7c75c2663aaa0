use super::{BookStore, Snapshot};
use crate::book::AddressBook;
use crate::error::{ContactError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// File-backed store: the whole book lives in a single snapshot file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
                fs::create_dir_all(dir).map_err(ContactError::Io)
            }
            _ => Ok(()),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.path
            .with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()))
    }
}

impl BookStore for FileStore {
    fn load(&self) -> Result<AddressBook> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            // First run: nothing saved yet.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AddressBook::new()),
            Err(e) => return Err(ContactError::Io(e)),
        };
        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(ContactError::Serialization)?;
        snapshot.into_book()
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.ensure_parent()?;

        let content =
            serde_json::to_string_pretty(&Snapshot::of(book)).map_err(ContactError::Serialization)?;

        let tmp_file = self.tmp_path();
        fs::write(&tmp_file, content).map_err(ContactError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(ContactError::Io(e));
        }

        Ok(())
    }
}
