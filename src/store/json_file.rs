//! One pretty-printed JSON file per document inside the data directory.

use super::{Document, DocumentStore};
use crate::errors::AppResult;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn path_of(&self, doc: Document) -> PathBuf {
        self.dir.join(doc.file_name())
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self, doc: Document) -> AppResult<Option<String>> {
        let path = self.path_of(doc);
        debug!("Loading {path:?}");
        match fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, doc: Document, contents: &str) -> AppResult<()> {
        let path = self.path_of(doc);
        debug!("Saving {path:?} ({} bytes)", contents.len());
        fs::write(path, contents)?;
        Ok(())
    }
}
