use super::{Document, DocumentStore};
use crate::errors::{AppError, AppResult};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// In-process store. Used by tests and by callers that do not want disk I/O.
#[derive(Default)]
pub struct MemoryStore {
    docs: RefCell<HashMap<Document, String>>,
    fail_saves: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(self, doc: Document, contents: impl Into<String>) -> Self {
        self.docs.borrow_mut().insert(doc, contents.into());
        self
    }

    /// Makes every subsequent `save` fail, to simulate an unwritable backend.
    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }

    pub fn get(&self, doc: Document) -> Option<String> {
        self.docs.borrow().get(&doc).cloned()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self, doc: Document) -> AppResult<Option<String>> {
        Ok(self.get(doc))
    }

    fn save(&self, doc: Document, contents: &str) -> AppResult<()> {
        if self.fail_saves.get() {
            return Err(AppError::Storage(format!(
                "{} is read-only",
                doc.file_name()
            )));
        }
        self.docs.borrow_mut().insert(doc, contents.to_string());
        Ok(())
    }
}
