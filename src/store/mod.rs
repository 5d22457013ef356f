//! Load/save of the three persisted documents (activities, taxonomy, templates).
//! Atomicity and corruption recovery are left to the backing store; the
//! session only ever reads a whole document or replaces it.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::errors::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Document {
    Activities,
    Taxonomy,
    Templates,
}

impl Document {
    pub const ALL: [Document; 3] = [
        Document::Activities,
        Document::Taxonomy,
        Document::Templates,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            Document::Activities => "activities.json",
            Document::Taxonomy => "taxonomy.json",
            Document::Templates => "templates.json",
        }
    }
}

/// Key-value style persistence of serialized documents.
pub trait DocumentStore {
    /// `Ok(None)` when the document has never been saved.
    fn load(&self, doc: Document) -> AppResult<Option<String>>;

    fn save(&self, doc: Document, contents: &str) -> AppResult<()>;
}

impl<T: DocumentStore + ?Sized> DocumentStore for &T {
    fn load(&self, doc: Document) -> AppResult<Option<String>> {
        (**self).load(doc)
    }

    fn save(&self, doc: Document, contents: &str) -> AppResult<()> {
        (**self).save(doc, contents)
    }
}

impl<T: DocumentStore + ?Sized> DocumentStore for Box<T> {
    fn load(&self, doc: Document) -> AppResult<Option<String>> {
        (**self).load(doc)
    }

    fn save(&self, doc: Document, contents: &str) -> AppResult<()> {
        (**self).save(doc, contents)
    }
}
