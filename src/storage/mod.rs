use crate::models::{Document, DocumentId};

pub trait DocumentStorage: Send + Sync {
    /// Inserts or fully replaces the record keyed by the document's id,
    /// returning the replaced record if there was one. The id must be set.
    fn upsert(&self, id: DocumentId, document: Document) -> Option<Document>;
    fn get(&self, id: &DocumentId) -> Option<Document>;
    fn documents(&self) -> Vec<Document>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub mod memory;
