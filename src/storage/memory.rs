use crate::models::{Document, DocumentId};
use crate::storage::DocumentStorage;
use dashmap::DashMap;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct MemoryStorage {
    documents: Arc<DashMap<DocumentId, Document>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStorage for MemoryStorage {
    fn upsert(&self, id: DocumentId, document: Document) -> Option<Document> {
        self.documents.insert(id, document)
    }

    fn get(&self, id: &DocumentId) -> Option<Document> {
        self.documents.get(id).map(|doc| doc.clone())
    }

    // Shards are locked one at a time; saves racing the copy may or may not show up.
    fn documents(&self) -> Vec<Document> {
        self.documents
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn len(&self) -> usize {
        self.documents.len()
    }
}
