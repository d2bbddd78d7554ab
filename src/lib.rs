pub mod config;
pub mod error;
mod models;
pub mod search;
pub mod storage;

pub use config::ManagerConfig;
pub use error::ConfigError;
pub use models::{Author, Document, DocumentBuilder, DocumentEvent, DocumentId};
pub use search::SearchRequest;

use storage::memory::MemoryStorage;
use storage::DocumentStorage;
use tokio::sync::broadcast;
use tokio_stream::wrappers::BroadcastStream;
use tracing::debug;

pub struct DocumentManager<S: DocumentStorage = MemoryStorage> {
    storage: S,
    notification_tx: broadcast::Sender<DocumentEvent>,
}

impl DocumentManager<MemoryStorage> {
    pub fn new() -> Self {
        Self::with_config(&ManagerConfig::default())
    }

    pub fn with_config(config: &ManagerConfig) -> Self {
        Self::with_storage(MemoryStorage::new(), config)
    }
}

impl Default for DocumentManager<MemoryStorage> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DocumentStorage> DocumentManager<S> {
    pub fn with_storage(storage: S, config: &ManagerConfig) -> Self {
        let (notification_tx, _) = broadcast::channel(config.event_capacity);
        Self {
            storage,
            notification_tx,
        }
    }

    pub fn subscribe(&self) -> BroadcastStream<DocumentEvent> {
        BroadcastStream::new(self.notification_tx.subscribe())
    }

    /// Upserts `document`, assigning a fresh id when it has none.
    ///
    /// An existing record with the same id is replaced wholesale. `created`
    /// is stored exactly as supplied.
    pub fn save(&self, mut document: Document) -> Document {
        let id = document.id.get_or_insert_with(DocumentId::generate).clone();
        let replaced = self.storage.upsert(id.clone(), document.clone());

        let event = if replaced.is_some() {
            debug!(doc_id = %id, "Replaced stored document");
            DocumentEvent::Updated(document.clone())
        } else {
            debug!(doc_id = %id, "Inserted new document");
            DocumentEvent::Created(document.clone())
        };
        // No subscribers is not an error.
        let _ = self.notification_tx.send(event);

        document
    }

    pub fn find_by_id(&self, id: &DocumentId) -> Option<Document> {
        let document = self.storage.get(id);
        debug!(doc_id = %id, found = document.is_some(), "Looked up document");
        document
    }

    /// Returns every stored document satisfying `request`; `None` matches all.
    /// Result order is unspecified.
    pub fn search(&self, request: Option<&SearchRequest>) -> Vec<Document> {
        let documents = self.storage.documents();
        let total = documents.len();

        let results: Vec<Document> = match request {
            Some(request) if !request.is_unconstrained() => documents
                .into_iter()
                .filter(|doc| search::matches(doc, request))
                .collect(),
            _ => documents,
        };

        debug!(scanned = total, matched = results.len(), "Searched documents");
        results
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}
