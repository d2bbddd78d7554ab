use anyhow::Result;
use chrono::{DateTime, Utc};
use document_manager::{
    Author, Document, DocumentEvent, DocumentId, DocumentManager, ManagerConfig, SearchRequest,
};
use dotenvy::dotenv;
use futures::StreamExt;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenv().ok();

    let config = ManagerConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let manager = Arc::new(DocumentManager::with_config(&config));

    let mut notification_stream = manager.subscribe();
    let listener = tokio::spawn(async move {
        while let Some(Ok(event)) = notification_stream.next().await {
            match event {
                DocumentEvent::Created(doc) => {
                    info!(doc_id = ?doc.id, title = ?doc.title, "Document created");
                }
                DocumentEvent::Updated(doc) => {
                    info!(doc_id = ?doc.id, title = ?doc.title, "Document updated");
                }
            }
        }
    });

    manager.save(
        Document::builder()
            .id(DocumentId::new("1"))
            .title("Java Basics")
            .content("Learn the basics of Java programming.")
            .author(Author::new("a1", "John Doe"))
            .created("2023-01-01T10:00:00Z".parse::<DateTime<Utc>>()?)
            .build(),
    );
    manager.save(
        Document::builder()
            .id(DocumentId::new("2"))
            .title("Advanced Java")
            .content("Master advanced Java concepts.")
            .author(Author::new("a2", "Jane Smith"))
            .created("2023-06-01T10:00:00Z".parse::<DateTime<Utc>>()?)
            .build(),
    );

    let request = SearchRequest::builder()
        .title_prefixes(["Java"])
        .author_ids(["a1"])
        .created_from("2022-12-31T00:00:00Z".parse::<DateTime<Utc>>()?)
        .build();

    let results = manager.search(Some(&request));
    println!("Search results for {}:", serde_json::to_string(&request)?);
    if results.is_empty() {
        println!("No documents found.");
    } else {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }

    // Closing the channel ends the listener loop.
    drop(manager);
    listener.await?;

    Ok(())
}
