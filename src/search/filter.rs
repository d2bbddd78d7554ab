use crate::models::Document;
use crate::search::SearchRequest;

/// Whether `document` satisfies every constrained dimension of `request`.
pub fn matches(document: &Document, request: &SearchRequest) -> bool {
    if let Some(prefixes) = request.title_prefixes() {
        if !matches_prefixes(document.title.as_deref(), prefixes) {
            return false;
        }
    }
    if let Some(keywords) = request.contains_contents() {
        if !matches_contents(document.content.as_deref(), keywords) {
            return false;
        }
    }
    if let Some(author_ids) = request.author_ids() {
        let author_id = document.author.as_ref().map(|author| author.id.as_str());
        if !author_id.is_some_and(|id| author_ids.iter().any(|wanted| wanted == id)) {
            return false;
        }
    }
    if let Some(from) = request.created_from() {
        if !document.created.is_some_and(|created| created >= *from) {
            return false;
        }
    }
    if let Some(to) = request.created_to() {
        if !document.created.is_some_and(|created| created <= *to) {
            return false;
        }
    }

    true
}

fn matches_prefixes(title: Option<&str>, prefixes: &[String]) -> bool {
    title.is_some_and(|title| prefixes.iter().any(|prefix| title.starts_with(prefix.as_str())))
}

fn matches_contents(content: Option<&str>, keywords: &[String]) -> bool {
    content.is_some_and(|content| keywords.iter().any(|keyword| content.contains(keyword.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Author;
    use anyhow::Result;
    use chrono::{DateTime, ParseError, Utc};

    fn at(timestamp: &str) -> Result<DateTime<Utc>, ParseError> {
        timestamp.parse()
    }

    fn java_basics() -> Result<Document> {
        Ok(Document::builder()
            .title("Java Basics")
            .content("Learn the basics of Java programming.")
            .author(Author::new("a1", "John Doe"))
            .created(at("2023-01-01T10:00:00Z")?)
            .build())
    }

    #[test]
    fn test_title_prefix_is_anchored_and_case_sensitive() -> Result<()> {
        let doc = java_basics()?;
        let advanced = Document::builder().title("Advanced Java").build();

        let java = SearchRequest::builder().title_prefixes(["Java"]).build();
        assert!(matches(&doc, &java));
        assert!(!matches(&advanced, &java));

        let lower = SearchRequest::builder().title_prefixes(["java"]).build();
        assert!(!matches(&doc, &lower));

        let any = SearchRequest::builder()
            .title_prefixes(["Rust", "Advanced"])
            .build();
        assert!(matches(&advanced, &any));
        Ok(())
    }

    #[test]
    fn test_missing_title_never_matches_prefix_filter() {
        let untitled = Document::builder().content("body").build();
        let request = SearchRequest::builder().title_prefixes([""]).build();
        assert!(!matches(&untitled, &request));
    }

    #[test]
    fn test_content_keyword_is_substring() -> Result<()> {
        let doc = java_basics()?;

        let hit = SearchRequest::builder()
            .contains_contents(["Python", "basics of"])
            .build();
        assert!(matches(&doc, &hit));

        let miss = SearchRequest::builder().contains_contents(["BASICS"]).build();
        assert!(!matches(&doc, &miss));

        let no_content = Document::builder().title("Java").build();
        assert!(!matches(&no_content, &hit));
        Ok(())
    }

    #[test]
    fn test_author_filter() -> Result<()> {
        let doc = java_basics()?;

        let hit = SearchRequest::builder().author_ids(["a2", "a1"]).build();
        assert!(matches(&doc, &hit));

        let miss = SearchRequest::builder().author_ids(["a2"]).build();
        assert!(!matches(&doc, &miss));

        let anonymous = Document::builder().title("Java").build();
        assert!(!matches(&anonymous, &hit));
        Ok(())
    }

    #[test]
    fn test_created_bounds_are_inclusive() -> Result<()> {
        let doc = java_basics()?;
        let created = at("2023-01-01T10:00:00Z")?;

        let exact = SearchRequest::builder()
            .created_from(created)
            .created_to(created)
            .build();
        assert!(matches(&doc, &exact));

        let only_from = SearchRequest::builder()
            .created_from(at("2023-01-01T10:00:01Z")?)
            .build();
        assert!(!matches(&doc, &only_from));

        let only_to = SearchRequest::builder()
            .created_to(at("2023-01-01T09:59:59Z")?)
            .build();
        assert!(!matches(&doc, &only_to));

        let undated = Document::builder().title("Java").build();
        let open_range = SearchRequest::builder()
            .created_from(at("2000-01-01T00:00:00Z")?)
            .build();
        assert!(!matches(&undated, &open_range));
        Ok(())
    }

    #[test]
    fn test_empty_list_matches_nothing() -> Result<()> {
        let doc = java_basics()?;
        let empty_prefixes = SearchRequest::builder()
            .title_prefixes(Vec::<String>::new())
            .build();
        assert!(!matches(&doc, &empty_prefixes));

        let empty_authors = SearchRequest::builder()
            .author_ids(Vec::<String>::new())
            .build();
        assert!(!matches(&doc, &empty_authors));
        Ok(())
    }

    #[test]
    fn test_unconstrained_request_matches_anything() -> Result<()> {
        assert!(matches(&Document::default(), &SearchRequest::default()));
        assert!(matches(&java_basics()?, &SearchRequest::default()));
        Ok(())
    }

    #[test]
    fn test_dimensions_are_combined_with_and() -> Result<()> {
        let doc = java_basics()?;
        let request = SearchRequest::builder()
            .title_prefixes(["Java"])
            .author_ids(["a2"])
            .build();
        assert!(!matches(&doc, &request));
        Ok(())
    }
}
