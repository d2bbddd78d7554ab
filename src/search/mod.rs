use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

pub mod filter;

pub use filter::matches;

/// Criteria for [`crate::DocumentManager::search`].
///
/// Every field is optional; `None` places no constraint on that dimension.
/// A present but empty list matches nothing. Fields are combined with AND,
/// values inside a list with OR.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[getter(skip)]
    title_prefixes: Option<Vec<String>>,
    #[getter(skip)]
    contains_contents: Option<Vec<String>>,
    #[getter(skip)]
    author_ids: Option<Vec<String>>,
    created_from: Option<DateTime<Utc>>,
    created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::default()
    }

    pub fn title_prefixes(&self) -> Option<&[String]> {
        self.title_prefixes.as_deref()
    }

    pub fn contains_contents(&self) -> Option<&[String]> {
        self.contains_contents.as_deref()
    }

    pub fn author_ids(&self) -> Option<&[String]> {
        self.author_ids.as_deref()
    }

    /// True when no dimension is constrained.
    pub fn is_unconstrained(&self) -> bool {
        self.title_prefixes.is_none()
            && self.contains_contents.is_none()
            && self.author_ids.is_none()
            && self.created_from.is_none()
            && self.created_to.is_none()
    }
}

#[derive(Debug, Default)]
pub struct SearchRequestBuilder {
    request: SearchRequest,
}

fn collect<I, S>(values: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Some(values.into_iter().map(Into::into).collect())
}

impl SearchRequestBuilder {
    pub fn title_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.title_prefixes = collect(prefixes);
        self
    }

    pub fn contains_contents<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.contains_contents = collect(keywords);
        self
    }

    pub fn author_ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.author_ids = collect(ids);
        self
    }

    pub fn created_from(mut self, from: DateTime<Utc>) -> Self {
        self.request.created_from = Some(from);
        self
    }

    pub fn created_to(mut self, to: DateTime<Utc>) -> Self {
        self.request.created_to = Some(to);
        self
    }

    pub fn build(self) -> SearchRequest {
        self.request
    }
}
