//! Query-string building for endpoint paths.
//!
//! Endpoint wrappers serialize their parameters here and append the result
//! to the relative path before handing it to the dispatcher, which performs
//! no further encoding.

use std::fmt::Display;

/// Ordered list of query parameters.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    pub fn param(mut self, key: &str, value: impl Display) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Appends a parameter only when a value is present.
    pub fn opt(self, key: &str, value: Option<impl Display>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    /// Appends a comma-joined list, skipping it when empty.
    pub fn list<S: AsRef<str>>(self, key: &str, values: &[S]) -> Self {
        if values.is_empty() {
            return self;
        }
        let joined = values
            .iter()
            .map(|v| v.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        self.param(key, joined)
    }

    /// Appends `start` and `limit`.
    pub fn page(self, page: Pagination) -> Self {
        self.param("start", page.start).param("limit", page.limit)
    }

    /// Returns true when no parameters were added.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Renders `k=v&k=v` with percent-encoded keys and values.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Appends the encoded query to `path`, adding `?` only when non-empty.
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, self.encode())
        }
    }
}

/// `start`/`limit` pagination parameters passed through to Jira.
///
/// The client never walks pages itself; callers advance `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Zero-based index of the first item.
    pub start: u32,
    /// Maximum number of items per page.
    pub limit: u32,
}

impl Pagination {
    /// Default page size used by most Service Desk endpoints.
    pub const DEFAULT_LIMIT: u32 = 50;

    /// Creates pagination with an explicit start and limit.
    pub fn new(start: u32, limit: u32) -> Self {
        Self { start, limit }
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the starting index.
    #[must_use]
    pub fn with_start(mut self, start: u32) -> Self {
        self.start = start;
        self
    }

    /// Returns the pagination for the page following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            start: self.start.saturating_add(self.limit),
            limit: self.limit,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            start: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_query_leaves_path_untouched() {
        assert_eq!(Query::new().append_to("info"), "info");
    }

    #[test]
    fn test_params_are_percent_encoded() {
        let q = Query::new().param("query", "printer & toner").param("highlight", true);
        assert_eq!(
            q.append_to("knowledgebase/article"),
            "knowledgebase/article?query=printer%20%26%20toner&highlight=true"
        );
    }

    #[test]
    fn test_optional_and_list_params() {
        let q = Query::new()
            .opt("searchTerm", None::<&str>)
            .opt("serviceDeskId", Some(10))
            .list("expand", &["participant", "status"])
            .list::<&str>("empty", &[]);
        assert_eq!(q.encode(), "serviceDeskId=10&expand=participant%2Cstatus");
    }

    #[test]
    fn test_page_params() {
        let q = Query::new().page(Pagination::default().with_start(100));
        assert_eq!(q.encode(), "start=100&limit=50");
    }

    #[test]
    fn test_pagination_next() {
        let page = Pagination::new(0, 25).next().next();
        assert_eq!(page, Pagination::new(50, 25));
    }
}
