//! Query parameters for list and search endpoints.
//!
//! Each type has a `Default` matching the upstream defaults and a
//! `to_query()` that renders it for the path. Search types shared by a
//! global and a per-desk endpoint leave the page unset, and the endpoint
//! supplies its own default page size.

use std::fmt;

use crate::query::{Pagination, Query};

/// Which requests to return, by the caller's relationship to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOwnership {
    /// Requests the caller reported.
    OwnedRequests,
    /// Requests the caller participates in.
    ParticipatedRequests,
    /// Requests shared with the given organization.
    Organization,
    /// Requests shared with any of the caller's organizations.
    AllOrganizations,
    /// Requests the caller is an approver on.
    Approver,
    /// All of the above.
    AllRequests,
}

impl fmt::Display for RequestOwnership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RequestOwnership::OwnedRequests => "OWNED_REQUESTS",
            RequestOwnership::ParticipatedRequests => "PARTICIPATED_REQUESTS",
            RequestOwnership::Organization => "ORGANIZATION",
            RequestOwnership::AllOrganizations => "ALL_ORGANIZATIONS",
            RequestOwnership::Approver => "APPROVER",
            RequestOwnership::AllRequests => "ALL_REQUESTS",
        })
    }
}

/// Open/closed filter for customer requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatusFilter {
    /// Only closed requests.
    Closed,
    /// Only open requests.
    Open,
    /// Both.
    All,
}

impl fmt::Display for RequestStatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RequestStatusFilter::Closed => "CLOSED_REQUESTS",
            RequestStatusFilter::Open => "OPEN_REQUESTS",
            RequestStatusFilter::All => "ALL_REQUESTS",
        })
    }
}

/// Approval filter for customer requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalStatusFilter {
    /// Requests awaiting the caller's approval.
    MyPending,
    /// Requests the caller already approved or declined.
    MyHistory,
}

impl fmt::Display for ApprovalStatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ApprovalStatusFilter::MyPending => "MY_PENDING_APPROVAL",
            ApprovalStatusFilter::MyHistory => "MY_HISTORY_APPROVAL",
        })
    }
}

/// Filters for listing the caller's customer requests.
#[derive(Debug, Clone, Default)]
pub struct CustomerRequestQuery {
    /// Approval filter.
    pub approval_status: Option<ApprovalStatusFilter>,
    /// Properties to expand.
    pub expand: Vec<String>,
    /// Organization to filter by (with `RequestOwnership::Organization`).
    pub organization_id: Option<u64>,
    /// Ownership filter.
    pub request_ownership: Option<RequestOwnership>,
    /// Open/closed filter.
    pub request_status: Option<RequestStatusFilter>,
    /// Request type filter.
    pub request_type_id: Option<u64>,
    /// Free-text search on summary and description.
    pub search_term: Option<String>,
    /// Service desk filter.
    pub service_desk_id: Option<u64>,
    /// Page to fetch.
    pub page: Pagination,
}

impl CustomerRequestQuery {
    /// Creates an unfiltered query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by free text.
    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Filters by service desk.
    pub fn with_service_desk(mut self, service_desk_id: u64) -> Self {
        self.service_desk_id = Some(service_desk_id);
        self
    }

    /// Filters by ownership.
    pub fn with_ownership(mut self, ownership: RequestOwnership) -> Self {
        self.request_ownership = Some(ownership);
        self
    }

    /// Filters by open/closed status.
    pub fn with_status(mut self, status: RequestStatusFilter) -> Self {
        self.request_status = Some(status);
        self
    }

    /// Sets the page.
    pub fn with_page(mut self, page: Pagination) -> Self {
        self.page = page;
        self
    }

    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .opt("approvalStatus", self.approval_status)
            .list("expand", &self.expand)
            .opt("organizationId", self.organization_id)
            .opt("requestOwnership", self.request_ownership)
            .opt("requestStatus", self.request_status)
            .opt("requestTypeId", self.request_type_id)
            .opt("searchTerm", self.search_term.as_deref())
            .opt("serviceDeskId", self.service_desk_id)
            .page(self.page)
    }
}

/// Knowledge base article search.
#[derive(Debug, Clone)]
pub struct ArticleQuery {
    /// Search text.
    pub query: String,
    /// Wrap matches in `@@@hl@@@term@@@endhl@@@` markers.
    pub highlight: bool,
    /// Page to fetch; `None` uses the endpoint's default.
    pub page: Option<Pagination>,
}

impl ArticleQuery {
    /// Searches for `query` without highlighting.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            highlight: false,
            page: None,
        }
    }

    /// Enables or disables highlighting.
    pub fn with_highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    /// Sets the page.
    pub fn with_page(mut self, page: Pagination) -> Self {
        self.page = Some(page);
        self
    }

    pub(crate) fn to_query(&self, default_page: Pagination) -> Query {
        Query::new()
            .param("query", &self.query)
            .param("highlight", self.highlight)
            .page(self.page.unwrap_or(default_page))
    }
}

/// Comment listing filters.
#[derive(Debug, Clone)]
pub struct CommentQuery {
    /// Properties to expand.
    pub expand: Vec<String>,
    /// Include internal comments.
    pub internal: bool,
    /// Include public comments.
    pub public: bool,
    /// Page to fetch.
    pub page: Pagination,
}

impl Default for CommentQuery {
    fn default() -> Self {
        Self {
            expand: Vec::new(),
            internal: true,
            public: true,
            page: Pagination::default(),
        }
    }
}

impl CommentQuery {
    /// Returns both internal and public comments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only public comments.
    pub fn public_only(mut self) -> Self {
        self.internal = false;
        self.public = true;
        self
    }

    /// Only internal comments.
    pub fn internal_only(mut self) -> Self {
        self.internal = true;
        self.public = false;
        self
    }

    /// Sets the page.
    pub fn with_page(mut self, page: Pagination) -> Self {
        self.page = page;
        self
    }

    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .list("expand", &self.expand)
            .param("internal", self.internal)
            .param("public", self.public)
            .page(self.page)
    }
}

/// Request type listing filters.
#[derive(Debug, Clone, Default)]
pub struct RequestTypeQuery {
    /// Matched against name and description.
    pub search_query: Option<String>,
    /// Properties to expand.
    pub expand: Vec<String>,
    /// Request type group (per service desk only).
    pub group_id: Option<u64>,
    /// Page to fetch; `None` uses the endpoint's default.
    pub page: Option<Pagination>,
}

impl RequestTypeQuery {
    /// Creates an unfiltered query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by name or description.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search_query = Some(search.into());
        self
    }

    /// Filters by request type group.
    pub fn with_group(mut self, group_id: u64) -> Self {
        self.group_id = Some(group_id);
        self
    }

    /// Sets the page.
    pub fn with_page(mut self, page: Pagination) -> Self {
        self.page = Some(page);
        self
    }

    pub(crate) fn to_query(&self, default_page: Pagination) -> Query {
        Query::new()
            .page(self.page.unwrap_or(default_page))
            .list("expand", &self.expand)
            .opt("groupId", self.group_id)
            .opt("searchQuery", self.search_query.as_deref())
    }
}
