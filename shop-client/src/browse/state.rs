use shared::{ListQuery, Page, Pagination, Product};

use crate::ClientError;

/// Lifecycle of the latest list request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowseStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// Cloneable record of a transport failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    /// Error variant name, see [`ClientError::kind`]
    pub kind: &'static str,
    pub message: String,
    pub status: Option<u16>,
    /// Sequence number of the request that failed
    pub request_seq: u64,
}

impl ErrorInfo {
    pub fn new(error: &ClientError, request_seq: u64) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
            status: error.status(),
            request_seq,
        }
    }
}

/// Read-only view of the browsing state
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseSnapshot {
    pub items: Vec<Product>,
    pub page: u32,
    pub total_pages: u32,
    pub status: BrowseStatus,
    pub last_error: Option<ErrorInfo>,
    pub filter: Option<String>,
    pub sort: Option<String>,
    pub total_items: u64,
    pub page_size: Option<u32>,
    pub request_seq: u64,
}

/// Mutable browsing state, owned by the controller
#[derive(Debug, Clone)]
pub(crate) struct BrowseState {
    /// Page of the displayed items
    pub page: u32,
    /// Page carried by the latest issued request
    pub requested_page: u32,
    pub page_size: Option<u32>,
    pub total_items: u64,
    pub total_pages: u32,
    pub filter: Option<String>,
    pub sort: Option<String>,
    /// Filter and sort the displayed items were fetched with
    applied_filter: Option<String>,
    applied_sort: Option<String>,
    pub items: Vec<Product>,
    pub request_seq: u64,
    pub status: BrowseStatus,
    pub last_error: Option<ErrorInfo>,
}

/// An issued request: the sequence number it must still match on arrival
#[derive(Debug, Clone)]
pub(crate) struct Ticket {
    pub seq: u64,
    pub query: ListQuery,
}

impl BrowseState {
    pub fn new(page_size: Option<u32>) -> Self {
        Self {
            page: 1,
            requested_page: 1,
            page_size,
            total_items: 0,
            total_pages: 1,
            filter: None,
            sort: None,
            applied_filter: None,
            applied_sort: None,
            items: Vec::new(),
            request_seq: 0,
            status: BrowseStatus::Idle,
            last_error: None,
        }
    }

    /// Issue a request for the current filter, sort and requested page
    pub fn issue(&mut self) -> Ticket {
        self.request_seq += 1;
        self.status = BrowseStatus::Loading;
        Ticket {
            seq: self.request_seq,
            query: ListQuery {
                page: self.requested_page,
                filter: self.filter.clone(),
                sort: self.sort.clone(),
            },
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.seq == self.request_seq
    }

    /// Drop filter and sort and go back to the first page, in one step
    pub fn reset_browse(&mut self) {
        self.filter = None;
        self.sort = None;
        self.requested_page = 1;
    }

    /// Apply a successful response to the current request.
    ///
    /// Returns `true` when the requested page lies past the last page of
    /// the response. `page` is then clamped but `items` hold the results
    /// of the out-of-range request, so the caller must fetch again.
    pub fn commit(&mut self, query: &ListQuery, page: Page<Product>) -> bool {
        // Only when no probe established a page size
        let page_size = self
            .page_size
            .unwrap_or_else(|| u32::try_from(page.results.len()).unwrap_or(u32::MAX).max(1));
        let pagination = Pagination::new(query.page, page_size, page.count);

        self.total_items = pagination.total_items;
        self.total_pages = pagination.total_pages;
        self.page = pagination.page;
        self.requested_page = pagination.page;
        self.applied_filter = query.filter.clone();
        self.applied_sort = query.sort.clone();
        self.items = page.results;
        self.status = BrowseStatus::Ready;
        self.last_error = None;
        query.page != pagination.page
    }

    /// Record a failed response to the current request.
    ///
    /// Page, filter and sort go back to what the displayed items were
    /// fetched with, so the next request starts from the visible state.
    pub fn fail(&mut self, error: ErrorInfo) {
        self.requested_page = self.page;
        self.filter = self.applied_filter.clone();
        self.sort = self.applied_sort.clone();
        self.status = BrowseStatus::Failed;
        self.last_error = Some(error);
    }

    /// Change the page size and re-derive page count and page
    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = Some(page_size);
        let pagination = Pagination::new(self.page, page_size, self.total_items);
        self.total_pages = pagination.total_pages;
        self.page = pagination.page;
        self.requested_page = self.requested_page.clamp(1, self.total_pages);
    }

    pub fn snapshot(&self) -> BrowseSnapshot {
        BrowseSnapshot {
            items: self.items.clone(),
            page: self.page,
            total_pages: self.total_pages,
            status: self.status,
            last_error: self.last_error.clone(),
            filter: self.filter.clone(),
            sort: self.sort.clone(),
            total_items: self.total_items,
            page_size: self.page_size,
            request_seq: self.request_seq,
        }
    }
}
