use std::sync::Arc;

use parking_lot::Mutex;
use shared::{GenreChoice, ListQuery, Page, Product};
use tokio::sync::OnceCell;

use super::state::{BrowseSnapshot, BrowseState, ErrorInfo, Ticket};
use crate::{BrowseError, ClientConfig, ClientResult, StoreApi};

/// What happened to the response of one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Response merged into the state
    Applied,
    /// Request failed; `status` is `Failed` and `last_error` is set
    Failed,
    /// A newer request was issued meanwhile; the response was dropped
    Discarded,
}

/// Browsing state controller.
///
/// Every operation issues a list request tagged with a fresh sequence
/// number. A response is merged only if its number is still the latest
/// one, so overlapping requests settle on the last one issued no matter
/// which order they complete in.
///
/// The state lock is never held across an `.await`: operations can be
/// polled concurrently on a single task.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use shop_client::{BrowseController, ClientConfig};
///
/// # async fn example() -> Result<(), shop_client::ClientError> {
/// let config = ClientConfig::from_env()?;
/// let api = Arc::new(config.build_http_client()?);
/// let browse = BrowseController::from_config(api, &config);
///
/// browse.initialize().await;
/// browse.set_filter(Some("FA")).await;
/// browse.set_sort("price").await;
/// let view = browse.result();
/// println!("page {} of {}", view.page, view.total_pages);
/// # Ok(())
/// # }
/// ```
pub struct BrowseController<A: StoreApi> {
    api: Arc<A>,
    state: Mutex<BrowseState>,
    genres: OnceCell<Vec<GenreChoice>>,
}

impl<A: StoreApi> BrowseController<A> {
    /// Create a controller that probes the page size on `initialize`
    pub fn new(api: Arc<A>) -> Self {
        Self::with_state(api, BrowseState::new(None))
    }

    /// Create a controller with a known page size
    pub fn with_page_size(api: Arc<A>, page_size: u32) -> Result<Self, BrowseError> {
        if page_size == 0 {
            return Err(BrowseError::InvalidPageSize);
        }
        Ok(Self::with_state(api, BrowseState::new(Some(page_size))))
    }

    /// Create a controller using the configured page size, if any
    pub fn from_config(api: Arc<A>, config: &ClientConfig) -> Self {
        Self::with_state(api, BrowseState::new(config.page_size))
    }

    fn with_state(api: Arc<A>, state: BrowseState) -> Self {
        Self {
            api,
            state: Mutex::new(state),
            genres: OnceCell::new(),
        }
    }

    /// Load the first page of the unfiltered, unsorted list.
    ///
    /// Runs the page-size probe first when the page size is still unknown.
    pub async fn initialize(&self) -> FetchOutcome {
        let (ticket, needs_probe) = {
            let mut state = self.state.lock();
            state.reset_browse();
            (state.issue(), state.page_size.is_none())
        };

        if needs_probe && let Err(err) = self.probe_page_size().await {
            return match self.apply(&ticket, Err(err)) {
                Applied::Done(outcome) => outcome,
                Applied::Refetch(next) => self.fetch(next).await,
            };
        }

        self.fetch(ticket).await
    }

    /// Go to page `page` with the current filter and sort.
    ///
    /// Fails fast, without touching the state, when `page` is outside
    /// `[1, total_pages]`.
    pub async fn set_page(&self, page: u32) -> Result<FetchOutcome, BrowseError> {
        let ticket = {
            let mut state = self.state.lock();
            if page < 1 || page > state.total_pages {
                return Err(BrowseError::InvalidPage {
                    page,
                    total_pages: state.total_pages,
                });
            }
            state.requested_page = page;
            state.issue()
        };

        Ok(self.fetch(ticket).await)
    }

    /// Browse by `value`, or back to the full list when it is absent or
    /// blank. Both reset to the first page; clearing also drops the sort.
    pub async fn set_filter(&self, value: Option<&str>) -> FetchOutcome {
        let ticket = {
            let mut state = self.state.lock();
            match value.map(str::trim).filter(|v| !v.is_empty()) {
                Some(filter) => {
                    state.filter = Some(filter.to_string());
                    state.requested_page = 1;
                }
                None => state.reset_browse(),
            }
            state.issue()
        };

        self.fetch(ticket).await
    }

    /// Sort by `key`, combined with the current filter. Keeps the current
    /// page. A blank key clears the sort.
    pub async fn set_sort(&self, key: &str) -> FetchOutcome {
        let ticket = {
            let mut state = self.state.lock();
            let key = key.trim();
            state.sort = (!key.is_empty()).then(|| key.to_string());
            state.issue()
        };

        self.fetch(ticket).await
    }

    /// Replace the page size, re-deriving the page count and clamping the
    /// page. Does not fetch.
    pub fn reconfigure_page_size(&self, page_size: u32) -> Result<(), BrowseError> {
        if page_size == 0 {
            return Err(BrowseError::InvalidPageSize);
        }
        self.state.lock().set_page_size(page_size);
        tracing::debug!(page_size, "Page size reconfigured");
        Ok(())
    }

    /// Genre choices for the filter options, fetched once per controller
    pub async fn fetch_genre_choices(&self) -> ClientResult<Vec<GenreChoice>> {
        let genres = self
            .genres
            .get_or_try_init(|| async {
                let genres = self.api.genre_choices().await;
                if let Err(e) = &genres {
                    tracing::warn!(error = %e, "Failed to fetch genre choices");
                }
                genres
            })
            .await?;
        Ok(genres.clone())
    }

    /// Snapshot of the current state
    pub fn result(&self) -> BrowseSnapshot {
        self.state.lock().snapshot()
    }

    /// Learn the server-side page size from page 1 of the plain list
    async fn probe_page_size(&self) -> ClientResult<()> {
        let page = self.api.list_products(&ListQuery::page(1)).await?;
        let mut state = self.state.lock();
        if state.page_size.is_none() && !page.results.is_empty() {
            let page_size = u32::try_from(page.results.len()).unwrap_or(u32::MAX);
            state.page_size = Some(page_size);
            tracing::debug!(page_size, "Probed page size");
        }
        Ok(())
    }

    async fn fetch(&self, mut ticket: Ticket) -> FetchOutcome {
        loop {
            let result = self.api.list_products(&ticket.query).await;
            match self.apply(&ticket, result) {
                Applied::Done(outcome) => return outcome,
                Applied::Refetch(next) => ticket = next,
            }
        }
    }

    fn apply(&self, ticket: &Ticket, result: ClientResult<Page<Product>>) -> Applied {
        let mut state = self.state.lock();
        if !state.is_current(ticket) {
            tracing::debug!(
                seq = ticket.seq,
                latest = state.request_seq,
                "Discarding stale list response"
            );
            return Applied::Done(FetchOutcome::Discarded);
        }

        match result {
            Ok(page) => {
                if state.commit(&ticket.query, page) {
                    let next = state.issue();
                    tracing::debug!(
                        requested = ticket.query.page,
                        page = next.query.page,
                        "Requested page past the end, fetching last page"
                    );
                    return Applied::Refetch(next);
                }
                tracing::info!(
                    seq = ticket.seq,
                    page = state.page,
                    total_pages = state.total_pages,
                    filter = ?state.filter,
                    sort = ?state.sort,
                    "Product list loaded"
                );
                Applied::Done(FetchOutcome::Applied)
            }
            Err(e) => {
                tracing::warn!(seq = ticket.seq, error = %e, "Product list request failed");
                state.fail(ErrorInfo::new(&e, ticket.seq));
                Applied::Done(FetchOutcome::Failed)
            }
        }
    }
}

/// Result of merging one response
enum Applied {
    Done(FetchOutcome),
    /// The page was clamped; fetch it under a new ticket
    Refetch(Ticket),
}
