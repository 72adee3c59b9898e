use std::sync::atomic::{AtomicBool, Ordering};
use crate::errors::{LabelscopeError, LabelscopeResult};
use crate::services::paginated_fetcher::PaginatedFetcher;
use crate::services::query_builder::QueryBuilder;
use crate::services::status_resolver::StatusResolver;
use crate::structs::connection::Connection;
use crate::structs::filter_state::FilterState;
use crate::structs::issue::Issue;
use crate::structs::status::Status;
use crate::traits::tracker_transport::TrackerTransport;

/// A connected session. At most one refresh runs at a time; an overlapping
/// call fails with `RefreshInProgress` instead of starting a second walk.
pub struct ReportSession<T: TrackerTransport> {
    transport: T,
    connection: Connection,
    page_size: u32,
    busy: AtomicBool,
}

struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<T: TrackerTransport> ReportSession<T> {
    pub const fn new(transport: T, connection: Connection, page_size: u32) -> Self {
        Self {
            transport,
            connection,
            page_size,
            busy: AtomicBool::new(false),
        }
    }

    pub const fn connection(&self) -> &Connection {
        &self.connection
    }

    pub async fn statuses(&self) -> Vec<Status> {
        StatusResolver::resolve(&self.transport, &self.connection).await
    }

    pub fn query(&self, filters: &FilterState) -> String {
        QueryBuilder::build(&self.connection.project, filters)
    }

    pub async fn refresh(&self, filters: &FilterState) -> LabelscopeResult<Vec<Issue>> {
        self.refresh_with_progress(filters, |_, _| {}).await
    }

    pub async fn refresh_with_progress<F>(&self, filters: &FilterState, on_page: F) -> LabelscopeResult<Vec<Issue>>
    where
        F: FnMut(usize, usize) + Send,
    {
        if self.busy.swap(true, Ordering::AcqRel) {
            log::warn!("⏳ Refresh requested while another one is running");
            return Err(LabelscopeError::RefreshInProgress);
        }
        let _guard = BusyGuard(&self.busy);

        let query = self.query(filters);
        log::debug!("🔎 {}", query);

        PaginatedFetcher::fetch_all_with_progress(&self.transport, &self.connection, &query, self.page_size, on_page).await
    }
}
