//! Common traits and envelopes for Merit list responses

use serde::Deserialize;

/// Cursor block of a list response (`paging.cursors`)
#[derive(Deserialize, Debug, Default, Clone)]
pub struct Cursors {
    pub after: Option<String>,
}

/// Page info block of a list response (`paging.pageInfo`)
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub has_next_page: bool,
}

/// Pagination metadata from the Merit API (shared across resources)
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    #[serde(default)]
    pub cursors: Cursors,
    #[serde(default)]
    pub page_info: PageInfo,
}

impl Paging {
    /// Whether the server reports another page
    pub fn has_next_page(&self) -> bool {
        self.page_info.has_next_page
    }

    /// Continuation cursor for the next request
    pub fn after(&self) -> Option<&str> {
        self.cursors.after.as_deref()
    }
}

/// Trait for API responses that contain cursor-paginated data
///
/// Implement this trait for any list response struct to enable use with
/// `OrgSession::fetch_pages()`.
pub trait PaginatedResponse<T> {
    /// Consume self and return the items
    fn into_items(self) -> Vec<T>;
    /// Get reference to pagination metadata
    fn paging(&self) -> Option<&Paging>;
}
