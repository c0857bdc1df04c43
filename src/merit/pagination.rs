//! Cursor pagination shared by every listing operation

use log::{debug, error, warn};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::merit::session::OrgSession;
use crate::merit::traits::PaginatedResponse;

/// Query parameters of a listing call, in insertion order
///
/// Values are replaced in place, so the continuation cursor can be swapped
/// between pages without duplicating the key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams(Vec<(String, String)>);

impl ListParams {
    /// Start a parameter list with the page `limit`
    pub fn with_limit(limit: u32) -> Self {
        let mut params = Self::default();
        params.set("limit", limit.to_string());
        params
    }

    /// Set a parameter, replacing any previous value
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key.to_string(), value)),
        }
    }

    /// Set a parameter only when a value is given
    pub fn set_opt(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn as_pairs(&self) -> &[(String, String)] {
        &self.0
    }
}

impl OrgSession {
    /// Fetch pages from a cursor-paginated endpoint until `limit` items
    ///
    /// Pages are requested one after another. The loop stops when:
    /// - the accumulated item count reaches `limit` (the last page is kept
    ///   whole, so the result may exceed `limit` by up to one page)
    /// - the server reports no next page
    /// - a request fails: the items gathered so far are returned
    /// - the session page cap is hit
    ///
    /// # Type Parameters
    /// * `T` - The item type (e.g., Merit, MeritTemplate)
    /// * `R` - The response type that implements PaginatedResponse<T>
    pub async fn fetch_pages<T, R>(
        &self,
        path: &str,
        mut params: ListParams,
        limit: u32,
        error_context: &str,
    ) -> Vec<T>
    where
        R: DeserializeOwned + PaginatedResponse<T>,
    {
        let limit = limit as usize;
        let mut items: Vec<T> = Vec::new();

        for page_num in 1..=self.max_pages() {
            debug!("Fetching page {} of {}", page_num, error_context);

            let response = match self.get(path, params.as_pairs()).await {
                Ok(response) => response,
                Err(e) => {
                    error!(
                        "Failed to fetch {} (page {}): {}",
                        error_context, page_num, e
                    );
                    return items;
                }
            };

            if response.status() != StatusCode::OK {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                error!(
                    "Failed to fetch {} (page {}, status {}): {}",
                    error_context, page_num, status, body
                );
                return items;
            }

            let page: R = match response.json().await {
                Ok(page) => page,
                Err(e) => {
                    error!(
                        "Failed to parse {} (page {}): {}",
                        error_context, page_num, e
                    );
                    return items;
                }
            };

            let paging = page.paging().cloned().unwrap_or_default();
            let page_items = page.into_items();
            debug!("Page {} returned {} items", page_num, page_items.len());
            items.extend(page_items);

            if items.len() >= limit {
                return items;
            }

            if !paging.has_next_page() {
                return items;
            }

            params.set("starting_after", paging.after().unwrap_or_default());
        }

        warn!(
            "Stopped fetching {} after {} pages ({} items)",
            error_context,
            self.max_pages(),
            items.len()
        );
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merit::session::test_support::*;
    use crate::merit::traits::Paging;
    use serde::Deserialize;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ITEMS_PATH: &str = "/orgs/org-1/items";

    #[derive(Deserialize, Debug)]
    struct TestItem {
        id: String,
    }

    #[derive(Deserialize, Debug)]
    struct TestItemsResponse {
        #[serde(default)]
        items: Vec<TestItem>,
        #[serde(default)]
        paging: Option<Paging>,
    }

    impl PaginatedResponse<TestItem> for TestItemsResponse {
        fn into_items(self) -> Vec<TestItem> {
            self.items
        }

        fn paging(&self) -> Option<&Paging> {
            self.paging.as_ref()
        }
    }

    fn page_json(start: usize, count: usize, has_next: bool, after: &str) -> serde_json::Value {
        let items: Vec<serde_json::Value> = (start..start + count)
            .map(|i| serde_json::json!({ "id": format!("item-{}", i) }))
            .collect();
        serde_json::json!({
            "items": items,
            "paging": {
                "cursors": { "after": after },
                "pageInfo": { "hasNextPage": has_next }
            }
        })
    }

    /// Mount the first page (no cursor) of a listing
    async fn mount_first_page(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(ITEMS_PATH))
            .and(query_param_is_missing("starting_after"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    /// Mount the page returned for a given cursor
    async fn mount_page_after(server: &MockServer, cursor: &str, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(ITEMS_PATH))
            .and(query_param("starting_after", cursor))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    async fn fetch(session: &OrgSession, limit: u32) -> Vec<TestItem> {
        session
            .fetch_pages::<TestItem, TestItemsResponse>(
                ITEMS_PATH,
                ListParams::with_limit(limit),
                limit,
                "test items",
            )
            .await
    }

    #[test]
    fn test_list_params_set_replaces() {
        let mut params = ListParams::with_limit(100);
        params.set("starting_after", "c1");
        params.set("starting_after", "c2");
        assert_eq!(params.get("starting_after"), Some("c2"));
        assert_eq!(params.get("limit"), Some("100"));
        assert_eq!(params.as_pairs().len(), 2);
    }

    #[test]
    fn test_list_params_set_opt() {
        let mut params = ListParams::default();
        params.set_opt("merit_status", None);
        params.set_opt("recipient_email", Some("a@example.com"));
        assert_eq!(params.get("merit_status"), None);
        assert_eq!(params.get("recipient_email"), Some("a@example.com"));
    }

    #[tokio::test]
    async fn test_three_pages_reach_limit_exactly() {
        let mock_server = MockServer::start().await;
        mount_first_page(&mock_server, page_json(0, 40, true, "c1")).await;
        mount_page_after(&mock_server, "c1", page_json(40, 40, true, "c2")).await;
        mount_page_after(&mock_server, "c2", page_json(80, 20, false, "c3")).await;

        let session = test_session(&mock_server).await;
        let items = fetch(&session, 100).await;

        assert_eq!(items.len(), 100);
        assert_eq!(items[0].id, "item-0");
        assert_eq!(items[99].id, "item-99");
        assert_eq!(request_count(&mock_server, ITEMS_PATH).await, 3);
    }

    #[tokio::test]
    async fn test_last_page_may_overshoot_limit() {
        let mock_server = MockServer::start().await;
        mount_first_page(&mock_server, page_json(0, 60, true, "c1")).await;
        mount_page_after(&mock_server, "c1", page_json(60, 60, true, "c2")).await;

        let session = test_session(&mock_server).await;
        let items = fetch(&session, 100).await;

        assert_eq!(items.len(), 120);
        assert_eq!(request_count(&mock_server, ITEMS_PATH).await, 2);
    }

    #[tokio::test]
    async fn test_stops_when_no_next_page() {
        let mock_server = MockServer::start().await;
        mount_first_page(&mock_server, page_json(0, 5, false, "c1")).await;

        let session = test_session(&mock_server).await;
        let items = fetch(&session, 100).await;

        assert_eq!(items.len(), 5);
        assert_eq!(request_count(&mock_server, ITEMS_PATH).await, 1);
    }

    #[tokio::test]
    async fn test_missing_paging_means_single_page() {
        let mock_server = MockServer::start().await;
        mount_first_page(
            &mock_server,
            serde_json::json!({ "items": [{"id": "only"}] }),
        )
        .await;

        let session = test_session(&mock_server).await;
        let items = fetch(&session, 100).await;

        assert_eq!(items.len(), 1);
        assert_eq!(request_count(&mock_server, ITEMS_PATH).await, 1);
    }

    #[tokio::test]
    async fn test_failure_returns_partial_results() {
        let mock_server = MockServer::start().await;
        mount_first_page(&mock_server, page_json(0, 10, true, "c1")).await;
        Mock::given(method("GET"))
            .and(path(ITEMS_PATH))
            .and(query_param("starting_after", "c1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server).await;
        let items = fetch(&session, 100).await;

        assert_eq!(items.len(), 10);
        assert_eq!(request_count(&mock_server, ITEMS_PATH).await, 2);
    }

    #[tokio::test]
    async fn test_failure_on_first_page_returns_empty() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(ITEMS_PATH))
            .respond_with(ResponseTemplate::new(403))
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server).await;
        assert!(fetch(&session, 100).await.is_empty());
    }

    #[tokio::test]
    async fn test_page_cap_bounds_endless_next_page() {
        let mock_server = MockServer::start().await;
        // Every page claims there is another one
        Mock::given(method("GET"))
            .and(path(ITEMS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(0, 1, true, "same")))
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server).await.with_max_pages(5);
        let items = fetch(&session, 100).await;

        assert_eq!(items.len(), 5);
        assert_eq!(request_count(&mock_server, ITEMS_PATH).await, 5);
    }

    #[tokio::test]
    async fn test_cursor_and_limit_are_sent() {
        let mock_server = MockServer::start().await;
        mount_first_page(&mock_server, page_json(0, 1, true, "cursor-abc")).await;
        Mock::given(method("GET"))
            .and(path(ITEMS_PATH))
            .and(query_param("starting_after", "cursor-abc"))
            .and(query_param("limit", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_json(1, 2, false, "")))
            .mount(&mock_server)
            .await;

        let session = test_session(&mock_server).await;
        let items = fetch(&session, 3).await;
        assert_eq!(items.len(), 3);
    }
}
