//! Remote data client
//!
//! Two read-only calls against the character API:
//!
//! - `GET {base}/character?page=..&name=..&status=..&species=..&gender=..`
//! - `GET {base}/character/{id}`
//!
//! A 404 on the list endpoint means "no matches" and comes back as an empty
//! page. A 404 on the detail endpoint becomes `CatalogError::NotFound`.
//! Anything else that is not a success is a failure with no partial data.

use std::sync::Arc;

use catalog_core::{
    CatalogError, CatalogResult, CharacterDetail, CharacterId, CharacterPage, FilterState,
};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::cache::CharacterCache;
use crate::config::ClientConfig;
use crate::outcome::{DetailOutcome, ListOutcome};
use crate::wire::{ApiCharacter, ApiPage};

// ============================================================================
// Catalog Client
// ============================================================================

/// HTTP client for the character API.
///
/// Cloning is cheap; clones share the connection pool and the character
/// cache.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    /// The underlying reqwest HTTP client
    client: Client,
    /// API root (e.g. `https://rickandmortyapi.com/api`)
    base_url: String,
    /// Detail cache shared by every clone
    cache: Arc<CharacterCache>,
}

impl CatalogClient {
    /// Create a client from configuration
    pub fn new(config: &ClientConfig) -> CatalogResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| CatalogError::internal(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            cache: Arc::new(CharacterCache::new(config.cache_ttl, config.cache_capacity)),
        })
    }

    /// API root this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The shared character cache
    pub fn cache(&self) -> &CharacterCache {
        &self.cache
    }

    /// Build the full URL for an API path
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // ========================================================================
    // Raw fetches
    // ========================================================================

    /// Fetch one page of characters matching `filter`.
    ///
    /// `page` is always sent; filters only when non-empty. No matches is an
    /// empty page, not an error.
    pub async fn fetch_page(&self, filter: &FilterState) -> CatalogResult<CharacterPage> {
        let query = filter.query_pairs();
        debug!(?query, "Fetching character page");

        let response = self
            .client
            .get(self.url("/character"))
            .query(&query)
            .send()
            .await
            .map_err(transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(?query, "No characters match filters");
            return Ok(CharacterPage::empty());
        }

        let body: ApiPage = decode_success(response).await?;
        let page = CharacterPage::from(body);
        debug!(
            count = page.characters.len(),
            total = page.info.total_count,
            pages = page.info.total_pages,
            "Fetched character page"
        );
        Ok(page)
    }

    /// Fetch one character by id, consulting the cache first
    pub async fn fetch_one(&self, id: CharacterId) -> CatalogResult<CharacterDetail> {
        if let Some(cached) = self.cache.get(id) {
            debug!(id, "Character served from cache");
            return Ok(cached);
        }

        debug!(id, "Fetching character");
        let response = self
            .client
            .get(self.url(&format!("/character/{id}")))
            .send()
            .await
            .map_err(transport_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            info!(id, "Character not found");
            return Err(CatalogError::not_found(format!("character {id}")));
        }

        let body: ApiCharacter = decode_success(response).await?;
        let detail = CharacterDetail::from(body);
        self.cache.insert(detail.clone());
        Ok(detail)
    }

    // ========================================================================
    // View-level loads
    // ========================================================================

    /// Load a list page as a render outcome
    pub async fn load_page(&self, filter: &FilterState) -> ListOutcome {
        let result = self.fetch_page(filter).await;
        if let Err(err) = &result {
            warn!(error = %err, "Failed to fetch characters");
        }
        ListOutcome::from_result(result)
    }

    /// Load one character as a render outcome
    pub async fn load_character(&self, id: CharacterId) -> DetailOutcome {
        let result = self.fetch_one(id).await;
        if let Err(err) = &result {
            if !err.is_not_found() {
                warn!(id, error = %err, "Failed to fetch character");
            }
        }
        DetailOutcome::from_result(result)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Turn a success response into `T`; any other status is an `Http` error
async fn decode_success<T: DeserializeOwned>(response: Response) -> CatalogResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Http {
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(transport_error)?;
    Ok(serde_json::from_str(&body)?)
}

/// Map a reqwest failure that produced no usable response
fn transport_error(err: reqwest::Error) -> CatalogError {
    let detail = if err.is_timeout() {
        "request timed out"
    } else if err.is_connect() {
        "unable to connect"
    } else {
        "request failed"
    };
    CatalogError::transport(format!("{detail}: {err}"))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::tests::{RICK_JSON, page_json};
    use catalog_core::Status;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Canned HTTP server: answers every request with the same response and
    /// records the request lines it saw.
    struct Stub {
        base_url: String,
        requests: Arc<Mutex<Vec<String>>>,
    }

    impl Stub {
        async fn start(status_line: &'static str, body: String) -> Self {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = listener.local_addr().unwrap();
            let requests = Arc::new(Mutex::new(Vec::new()));
            let seen = requests.clone();

            tokio::spawn(async move {
                while let Ok((mut socket, _)) = listener.accept().await {
                    let mut buf = vec![0u8; 8192];
                    let n = socket.read(&mut buf).await.unwrap_or(0);
                    let request = String::from_utf8_lossy(&buf[..n]).to_string();
                    if let Some(line) = request.lines().next() {
                        seen.lock().unwrap().push(line.to_string());
                    }

                    let response = format!(
                        "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                }
            });

            Self {
                base_url: format!("http://{addr}/api"),
                requests,
            }
        }

        fn client(&self) -> CatalogClient {
            let config = ClientConfig::default().with_base_url(self.base_url.clone());
            CatalogClient::new(&config).unwrap()
        }

        fn request_lines(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    /// Base URL of a port nothing listens on
    async fn dead_base_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/api")
    }

    #[tokio::test]
    async fn test_fetch_page_sends_page_and_filters() {
        let stub = Stub::start("200 OK", page_json(20, 2)).await;
        let client = stub.client();

        let filter = FilterState::new()
            .with_page(2)
            .with_name("rick")
            .with_status(Some(Status::Alive));
        let page = client.fetch_page(&filter).await.unwrap();

        assert_eq!(page.info.total_pages, 2);
        assert_eq!(page.characters[0].name, "Rick Sanchez");
        assert_eq!(
            stub.request_lines(),
            vec!["GET /api/character?page=2&name=rick&status=alive HTTP/1.1".to_string()]
        );
    }

    #[tokio::test]
    async fn test_fetch_page_always_sends_page() {
        let stub = Stub::start("200 OK", page_json(1, 1)).await;
        stub.client().fetch_page(&FilterState::new()).await.unwrap();
        assert_eq!(
            stub.request_lines(),
            vec!["GET /api/character?page=1 HTTP/1.1".to_string()]
        );
    }

    #[tokio::test]
    async fn test_list_not_found_is_empty_result() {
        let stub = Stub::start(
            "404 Not Found",
            r#"{"error":"There is nothing here"}"#.to_string(),
        )
        .await;
        let client = stub.client();
        let filter = FilterState::new().with_name("nobody-has-this-name");

        assert_eq!(client.fetch_page(&filter).await.unwrap(), CharacterPage::empty());
        assert_eq!(client.load_page(&filter).await, ListOutcome::Empty);
    }

    #[tokio::test]
    async fn test_list_server_error_is_failure() {
        let stub = Stub::start("500 Internal Server Error", "{}".to_string()).await;
        let outcome = stub.client().load_page(&FilterState::new()).await;
        assert_eq!(outcome, ListOutcome::Failure(CatalogError::Http { status: 500 }));
    }

    #[tokio::test]
    async fn test_list_transport_failure_is_failure() {
        let config = ClientConfig::default().with_base_url(dead_base_url().await);
        let client = CatalogClient::new(&config).unwrap();

        match client.load_page(&FilterState::new()).await {
            ListOutcome::Failure(err) => assert!(err.is_transport()),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_list_garbage_body_is_failure() {
        let stub = Stub::start("200 OK", "<html>oops</html>".to_string()).await;
        match stub.client().load_page(&FilterState::new()).await {
            ListOutcome::Failure(CatalogError::Decode(_)) => {}
            other => panic!("expected decode failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_one_found_and_cached() {
        let stub = Stub::start("200 OK", RICK_JSON.to_string()).await;
        let client = stub.client();

        let first = client.fetch_one(1).await.unwrap();
        let second = client.fetch_one(1).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.name, "Rick Sanchez");
        assert_eq!(
            stub.request_lines(),
            vec!["GET /api/character/1 HTTP/1.1".to_string()]
        );
        assert_eq!(client.cache().len(), 1);
    }

    #[tokio::test]
    async fn test_cache_is_shared_by_clones() {
        let stub = Stub::start("200 OK", RICK_JSON.to_string()).await;
        let client = stub.client();
        let clone = client.clone();

        client.fetch_one(1).await.unwrap();
        clone.fetch_one(1).await.unwrap();
        assert_eq!(stub.request_lines().len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_one_not_found() {
        let stub = Stub::start(
            "404 Not Found",
            r#"{"error":"Character not found"}"#.to_string(),
        )
        .await;
        let client = stub.client();

        assert_eq!(client.load_character(9999).await, DetailOutcome::NotFound);
        assert!(client.cache().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_one_server_error_is_failure() {
        let stub = Stub::start("503 Service Unavailable", String::new()).await;
        let client = stub.client();

        assert_eq!(
            client.load_character(1).await,
            DetailOutcome::Failure(CatalogError::Http { status: 503 })
        );
        assert!(client.cache().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_one_transport_failure() {
        let config = ClientConfig::default().with_base_url(dead_base_url().await);
        let client = CatalogClient::new(&config).unwrap();

        match client.load_character(1).await {
            DetailOutcome::Failure(err) => assert!(err.is_transport()),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ClientConfig::default().with_base_url("not a url");
        assert!(CatalogClient::new(&config).is_err());
    }
}
