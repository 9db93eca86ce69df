// 🌐 Data Acquisition - sheet URL (or local file) → MenuItems
//
// Every failure collapses to "no data". The caller never sees an error,
// it sees an empty sequence and switches to the fallback menu.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::MenuConfig;
use crate::fallback::fallback_menu;
use crate::menu::{group_by_category, CategoryGroup, MenuItem};
use crate::parser::parse_menu_csv;

/// Value shipped in fresh configs until the owner publishes a sheet
pub const PLACEHOLDER_URL: &str = "INSERT_YOUR_GOOGLE_SHEET_CSV_URL_HERE";

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("menu source is not configured")]
    Unset,

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("could not read menu file: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// FETCHERS
// ============================================================================

/// MenuFetcher - turns a source address into raw CSV text
///
/// Production code uses `HttpFetcher`; tests and the `--csv` flag swap in
/// other implementations.
#[async_trait]
pub trait MenuFetcher: Send + Sync {
    async fn fetch_text(&self, source: &str) -> Result<String, SourceError>;
}

/// Fetch over HTTP(S) with reqwest
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "HTTP client setup failed, using defaults without timeout");
                reqwest::Client::new()
            });
        Self { client }
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &MenuConfig) -> Self {
        Self::new(Duration::from_secs(config.timeout_seconds))
    }
}

#[async_trait]
impl MenuFetcher for HttpFetcher {
    async fn fetch_text(&self, source: &str) -> Result<String, SourceError> {
        let response = self.client.get(source).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

/// Read the CSV export from disk; `source` is a path
pub struct FileFetcher;

#[async_trait]
impl MenuFetcher for FileFetcher {
    async fn fetch_text(&self, source: &str) -> Result<String, SourceError> {
        Ok(tokio::fs::read_to_string(source).await?)
    }
}

// ============================================================================
// ENTRY POINTS
// ============================================================================

/// True when the configured address is missing, blank or still the placeholder
pub fn is_unset(source: Option<&str>) -> bool {
    match source.map(str::trim) {
        None => true,
        Some(s) => s.is_empty() || s == PLACEHOLDER_URL,
    }
}

async fn try_fetch(config: &MenuConfig, fetcher: &dyn MenuFetcher) -> Result<Vec<MenuItem>, SourceError> {
    let source = config.source_url.as_deref();
    if is_unset(source) {
        return Err(SourceError::Unset);
    }
    let source = source.unwrap_or_default().trim();

    debug!(source, "fetching menu");
    let text = fetcher.fetch_text(source).await?;
    Ok(parse_menu_csv(&text))
}

/// Fetch and parse the configured menu. Any failure yields an empty sequence.
pub async fn fetch_menu(config: &MenuConfig, fetcher: &dyn MenuFetcher) -> Vec<MenuItem> {
    match try_fetch(config, fetcher).await {
        Ok(items) => {
            debug!(count = items.len(), "menu parsed");
            items
        }
        Err(SourceError::Unset) => {
            warn!("Menu source URL not set. Using fallback data.");
            Vec::new()
        }
        Err(e) => {
            error!(error = %e, "Error fetching menu");
            Vec::new()
        }
    }
}

/// LoadedMenu - the result of one acquisition + grouping pass
#[derive(Debug, Clone, Serialize)]
pub struct LoadedMenu {
    pub items: Vec<MenuItem>,
    pub groups: Vec<CategoryGroup>,
    pub is_fallback: bool,
}

impl LoadedMenu {
    /// Group already-acquired items, switching to the fallback menu when empty
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        let (items, is_fallback) = if items.is_empty() {
            (fallback_menu(), true)
        } else {
            (items, false)
        };
        let groups = group_by_category(&items);

        LoadedMenu {
            items,
            groups,
            is_fallback,
        }
    }
}

/// Fetch, parse, fall back if needed, and group.
pub async fn load_menu(config: &MenuConfig, fetcher: &dyn MenuFetcher) -> LoadedMenu {
    let menu = LoadedMenu::from_items(fetch_menu(config, fetcher).await);
    if menu.is_fallback {
        info!(count = menu.items.len(), "serving fallback menu");
    } else {
        info!(
            count = menu.items.len(),
            categories = menu.groups.len(),
            "menu loaded from source"
        );
    }
    menu
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const CSV: &str = "Categoria,Nom,Preu,Descripcio\n\
                       Tapes,Braves,\"4,70 €\",\n\
                       Vins,Marieta,\"3,50 € / 16,00 €\",Copa / Ampolla\n\
                       Tapes,Calamars,\"8,50 €\",\n";

    /// Serves a canned response and counts calls
    struct StaticFetcher {
        body: Option<String>,
        calls: AtomicUsize,
    }

    impl StaticFetcher {
        fn ok(body: &str) -> Self {
            Self { body: Some(body.to_string()), calls: AtomicUsize::new(0) }
        }

        fn failing() -> Self {
            Self { body: None, calls: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl MenuFetcher for StaticFetcher {
        async fn fetch_text(&self, _source: &str) -> Result<String, SourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.body.clone().ok_or(SourceError::Status(500))
        }
    }

    fn config_with(url: Option<&str>) -> MenuConfig {
        MenuConfig {
            source_url: url.map(str::to_string),
            ..MenuConfig::default()
        }
    }

    #[test]
    fn test_is_unset() {
        assert!(is_unset(None));
        assert!(is_unset(Some("")));
        assert!(is_unset(Some("   ")));
        assert!(is_unset(Some(PLACEHOLDER_URL)));
        assert!(!is_unset(Some("https://example.com/pub?output=csv")));
    }

    #[tokio::test]
    async fn test_placeholder_yields_empty_without_fetching() {
        let fetcher = StaticFetcher::ok(CSV);
        let items = fetch_menu(&config_with(Some(PLACEHOLDER_URL)), &fetcher).await;

        assert!(items.is_empty());
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_fetch_failure_yields_empty() {
        let fetcher = StaticFetcher::failing();
        let items = fetch_menu(&config_with(Some("https://example.com/menu.csv")), &fetcher).await;

        assert!(items.is_empty());
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_injected_text_is_parsed() {
        let fetcher = StaticFetcher::ok(CSV);
        let items = fetch_menu(&config_with(Some("https://example.com/menu.csv")), &fetcher).await;

        assert_eq!(items.len(), 3);
        assert_eq!(items[1].price, "3,50 € / 16,00 €");
    }

    #[tokio::test]
    async fn test_load_menu_groups_source_data() {
        let fetcher = StaticFetcher::ok(CSV);
        let menu = load_menu(&config_with(Some("https://example.com/menu.csv")), &fetcher).await;

        assert!(!menu.is_fallback);
        assert_eq!(menu.groups.len(), 2);
        assert_eq!(menu.groups[0].category, "Tapes");
        assert_eq!(menu.groups[0].items.len(), 2);
    }

    #[tokio::test]
    async fn test_load_menu_falls_back_when_unset() {
        let fetcher = StaticFetcher::ok(CSV);
        let menu = load_menu(&config_with(None), &fetcher).await;

        assert!(menu.is_fallback);
        assert_eq!(menu.items, fallback_menu());
    }

    #[tokio::test]
    async fn test_load_menu_falls_back_on_header_only_sheet() {
        let fetcher = StaticFetcher::ok("Categoria,Nom,Preu,Descripcio\n");
        let menu = load_menu(&config_with(Some("https://example.com/menu.csv")), &fetcher).await;

        assert!(menu.is_fallback);
        assert!(!menu.items.is_empty());
    }

    #[tokio::test]
    async fn test_repeated_loads_are_identical() {
        let fetcher = StaticFetcher::ok(CSV);
        let config = config_with(Some("https://example.com/menu.csv"));

        let first = load_menu(&config, &fetcher).await;
        let second = load_menu(&config, &fetcher).await;

        assert_eq!(first.items, second.items);
        assert_eq!(first.groups, second.groups);
    }

    /// Answer one HTTP request on a local port with a fixed response
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: text/csv; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        });

        format!("http://{}/pub?output=csv", addr)
    }

    fn local_fetcher() -> HttpFetcher {
        HttpFetcher::with_client(
            reqwest::Client::builder()
                .no_proxy()
                .timeout(Duration::from_secs(5))
                .build()
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_http_not_found_yields_empty() {
        let url = serve_once("404 Not Found", "Categoria,Nom,Preu\nTapes,Braves,4 €\n").await;
        let fetcher = local_fetcher();

        let err = fetcher.fetch_text(&url).await.unwrap_err();
        assert!(matches!(err, SourceError::Status(404)));

        let url = serve_once("404 Not Found", "Categoria,Nom,Preu\nTapes,Braves,4 €\n").await;
        let items = fetch_menu(&config_with(Some(&url)), &fetcher).await;
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_http_success_is_parsed() {
        let url = serve_once("200 OK", CSV).await;
        let fetcher = local_fetcher();

        let items = fetch_menu(&config_with(Some(&url)), &fetcher).await;

        assert_eq!(items.len(), 3);
        assert_eq!(items[2].name, "Calamars");
    }

    #[tokio::test]
    async fn test_file_fetcher_reads_local_export() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        let path = file.path().to_string_lossy().into_owned();

        let items = fetch_menu(&config_with(Some(&path)), &FileFetcher).await;

        assert_eq!(items.len(), 3);
    }

    #[tokio::test]
    async fn test_file_fetcher_missing_file_yields_empty() {
        let items = fetch_menu(&config_with(Some("/nonexistent/menu.csv")), &FileFetcher).await;

        assert!(items.is_empty());
    }
}
