// Menu Sheet - Core Library
// Exposes all modules for use in CLI, web server, and tests

pub mod config;
pub mod fallback;
pub mod menu;
pub mod navigation;
pub mod parser;
pub mod render;
pub mod source;

// Re-export commonly used types
pub use config::MenuConfig;
pub use fallback::fallback_menu;
pub use menu::{category_labels, group_by_category, CategoryGroup, MenuItem, DEFAULT_CATEGORY};
pub use navigation::{active_section, anchor_id, needs_reveal, scroll_target, Extent};
pub use parser::{parse_menu_csv, parse_row};
pub use render::{escape_html, render_page, HtmlRenderer, MenuRenderer, TextRenderer};
pub use source::{
    fetch_menu, load_menu, FileFetcher, HttpFetcher, LoadedMenu, MenuFetcher, SourceError,
    PLACEHOLDER_URL,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the `tracing` subscriber used by both binaries.
/// `RUST_LOG` wins over the default `info` level.
pub fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
