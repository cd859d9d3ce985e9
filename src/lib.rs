// Share Market Backend - Core Library
// Exposes all modules for use in the server binary and tests

pub mod api;
pub mod db;
pub mod news;
pub mod stocks;

// Re-export commonly used types
pub use api::{router, AppState};
pub use db::{count_articles, get_all_articles, insert_articles, setup_database};
pub use news::{demo_articles, NewsArticle};
pub use stocks::{market_snapshot, StockQuote};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
