// Share Market Backend - News Storage
// SQLite-backed listing collaborator behind /api/news/

use anyhow::Result;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use crate::news::NewsArticle;

/// Create the news table and enable WAL mode. Safe to call repeatedly.
pub fn setup_database(conn: &Connection) -> Result<()> {
    // WAL mode for crash recovery
    conn.pragma_update(None, "journal_mode", "WAL")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS news_articles (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            summary TEXT NOT NULL,
            source TEXT NOT NULL,
            url TEXT NOT NULL,
            published_at TEXT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_published_at ON news_articles(published_at)",
        [],
    )?;

    Ok(())
}

/// Insert articles in a single transaction. Returns the number inserted.
pub fn insert_articles(conn: &mut Connection, articles: &[NewsArticle]) -> Result<usize> {
    let tx = conn.transaction()?;

    for article in articles {
        tx.execute(
            "INSERT INTO news_articles (title, summary, source, url, published_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                article.title,
                article.summary,
                article.source,
                article.url,
                article.published_at.to_rfc3339(),
            ],
        )?;
    }

    tx.commit()?;
    Ok(articles.len())
}

/// Get all news articles, newest first.
pub fn get_all_articles(conn: &Connection) -> Result<Vec<NewsArticle>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, summary, source, url, published_at
         FROM news_articles
         ORDER BY published_at DESC, id DESC",
    )?;

    let articles = stmt
        .query_map([], |row| {
            let published_at: String = row.get(5)?;

            Ok(NewsArticle {
                id: row.get(0)?,
                title: row.get(1)?,
                summary: row.get(2)?,
                source: row.get(3)?,
                url: row.get(4)?,
                // Timestamps are written by insert_articles as RFC 3339;
                // a corrupt value falls back to the epoch rather than
                // dropping the row or masquerading as fresh news
                published_at: DateTime::parse_from_rfc3339(&published_at)
                    .map(|dt| dt.with_timezone(&Utc))
                    .unwrap_or_default(),
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(articles)
}

/// Count stored articles. Used to decide whether to seed demo data.
pub fn count_articles(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM news_articles", [], |row| row.get(0))?;
    Ok(count)
}

// ============================================================================
// TESTS
// ============================================================================
