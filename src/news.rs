// Share Market Backend - News Articles
// Model for the /api/news/ list endpoint; storage lives in db.rs

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A news article as stored and served by the news list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Database row id (0 until inserted)
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub source: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
}

/// Demo articles inserted on first run so a fresh checkout serves a
/// non-empty dashboard. Ids are 0; the database assigns real ones.
pub fn demo_articles() -> Vec<NewsArticle> {
    vec![
        NewsArticle {
            id: 0,
            title: "NEPSE index closes higher as banking stocks rally".to_string(),
            summary: "The benchmark index gained on heavy turnover, led by \
                      commercial banks and life insurers."
                .to_string(),
            source: "ShareSansar".to_string(),
            url: "https://www.sharesansar.com/news/nepse-closes-higher".to_string(),
            published_at: Utc.with_ymd_and_hms(2025, 8, 4, 11, 30, 0).unwrap(),
        },
        NewsArticle {
            id: 0,
            title: "Nabil Bank posts 18% profit growth in fourth quarter".to_string(),
            summary: "Unaudited results show net profit up year on year on the \
                      back of loan book expansion."
                .to_string(),
            source: "The Himalayan Times".to_string(),
            url: "https://thehimalayantimes.com/business/nabil-q4-results".to_string(),
            published_at: Utc.with_ymd_and_hms(2025, 8, 2, 7, 15, 0).unwrap(),
        },
        NewsArticle {
            id: 0,
            title: "Nepal Life proposes 12% dividend for shareholders".to_string(),
            summary: "The board has proposed a mix of bonus shares and cash \
                      dividend pending regulator approval."
                .to_string(),
            source: "Mero Lagani".to_string(),
            url: "https://merolagani.com/news/nepal-life-dividend".to_string(),
            published_at: Utc.with_ymd_and_hms(2025, 7, 28, 14, 45, 0).unwrap(),
        },
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_articles_are_well_formed() {
        let articles = demo_articles();

        assert_eq!(articles.len(), 3);
        for article in &articles {
            assert_eq!(article.id, 0); // database assigns real ids
            assert!(!article.title.is_empty());
            assert!(!article.summary.is_empty());
            assert!(article.url.starts_with("https://"));
        }
    }

    #[test]
    fn test_demo_articles_have_distinct_timestamps() {
        let articles = demo_articles();
        assert!(articles[0].published_at > articles[1].published_at);
        assert!(articles[1].published_at > articles[2].published_at);
    }
}
