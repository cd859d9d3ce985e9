// Share Market Backend - Server Entry Point

use anyhow::Result;
use rusqlite::Connection;
use std::env;

use share_market_backend::{
    count_articles, demo_articles, insert_articles, router, setup_database, AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    println!("📈 Share Market Backend");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━");

    // Database path from first CLI argument, default alongside the binary
    let db_path = env::args().nth(1).unwrap_or_else(|| "market.db".to_string());

    let mut conn = Connection::open(&db_path)?;
    setup_database(&conn)?;
    println!("✓ Database opened: {}", db_path);

    // First run gets demo articles so the dashboard has something to show
    if count_articles(&conn)? == 0 {
        let inserted = insert_articles(&mut conn, &demo_articles())?;
        println!("✓ Seeded {} demo news articles", inserted);
    }

    let state = AppState::new(conn);
    let app = router(state);

    let addr = "0.0.0.0:8000";
    let listener = tokio::net::TcpListener::bind(addr).await?;

    println!("\n🚀 Server running on http://localhost:8000");
    println!("   Stocks: http://localhost:8000/api/stocks/");
    println!("   News:   http://localhost:8000/api/news/");
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, app).await?;

    Ok(())
}
