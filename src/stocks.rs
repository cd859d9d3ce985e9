// Share Market Backend - Stock Quotes
// Static market snapshot served by /api/stocks/

use serde::{Deserialize, Serialize};

/// A single equity's market snapshot.
///
/// Declaration order is the wire order: id, name, price, change, volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    pub id: i64,
    pub name: String,
    pub price: f64,
    /// Signed percent change since previous close
    pub change: f64,
    pub volume: i64,
}

/// The fixed market snapshot.
///
/// Statically defined for the lifetime of the process; the stocks endpoint
/// serves exactly these records and nothing else.
pub fn market_snapshot() -> Vec<StockQuote> {
    vec![
        StockQuote {
            id: 1,
            name: "Nabil Bank".to_string(),
            price: 890.50,
            change: 1.23,
            volume: 15000,
        },
        StockQuote {
            id: 2,
            name: "Nepal Life".to_string(),
            price: 1270.00,
            change: -0.75,
            volume: 8000,
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
    fn test_snapshot_fixture_values() {
        let quotes = market_snapshot();

        assert_eq!(quotes.len(), 2);

        assert_eq!(quotes[0].id, 1);
        assert_eq!(quotes[0].name, "Nabil Bank");
        assert_eq!(quotes[0].price, 890.50);
        assert_eq!(quotes[0].change, 1.23);
        assert_eq!(quotes[0].volume, 15000);

        assert_eq!(quotes[1].id, 2);
        assert_eq!(quotes[1].name, "Nepal Life");
        assert_eq!(quotes[1].price, 1270.00);
        assert_eq!(quotes[1].change, -0.75);
        assert_eq!(quotes[1].volume, 8000);
    }

    #[test]
    fn test_snapshot_ids_are_unique() {
        let quotes = market_snapshot();
        assert_ne!(quotes[0].id, quotes[1].id);
    }

    #[test]
    fn test_quote_field_order_is_stable() {
        let json = serde_json::to_string(&market_snapshot()[0]).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"name":"Nabil Bank","price":890.5,"change":1.23,"volume":15000}"#
        );
    }
}
