use serde::{Deserialize, Serialize};

/// Lightweight identity record used to resolve between symbol, id and slug.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: u64,
    pub name: String,
    pub symbol: String,
    pub website_slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_listing() {
        let json = r#"{"id": 1, "name": "Bitcoin", "symbol": "BTC", "website_slug": "bitcoin"}"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.id, 1);
        assert_eq!(listing.symbol, "BTC");
        assert_eq!(listing.website_slug, "bitcoin");
    }
}
