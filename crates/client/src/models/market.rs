use serde::{Deserialize, Serialize};

/// One trading venue row from a coin's markets table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Market {
    pub rank: i64,
    pub exchange: String,
    /// Last path segment of the exchange link; empty when the cell has no link.
    pub exchange_slug: String,
    pub pair: String,
    pub volume_usd: f64,
    pub price: f64,
    pub volume_percent: f64,
    pub category: String,
    pub fee_type: String,
    /// Free text as displayed ("Recently", "2 hours ago", ...)
    pub updated: String,
}
