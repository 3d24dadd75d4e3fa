use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the exchange rankings table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub rank: i64,
    pub name: String,
    pub slug: String,
    pub logo_url: String,
    pub adjusted_volume_24h: f64,
    pub volume_24h: f64,
    pub volume_7d: f64,
    pub volume_30d: f64,
    pub markets_count: i64,
    /// Fraction, i.e. the displayed percentage divided by 100
    pub change_24h: f64,
    /// Epoch date (1970-01-01) when the page shows no parseable date
    pub launched_at: NaiveDate,
}
