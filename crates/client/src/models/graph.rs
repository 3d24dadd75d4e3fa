use serde::{Deserialize, Serialize};

/// One `[timestamp_ms, value]` pair of a chart series.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphPoint(pub i64, pub f64);

impl GraphPoint {
    pub fn timestamp_ms(&self) -> i64 {
        self.0
    }

    pub fn value(&self) -> f64 {
        self.1
    }
}

/// Chart series for a single coin.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TickerGraph {
    #[serde(default)]
    pub market_cap_by_available_supply: Vec<GraphPoint>,
    #[serde(default)]
    pub price_btc: Vec<GraphPoint>,
    #[serde(default)]
    pub price_usd: Vec<GraphPoint>,
    #[serde(default)]
    pub volume_usd: Vec<GraphPoint>,
}

/// Chart series for the total or altcoin market.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketGraph {
    #[serde(default)]
    pub market_cap_by_available_supply: Vec<GraphPoint>,
    #[serde(default)]
    pub volume_usd: Vec<GraphPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_market_graph() {
        let json = r#"{
            "market_cap_by_available_supply": [[1367174841000, 1500517590], [1367261101000, 1575032004]],
            "volume_usd": [[1367174841000, 0]]
        }"#;
        let graph: MarketGraph = serde_json::from_str(json).unwrap();
        assert_eq!(graph.market_cap_by_available_supply.len(), 2);
        assert_eq!(graph.market_cap_by_available_supply[1].timestamp_ms(), 1367261101000);
        assert_eq!(graph.market_cap_by_available_supply[1].value(), 1575032004.0);
        assert_eq!(graph.volume_usd[0].value(), 0.0);
    }

    #[test]
    fn test_deserialize_ticker_graph_missing_series() {
        let json = r#"{"price_usd": [[1367174841000, 135.3]]}"#;
        let graph: TickerGraph = serde_json::from_str(json).unwrap();
        assert_eq!(graph.price_usd, vec![GraphPoint(1367174841000, 135.3)]);
        assert!(graph.price_btc.is_empty());
    }
}
