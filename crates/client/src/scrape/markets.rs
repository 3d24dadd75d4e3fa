//! Per-coin markets table (`table#markets-table`).

use super::table::{Row, SortValue, TableLayout};
use crate::errors::{MarketDataError, Result};
use crate::models::Market;

const LAYOUT: TableLayout = TableLayout {
    table_id: "markets-table",
    columns: 9,
    context: "markets page",
    sort_value: SortValue::WhenNonBlank,
};

/// Column positions on the markets page.
mod column {
    pub const RANK: usize = 0;
    pub const EXCHANGE: usize = 1;
    pub const PAIR: usize = 2;
    pub const VOLUME_USD: usize = 3;
    pub const PRICE: usize = 4;
    pub const VOLUME_PERCENT: usize = 5;
    pub const CATEGORY: usize = 6;
    pub const FEE_TYPE: usize = 7;
    pub const UPDATED: usize = 8;
}

/// Extracts the markets of a coin from its rendered page.
pub fn parse_markets_page(html: &str) -> Result<Vec<Market>> {
    let rows = LAYOUT.rows(html)?.ok_or_else(|| {
        MarketDataError::decode(LAYOUT.context, "table#markets-table not found")
    })?;

    Ok(rows.iter().map(market_from_row).collect())
}

fn market_from_row(row: &Row) -> Market {
    Market {
        rank: row.int(column::RANK),
        exchange: row.text(column::EXCHANGE).to_string(),
        exchange_slug: row.link_slug(column::EXCHANGE),
        pair: row.text(column::PAIR).to_string(),
        volume_usd: row.float(column::VOLUME_USD),
        price: row.float(column::PRICE),
        volume_percent: row.float(column::VOLUME_PERCENT),
        category: row.text(column::CATEGORY).to_string(),
        fee_type: row.text(column::FEE_TYPE).to_string(),
        updated: row.text(column::UPDATED).to_string(),
    }
}
