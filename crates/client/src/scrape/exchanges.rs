//! Exchange rankings table (`table#exchange-rankings`).

use log::debug;

use super::table::{Row, SortValue, TableLayout};
use crate::errors::Result;
use crate::models::Exchange;

const LAYOUT: TableLayout = TableLayout {
    table_id: "exchange-rankings",
    columns: 10,
    context: "exchange rankings page",
    sort_value: SortValue::WhenPresent,
};

/// Column positions on the rankings page. Column 8 is a chart and is unused.
mod column {
    pub const RANK: usize = 0;
    pub const NAME: usize = 1;
    pub const ADJUSTED_VOLUME_24H: usize = 2;
    pub const VOLUME_24H: usize = 3;
    pub const VOLUME_7D: usize = 4;
    pub const VOLUME_30D: usize = 5;
    pub const MARKETS: usize = 6;
    pub const CHANGE_24H: usize = 7;
    pub const LAUNCHED: usize = 9;
}

/// Extracts one page of exchange rankings. A page without the rankings
/// table yields no rows, which ends pagination.
pub fn parse_exchanges_page(html: &str) -> Result<Vec<Exchange>> {
    match LAYOUT.rows(html)? {
        Some(rows) => Ok(rows.iter().map(exchange_from_row).collect()),
        None => {
            debug!("Exchange rankings table absent, treating page as empty");
            Ok(Vec::new())
        }
    }
}

fn exchange_from_row(row: &Row) -> Exchange {
    Exchange {
        rank: row.int(column::RANK),
        name: row.text(column::NAME).to_string(),
        slug: row.link_slug(column::NAME),
        logo_url: row.image(column::NAME),
        adjusted_volume_24h: row.float(column::ADJUSTED_VOLUME_24H),
        volume_24h: row.float(column::VOLUME_24H),
        volume_7d: row.float(column::VOLUME_7D),
        volume_30d: row.float(column::VOLUME_30D),
        markets_count: row.int(column::MARKETS),
        change_24h: row.float(column::CHANGE_24H) / 100.0,
        launched_at: row.date(column::LAUNCHED),
    }
}
