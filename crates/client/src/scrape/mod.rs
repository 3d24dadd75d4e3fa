//! Extraction of typed records from the website's HTML tables.
//!
//! Some data has no API endpoint and is only published as rendered tables.
//! Each extractor declares its table id, minimum cell count and a
//! column-index map; rows are validated against the layout before any
//! positional access.

mod exchanges;
mod markets;
mod table;

pub use exchanges::parse_exchanges_page;
pub use markets::parse_markets_page;
