//! Generic row/cell extraction for the website's data tables.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use log::debug;
use scraper::{ElementRef, Html, Selector};

use crate::errors::{MarketDataError, Result};
use crate::parse::{parse_date, parse_float, parse_int};

/// Attribute holding the raw sortable value of a cell.
const SORT_ATTR: &str = "data-sort";

/// When a cell's `data-sort` attribute replaces its visible text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SortValue {
    /// Any `data-sort` attribute wins, even an empty one.
    WhenPresent,
    /// A blank `data-sort` falls back to the text.
    WhenNonBlank,
}

lazy_static! {
    static ref TABLE: Selector = Selector::parse("table").expect("Invalid selector");
    static ref BODY_ROWS: Selector = Selector::parse("tbody > tr").expect("Invalid selector");
    static ref LINK: Selector = Selector::parse("a[href]").expect("Invalid selector");
    static ref IMAGE: Selector = Selector::parse("img[src]").expect("Invalid selector");
}

/// Where a table lives on a page and how many cells each row must carry.
#[derive(Clone, Copy, Debug)]
pub(crate) struct TableLayout {
    pub table_id: &'static str,
    pub columns: usize,
    /// Used in decode errors ("markets page", ...)
    pub context: &'static str,
    pub sort_value: SortValue,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Cell {
    /// `data-sort` value per the layout's [`SortValue`], otherwise the
    /// whitespace-collapsed text
    pub value: String,
    pub href: Option<String>,
    pub img_src: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn text(&self, column: usize) -> &str {
        self.cells[column].value.as_str()
    }

    pub fn int(&self, column: usize) -> i64 {
        parse_int(self.text(column))
    }

    pub fn float(&self, column: usize) -> f64 {
        parse_float(self.text(column))
    }

    pub fn date(&self, column: usize) -> NaiveDate {
        parse_date(self.text(column))
    }

    pub fn link_slug(&self, column: usize) -> String {
        self.cells[column]
            .href
            .as_deref()
            .map(last_path_segment)
            .unwrap_or_default()
    }

    pub fn image(&self, column: usize) -> String {
        self.cells[column].img_src.clone().unwrap_or_default()
    }
}

impl TableLayout {
    /// Extracts every body row of the table.
    ///
    /// Returns `Ok(None)` when the page has no table with this id, and a
    /// decode error when any row has fewer cells than the layout needs, so
    /// positional access on the returned rows is always in bounds.
    pub fn rows(&self, html: &str) -> Result<Option<Vec<Row>>> {
        let document = Html::parse_document(html);
        let Some(table) = document
            .select(&TABLE)
            .find(|table| table.value().id() == Some(self.table_id))
        else {
            debug!("No table#{} in {}", self.table_id, self.context);
            return Ok(None);
        };

        let mut rows = Vec::new();
        for (index, tr) in table.select(&BODY_ROWS).enumerate() {
            let cells: Vec<Cell> = tr
                .children()
                .filter_map(ElementRef::wrap)
                .filter(|el| el.value().name() == "td")
                .map(|td| self.extract_cell(td))
                .collect();

            if cells.len() < self.columns {
                return Err(MarketDataError::decode(
                    self.context,
                    format!(
                        "row {} has {} cells, expected {}",
                        index + 1,
                        cells.len(),
                        self.columns
                    ),
                ));
            }
            rows.push(Row { cells });
        }

        Ok(Some(rows))
    }

    fn extract_cell(&self, td: ElementRef<'_>) -> Cell {
        let sort = td.value().attr(SORT_ATTR).map(str::trim).filter(|raw| {
            self.sort_value == SortValue::WhenPresent || !raw.is_empty()
        });
        let value = match sort {
            Some(raw) => raw.to_string(),
            None => collapse_whitespace(&td.text().collect::<String>()),
        };

        Cell {
            value,
            href: td
                .select(&LINK)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(str::to_string),
            img_src: td
                .select(&IMAGE)
                .next()
                .and_then(|img| img.value().attr("src"))
                .map(str::to_string),
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// `"/exchanges/binance/"` -> `"binance"`. Query and fragment are ignored.
pub(crate) fn last_path_segment(href: &str) -> String {
    let path = href.split(['?', '#']).next().unwrap_or_default();
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}
