mod common;

use common::*;
use coinmarketcap_client::{ClientConfig, CoinMarketCap, MarketDataError, RetryClass};

fn page_url(page: u32) -> String {
    format!("{}/rankings/exchanges/{}", SITE, page)
}

fn row(rank: u32, slug: &str) -> String {
    format!(
        r#"<tr>
            <td data-sort="{rank}">{rank}</td>
            <td data-sort="{slug}"><img src="/logos/{slug}.png"><a href="/exchanges/{slug}/">{slug}</a></td>
            <td data-sort="1000.5">$1,000</td>
            <td data-sort="2000">$2,000</td>
            <td data-sort="3000">$3,000</td>
            <td data-sort="4000">$4,000</td>
            <td data-sort="12">12</td>
            <td data-sort="5">5.00%</td>
            <td></td>
            <td data-sort="2018-01-02">Jan 2018</td>
        </tr>"#
    )
}

fn page(rows: &[String]) -> String {
    format!(
        r#"<html><body><table id="exchange-rankings"><tbody>{}</tbody></table></body></html>"#,
        rows.concat()
    )
}

fn three_page_transport() -> MockTransport {
    MockTransport::new()
        .with_body(page_url(1), page(&[row(1, "binance"), row(2, "okex")]))
        .with_body(page_url(2), page(&[row(3, "huobi")]))
        .with_body(page_url(3), page(&[]))
}

#[tokio::test]
async fn test_exchanges_by_page() {
    let cmc = client(three_page_transport());
    let exchanges = cmc.exchanges_by_page(1).await.unwrap();

    assert_eq!(exchanges.len(), 2);
    assert_eq!(exchanges[0].slug, "binance");
    assert_eq!(exchanges[0].logo_url, "/logos/binance.png");
    assert_eq!(exchanges[0].adjusted_volume_24h, 1000.5);
    assert_eq!(exchanges[0].markets_count, 12);
    assert_eq!(exchanges[0].change_24h, 0.05);
    assert_eq!(exchanges[0].launched_at.to_string(), "2018-01-02");
    assert_eq!(exchanges[1].rank, 2);
}

#[tokio::test]
async fn test_page_zero_is_page_one() {
    let cmc = client(three_page_transport());
    let exchanges = cmc.exchanges_by_page(0).await.unwrap();
    assert_eq!(exchanges.len(), 2);
    assert_eq!(cmc.transport().requests(), vec![page_url(1)]);
}

#[tokio::test]
async fn test_exchanges_concatenates_until_empty_page() {
    let cmc = client(three_page_transport());
    let exchanges = cmc.exchanges().await.unwrap();

    let slugs: Vec<&str> = exchanges.iter().map(|e| e.slug.as_str()).collect();
    assert_eq!(slugs, vec!["binance", "okex", "huobi"]);
    assert_eq!(
        cmc.transport().requests(),
        vec![page_url(1), page_url(2), page_url(3)]
    );
}

#[tokio::test]
async fn test_exchanges_matches_pages_fetched_one_by_one() {
    let cmc = client(three_page_transport());
    let all = cmc.exchanges().await.unwrap();

    let mut paged = cmc.exchanges_by_page(1).await.unwrap();
    paged.extend(cmc.exchanges_by_page(2).await.unwrap());
    assert!(cmc.exchanges_by_page(3).await.unwrap().is_empty());

    assert_eq!(all, paged);
}

#[tokio::test]
async fn test_page_without_table_ends_walk() {
    let cmc = client(
        MockTransport::new()
            .with_body(page_url(1), page(&[row(1, "binance")]))
            .with_body(page_url(2), "<html><body>No more exchanges</body></html>"),
    );
    assert_eq!(cmc.exchanges().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_page_error_aborts_with_context() {
    let cmc = client(
        MockTransport::new()
            .with_body(page_url(1), page(&[row(1, "binance")]))
            .with_status(page_url(2), 502, "bad gateway"),
    );

    let err = cmc.exchanges().await.unwrap_err();
    assert!(matches!(err, MarketDataError::Exchanges(_)));
    assert_eq!(err.to_string(), "Exchanges error: HTTP 502: bad gateway");
    assert_eq!(err.retry_class(), RetryClass::WithBackoff);
    assert_eq!(cmc.transport().requests(), vec![page_url(1), page_url(2)]);
}

#[tokio::test]
async fn test_malformed_row_aborts_with_context() {
    let cmc = client(MockTransport::new().with_body(
        page_url(1),
        r#"<table id="exchange-rankings"><tbody><tr><td>1</td></tr></tbody></table>"#,
    ));

    let err = cmc.exchanges().await.unwrap_err();
    match err {
        MarketDataError::Exchanges(inner) => {
            assert!(matches!(*inner, MarketDataError::Decode { .. }))
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_walk_stops_at_page_cap() {
    let mut transport = MockTransport::new();
    for n in 1..=5 {
        transport = transport.with_body(page_url(n), page(&[row(n, &format!("ex{}", n))]));
    }
    let cmc = CoinMarketCap::with_transport(test_config().with_max_exchange_pages(3), transport);

    let exchanges = cmc.exchanges().await.unwrap();
    assert_eq!(exchanges.len(), 3);
    assert_eq!(cmc.transport().requests().len(), 3);
}

#[tokio::test]
async fn test_zero_page_cap_still_walks_first_page() {
    let config = ClientConfig {
        max_exchange_pages: 0,
        ..test_config()
    };
    let cmc = CoinMarketCap::with_transport(config, three_page_transport());

    let exchanges = cmc.exchanges().await.unwrap();
    assert_eq!(exchanges.len(), 2);
    assert_eq!(cmc.transport().requests(), vec![page_url(1)]);
}
