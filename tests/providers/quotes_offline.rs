use crate::common;
use cinepulse::{QuoteProvider, Source, quote::fallback_quotes};

#[tokio::test]
async fn live_quote_is_formatted_from_the_response() {
    let server = common::setup_server();
    let mock = common::mock_quote(&server);
    let provider = QuoteProvider::new(&common::client_for(&server));

    let quote = provider.get_quote().await;

    mock.assert();
    assert_eq!(quote.source, Source::Live);
    assert_eq!(quote.value, common::FIXTURE_QUOTE);
}

#[tokio::test]
async fn each_failure_kind_falls_back() {
    let server = common::setup_server();
    let client = common::client_for(&server);

    // status
    let mut mock = common::mock_status(&server, "/quotes/random", 429);
    let q = QuoteProvider::new(&client).get_quote().await;
    mock.assert();
    assert_eq!(q.source, Source::Fallback);
    assert!(fallback_quotes().contains(&q.value));
    mock.delete();

    // parse
    mock = common::mock_body(&server, "/quotes/random", "not json at all");
    let q = QuoteProvider::new(&client).get_quote().await;
    mock.assert();
    assert_eq!(q.source, Source::Fallback);
    assert!(fallback_quotes().contains(&q.value));
    mock.delete();

    // transport
    let q = QuoteProvider::new(&common::unreachable_client())
        .get_quote()
        .await;
    assert_eq!(q.source, Source::Fallback);
    assert!(fallback_quotes().contains(&q.value));
}
