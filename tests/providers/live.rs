use cinepulse::{CineClient, FilmProvider, QuoteProvider, Source};

#[tokio::test]
#[ignore]
async fn live_catalogs_smoke_and_or_record() {
    if !crate::common::live_enabled() {
        return;
    }

    let client = CineClient::builder().build().unwrap();

    // With `--features test-mode` and CINEPULSE_RECORD=1 this rewrites
    // tests/fixtures/films.json and tests/fixtures/quotes_random.json.
    let films = FilmProvider::new(&client);
    let quotes = QuoteProvider::new(&client);
    let (film, quote) = tokio::join!(films.get_film(), quotes.get_quote());

    assert_eq!(film.source, Source::Live, "film catalog unreachable");
    assert_eq!(quote.source, Source::Live, "quote catalog unreachable");
    assert!(!film.value.title.is_empty());
    assert!(quote.value.contains("\" - "));
}
