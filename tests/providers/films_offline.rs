use crate::common;
use cinepulse::{FilmProvider, Source, film::fallback_films};

#[tokio::test]
async fn live_listing_yields_a_film_from_the_response() {
    let server = common::setup_server();
    let mock = common::mock_films(&server);
    let provider = FilmProvider::new(&common::client_for(&server));

    let expected = common::fixture_films();
    for _ in 0..5 {
        let film = provider.get_film().await;
        assert_eq!(film.source, Source::Live);
        assert!(expected.contains(&film.value), "unexpected film {:?}", film.value);
        assert!(!fallback_films().contains(&film.value));

        let f = &film.value;
        for field in [&f.title, &f.description, &f.year, &f.score, &f.poster] {
            assert!(!field.is_empty());
        }
    }
    mock.assert_calls(5);
}

#[tokio::test]
async fn status_failure_falls_back() {
    let server = common::setup_server();
    let mock = common::mock_status(&server, "/films", 500);
    let provider = FilmProvider::new(&common::client_for(&server));

    let film = provider.get_film().await;

    mock.assert();
    assert_eq!(film.source, Source::Fallback);
    assert!(fallback_films().contains(&film.value));
}

#[tokio::test]
async fn parse_failure_falls_back() {
    let server = common::setup_server();
    let mock = common::mock_body(&server, "/films", "[{\"title\": ");
    let provider = FilmProvider::new(&common::client_for(&server));

    let film = provider.get_film().await;

    mock.assert();
    assert_eq!(film.source, Source::Fallback);
    assert!(fallback_films().contains(&film.value));
}

#[tokio::test]
async fn transport_failure_falls_back() {
    let provider = FilmProvider::new(&common::unreachable_client());

    let film = provider.get_film().await;

    assert_eq!(film.source, Source::Fallback);
    assert!(fallback_films().contains(&film.value));
}

#[tokio::test]
async fn empty_listing_falls_back() {
    let server = common::setup_server();
    let mock = common::mock_body(&server, "/films", "[]");
    let provider = FilmProvider::new(&common::client_for(&server));

    let film = provider.get_film().await;

    mock.assert();
    assert_eq!(film.source, Source::Fallback);
}

#[tokio::test]
async fn element_missing_fields_falls_back() {
    let server = common::setup_server();
    let mock = common::mock_body(&server, "/films", r#"[{"title": "Only a title"}]"#);
    let provider = FilmProvider::new(&common::client_for(&server));

    let film = provider.get_film().await;

    mock.assert();
    assert_eq!(film.source, Source::Fallback);
    assert_ne!(film.value.title, "Only a title");
}
