use crate::common;
use cinepulse::{CinePulse, Genre, MemoryStore};
use std::collections::HashSet;

#[tokio::test]
async fn overlapping_generates_each_append_once() {
    let server = common::setup_server();
    let films = common::mock_films(&server);
    let quote = common::mock_quote(&server);

    let app = CinePulse::open(&common::client_for(&server), MemoryStore::new()).unwrap();

    let (a, b) = tokio::join!(
        app.generate_profile(Genre::Action),
        app.generate_profile(Genre::Romance)
    );
    let (a, b) = (a.unwrap(), b.unwrap());

    films.assert_calls(2);
    quote.assert_calls(2);

    let history = app.history().await;
    assert_eq!(history.len(), 2);
    assert_ne!(a.profile.id, b.profile.id);

    let genres: HashSet<_> = history.iter().map(|p| p.genre).collect();
    assert_eq!(genres, HashSet::from([Genre::Action, Genre::Romance]));

    let blob = app.store().blob().unwrap();
    assert_eq!(common::history_from_blob(&blob), history);
}
