#![allow(dead_code)]

use cinepulse::{CineClient, Film, Profile};
use httpmock::{Method::GET, Mock, MockServer};
use std::{env, fs, path::Path};
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{name}.json"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// Films from `tests/fixtures/films.json`, as the provider normalizes them.
pub fn fixture_films() -> Vec<Film> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(&fixture("films")).unwrap();
    raw.into_iter()
        .map(|v| Film {
            title: v["title"].as_str().unwrap().to_owned(),
            description: v["description"].as_str().unwrap().to_owned(),
            year: v["release_date"].as_str().unwrap().to_owned(),
            score: v["rt_score"].as_str().unwrap().to_owned(),
            poster: v["image"].as_str().unwrap().to_owned(),
            trailer: v["movie_banner"].as_str().unwrap().to_owned(),
        })
        .collect()
}

/// A client whose two catalogs both live on `server`.
pub fn client_for(server: &MockServer) -> CineClient {
    let base = Url::parse(&server.base_url()).unwrap();
    CineClient::builder()
        .base_films(base.clone())
        .base_quotes(base)
        .build()
        .unwrap()
}

/// A client pointed at a port nothing listens on.
pub fn unreachable_client() -> CineClient {
    let base = Url::parse("http://127.0.0.1:9").unwrap();
    CineClient::builder()
        .base_films(base.clone())
        .base_quotes(base)
        .build()
        .unwrap()
}

pub fn mock_films(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/films");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("films"));
    })
}

pub fn mock_quote(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/quotes/random");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("quotes_random"));
    })
}

pub fn mock_status<'a>(server: &'a MockServer, path: &'a str, status: u16) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(status)
            .header("content-type", "application/json")
            .body("{}");
    })
}

pub fn mock_body<'a>(server: &'a MockServer, path: &'a str, body: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

pub const FIXTURE_QUOTE: &str =
    "\"Your time is limited, so don't waste it living someone else's life.\" - Steve Jobs";

pub fn history_from_blob(blob: &str) -> Vec<Profile> {
    serde_json::from_str(blob).unwrap()
}

pub fn live_enabled() -> bool {
    env::var("CINEPULSE_LIVE").ok().as_deref() == Some("1") || is_recording()
}

pub fn is_recording() -> bool {
    env::var("CINEPULSE_RECORD").ok().as_deref() == Some("1")
}
