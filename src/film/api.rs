use serde_json::Value;

use crate::{
    core::{CineError, JsonFetcher, random},
    film::{Film, wire::FilmNode},
};

pub(crate) const FILMS_PATH: &str = "/films";

/// Fetches the listing, picks one element at random and normalizes it.
pub(super) async fn fetch_film<F>(fetcher: &F) -> Result<Film, CineError>
where
    F: JsonFetcher + ?Sized,
{
    let body = fetcher.fetch_json(FILMS_PATH).await?;
    pick_film(body)
}

fn pick_film(body: Value) -> Result<Film, CineError> {
    let Value::Array(listing) = body else {
        return Err(CineError::Data("film listing is not an array".into()));
    };

    let chosen = random::pick(&listing)
        .cloned()
        .ok_or_else(|| CineError::Data("film listing is empty".into()))?;

    let node: FilmNode = serde_json::from_value(chosen)?;
    Film::try_from(node)
}
