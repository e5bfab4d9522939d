//! Random film from the Studio Ghibli catalog, with a bundled fallback.

mod api;
mod fallback;
mod model;
mod wire;

pub use fallback::fallback_films;
pub use model::Film;

use crate::core::{CineClient, HttpFetcher, JsonFetcher, Sourced};

/// Produces one [`Film`] per call, from the catalog when it answers and from
/// the bundled list when it does not.
#[derive(Debug, Clone)]
pub struct FilmProvider<F = HttpFetcher> {
    fetcher: F,
}

impl FilmProvider<HttpFetcher> {
    /// A provider talking to the client's film catalog.
    #[must_use]
    pub fn new(client: &CineClient) -> Self {
        Self::with_fetcher(client.films())
    }
}

impl<F: JsonFetcher> FilmProvider<F> {
    /// A provider over any [`JsonFetcher`].
    pub const fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Returns a random film.
    ///
    /// This never fails: transport, status, and parse failures, as well as an
    /// empty or malformed listing, are logged and answered with one of the
    /// [`fallback_films`] instead. The returned [`Sourced`] says which path was taken.
    #[tracing::instrument(skip(self))]
    pub async fn get_film(&self) -> Sourced<Film> {
        match api::fetch_film(&self.fetcher).await {
            Ok(film) => Sourced::live(film),
            Err(err) => {
                tracing::warn!(error = %err, "falling back to local film data");
                Sourced::fallback(fallback::random_film())
            }
        }
    }
}
