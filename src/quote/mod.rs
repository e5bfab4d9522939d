//! Random quote from DummyJSON, with a bundled fallback.

mod api;
mod fallback;
mod wire;

pub use fallback::fallback_quotes;

use crate::core::{CineClient, HttpFetcher, JsonFetcher, Sourced};

/// Formats a quote for display: `"<quote>" - <author>`.
#[must_use]
pub fn format_quote(quote: &str, author: &str) -> String {
    format!("\"{quote}\" - {author}")
}

/// Produces one formatted quote per call.
#[derive(Debug, Clone)]
pub struct QuoteProvider<F = HttpFetcher> {
    fetcher: F,
}

impl QuoteProvider<HttpFetcher> {
    /// A provider talking to the client's quote catalog.
    #[must_use]
    pub fn new(client: &CineClient) -> Self {
        Self::with_fetcher(client.quotes())
    }
}

impl<F: JsonFetcher> QuoteProvider<F> {
    /// A provider over any [`JsonFetcher`].
    pub const fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Returns a random quote, formatted with [`format_quote`].
    ///
    /// Never fails; see [`FilmProvider::get_film`](crate::FilmProvider::get_film)
    /// for the fallback policy, which is the same here with [`fallback_quotes`].
    #[tracing::instrument(skip(self))]
    pub async fn get_quote(&self) -> Sourced<String> {
        match api::fetch_quote(&self.fetcher).await {
            Ok(quote) => Sourced::live(quote),
            Err(err) => {
                tracing::warn!(error = %err, "falling back to local quote");
                Sourced::fallback(fallback::random_quote())
            }
        }
    }
}
