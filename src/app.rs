//! The controller: one generate/clear/export surface over the providers and a store.

use std::fmt;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    core::{CineClient, CineError, HttpFetcher, JsonFetcher, Source},
    film::FilmProvider,
    history::HistoryStore,
    profile::{Genre, Profile},
    quote::QuoteProvider,
    view,
};

/// The status line shown after each action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Loading,
    Generated,
    Failed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Loading => "Loading...",
            Self::Generated => "Profile generated!",
            Self::Failed => "Error generating profile.",
        })
    }
}

/// What a successful generate produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub profile: Profile,
    pub film_source: Source,
    pub quote_source: Source,
}

/// Orchestrates profile generation and owns the in-memory history.
///
/// The history is loaded once in [`CinePulse::open`]; afterwards every
/// mutation persists the complete list through the store.
pub struct CinePulse<S, FF = HttpFetcher, QF = HttpFetcher> {
    films: FilmProvider<FF>,
    quotes: QuoteProvider<QF>,
    store: Arc<S>,
    history: Mutex<Vec<Profile>>,
}

impl<S: HistoryStore + 'static> CinePulse<S> {
    /// Wires both providers to `client` and loads the history from `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored history cannot be read or parsed.
    pub fn open(client: &CineClient, store: S) -> Result<Self, CineError> {
        Self::with_providers(FilmProvider::new(client), QuoteProvider::new(client), store)
    }
}

impl<S, FF, QF> CinePulse<S, FF, QF>
where
    S: HistoryStore + 'static,
    FF: JsonFetcher,
    QF: JsonFetcher,
{
    /// Like [`CinePulse::open`], with explicitly constructed providers.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored history cannot be read or parsed.
    pub fn with_providers(
        films: FilmProvider<FF>,
        quotes: QuoteProvider<QF>,
        store: S,
    ) -> Result<Self, CineError> {
        let history = store.load()?;
        tracing::debug!(entries = history.len(), "history loaded");
        Ok(Self {
            films,
            quotes,
            store: Arc::new(store),
            history: Mutex::new(history),
        })
    }

    /// Fetches a film and a quote concurrently, builds a profile tagged with
    /// `genre`, appends it and persists the whole history.
    ///
    /// Both fetches always run to completion; each falls back independently,
    /// so this only fails when persisting fails. In that case the profile
    /// stays in memory and the store keeps its previous blob until the next
    /// successful mutation.
    ///
    /// Overlapping calls are independent: each appends its own profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the history cannot be persisted.
    #[tracing::instrument(skip(self))]
    pub async fn generate_profile(&self, genre: Genre) -> Result<Generated, CineError> {
        let (film, quote) = tokio::join!(self.films.get_film(), self.quotes.get_quote());

        let profile = Profile::new(film.value, quote.value, genre);

        let mut history = self.history.lock().await;
        history.push(profile.clone());
        // Held across the write: saves land in append order.
        if let Err(err) = self.persist(history.clone()).await {
            tracing::error!(error = %err, "failed to persist history");
            return Err(err);
        }

        tracing::info!(
            title = %profile.film.title,
            id = %profile.id,
            film_source = ?film.source,
            quote_source = ?quote.source,
            "profile generated"
        );

        Ok(Generated {
            profile,
            film_source: film.source,
            quote_source: quote.source,
        })
    }

    /// Empties the history and persists the empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the empty history cannot be persisted; memory is
    /// cleared regardless.
    pub async fn clear_history(&self) -> Result<(), CineError> {
        let mut history = self.history.lock().await;
        history.clear();
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.clear()).await?
    }

    /// Writes a full snapshot on the blocking pool; stores may do file I/O.
    async fn persist(&self, snapshot: Vec<Profile>) -> Result<(), CineError> {
        let store = Arc::clone(&self.store);
        tokio::task::spawn_blocking(move || store.save(&snapshot)).await?
    }

    /// A snapshot of the in-memory history, oldest first.
    pub async fn history(&self) -> Vec<Profile> {
        self.history.lock().await.clone()
    }

    /// See [`view::render_history`].
    pub async fn render_history(&self) -> Vec<String> {
        view::render_history(&self.history.lock().await)
    }

    /// See [`view::export_json`].
    ///
    /// # Errors
    ///
    /// Returns an error only if serialization fails.
    pub async fn export_json(&self) -> Result<String, CineError> {
        view::export_json(&self.history.lock().await)
    }

    /// The store backing this controller.
    pub fn store(&self) -> &S {
        &self.store
    }
}
