//! Public client surface + builder.

mod constants;

use crate::core::{CineError, net};
use constants::{DEFAULT_BASE_FILMS, DEFAULT_BASE_QUOTES, USER_AGENT};
use reqwest::Client;
use serde_json::Value;
use url::Url;

/// Holds one configured HTTP client and the base URLs of both catalogs.
///
/// Cloning is cheap; the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct CineClient {
    http: Client,
    base_films: Url,
    base_quotes: Url,
}

impl CineClient {
    /// Create a new builder.
    pub fn builder() -> CineClientBuilder {
        CineClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_films(&self) -> &Url {
        &self.base_films
    }
    pub(crate) fn base_quotes(&self) -> &Url {
        &self.base_quotes
    }

    /// A fetcher bound to the film catalog.
    #[must_use]
    pub fn films(&self) -> HttpFetcher {
        HttpFetcher::new(self.http().clone(), self.base_films().clone())
    }

    /// A fetcher bound to the quote catalog.
    #[must_use]
    pub fn quotes(&self) -> HttpFetcher {
        HttpFetcher::new(self.http().clone(), self.base_quotes().clone())
    }
}

/* ----------------------- Fetcher ----------------------- */

/// GETs JSON from one fixed base address.
///
/// This is the only network-facing [`JsonFetcher`](crate::core::JsonFetcher);
/// both providers compose one of these rather than talking to `reqwest` directly.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: Client,
    base: Url,
}

impl HttpFetcher {
    pub(crate) const fn new(http: Client, base: Url) -> Self {
        Self { http, base }
    }

    /// The base address requests are issued against.
    #[must_use]
    pub const fn base(&self) -> &Url {
        &self.base
    }

    /// Concatenates the base and the path suffix, the same way a plain
    /// string join would (`https://host/api` + `/films` = `https://host/api/films`).
    fn endpoint(&self, path: &str) -> Result<Url, CineError> {
        let base = self.base.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(Url::parse(&format!("{base}/{path}"))?)
    }

    pub(crate) async fn get_json(&self, path: &str) -> Result<Value, CineError> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "GET");

        let resp = self
            .http
            .get(url.clone())
            .header("accept", "application/json")
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(CineError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = net::get_text(resp, path).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct CineClientBuilder {
    user_agent: Option<String>,
    base_films: Option<Url>,
    base_quotes: Option<Url>,
}

impl CineClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the film catalog base (e.g., `https://ghibliapi.vercel.app`).
    #[must_use]
    pub fn base_films(mut self, url: Url) -> Self {
        self.base_films = Some(url);
        self
    }

    /// Override the quote catalog base (e.g., `https://dummyjson.com`).
    #[must_use]
    pub fn base_quotes(mut self, url: Url) -> Self {
        self.base_quotes = Some(url);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default base URL fails to parse or the
    /// underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<CineClient, CineError> {
        let base_films = match self.base_films {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_FILMS)?,
        };
        let base_quotes = match self.base_quotes {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUOTES)?,
        };

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .build()?;

        Ok(CineClient {
            http,
            base_films,
            base_quotes,
        })
    }
}
