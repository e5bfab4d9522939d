use serde_json::Value;

use crate::core::{CineError, HttpFetcher};

/// A boxed future, as returned by [`JsonFetcher::fetch_json`].
pub type JsonFuture<'a> =
    std::pin::Pin<Box<dyn std::future::Future<Output = Result<Value, CineError>> + Send + 'a>>;

/// A trait for anything that can fetch a JSON document by path.
///
/// The providers depend on this capability rather than on a concrete HTTP
/// client, so tests can hand them canned documents or canned failures.
/// It is implemented by [`HttpFetcher`].
pub trait JsonFetcher: Send + Sync {
    /// Asynchronously fetches and parses the JSON document at `path`.
    ///
    /// # Arguments
    /// * `path` - The path suffix appended to the fetcher's base address.
    ///
    /// # Returns
    /// A `Future` that resolves to the parsed JSON value, or a `CineError`
    /// for transport, status, or parse failures.
    fn fetch_json<'a>(&'a self, path: &'a str) -> JsonFuture<'a>;
}

impl JsonFetcher for HttpFetcher {
    fn fetch_json<'a>(&'a self, path: &'a str) -> JsonFuture<'a> {
        Box::pin(self.get_json(path))
    }
}

impl<T: JsonFetcher + ?Sized> JsonFetcher for std::sync::Arc<T> {
    fn fetch_json<'a>(&'a self, path: &'a str) -> JsonFuture<'a> {
        (**self).fetch_json(path)
    }
}
