//! Centralized constants for default endpoints and UA.

/// UA sent with every request.
pub(crate) const USER_AGENT: &str = concat!("cinepulse/", env!("CARGO_PKG_VERSION"));

/// Studio Ghibli film catalog base (`/films` is appended).
pub(crate) const DEFAULT_BASE_FILMS: &str = "https://ghibliapi.vercel.app";

/// DummyJSON base (`/quotes/random` is appended).
pub(crate) const DEFAULT_BASE_QUOTES: &str = "https://dummyjson.com";
