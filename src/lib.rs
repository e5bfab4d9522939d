//! cinepulse: movie profiles from a random film and a random quote.
//!
//! A profile pairs a film from the Studio Ghibli catalog with a quote from
//! DummyJSON and a user-chosen genre. Either catalog may be down; each
//! provider then answers from a small bundled list, and says so through
//! [`Sourced`]. Generated profiles are appended to a history that is
//! persisted whole through a [`HistoryStore`].

pub mod app;
pub mod config;
pub mod core;
pub mod film;
pub mod history;
pub mod profile;
pub mod quote;
pub mod view;

pub use app::{CinePulse, Generated, Status};
pub use config::Config;
pub use crate::core::{CineClient, CineError, HttpFetcher, JsonFetcher, Source, Sourced};
pub use film::{Film, FilmProvider};
pub use history::{FileStore, HistoryStore, MemoryStore};
pub use profile::{Genre, Profile};
pub use quote::QuoteProvider;
