//! Core components of the `cinepulse` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`CineClient`] and its builder.
//! - The [`JsonFetcher`] capability the providers are built on.
//! - The primary [`CineError`] type.
//! - The [`Sourced`] tag that distinguishes live from fallback data.

/// The client (`CineClient`), its builder, and the HTTP fetcher.
pub mod client;
/// The primary error type (`CineError`) for the crate.
pub mod error;
/// Shared data models used across the providers.
pub mod models;
/// The `JsonFetcher` service trait.
pub mod services;
pub(crate) mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;
pub(crate) mod random;

// convenient re-exports so most code can just `use crate::core::CineClient`
pub use client::{CineClient, CineClientBuilder, HttpFetcher};
pub use error::CineError;
pub use models::{Source, Sourced};
pub use services::{JsonFetcher, JsonFuture};
