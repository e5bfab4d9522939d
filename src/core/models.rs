use serde::Serialize;

/// Where a provider's value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Parsed from a successful catalog response.
    Live,
    /// Picked from the bundled static list after the catalog call failed.
    Fallback,
}

/// A value tagged with its [`Source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sourced<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Sourced<T> {
    pub const fn live(value: T) -> Self {
        Self {
            value,
            source: Source::Live,
        }
    }

    pub const fn fallback(value: T) -> Self {
        Self {
            value,
            source: Source::Fallback,
        }
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.source == Source::Live
    }
}
