use serde::{Deserialize, Serialize};

/// A film, normalized from whichever catalog produced it.
///
/// Year and score are kept as the provider formatted them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    /// The film's title.
    pub title: String,
    /// A one or two sentence synopsis.
    pub description: String,
    /// Release year, e.g. `"2001"`.
    pub year: String,
    /// Critic score, e.g. `"97"`.
    pub score: String,
    /// URL of a poster image.
    pub poster: String,
    /// URL opened by the trailer link.
    pub trailer: String,
}
