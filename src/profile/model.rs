use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{film::Film, profile::Genre};

/// A generated movie profile: one film, one quote, the chosen genre.
///
/// Serialized flat, film fields first:
/// `title, description, year, score, poster, trailer, quote, genre, id, created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(flatten)]
    pub film: Film,
    /// Formatted as `"<quote>" - <author>`.
    pub quote: String,
    pub genre: Genre,
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Assembles a profile stamped with a fresh id and the current time.
    #[must_use]
    pub fn new(film: Film, quote: String, genre: Genre) -> Self {
        Self {
            film,
            quote,
            genre,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.film.title
    }

    #[must_use]
    pub fn year(&self) -> &str {
        &self.film.year
    }

    #[must_use]
    pub fn score(&self) -> &str {
        &self.film.score
    }

    /// The trailer link, if the stored value is an absolute URL.
    #[must_use]
    pub fn trailer_url(&self) -> Option<url::Url> {
        url::Url::parse(&self.film.trailer).ok()
    }
}
