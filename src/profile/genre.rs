use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of genres a profile can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Comedy,
    Drama,
    #[default]
    Fantasy,
    Horror,
    Mystery,
    Romance,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Thriller,
}

impl Genre {
    /// Every genre, in selector order.
    pub const ALL: [Self; 11] = [
        Self::Action,
        Self::Adventure,
        Self::Animation,
        Self::Comedy,
        Self::Drama,
        Self::Fantasy,
        Self::Horror,
        Self::Mystery,
        Self::Romance,
        Self::SciFi,
        Self::Thriller,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Adventure => "Adventure",
            Self::Animation => "Animation",
            Self::Comedy => "Comedy",
            Self::Drama => "Drama",
            Self::Fantasy => "Fantasy",
            Self::Horror => "Horror",
            Self::Mystery => "Mystery",
            Self::Romance => "Romance",
            Self::SciFi => "Sci-Fi",
            Self::Thriller => "Thriller",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known [`Genre`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown genre `{0}`")]
pub struct UnknownGenre(pub String);

impl FromStr for Genre {
    type Err = UnknownGenre;

    /// Case-insensitive; `scifi` and `sci-fi` both name [`Genre::SciFi`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|g| {
                g.as_str()
                    .chars()
                    .filter(|c| c.is_alphanumeric())
                    .collect::<String>()
                    .to_lowercase()
                    == wanted
            })
            .ok_or_else(|| UnknownGenre(s.to_owned()))
    }
}
