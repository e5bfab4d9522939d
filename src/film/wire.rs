use serde::Deserialize;

use crate::core::{
    CineError,
    wire::{de_text_from_any, non_blank},
};
use crate::film::Film;

/// One element of the Ghibli `/films` listing. Only the mapped fields are kept.
#[derive(Deserialize)]
pub(crate) struct FilmNode {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    #[serde(default, deserialize_with = "de_text_from_any")]
    pub(crate) release_date: Option<String>,
    #[serde(default, deserialize_with = "de_text_from_any")]
    pub(crate) rt_score: Option<String>,
    pub(crate) image: Option<String>,
    pub(crate) movie_banner: Option<String>,
}

fn required(value: Option<String>, field: &str) -> Result<String, CineError> {
    non_blank(value).ok_or_else(|| CineError::Data(format!("film is missing `{field}`")))
}

impl TryFrom<FilmNode> for Film {
    type Error = CineError;

    fn try_from(node: FilmNode) -> Result<Self, Self::Error> {
        Ok(Self {
            title: required(node.title, "title")?,
            description: required(node.description, "description")?,
            year: required(node.release_date, "release_date")?,
            score: required(node.rt_score, "rt_score")?,
            poster: required(node.image, "image")?,
            trailer: required(node.movie_banner, "movie_banner")?,
        })
    }
}
