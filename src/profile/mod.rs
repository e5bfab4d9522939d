//! The profile record and the genre selector.

mod genre;
mod model;

pub use genre::{Genre, UnknownGenre};
pub use model::Profile;
