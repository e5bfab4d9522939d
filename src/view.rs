//! Text rendering of profiles and the history list.

use crate::{
    core::CineError,
    profile::{Genre, Profile},
};

/// Shown in place of the list when there is no history.
pub const EMPTY_HISTORY: &str = "No history yet.";

/// One line per profile: `<title> (<year>) - Score: <score>`.
#[must_use]
pub fn history_line(p: &Profile) -> String {
    format!("{} ({}) - Score: {}", p.title(), p.year(), p.score())
}

/// The history list, oldest first, or the single placeholder line.
#[must_use]
pub fn render_history(history: &[Profile]) -> Vec<String> {
    if history.is_empty() {
        return vec![EMPTY_HISTORY.to_owned()];
    }
    history.iter().map(history_line).collect()
}

/// The label shown next to the genre selector.
#[must_use]
pub fn genre_label(genre: Genre) -> String {
    format!("Selected: {genre}")
}

/// The profile card. A trailer that is not an absolute URL is shown as unavailable.
#[must_use]
pub fn render_profile(p: &Profile) -> String {
    let f = &p.film;
    let trailer = p
        .trailer_url()
        .map_or_else(|| "unavailable".to_owned(), String::from);
    format!(
        "Poster:  {}\n\
         Title:   {}\n\
         Year:    {}\n\
         Score:   {}\n\
         Genre:   {}\n\
         \n\
         {}\n\
         \n\
         {}\n\
         \n\
         Trailer: {}",
        f.poster, f.title, f.year, f.score, p.genre, f.description, p.quote, trailer
    )
}

/// Pretty-printed JSON of the whole history (2-space indent).
///
/// # Errors
///
/// Returns an error only if serialization itself fails.
pub fn export_json(history: &[Profile]) -> Result<String, CineError> {
    Ok(serde_json::to_string_pretty(history)?)
}
