use serde::Deserialize;

use crate::core::{CineError, wire::non_blank};

/// Body of DummyJSON's `/quotes/random`.
#[derive(Deserialize)]
pub(crate) struct QuoteNode {
    pub(crate) quote: Option<String>,
    pub(crate) author: Option<String>,
}

impl QuoteNode {
    pub(crate) fn into_parts(self) -> Result<(String, String), CineError> {
        let quote = non_blank(self.quote)
            .ok_or_else(|| CineError::Data("quote is missing `quote`".into()))?;
        let author = non_blank(self.author)
            .ok_or_else(|| CineError::Data("quote is missing `author`".into()))?;
        Ok((quote, author))
    }
}
