use rand::Rng;

use crate::quote::format_quote;

const FALLBACK_QUOTES: [(&str, &str); 5] = [
    ("Do or do not. There is no try.", "Yoda"),
    (
        "It's not who I am underneath, but what I do that defines me.",
        "Batman",
    ),
    (
        "In every job that must be done, there is an element of fun.",
        "Mary Poppins",
    ),
    ("Fear is the mind-killer.", "Frank Herbert"),
    ("With great power comes great responsibility.", "Uncle Ben"),
];

/// The bundled quotes, already formatted, served when the catalog is unreachable.
#[must_use]
pub fn fallback_quotes() -> Vec<String> {
    FALLBACK_QUOTES
        .iter()
        .map(|(quote, author)| format_quote(quote, author))
        .collect()
}

pub(crate) fn random_quote() -> String {
    let (quote, author) = FALLBACK_QUOTES[rand::thread_rng().gen_range(0..FALLBACK_QUOTES.len())];
    format_quote(quote, author)
}
