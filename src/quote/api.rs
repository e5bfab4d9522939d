use crate::{
    core::{CineError, JsonFetcher},
    quote::{format_quote, wire::QuoteNode},
};

pub(crate) const RANDOM_QUOTE_PATH: &str = "/quotes/random";

pub(super) async fn fetch_quote<F>(fetcher: &F) -> Result<String, CineError>
where
    F: JsonFetcher + ?Sized,
{
    let body = fetcher.fetch_json(RANDOM_QUOTE_PATH).await?;
    let node: QuoteNode = serde_json::from_value(body)?;
    let (quote, author) = node.into_parts()?;
    Ok(format_quote(&quote, &author))
}
