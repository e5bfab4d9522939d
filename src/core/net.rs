#[cfg(feature = "test-mode")]
use std::env;

/// Read the response body as text.
/// In `test-mode`, if `CINEPULSE_RECORD=1`, the body is saved as a fixture via `fixtures`.
pub(crate) async fn get_text(resp: reqwest::Response, _path: &str) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("CINEPULSE_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_path, &text)
        {
            tracing::warn!("CINEPULSE_RECORD: failed to write fixture for {_path}: {e}");
        }
    }

    Ok(text)
}
