//! Movie URL construction.

use anyhow::{Context, Result};
use url::Url;

/// Public SWAPI mirror used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://swapi-api.alx-tools.com/api/";

/// Trim whitespace and make sure the base ends with `/`.
pub fn normalize_base(base: &str) -> String {
    let base = base.trim();
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{}/", base)
    }
}

/// Build `<base>films/<movie_id>`.
///
/// The identifier is appended as a single path segment, so characters like
/// `/` or spaces are percent-encoded instead of changing the path.
pub fn movie_url(base: &str, movie_id: &str) -> Result<Url> {
    let normalized = normalize_base(base);
    let mut url =
        Url::parse(&normalized).with_context(|| format!("invalid base URL {:?}", base))?;
    url.path_segments_mut()
        .map_err(|_| anyhow::anyhow!("base URL {:?} cannot have a path", base))?
        .pop_if_empty()
        .push("films")
        .push(movie_id);
    Ok(url)
}
