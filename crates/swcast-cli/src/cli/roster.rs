//! `swcast <id>`: fetch the film and print its characters.

use anyhow::{Context, Result};
use std::io;
use swcast_core::config::SwcastConfig;
use swcast_core::fetch::{CurlFetcher, FetchOptions};
use swcast_core::roster;
use swcast_core::url_model;

/// Build the movie URL and run the roster on a blocking thread.
///
/// Movie and character failures are already reported on stdout/stderr by the
/// roster, so they do not turn into an error here.
pub async fn run_roster(cfg: &SwcastConfig, movie_id: &str) -> Result<()> {
    let movie_url = url_model::movie_url(&cfg.base_url, movie_id)?;
    let fetcher = CurlFetcher::new(FetchOptions::from_config(cfg));

    let outcome = tokio::task::spawn_blocking(move || {
        let stdout = io::stdout();
        let stderr = io::stderr();
        roster::run(
            &fetcher,
            movie_url.as_str(),
            &mut stdout.lock(),
            &mut stderr.lock(),
        )
    })
    .await
    .context("roster task join")?
    .context("writing roster output")?;

    tracing::info!("roster for movie {} finished: {:?}", movie_id, outcome);
    Ok(())
}
