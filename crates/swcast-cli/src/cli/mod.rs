//! CLI for swcast.

mod roster;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use swcast_core::config;

use roster::run_roster;

pub const USAGE: &str = "Usage: swcast <MovieID>";

/// Top-level CLI: print a film's characters in order of appearance.
#[derive(Debug, Parser)]
#[command(name = "swcast", version)]
#[command(about = "List the characters of a film, in order of appearance", long_about = None)]
pub struct Cli {
    /// Film identifier, e.g. 3 for "Return of the Jedi".
    #[arg(value_name = "MOVIE_ID")]
    pub movie_ids: Vec<String>,

    /// API root to query instead of the configured one.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Read configuration from this file instead of ~/.config/swcast/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// The movie identifier, if exactly one was given.
    pub fn movie_id(&self) -> Option<&str> {
        match self.movie_ids.as_slice() {
            [id] => Some(id.as_str()),
            _ => None,
        }
    }

    pub async fn run_from_args() -> Result<()> {
        Cli::parse().run().await
    }

    pub async fn run(self) -> Result<()> {
        let Some(movie_id) = self.movie_id().map(str::to_owned) else {
            tracing::debug!("expected one movie id, got {}", self.movie_ids.len());
            println!("{}", USAGE);
            return Ok(());
        };

        let mut cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load()?,
        };
        if let Some(base_url) = self.base_url {
            cfg.base_url = base_url;
        }
        tracing::debug!("loaded config: {:?}", cfg);

        run_roster(&cfg, &movie_id).await
    }
}

#[cfg(test)]
mod tests;
