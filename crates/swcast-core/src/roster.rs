//! Film roster workflow: fetch a movie, then each of its characters in order.
//!
//! Fetches are strictly sequential. A movie failure ends the run, while a
//! character failure is reported and the loop moves on to the next entry.
//! Names go to `out` as soon as each one is retrieved; diagnostics go to `err`.

use std::io::{self, Write};

use crate::error::CharacterError;
use crate::fetch::JsonFetcher;
use crate::models::{Character, CharacterRef, Movie};

/// How a roster run ended. Every variant is a normal termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterOutcome {
    /// The movie record could not be fetched or decoded.
    MovieUnavailable,
    /// The movie record decoded but had no usable `characters` list.
    InvalidMovie,
    /// The character list was walked to the end.
    Completed { printed: usize, failed: usize },
}

/// Run the roster for the movie at `movie_url`.
///
/// Only write failures on `out`/`err` are returned as errors.
pub fn run<F, O, E>(
    fetcher: &F,
    movie_url: &str,
    out: &mut O,
    err: &mut E,
) -> io::Result<RosterOutcome>
where
    F: JsonFetcher + ?Sized,
    O: Write,
    E: Write,
{
    tracing::debug!("fetching movie {}", movie_url);
    let value = match fetcher.fetch_json(movie_url) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!("movie fetch failed for {}: {}", movie_url, e);
            writeln!(err, "Error fetching movie: {}", e)?;
            return Ok(RosterOutcome::MovieUnavailable);
        }
    };

    let movie = match Movie::from_value(value) {
        Ok(m) => m,
        Err(e) => {
            tracing::warn!("invalid movie data from {}: {}", movie_url, e);
            writeln!(out, "Invalid movie data")?;
            out.flush()?;
            return Ok(RosterOutcome::InvalidMovie);
        }
    };

    tracing::info!(
        "movie {:?} lists {} characters",
        movie.title.as_deref().unwrap_or("<untitled>"),
        movie.characters.len()
    );

    let mut printed = 0;
    let mut failed = 0;
    for (index, reference) in movie.characters.iter().enumerate() {
        match fetch_character(fetcher, reference) {
            Ok(character) => {
                writeln!(out, "{}", character.name)?;
                out.flush()?;
                printed += 1;
            }
            Err(e) => {
                tracing::warn!("character #{} failed: {}", index + 1, e);
                writeln!(err, "Error fetching character: {}", e)?;
                failed += 1;
            }
        }
    }

    tracing::info!("roster done: {} printed, {} failed", printed, failed);
    Ok(RosterOutcome::Completed { printed, failed })
}

fn fetch_character<F>(fetcher: &F, reference: &CharacterRef) -> Result<Character, CharacterError>
where
    F: JsonFetcher + ?Sized,
{
    let url = match reference {
        CharacterRef::Url(url) => url,
        CharacterRef::Invalid(_) => return Err(CharacterError::NotAUrl),
    };
    tracing::debug!("fetching character {}", url);
    let value = fetcher.fetch_json(url)?;
    Ok(Character::from_value(value)?)
}
