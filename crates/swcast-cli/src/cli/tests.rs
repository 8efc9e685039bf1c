use super::*;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_movie_id() {
    let cli = parse(&["swcast", "3"]);
    assert_eq!(cli.movie_id(), Some("3"));
    assert!(cli.base_url.is_none());
    assert!(cli.config.is_none());
}

#[test]
fn cli_parse_no_movie_id_is_usage() {
    let cli = parse(&["swcast"]);
    assert!(cli.movie_ids.is_empty());
    assert_eq!(cli.movie_id(), None);
}

#[test]
fn cli_parse_extra_positional_is_usage() {
    let cli = parse(&["swcast", "1", "2"]);
    assert_eq!(cli.movie_ids, vec!["1", "2"]);
    assert_eq!(cli.movie_id(), None);
}

#[test]
fn cli_parse_id_is_kept_verbatim() {
    let cli = parse(&["swcast", "a new hope"]);
    assert_eq!(cli.movie_id(), Some("a new hope"));
}

#[test]
fn cli_parse_base_url_and_config() {
    let cli = parse(&[
        "swcast",
        "--base-url",
        "http://127.0.0.1:8000/api/",
        "--config",
        "/tmp/swcast.toml",
        "6",
    ]);
    assert_eq!(cli.movie_id(), Some("6"));
    assert_eq!(cli.base_url.as_deref(), Some("http://127.0.0.1:8000/api/"));
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/swcast.toml")));
}

#[test]
fn usage_text() {
    assert_eq!(USAGE, "Usage: swcast <MovieID>");
}

#[tokio::test]
async fn usage_path_makes_no_requests_and_succeeds() {
    // No id: returns before config or network are touched, even with a bogus config path.
    let cli = parse(&["swcast", "--config", "/nonexistent/swcast.toml"]);
    cli.run().await.unwrap();
}

#[tokio::test]
async fn bad_base_url_is_an_error() {
    let cfg = swcast_core::config::SwcastConfig {
        base_url: "not a url".to_string(),
        ..Default::default()
    };
    assert!(run_roster(&cfg, "1").await.is_err());
}
