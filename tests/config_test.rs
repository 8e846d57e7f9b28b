//! Tests for TOML configuration loading.

#![cfg(feature = "cli")]

use std::path::Path;
use std::time::Duration;

use rootroulette::TransientPolicy;
use rootroulette::config::{Config, TransientErrors};
use rootroulette::fetcher::DEFAULT_API_URL;

fn write_config(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn empty_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "");

    let config = Config::load(Some(&path)).unwrap();

    assert_eq!(config.paths.word_dict, None);
    assert_eq!(config.paths.cache_file, None);
    assert_eq!(config.fetcher.api_url, DEFAULT_API_URL);
    assert_eq!(config.fetcher.timeout_secs, 10);
    assert_eq!(config.game.rounds, 5);
    assert_eq!(config.game.options, 4);
    assert_eq!(config.cache.transient_errors, TransientErrors::NegativeCache);
    assert_eq!(config.transient_policy(), TransientPolicy::NegativeCache);
}

#[test]
fn full_file_is_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"
[paths]
word_dict = "/data/word_dict.json"
cache_file = "/data/etymology_cache.json"

[fetcher]
api_url = "http://localhost:8080/w/api.php"
user_agent = "quiz-night/2.0"
timeout_secs = 3

[game]
rounds = 12
options = 6

[cache]
transient_errors = "cooldown"
cooldown_secs = 90
"#,
    );

    let config = Config::load(Some(&path)).unwrap();

    assert_eq!(
        config.paths.word_dict.as_deref(),
        Some(Path::new("/data/word_dict.json"))
    );
    assert_eq!(config.game.rounds, 12);
    assert_eq!(config.game.options, 6);
    assert_eq!(
        config.transient_policy(),
        TransientPolicy::Cooldown(Duration::from_secs(90))
    );

    let fetcher = config.fetcher_config();
    assert_eq!(fetcher.api_url, "http://localhost:8080/w/api.php");
    assert_eq!(fetcher.user_agent, "quiz-night/2.0");
    assert_eq!(fetcher.timeout, Duration::from_secs(3));
}

#[test]
fn default_user_agent_is_kept_when_not_overridden() {
    let config = Config::default();
    assert!(config.fetcher_config().user_agent.starts_with("rootroulette/"));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let err = Config::load(Some(Path::new("/nonexistent/rootroulette.toml"))).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
}

#[test]
fn invalid_toml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[game\nrounds = ");
    assert!(Config::load(Some(&path)).is_err());
}

#[test]
fn unknown_transient_policy_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[cache]\ntransient_errors = \"retry-forever\"\n");
    assert!(Config::load(Some(&path)).is_err());
}

#[test]
fn zero_rounds_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[game]\nrounds = 0\n");
    let err = Config::load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("game.rounds"));
}

#[test]
fn single_option_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "[game]\noptions = 1\n");
    assert!(Config::load(Some(&path)).is_err());
}

#[test]
fn service_builder_applies_paths() {
    let dir = tempfile::tempdir().unwrap();
    let dict = dir.path().join("word_dict.json");
    let cache = dir.path().join("cache").join("etymology_cache.json");
    std::fs::write(&dict, r#"{"anger": "E", "beef": "D"}"#).unwrap();

    let path = write_config(
        &dir,
        &format!(
            "[paths]\nword_dict = {:?}\ncache_file = {:?}\n",
            dict.display().to_string(),
            cache.display().to_string()
        ),
    );
    let config = Config::load(Some(&path)).unwrap();
    let service = config.service_builder().build().unwrap();

    assert_eq!(service.get_available_words(), vec!["anger", "beef"]);
    assert_eq!(service.cache().path(), cache.as_path());
}
