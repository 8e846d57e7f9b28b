//! `rootroulette`: terminal front end for the etymology quiz.
//!
//! Asks a round of words, one multiple-choice question each, then shows
//! where the word really came from. Also exposes the word pool and the
//! etymology cache for inspection.

use std::path::PathBuf;
use std::process;
use std::sync::{Arc, LazyLock};

use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Select};
use tracing::info;

use rootroulette::config::Config;
use rootroulette::{EtymologyService, Origin, WordData, spawn_prefetch};

static VERSION: LazyLock<String> = LazyLock::new(rootroulette::version_string);

// ── CLI ─────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "rootroulette", about = "guess the origin language of English words")]
#[command(version = VERSION.as_str())]
struct Args {
    /// path to config.toml
    #[arg(short, long, env = "ROOTROULETTE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// play a round (default)
    Play {
        /// number of words to ask (default: from config)
        #[arg(short, long)]
        rounds: Option<usize>,
    },
    /// show the etymology of one word from the pool
    Lookup {
        /// word to look up
        word: String,
    },
    /// list the word pool
    Words,
    /// etymology cache management
    #[command(subcommand)]
    Cache(CacheCommand),
}

#[derive(Subcommand)]
enum CacheCommand {
    /// show how many pool words are cached
    Info,
    /// delete every cached etymology
    Clear {
        /// skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

type CliResult = Result<(), Box<dyn std::error::Error>>;

// ── commands ────────────────────────────────────────────────────────

async fn play(service: Arc<EtymologyService>, config: &Config, rounds: Option<usize>) -> CliResult {
    let rounds = rounds.unwrap_or(config.game.rounds);
    if rounds == 0 {
        return Err("a round needs at least one word".into());
    }

    println!("fetching {rounds} words...");
    let round = spawn_prefetch(Arc::clone(&service), rounds).wait().await?;

    let mut score = 0;
    for (i, data) in round.iter().enumerate() {
        let options = service.get_language_options(&data.correct_language, config.game.options);
        let choice = Select::new()
            .with_prompt(format!(
                "[{}/{rounds}] where does '{}' come from?",
                i + 1,
                data.word
            ))
            .items(&options)
            .default(0)
            .interact()?;

        if options[choice] == data.correct_language {
            score += 1;
            println!("correct!");
        } else {
            println!("wrong, it's {}.", data.correct_language);
        }
        print_etymology(data);
        println!();
    }

    println!("final score: {score}/{rounds}");
    Ok(())
}

async fn lookup(service: &EtymologyService, word: &str) -> CliResult {
    let Some(data) = service.get_word_data(word).await else {
        return Err(format!("'{word}' is not in the word pool").into());
    };
    println!("{} ({})", data.word, data.correct_language);
    print_etymology(&data);
    Ok(())
}

fn words(service: &EtymologyService) -> CliResult {
    let pool = service.word_pool();
    if pool.is_empty() {
        println!("word pool is empty.");
        return Ok(());
    }

    for (word, code) in pool.iter() {
        let origin = Origin::from_code(code).map_or("?", |origin| origin.name());
        let cached = if service.cache().contains(word) { "*" } else { "" };
        println!("{word:<20} {origin:<12} {cached}");
    }
    println!("\n{} words (* = cached)", pool.len());
    Ok(())
}

fn cache_info(service: &EtymologyService) -> CliResult {
    let (cached, total) = service.get_cache_info();
    println!("{cached}/{total} words cached");
    println!("cache file: {}", service.cache().path().display());
    Ok(())
}

fn cache_clear(service: &EtymologyService, yes: bool) -> CliResult {
    let cached = service.cache().len();
    if cached == 0 {
        println!("cache is already empty.");
        return Ok(());
    }
    if !yes && !confirm(&format!("delete {cached} cached etymologies?")) {
        println!("aborted.");
        return Ok(());
    }
    service.cache().clear();
    println!("cleared {cached} entries.");
    Ok(())
}

// ── helpers ─────────────────────────────────────────────────────────

fn print_etymology(data: &WordData) {
    println!("\n{}", data.etymology_text);
    if !data.origin_languages.is_empty() {
        println!("languages: {}", data.origin_languages.join(", "));
    }
}

/// confirm a prompt with the user; returns false if declined.
fn confirm(prompt: &str) -> bool {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .unwrap_or(false)
}

// ── main ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

async fn run(args: Args) -> CliResult {
    let config = Config::load(args.config.as_deref())?;
    let service = Arc::new(config.service_builder().build()?);
    info!(
        version = VERSION.as_str(),
        words = service.word_pool().len(),
        cached = service.cache().len(),
        "rootroulette starting"
    );

    match args.command.unwrap_or(Command::Play { rounds: None }) {
        Command::Play { rounds } => play(service, &config, rounds).await,
        Command::Lookup { ref word } => lookup(&service, word).await,
        Command::Words => words(&service),
        Command::Cache(CacheCommand::Info) => cache_info(&service),
        Command::Cache(CacheCommand::Clear { yes }) => cache_clear(&service, yes),
    }
}
