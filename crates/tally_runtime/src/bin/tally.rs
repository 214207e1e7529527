//! Tally CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::EnvFilter;

use tally_engine::{Engine, Visibility};
use tally_runtime::{Repl, serialize};
use tally_store::{CampaignId, CampaignRecord, MemoryStore};

/// CLI configuration parsed from arguments.
struct CliConfig {
    store_path: Option<PathBuf>,
    caller: String,
    query: Option<String>,
    show_help: bool,
    show_version: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            caller: "gm".to_string(),
            query: None,
            show_help: false,
            show_version: false,
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--as" => {
                i += 1;
                if i >= args.len() {
                    return Err("--as requires a caller id".into());
                }
                config.caller.clone_from(&args[i]);
            }
            "--store" => {
                i += 1;
                if i >= args.len() {
                    return Err("--store requires a file path".into());
                }
                config.store_path = Some(PathBuf::from(&args[i]));
            }
            "-q" | "--query" => {
                i += 1;
                if i >= args.len() {
                    return Err("--query requires query text".into());
                }
                config.query = Some(args[i].clone());
            }
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("tally {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let store = match &config.store_path {
        Some(path) if path.exists() => {
            let store = serialize::load_from_file(path)?;
            info!(path = %path.display(), campaigns = store.len(), "loaded store snapshot");
            store
        }
        _ => seed_store(&config.caller),
    };
    let engine = Engine::new(store)?;

    // One-shot query mode
    if let Some(query) = &config.query {
        let mut engine = engine;
        let reply = engine.evaluate(query, &config.caller)?;
        match reply.visibility {
            Visibility::Broadcast => println!("{}", reply.text),
            Visibility::Private => println!("(only you) {}", reply.text),
        }
        if let Some(path) = &config.store_path {
            serialize::save_to_file(engine.store(), path)?;
        }
        return Ok(());
    }

    let mut repl = Repl::new(engine, &config.caller)?;
    repl.run()?;

    if let Some(path) = &config.store_path {
        serialize::save_to_file(repl.engine().store(), path)?;
    }
    Ok(())
}

/// A starter campaign so a fresh session has something to track.
fn seed_store(game_master: &str) -> MemoryStore {
    let mut store = MemoryStore::new();
    store.add(
        CampaignRecord::new(CampaignId(0), "New Campaign", game_master)
            .with_party_size(4)
            .with_xp_target(500),
    );
    store
}

fn print_help() {
    println!(
        "\x1b[1mTally\x1b[0m - Campaign-ledger bot

\x1b[1mUSAGE:\x1b[0m
    tally [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    --as USER          Caller identity for queries (default: gm)
    --store FILE       Load/save the campaign store snapshot at FILE
    -q, --query TEXT   Evaluate one query and exit (no REPL)

\x1b[1mEXAMPLES:\x1b[0m
    tally                                Start the interactive REPL
    tally --store ledger.tally           Persist campaigns between sessions
    tally -q \"add xp 100\"                One-shot query
    tally --as player2 -q \"current gold\" Query as another caller

\x1b[1mQUERIES:\x1b[0m
    help                                 List commands and aspects
    add xp 100 / add 100 to xp           Increment an aspect
    remove gold 250                      Decrement an aspect
    set party_size 5                     Overwrite an aspect
    current xp                           Read an aspect
    switch campaign to \"Name\"            Change the active campaign
    Ctrl+D                               Exit REPL"
    );
}
