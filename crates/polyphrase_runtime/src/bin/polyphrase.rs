//! polyphrase CLI entry point.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use polyphrase_parser::{Engine, ParserConfig, optimal_region};
use polyphrase_runtime::output::{format_tokens, node_to_json, tokens_to_json};
use polyphrase_runtime::{Repl, RuntimeError, Session};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "polyphrase")]
#[command(version)]
#[command(about = "Parse, render, and translate hypermedia commands across 13 languages")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log parser decisions at debug level (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Reject parses below this confidence
    #[arg(long, global = true)]
    min_confidence: Option<f64>,

    /// Treat bracketed input as native text instead of explicit syntax
    #[arg(long, global = true)]
    no_explicit: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a command from one language to another
    Translate {
        /// Source language code
        #[arg(long)]
        from: String,
        /// Target language code
        #[arg(long)]
        to: String,
        /// Command text
        text: String,
    },

    /// Parse a command and print its semantic node
    Parse {
        /// Language code
        #[arg(long, short)]
        lang: String,
        /// Print the node as JSON
        #[arg(long)]
        json: bool,
        /// Command text
        text: String,
    },

    /// Print a command in explicit syntax
    Explicit {
        /// Language code
        #[arg(long, short)]
        lang: String,
        /// Command text
        text: String,
    },

    /// Print the tokens of a command
    Tokens {
        /// Language code
        #[arg(long, short)]
        lang: String,
        /// Print the tokens as JSON
        #[arg(long)]
        json: bool,
        /// Command text
        text: String,
    },

    /// Detect which languages a text uses
    Detect {
        /// Text to inspect
        text: String,
    },

    /// List supported languages
    Languages,

    /// Start the interactive translation REPL
    Repl {
        /// Source language code
        #[arg(long, default_value = "en")]
        from: String,
        /// Target language code
        #[arg(long, default_value = "ja")]
        to: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("polyphrase_parser=debug,polyphrase_languages=debug,polyphrase_runtime=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn config(cli: &Cli) -> ParserConfig {
    let mut config = ParserConfig::default();
    if let Some(min) = cli.min_confidence {
        config = config.with_min_confidence(min);
    }
    if cli.no_explicit {
        config = config.with_explicit_fallback(false);
    }
    config
}

fn run(cli: Cli) -> Result<(), RuntimeError> {
    let engine = Engine::builtin().with_config(config(&cli));
    tracing::debug!(config = ?engine.config(), "engine ready");

    match cli.command {
        Commands::Translate { from, to, text } => {
            println!("{}", engine.translate(&text, &from, &to)?);
        }
        Commands::Parse { lang, json, text } => {
            let node = engine.parse(&text, &lang)?;
            if json {
                println!("{}", node_to_json(&node)?);
            } else {
                println!("{}", engine.render_explicit(&node));
                println!("kind: {:?}, confidence: {:.2}", node.kind, node.confidence);
            }
        }
        Commands::Explicit { lang, text } => {
            println!("{}", engine.to_explicit(&text, &lang)?);
        }
        Commands::Tokens { lang, json, text } => {
            let stream = engine.tokenize(&text, &lang)?;
            if json {
                println!("{}", tokens_to_json(&stream)?);
            } else {
                println!("{}", format_tokens(&stream));
            }
        }
        Commands::Detect { text } => {
            let detected = engine.detect_languages(&text);
            if detected.is_empty() {
                println!("en (default)");
            } else {
                println!("{}", detected.join(" "));
                if let Some(region) = optimal_region(&detected) {
                    println!("smallest bundle: {region}");
                }
            }
        }
        Commands::Languages => {
            for profile in engine.languages().profiles() {
                println!(
                    "{:<4}{:<12}{:?}",
                    profile.code(),
                    profile.name(),
                    profile.word_order()
                );
            }
        }
        Commands::Repl { from, to } => {
            for code in [&from, &to] {
                engine.profile(code)?;
            }
            Repl::new(engine, Session::new(from, to))?.run()?;
        }
    }
    Ok(())
}
