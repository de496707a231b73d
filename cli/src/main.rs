mod formatter;
mod repl;

use anyhow::Result;
use clap::Parser;
use formatter::Formatter;
use smartcalc::{Engine, JsonFileStore};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "smartcalc")]
#[command(about = "A smart command-line calculator with unit and currency conversion.")]
#[command(
    long_about = "Smartcalc evaluates arithmetic expressions, converts between physical units,\nand converts between currencies using a static exchange-rate table.\nWithout arguments it starts an interactive shell; with arguments it evaluates once and exits."
)]
#[command(version)]
struct Cli {
    /// Expression to evaluate once instead of starting the interactive shell
    ///
    /// Examples:
    ///   smartcalc "10.5+23.7"
    ///   smartcalc 5.7 km m
    ///   smartcalc 100 AED INR
    expression: Vec<String>,

    /// History file path
    #[arg(long = "history-file", default_value = "calc_history.json")]
    history_file: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = JsonFileStore::new(&cli.history_file);
    let mut engine = Engine::with_store(Box::new(store));

    let result = if cli.expression.is_empty() {
        repl::run(&mut engine)
    } else {
        eval_once(&mut engine, &cli.expression.join(" "))
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn eval_once(engine: &mut Engine, input: &str) -> Result<()> {
    let formatter = Formatter::default();
    match engine.evaluate(input) {
        Ok(evaluation) => {
            print!("{}", formatter.format_evaluation(input, &evaluation));
            Ok(())
        }
        Err(error) => {
            tracing::debug!(%error, "one-shot evaluation failed");
            print!("{}", formatter.format_failure(input));
            std::process::exit(1);
        }
    }
}
