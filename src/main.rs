//! Command-line shell around the calculator core.
//!
//! Run with: `keycalc --expr "√(9)+2^3"` for a one-shot evaluation, or pipe
//! key scripts on stdin, one line per submission:
//!
//! ```text
//! $ printf '2+2\n*3\n' | keycalc
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use keycalc::input::KeyScript;
use keycalc::{Calculator, CalculatorBuilder, CalculatorConfig, Phase, View};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about = "Keypad-style scientific calculator")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print each view as JSON
    #[arg(long)]
    json: bool,

    /// Log state transitions to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Evaluate one expression and exit
    #[arg(short, long, value_name = "EXPR")]
    expr: Option<String>,
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "keycalc=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_view(out: &mut impl Write, view: &View, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", view.to_json()?)?;
    } else {
        write!(out, "{}", view)?;
    }
    out.flush()?;
    Ok(())
}

fn run_session(mut calculator: Calculator, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let script = match KeyScript::parse(&line) {
            Ok(script) => script,
            Err(err) => {
                warn!(error = %err, "skipping line");
                continue;
            }
        };

        for command in script.commands() {
            calculator.dispatch(&command);
        }
        print_view(&mut stdout, &calculator.render(), json)?;
    }

    debug!(entries = calculator.history().len(), "session finished");
    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => CalculatorConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CalculatorConfig::default(),
    };
    let calculator = CalculatorBuilder::new().config(config).build()?;

    if let Some(expr) = cli.expr {
        let calculator = calculator.append(&expr).evaluate();
        print_view(&mut io::stdout().lock(), &calculator.render(), cli.json)?;
        let code = if calculator.phase() == Phase::Errored {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        };
        return Ok(code);
    }

    run_session(calculator, cli.json)?;
    Ok(ExitCode::SUCCESS)
}
