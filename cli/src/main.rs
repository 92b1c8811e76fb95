use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use lexkit::script::ScriptTokenKind;
use lexkit::{json, script};
use miette::{Diagnostic, NamedSource};
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(name = "lexkit", version, about = "Rule-driven lexer with JSON and script front ends")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Render errors as annotated source reports
    #[arg(long, global = true)]
    report: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a JSON document and print it back
    Json {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
    /// Print the token stream of an assignment-language script
    Tokens {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// `kind:line:column: 'lexeme'` per token
    Text,
    /// One JSON object per token
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let file = match &cli.command {
        Command::Json { file, .. } | Command::Tokens { file, .. } => file.clone(),
    };
    let (source, name) = match read_input(file.as_ref()) {
        Ok(input) => input,
        Err(e) => {
            eprintln!(
                "{} could not read '{}': {e}",
                "error:".red().bold(),
                display_name(file.as_ref()).yellow()
            );
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(input = %name, bytes = source.len(), "read input");

    match cli.command {
        Command::Json { pretty, .. } => run_json(&source, &name, pretty, cli.report),
        Command::Tokens { format, .. } => run_tokens(&source, &name, format, cli.report),
    }
}

fn run_json(source: &str, name: &str, pretty: bool, report: bool) -> ExitCode {
    match json::parse(source) {
        Ok(value) if pretty => {
            println!("{value:#}");
            ExitCode::SUCCESS
        }
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error(err, source, name, report);
            ExitCode::FAILURE
        }
    }
}

fn run_tokens(source: &str, name: &str, format: Format, report: bool) -> ExitCode {
    for result in script::lexer(source) {
        let token = match result {
            Ok(token) => token,
            Err(err) => {
                report_error(err, source, name, report);
                return ExitCode::FAILURE;
            }
        };
        match format {
            Format::Text => println!(
                "{}:{}:{}: '{}'",
                token.kind.name(),
                token.start_line(),
                token.start_column(),
                token.lexeme
            ),
            Format::Json => match serde_json::to_string(&token) {
                Ok(line) => println!("{line}"),
                Err(e) => {
                    eprintln!("{} could not serialize token: {e}", "error:".red().bold());
                    return ExitCode::FAILURE;
                }
            },
        }
        if token.kind == ScriptTokenKind::Eof {
            break;
        }
    }
    ExitCode::SUCCESS
}

/// Print `err` as `line:column: message`, or as a full miette report.
fn report_error<E>(err: E, source: &str, name: &str, report: bool)
where
    E: Diagnostic + Send + Sync + 'static,
{
    if report {
        let report =
            miette::Report::new(err).with_source_code(NamedSource::new(name, source.to_owned()));
        eprintln!("{report:?}");
    } else {
        eprintln!("{err}");
    }
}

fn read_input(file: Option<&PathBuf>) -> io::Result<(String, String)> {
    let source = match file {
        Some(path) => fs::read_to_string(path)?,
        None => io::read_to_string(io::stdin())?,
    };
    Ok((source, display_name(file)))
}

fn display_name(file: Option<&PathBuf>) -> String {
    file.map_or_else(|| "<stdin>".to_string(), |path| path.display().to_string())
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}
