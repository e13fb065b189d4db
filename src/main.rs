use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Read};
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use valpat::{Pattern, PatternTable, SyntaxError, Value, compile, diagnostic, match_value};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Disable coloured diagnostics
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Test each JSON value in the input against a pattern
    Check {
        /// Pattern to match
        #[arg(value_name = "PATTERN")]
        pattern: String,

        /// JSON input (whitespace-separated values); stdin if omitted
        #[arg(value_name = "FILE")]
        file: Option<String>,
    },
    /// Print a pattern in normalized form
    Explain {
        #[arg(value_name = "PATTERN")]
        pattern: String,
    },
    /// Print the label of the first matching arm for each JSON value
    Dispatch {
        /// Arm as PATTERN=LABEL; arms are tried in the order given
        #[arg(short, long = "arm", value_name = "PATTERN=LABEL", required = true)]
        arms: Vec<String>,

        /// JSON input (whitespace-separated values); stdin if omitted
        #[arg(value_name = "FILE")]
        file: Option<String>,
    },
}

/// Exit status for a pattern that failed to compile.
const EXIT_SYNTAX: u8 = 2;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let styled = !args.no_color && io::stderr().is_terminal();

    match run(args.command) {
        Ok(code) => code,
        Err(err) => {
            if let Some(syntax) = err.downcast_ref::<SyntaxError>() {
                eprintln!("{}", diagnostic::render(syntax, styled));
                return ExitCode::from(EXIT_SYNTAX);
            }
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<ExitCode> {
    match command {
        Command::Check { pattern, file } => {
            let pattern = compile(&pattern)?;
            check(&pattern, file.as_deref())
        }
        Command::Explain { pattern } => {
            println!("{}", compile(&pattern)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Dispatch { arms, file } => {
            let table = parse_arms(&arms)?;
            dispatch(&table, file.as_deref())
        }
    }
}

fn check(pattern: &Pattern, file: Option<&str>) -> Result<ExitCode> {
    let mut all_matched = true;
    for value in read_values(file)? {
        let matched = pattern.is_match(&value?)?;
        all_matched &= matched;
        println!("{matched}");
    }
    Ok(if all_matched {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn dispatch(table: &PatternTable, file: Option<&str>) -> Result<ExitCode> {
    for value in read_values(file)? {
        match match_value(&value?, table)? {
            Some(Value::String(label)) => println!("{label}"),
            Some(other) => println!("{other}"),
            None => println!("-"),
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Build a table from `PATTERN=LABEL` arguments. The label follows the
/// last `=`, so labels cannot contain `=`.
fn parse_arms(arms: &[String]) -> Result<PatternTable> {
    let mut table = PatternTable::new();
    for arm in arms {
        let (pattern, label) = arm
            .rsplit_once('=')
            .ok_or_else(|| anyhow!("arm {arm:?} must be PATTERN=LABEL"))?;
        // Surface syntax errors before any input is read.
        compile(pattern)?;
        let label = Value::from(label);
        table.insert(pattern, Value::function(move |_| label.clone()));
    }
    Ok(table)
}

fn read_values(file: Option<&str>) -> Result<impl Iterator<Item = Result<Value>>> {
    let reader: Box<dyn Read> = match file {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to read {path}"))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };
    Ok(serde_json::Deserializer::from_reader(reader)
        .into_iter::<serde_json::Value>()
        .map(|json| json.map(Value::from).context("Invalid JSON input")))
}
