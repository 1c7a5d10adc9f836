use clap::{Parser as ClapParser, Subcommand};
use jsonmatch::cli::{self, Assertion, CheckOptions, CliError};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "jsonmatch")]
#[command(about = "jsonmatch - Query and assert on JSON documents by path")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON input (reads from stdin if not provided)
    #[arg(short, long, global = true, env = "JSONMATCH_INPUT")]
    input: Option<String>,

    /// Pretty-print array output
    #[arg(short, long, global = true)]
    pretty: bool,

    /// Log assertion steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assert the value at PATH is null
    Null { path: String },

    /// Assert the scalar at PATH matches a regular expression
    Match { path: String, pattern: String },

    /// Assert the value at PATH is an array of exactly LENGTH elements
    Len { path: String, length: usize },

    /// Print the scalar at PATH
    Read { path: String },

    /// Print the scalar elements of the array at PATH
    ReadArray { path: String },

    /// Assert the final key of PATH is absent
    Missing { path: String },

    /// Show path syntax documentation
    Syntax,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (assertion, path) = match cli.command {
        Commands::Null { path } => (Assertion::Null, path),
        Commands::Match { path, pattern } => (Assertion::Match { pattern }, path),
        Commands::Len { path, length } => (Assertion::Len { length }, path),
        Commands::Read { path } => (Assertion::Read, path),
        Commands::ReadArray { path } => (Assertion::ReadArray, path),
        Commands::Missing { path } => (Assertion::Missing, path),
        Commands::Syntax => {
            print!("{}", cli::get_syntax_doc());
            return;
        }
    };

    if let Err(e) = run_check(assertion, path, cli.input, cli.pretty) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_check(
    assertion: Assertion,
    path: String,
    input: Option<String>,
    pretty: bool,
) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = CheckOptions {
        assertion,
        path,
        input,
    };

    let output = cli::execute_check(&options)?;
    println!("{}", output.render(pretty)?);
    Ok(())
}
