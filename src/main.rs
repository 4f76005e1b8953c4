use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::path::PathBuf;
use xml_query::cli::{self, CliError, QueryOptions, RawOptions};

#[derive(Parser)]
#[command(name = "xmlq")]
#[command(about = "xmlq - Query XML documents (converted to JSON) by dot-separated element path")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a path, optionally reading an attribute from the node found
    Query {
        /// Dot-separated element path, e.g. OrderViewRS.Orders.Order
        path: String,

        /// Attribute name, matched as-is or with a leading '@'
        #[arg(short, long)]
        attribute: Option<String>,

        /// Document JSON (reads --file or stdin if not provided)
        #[arg(short, long)]
        input: Option<String>,

        /// Document JSON file
        #[arg(short, long, conflicts_with = "input")]
        file: Option<PathBuf>,

        /// Pretty-print the result
        #[arg(short, long)]
        pretty: bool,

        /// Print {"result": ..., "note": ...} instead of the bare result
        #[arg(long)]
        envelope: bool,
    },

    /// Print the document source unchanged
    Raw {
        /// Document JSON file (reads stdin if not provided)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Exit status for a query that ran but found nothing
const EXIT_ABSENT: i32 = 2;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Query {
            path,
            attribute,
            input,
            file,
            pretty,
            envelope,
        } => run_query(path, attribute, input, file, pretty, envelope),
        Commands::Raw { file } => run_raw(file),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_ABSENT),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Inline input wins, then an explicit file, then piped stdin.
fn read_stdin_unless(given: bool) -> Result<Option<String>, CliError> {
    if given || atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
    Ok(Some(buffer))
}

fn run_query(
    path: String,
    attribute: Option<String>,
    input: Option<String>,
    file: Option<PathBuf>,
    pretty: bool,
    envelope: bool,
) -> Result<bool, CliError> {
    let input = match input {
        Some(s) => Some(s),
        None => read_stdin_unless(file.is_some())?,
    };

    let options = QueryOptions {
        path,
        attribute,
        input,
        file,
        pretty,
    };

    let outcome = cli::execute_query(&options)?;

    if envelope {
        let json = if pretty {
            serde_json::to_string_pretty(&outcome.to_envelope())
        } else {
            serde_json::to_string(&outcome.to_envelope())
        }?;
        println!("{}", json);
    } else {
        match &outcome.result {
            Some(result) => println!("{}", result),
            None => eprintln!("{}", outcome.note),
        }
    }

    Ok(outcome.found)
}

fn run_raw(file: Option<PathBuf>) -> Result<bool, CliError> {
    let input = read_stdin_unless(file.is_some())?;

    match cli::read_raw(&RawOptions { input, file })? {
        Some(text) => {
            print!("{}", text);
            Ok(true)
        }
        None => {
            eprintln!("Document not found");
            Ok(false)
        }
    }
}
