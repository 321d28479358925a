use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "datsval",
    about = "A CLI tool that validates DATS dataset descriptions against the dataset schema and curation rules",
    version,
    author,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a DATS document
    Validate {
        /// Path to the DATS document to validate
        #[arg(long)]
        file: String,

        /// Path to a schema definition to use instead of the bundled one
        #[arg(long)]
        schema: Option<String>,

        /// Probe derivedFrom references for liveness (performs network requests)
        #[arg(long)]
        check_references: bool,

        /// Emit the validation report as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Print the bundled dataset schema
    Schema,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    match cli.command {
        Commands::Validate {
            file,
            schema,
            check_references,
            json,
        } => commands::validate_command(&file, schema.as_deref(), check_references, json),
        Commands::Schema => commands::schema_command(),
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("datsval=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("datsval=info"), // -v: info messages
        _ => EnvFilter::new("datsval=debug"), // -vv or more: full debug
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
