//! cohort-expr command-line interface

use clap::{Parser, Subcommand};
use cohort_expr::cli::{check, compile, inspect, output};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Cohort filter expression tool
#[derive(Parser)]
#[command(name = "cohort-expr")]
#[command(author, version, about = "Compile cohort filter expressions to SQL predicates", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile expressions to predicate text
    Compile {
        /// Field maps file (JSON)
        #[arg(short, long)]
        maps: PathBuf,

        /// Expressions to compile
        #[arg(required = true)]
        expressions: Vec<String>,
    },

    /// Check every expression in a file, one per line
    Check {
        /// Field maps file (JSON)
        #[arg(short, long)]
        maps: PathBuf,

        /// File of expressions; blank lines and `#` comments are skipped
        file: PathBuf,
    },

    /// Print the token stream of an expression
    Tokens {
        expression: String,
    },

    /// Print the field names an expression references
    Fields {
        expression: String,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Compile { maps, expressions } => {
            compile::compile(compile::CompileConfig { maps, expressions })
        }
        Commands::Check { maps, file } => check::check(check::CheckConfig {
            maps,
            file,
            verbose: cli.verbose,
        }),
        Commands::Tokens { expression } => inspect::tokens(&expression),
        Commands::Fields { expression } => inspect::fields(&expression),
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
