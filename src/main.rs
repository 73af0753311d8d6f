use anyhow::Result;
use clap::Parser;
use examplelib::config::Config;
use examplelib::{Multiplier, OverflowPolicy, demo, version};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "examplelib",
    about = "Example library demo: string concatenation and an integer multiplier",
    version
)]
struct Cli {
    /// Path to config file [default: examplelib.toml, optional]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Run the demo sequence: banner, multiplication, library call
    Demo {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Concatenate two strings
    Concat {
        #[arg(allow_hyphen_values = true)]
        a: String,

        #[arg(allow_hyphen_values = true)]
        b: String,

        /// Concatenate the pair twice (a + b + a + b)
        #[arg(long)]
        double: bool,
    },

    /// Multiply two integers and print the stored product
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: i64,

        #[arg(allow_negative_numbers = true)]
        b: i64,

        /// Fail on overflow instead of wrapping
        #[arg(long)]
        checked: bool,
    },

    /// Print the library version banner
    Version,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let cfg = Config::resolve(cli.config.as_deref())?;
    cfg.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log.filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Demo { json } => {
            let report = demo::run(&cfg.demo, cfg.multiplier.overflow)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.product);
                println!("{}", report.concatenation);
            }
        }
        Command::Concat { a, b, double } => {
            let out = if double {
                examplelib::double_concat(&a, &b)
            } else {
                examplelib::normal_concat(&a, &b)
            };
            println!("{out}");
        }
        Command::Multiply { a, b, checked } => {
            let policy = if checked {
                OverflowPolicy::Check
            } else {
                cfg.multiplier.overflow
            };
            let mut multiplier = Multiplier::new();
            multiplier.multiply_with(a, b, policy)?;
            println!("{}", multiplier.result());
        }
        Command::Version => {
            println!("{}", version::preamble());
            println!("{}", version::description());
        }
    }

    Ok(())
}
