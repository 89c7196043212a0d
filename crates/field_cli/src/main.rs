//! Field CLI
//!
//! Prints the football field descriptor (JSON/YAML) for external tools,
//! validates dimension files, and emits the descriptor JSON schema.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use football_field::{load_overrides, FieldConfiguration, FieldDescriptor, FieldOverrides};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "field_cli")]
#[command(about = "Football field geometry descriptor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print vertices, edges, labels and colors
    Describe {
        /// Dimension overrides file (.json, .yaml, .yml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,

        #[command(flatten)]
        dimensions: DimensionArgs,
    },

    /// Check dimensions for geometric consistency
    Validate {
        /// Dimension overrides file (.json, .yaml, .yml)
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        dimensions: DimensionArgs,
    },

    /// Print the descriptor JSON schema
    Schema,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Yaml,
}

/// Per-dimension overrides; take precedence over `--config`.
#[derive(Args, Debug, Default)]
struct DimensionArgs {
    #[arg(long, allow_hyphen_values = true)]
    width: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    length: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    end_zone_depth: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    goal_line_1: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    goal_line_2: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    hash_distance_from_sideline: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    hash_length: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    yard_line_interval: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    fifty_yard_line: Option<i32>,
    #[arg(long, allow_hyphen_values = true)]
    number_distance_from_sideline: Option<i32>,
}

impl From<&DimensionArgs> for FieldOverrides {
    fn from(args: &DimensionArgs) -> Self {
        FieldOverrides {
            width: args.width,
            length: args.length,
            end_zone_depth: args.end_zone_depth,
            goal_line_1: args.goal_line_1,
            goal_line_2: args.goal_line_2,
            hash_distance_from_sideline: args.hash_distance_from_sideline,
            hash_length: args.hash_length,
            yard_line_interval: args.yard_line_interval,
            fifty_yard_line: args.fifty_yard_line,
            number_distance_from_sideline: args.number_distance_from_sideline,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = run(&cli.command)?;
    println!("{}", output);
    Ok(())
}

/// Execute a command, returning what goes to stdout.
fn run(command: &Commands) -> Result<String> {
    match command {
        Commands::Describe { config, format, dimensions } => {
            let cfg = resolve(config.as_deref(), dimensions)?;
            let descriptor = FieldDescriptor::from_config(&cfg);
            match format {
                Format::Json => descriptor.to_json_pretty().context("Failed to encode descriptor as JSON"),
                Format::Yaml => descriptor.to_yaml().context("Failed to encode descriptor as YAML"),
            }
        }

        Commands::Validate { config, dimensions } => {
            let cfg = resolve(config.as_deref(), dimensions)?;
            cfg.validate().context("Field dimensions are inconsistent")?;
            info!("field configuration is valid");
            Ok("valid".to_string())
        }

        Commands::Schema => serde_json::to_string_pretty(&FieldDescriptor::json_schema())
            .context("Failed to encode descriptor schema"),
    }
}

/// Defaults, then the config file, then command-line flags.
fn resolve(config: Option<&Path>, dimensions: &DimensionArgs) -> Result<FieldConfiguration> {
    let from_file = match config {
        Some(path) => load_overrides(path)
            .with_context(|| format!("Failed to load dimensions: {}", path.display()))?,
        None => FieldOverrides::default(),
    };
    Ok(FieldConfiguration::new(from_file.merge(FieldOverrides::from(dimensions))))
}
