mod commands;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pdf-outline",
    version,
    about = "Extract the title and H1/H2/H3 outline of PDF documents"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Configuration selection shared by every command that runs the engine.
#[derive(Args, Clone)]
struct ConfigOpts {
    /// Predefined configuration: en (default) or sv
    #[arg(short, long, value_name = "NAME")]
    preset: Option<String>,

    /// Custom JSON configuration file (overrides --preset)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Options shared by every command that runs the extractor.
#[derive(Args, Clone)]
struct EngineOpts {
    #[command(flatten)]
    config: ConfigOpts,

    /// Never run OCR, even on documents without a text layer
    #[arg(long)]
    no_ocr: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the outline of a single PDF
    Extract {
        /// Path to PDF file
        input_file: PathBuf,

        /// Output format: json (default) or table
        #[arg(short, long, default_value = "json")]
        output: String,

        /// Write the JSON result to a file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        #[command(flatten)]
        engine: EngineOpts,
    },
    /// Extract outlines for every PDF in a directory, one JSON file per PDF
    Batch {
        /// Directory containing PDF files
        #[arg(default_value = "/app/input")]
        input_dir: PathBuf,

        /// Directory for the JSON results (created if missing)
        #[arg(default_value = "/app/output")]
        output_dir: PathBuf,

        #[command(flatten)]
        engine: EngineOpts,
    },
    /// Show how every line of a PDF was scored and classified
    Inspect {
        /// Path to PDF file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        #[command(flatten)]
        config: ConfigOpts,
    },
    /// Manage and inspect configurations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// List predefined configurations
    List,
    /// Print a predefined configuration as JSON
    Show {
        /// Preset name (e.g., "en")
        preset: String,
    },
    /// Validate a custom configuration file
    Validate {
        /// Path to JSON configuration file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            out,
            engine,
        } => commands::extract::run(input_file, &output, out, &engine.into()),
        Commands::Batch {
            input_dir,
            output_dir,
            engine,
        } => commands::batch::run(&input_dir, &output_dir, &engine.into()),
        Commands::Inspect {
            input_file,
            output,
            config,
        } => commands::inspect::run(
            input_file,
            &output,
            config.preset.as_deref(),
            config.config.as_deref(),
        ),
        Commands::Config { action } => match action {
            ConfigAction::List => commands::config::list(),
            ConfigAction::Show { preset } => commands::config::show(&preset),
            ConfigAction::Validate { file } => commands::config::validate(&file),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

impl From<EngineOpts> for commands::Settings {
    fn from(opts: EngineOpts) -> Self {
        commands::Settings {
            preset: opts.config.preset,
            config: opts.config.config,
            no_ocr: opts.no_ocr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_inspect_and_extract_share_config_flags() {
        let cli = Cli::try_parse_from(["pdf-outline", "inspect", "a.pdf", "-p", "sv"]).unwrap();
        match cli.command {
            Commands::Inspect { config, .. } => assert_eq!(config.preset.as_deref(), Some("sv")),
            _ => panic!("expected inspect"),
        }

        let cli = Cli::try_parse_from([
            "pdf-outline",
            "extract",
            "a.pdf",
            "--config",
            "custom.json",
            "--no-ocr",
        ])
        .unwrap();
        match cli.command {
            Commands::Extract { engine, .. } => {
                let settings: commands::Settings = engine.into();
                assert_eq!(settings.config, Some(PathBuf::from("custom.json")));
                assert!(settings.no_ocr);
            }
            _ => panic!("expected extract"),
        }
    }
}
