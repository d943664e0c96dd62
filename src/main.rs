//! `service-config` — resolve and print a service configuration
//!
//! Small inspection binary: resolves configuration bytes from the flag
//! and environment sources, decodes them, and prints the result. Useful
//! for checking what an embedding service would see.

use clap::{ArgAction, Parser, ValueEnum};

use service_config::{ConfigError, ConfigFlags, ConfigSource, ExitCode, JsonDecoder, YamlDecoder};

/// Resolve and print a service configuration.
#[derive(Parser, Debug)]
#[command(name = "service-config", author, version, about)]
struct Cli {
    #[command(flatten)]
    source: ConfigFlags,

    /// Configuration text format.
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Suppress all non-error output on stderr.
    #[arg(short, long)]
    quiet: bool,
}

/// Supported configuration text formats.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

fn run(cli: Cli) -> Result<(), ConfigError> {
    let source = ConfigSource::from(cli.source);
    let bytes = source.resolve()?;

    let mut config = serde_json::Value::Null;
    match cli.format {
        Format::Json => JsonDecoder::new(bytes).decode_into(&mut config)?,
        Format::Yaml => YamlDecoder::new(bytes).decode_into(&mut config)?,
    }

    println!("Config: {config}");
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        service_config::logging::init_logging(cli.verbose);
    }

    match run(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
