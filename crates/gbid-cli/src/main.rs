//! # gbid CLI entry point
//!
//! Parses command-line arguments, loads the optional configuration file,
//! and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gbid_cli::check::{run_check, CheckArgs};
use gbid_cli::config::{CliConfig, OutputFormat};
use gbid_cli::decode::{run_decode, run_inspect_usci, DecodeArgs, InspectUsciArgs};
use gbid_cli::generate::{run_generate, GenerateArgs};

/// Validate, decode, and generate Chinese administrative identifiers.
///
/// Supports Citizen Identification Numbers (GB 11643), Organization Codes
/// (GB 11714), and Unified Social Credit Identifiers (GB 32100).
#[derive(Parser, Debug)]
#[command(name = "gbid", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format. Overrides the configuration file.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate identifiers of one kind.
    Check(CheckArgs),

    /// Decode the fields of citizen identification numbers.
    Decode(DecodeArgs),

    /// Decode the fields of unified social credit identifiers.
    InspectUsci(InspectUsciArgs),

    /// Print valid synthetic identifiers.
    Generate(GenerateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v.
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!("gbid CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = CliConfig::resolve(cli.config.as_deref())
        .map(|config| config.with_format(cli.format))
        .and_then(|config| match cli.command {
            Commands::Check(ref args) => run_check(args, &config),
            Commands::Decode(ref args) => run_decode(args, &config),
            Commands::InspectUsci(ref args) => run_inspect_usci(args, &config),
            Commands::Generate(ref args) => run_generate(args, &config),
        });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use gbid_core::IdentifierKind;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_check_with_aliases() {
        let cli = Cli::try_parse_from(["gbid", "check", "org", "110000001", "110000002"]).unwrap();
        match cli.command {
            Commands::Check(args) => {
                assert_eq!(args.kind, IdentifierKind::OrganizationCode);
                assert_eq!(args.codes, vec!["110000001", "110000002"]);
                assert!(args.input.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "gbid", "check", "usci", "--input", "-", "-vv", "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn parse_generate() {
        let cli = Cli::try_parse_from(["gbid", "generate", "citizen-id", "-n", "5", "--seed", "3"])
            .unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.kind, IdentifierKind::CitizenId);
                assert_eq!(args.count, 5);
                assert_eq!(args.seed, Some(3));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parse_inspect_usci() {
        let cli = Cli::try_parse_from(["gbid", "inspect-usci", "51110000500313396D"]).unwrap();
        assert!(matches!(cli.command, Commands::InspectUsci(_)));
    }

    #[test]
    fn rejects_unknown_kind_and_missing_codes() {
        assert!(Cli::try_parse_from(["gbid", "check", "passport", "X"]).is_err());
        assert!(Cli::try_parse_from(["gbid", "decode"]).is_err());
        assert!(Cli::try_parse_from(["gbid", "check", "usci", "--format", "xml"]).is_err());
    }
}
