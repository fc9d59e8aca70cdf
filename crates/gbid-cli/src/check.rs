//! # Check Subcommand
//!
//! Validates identifiers of one kind given as arguments, read from a file,
//! or read from stdin (`--input -`).
//!
//! Input files hold one identifier per line. Surrounding whitespace is
//! trimmed, blank lines are skipped, and so are `#` comment lines unless
//! `skip_comments: false` is configured.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;

use gbid_core::{check, IdentifierKind};

use crate::config::{CliConfig, OutputFormat};

/// Arguments for the `gbid check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Identifier kind: citizen-id, organization-code, or usci.
    #[arg(value_name = "KIND")]
    pub kind: IdentifierKind,

    /// Identifiers to validate.
    #[arg(value_name = "CODE")]
    pub codes: Vec<String>,

    /// Read identifiers from a file, one per line ("-" for stdin).
    #[arg(long, short, value_name = "FILE")]
    pub input: Option<PathBuf>,
}

/// Result of validating one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub code: String,
    pub kind: IdentifierKind,
    pub valid: bool,
    pub error: Option<String>,
}

impl CheckOutcome {
    pub fn evaluate(kind: IdentifierKind, code: &str) -> Self {
        let result = check(kind, code);
        Self {
            code: code.to_string(),
            kind,
            valid: result.is_ok(),
            error: result.err().map(|e| e.to_string()),
        }
    }
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 if all codes are valid, 1 if any is invalid.
pub fn run_check(args: &CheckArgs, config: &CliConfig) -> Result<u8> {
    let mut codes = args.codes.clone();
    if let Some(ref input) = args.input {
        codes.extend(read_input(input, config.skip_comments)?);
    }
    if codes.is_empty() {
        bail!("no identifiers given; pass CODE arguments or --input FILE");
    }

    tracing::info!(kind = %args.kind, count = codes.len(), "checking identifiers");

    let outcomes: Vec<CheckOutcome> = codes
        .iter()
        .map(|code| CheckOutcome::evaluate(args.kind, code))
        .collect();

    let stdout = io::stdout();
    write_outcomes(&mut stdout.lock(), &outcomes, config.format)?;

    let invalid = outcomes.iter().filter(|o| !o.valid).count();
    if invalid > 0 {
        tracing::info!(invalid, total = outcomes.len(), "some identifiers are invalid");
    }
    Ok(crate::batch_exit_code(invalid == 0))
}

fn read_input(path: &Path, skip_comments: bool) -> Result<Vec<String>> {
    if path == Path::new("-") {
        let stdin = io::stdin();
        return read_codes(stdin.lock(), skip_comments).context("failed to read stdin");
    }
    let file = File::open(path)
        .with_context(|| format!("failed to open input file {}", path.display()))?;
    read_codes(BufReader::new(file), skip_comments)
        .with_context(|| format!("failed to read input file {}", path.display()))
}

/// Collect identifiers from line-oriented input.
pub fn read_codes<R: BufRead>(reader: R, skip_comments: bool) -> io::Result<Vec<String>> {
    let mut codes = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let code = line.trim();
        if code.is_empty() || (skip_comments && code.starts_with('#')) {
            continue;
        }
        codes.push(code.to_string());
    }
    Ok(codes)
}

/// Render outcomes in the requested format.
pub fn write_outcomes<W: Write>(
    out: &mut W,
    outcomes: &[CheckOutcome],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => crate::write_json(out, outcomes),
        OutputFormat::Text => {
            for outcome in outcomes {
                let written = match outcome.error {
                    None => writeln!(out, "{}\tVALID", outcome.code),
                    Some(ref error) => writeln!(out, "{}\tINVALID: {error}", outcome.code),
                };
                written.context("failed to write output")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn evaluate_valid_and_invalid() {
        let ok = CheckOutcome::evaluate(IdentifierKind::CitizenId, "110105199003070017");
        assert!(ok.valid);
        assert_eq!(ok.error, None);

        let bad = CheckOutcome::evaluate(IdentifierKind::CitizenId, "110105199003070018");
        assert!(!bad.valid);
        assert!(bad.error.unwrap().contains("check character"));
    }

    #[test]
    fn read_codes_trims_and_skips() {
        let input = "  110000001 \n\n# comment\n\t110000002\n";
        let codes = read_codes(input.as_bytes(), true).unwrap();
        assert_eq!(codes, vec!["110000001", "110000002"]);

        let codes = read_codes(input.as_bytes(), false).unwrap();
        assert_eq!(codes, vec!["110000001", "# comment", "110000002"]);
    }

    #[test]
    fn text_output() {
        let outcomes = vec![
            CheckOutcome::evaluate(IdentifierKind::OrganizationCode, "110000001"),
            CheckOutcome::evaluate(IdentifierKind::OrganizationCode, "110000002"),
        ];
        let mut buf = Vec::new();
        write_outcomes(&mut buf, &outcomes, OutputFormat::Text).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "110000001\tVALID");
        assert!(lines[1].starts_with("110000002\tINVALID: "));
    }

    #[test]
    fn json_output() {
        let outcomes = vec![CheckOutcome::evaluate(IdentifierKind::Usci, "51110000500313396D")];
        let mut buf = Vec::new();
        write_outcomes(&mut buf, &outcomes, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value[0]["code"], "51110000500313396D");
        assert_eq!(value[0]["kind"], "usci");
        assert_eq!(value[0]["valid"], true);
        assert!(value[0]["error"].is_null());
    }

    #[test]
    fn exit_code_reflects_validity() {
        let config = CliConfig::default();
        let args = CheckArgs {
            kind: IdentifierKind::OrganizationCode,
            codes: vec!["110000001".into()],
            input: None,
        };
        assert_eq!(run_check(&args, &config).unwrap(), 0);

        let args = CheckArgs {
            kind: IdentifierKind::OrganizationCode,
            codes: vec!["110000001".into(), "110000002".into()],
            input: None,
        };
        assert_eq!(run_check(&args, &config).unwrap(), 1);
    }

    #[test]
    fn reads_input_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# fixtures").unwrap();
        writeln!(file, "91350100M000100Y43").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "91110000600037341L").unwrap();
        let args = CheckArgs {
            kind: IdentifierKind::Usci,
            codes: Vec::new(),
            input: Some(file.path().to_path_buf()),
        };
        assert_eq!(run_check(&args, &CliConfig::default()).unwrap(), 0);
    }

    #[test]
    fn no_input_is_an_error() {
        let args = CheckArgs {
            kind: IdentifierKind::Usci,
            codes: Vec::new(),
            input: None,
        };
        assert!(run_check(&args, &CliConfig::default()).is_err());
    }

    #[test]
    fn missing_input_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let args = CheckArgs {
            kind: IdentifierKind::Usci,
            codes: Vec::new(),
            input: Some(dir.path().join("absent.txt")),
        };
        let err = run_check(&args, &CliConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("failed to open input file"));
    }
}
