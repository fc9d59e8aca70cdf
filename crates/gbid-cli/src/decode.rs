//! # Decode and Inspect-USCI Subcommands
//!
//! Print the fields encoded in citizen IDs and USCIs. Citizen-ID fields
//! are decoded even when the number fails validation, as far as the
//! individual fields are well-formed. USCI fields are only reported for
//! valid identifiers.

use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;

use gbid_core::division::province_name;
use gbid_core::{citizen, check, IdentifierKind, Usci};

use crate::config::{CliConfig, OutputFormat};

/// Arguments for the `gbid decode` subcommand.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Citizen identification numbers to decode.
    #[arg(value_name = "CITIZEN_ID", required = true)]
    pub codes: Vec<String>,
}

/// Arguments for the `gbid inspect-usci` subcommand.
#[derive(Args, Debug)]
pub struct InspectUsciArgs {
    /// Unified social credit identifiers to inspect.
    #[arg(value_name = "USCI", required = true)]
    pub codes: Vec<String>,
}

/// Decoded fields of one citizen ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CitizenIdReport {
    pub code: String,
    pub valid: bool,
    pub error: Option<String>,
    pub address_code: Option<String>,
    pub province: Option<&'static str>,
    pub birth_date: Option<NaiveDate>,
    pub gender: &'static str,
    pub expected_check_char: Option<char>,
}

impl CitizenIdReport {
    pub fn decode(code: &str) -> Self {
        let result = check(IdentifierKind::CitizenId, code);
        let address = citizen::address_code(code);
        Self {
            code: code.to_string(),
            valid: result.is_ok(),
            error: result.err().map(|e| e.to_string()),
            address_code: address.map(str::to_string),
            province: address.and_then(|a| province_name(&a[..2])),
            birth_date: citizen::birth_date(code),
            gender: citizen::gender_label(code),
            expected_check_char: citizen::check_char(code),
        }
    }

    fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}\t{}", self.code, status(self.error.as_deref()))?;
        if let Some(ref address) = self.address_code {
            writeln!(out, "  address code:   {address} ({})", self.province.unwrap_or("?"))?;
        }
        if let Some(date) = self.birth_date {
            writeln!(out, "  birth date:     {date}")?;
        }
        writeln!(out, "  gender:         {}", self.gender)?;
        if let Some(c) = self.expected_check_char {
            writeln!(out, "  check char:     {c}")?;
        }
        Ok(())
    }
}

/// A registration code paired with its name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Labelled {
    pub code: char,
    pub name: &'static str,
}

/// Decoded fields of one USCI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsciReport {
    pub code: String,
    pub valid: bool,
    pub error: Option<String>,
    pub department: Option<Labelled>,
    pub category: Option<Labelled>,
    pub province: Option<&'static str>,
    pub division_code: Option<String>,
    pub organization_code: Option<String>,
}

impl UsciReport {
    pub fn inspect(code: &str) -> Self {
        match Usci::new(code) {
            Ok(usci) => Self {
                code: code.to_string(),
                valid: true,
                error: None,
                department: Some(Labelled {
                    code: usci.department().code(),
                    name: usci.department().name(),
                }),
                category: Some(Labelled {
                    code: usci.category().code,
                    name: usci.category().name,
                }),
                province: Some(usci.province_name()),
                division_code: Some(usci.division_code().to_string()),
                organization_code: Some(usci.organization_code().formatted()),
            },
            Err(e) => Self {
                code: code.to_string(),
                valid: false,
                error: Some(e.to_string()),
                department: None,
                category: None,
                province: None,
                division_code: None,
                organization_code: None,
            },
        }
    }

    fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}\t{}", self.code, status(self.error.as_deref()))?;
        if let Some(ref d) = self.department {
            writeln!(out, "  department:     {} ({})", d.code, d.name)?;
        }
        if let Some(ref c) = self.category {
            writeln!(out, "  category:       {} ({})", c.code, c.name)?;
        }
        if let (Some(division), Some(province)) = (&self.division_code, self.province) {
            writeln!(out, "  division code:  {division} ({province})")?;
        }
        if let Some(ref org) = self.organization_code {
            writeln!(out, "  organization:   {org}")?;
        }
        Ok(())
    }
}

fn status(error: Option<&str>) -> String {
    match error {
        None => "VALID".to_string(),
        Some(e) => format!("INVALID: {e}"),
    }
}

/// Execute the decode subcommand.
///
/// Returns exit code: 0 if every number is valid, 1 otherwise.
pub fn run_decode(args: &DecodeArgs, config: &CliConfig) -> Result<u8> {
    let reports: Vec<CitizenIdReport> = args
        .codes
        .iter()
        .map(|code| CitizenIdReport::decode(code.trim()))
        .collect();
    let stdout = io::stdout();
    write_citizen_reports(&mut stdout.lock(), &reports, config.format)?;
    Ok(crate::batch_exit_code(reports.iter().all(|r| r.valid)))
}

/// Execute the inspect-usci subcommand.
///
/// Returns exit code: 0 if every identifier is valid, 1 otherwise.
pub fn run_inspect_usci(args: &InspectUsciArgs, config: &CliConfig) -> Result<u8> {
    let reports: Vec<UsciReport> = args
        .codes
        .iter()
        .map(|code| UsciReport::inspect(code.trim()))
        .collect();
    let stdout = io::stdout();
    write_usci_reports(&mut stdout.lock(), &reports, config.format)?;
    Ok(crate::batch_exit_code(reports.iter().all(|r| r.valid)))
}

pub fn write_citizen_reports<W: Write>(
    out: &mut W,
    reports: &[CitizenIdReport],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => crate::write_json(out, reports),
        OutputFormat::Text => reports
            .iter()
            .try_for_each(|r| r.write_text(out))
            .context("failed to write output"),
    }
}

pub fn write_usci_reports<W: Write>(
    out: &mut W,
    reports: &[UsciReport],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => crate::write_json(out, reports),
        OutputFormat::Text => reports
            .iter()
            .try_for_each(|r| r.write_text(out))
            .context("failed to write output"),
    }
}
