//! # gbid-cli: Command-Line Front End for gbid-core
//!
//! Provides the `gbid` binary.
//!
//! ## Subcommands
//!
//! - `gbid check <KIND> [CODE]... [--input FILE]`: Validate identifiers.
//! - `gbid decode <CITIZEN_ID>...`: Decode citizen-ID fields.
//! - `gbid inspect-usci <USCI>...`: Decode USCI fields.
//! - `gbid generate <KIND> [--count N] [--seed S]`: Synthetic identifiers.
//!
//! Results go to stdout; logs go to stderr. `check`, `decode` and
//! `inspect-usci` exit with 0 when every identifier is valid and 1 when any
//! is not. Operational errors (unreadable input, bad config) exit with 2.

pub mod check;
pub mod config;
pub mod decode;
pub mod generate;

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

/// Write `value` as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to serialize output")?;
    writeln!(out).context("failed to write output")?;
    Ok(())
}

/// Exit code for a batch: 0 if every item passed, 1 otherwise.
pub fn batch_exit_code(all_valid: bool) -> u8 {
    if all_valid {
        0
    } else {
        1
    }
}
