//! Command line interface.
//!
//! With no positional argument the interactive UI starts. Passing a number
//! plus `--from`/`--to` runs a single conversion and prints the same result
//! line the UI would show.

use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;

use crate::convert::{convert_request, Base, Conversion};

#[derive(Parser, Debug)]
#[command(name = "radixer", version, about = "Number base converter for the terminal")]
pub struct Cli {
    /// Number to convert; starts the interactive UI when omitted.
    pub number: Option<String>,

    /// Source base for one-shot conversion (2, 8, 10, or 16).
    #[arg(long, value_name = "BASE")]
    pub from: Option<u32>,

    /// Target base for one-shot conversion (2, 8, 10, or 16).
    #[arg(long, value_name = "BASE")]
    pub to: Option<u32>,

    /// Path to an alternate config file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Run the one-shot conversion if a number was given.
    ///
    /// Returns `Ok(None)` when the interactive UI should start instead.
    /// Failures carry the same messages the UI shows in its error dialog.
    pub fn run_once(&self) -> anyhow::Result<Option<Conversion>> {
        let Some(number) = &self.number else {
            return Ok(None);
        };
        let from = resolve_base(self.from, "--from")?;
        let to = resolve_base(self.to, "--to")?;
        let conversion = convert_request(number, from, to)?;
        tracing::debug!(%conversion, "one-shot conversion");
        Ok(Some(conversion))
    }
}

fn resolve_base(radix: Option<u32>, flag: &str) -> anyhow::Result<Option<Base>> {
    match radix {
        None => Ok(None),
        Some(radix) => Base::from_radix(radix)
            .map(Some)
            .ok_or_else(|| anyhow!("{flag}: unsupported base {radix} (expected 2, 8, 10, or 16)")),
    }
}
