//! Unpack command implementation.

use crate::cli::UnpackArgs;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use std::env;
use zippy_core::unpack_in;

pub fn execute(args: &UnpackArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let base = env::current_dir().context("failed to get current directory")?;

    let report = unpack_in(&base, &args.archive, formatter)?;

    formatter.format_unpack_result(&report)
}
