//! Pack command implementation.

use crate::cli::PackArgs;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use std::env;
use zippy_core::PackConfig;
use zippy_core::pack_in;

pub fn execute(args: &PackArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let base = env::current_dir().context("failed to get current directory")?;

    let mut config = PackConfig::default().with_sort_entries(args.sorted);
    if let Some(level) = args.compression_level {
        config = config.with_compression_level(level);
    }

    let report = pack_in(&base, &args.source, &args.output, &config, formatter)?;

    formatter.format_pack_result(&report)
}
