//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "zippy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Pack a directory into a zip archive
    Pack(PackArgs),
    /// Unpack a zip archive into a directory named after it
    Unpack(UnpackArgs),
}

impl Commands {
    /// Operation name used in machine-readable output.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pack(_) => "pack",
            Self::Unpack(_) => "unpack",
        }
    }
}

#[derive(clap::Args)]
pub struct PackArgs {
    /// Directory to pack, relative to the current directory
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Archive to write, relative to the current directory (must end in .zip)
    #[arg(value_name = "OUTPUT")]
    pub output: String,

    /// Compression level (0 = store, 1-9 = deflate)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(0..=9))]
    pub compression_level: Option<u8>,

    /// Add entries in sorted order for reproducible archives
    #[arg(long)]
    pub sorted: bool,
}

#[derive(clap::Args)]
pub struct UnpackArgs {
    /// Archive to unpack, relative to the current directory (must end in .zip)
    #[arg(value_name = "ARCHIVE")]
    pub archive: String,
}
