// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use daysort_domain::OverwritePolicy;

use super::parsers::parse_overwrite_policy;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "daysort",
    version = crate::VERSION,
    about = "Copy files into YYYY/YYYY-MM-DD folders by last-modified date"
)]
pub struct Args {
    /// Directory to scan recursively
    #[arg(value_name = "SOURCE_FOLDER", value_hint = ValueHint::DirPath)]
    pub source: PathBuf,

    /// Root of the organized tree (created if missing)
    #[arg(value_name = "DEST_FOLDER", value_hint = ValueHint::DirPath)]
    pub dest: PathBuf,

    /// Behavior when file exists: 'skip', 'overwrite', or 'rename'
    #[arg(long, value_name = "MODE", default_value = "skip", value_parser = parse_overwrite_policy)]
    pub overwrite: OverwritePolicy,

    /// Do not print a line per file
    #[arg(short, long)]
    pub quiet: bool,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
