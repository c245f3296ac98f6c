mod args;
mod parsers;

pub use args::Args;
use daysort_shared_kernel::{PresentationError, PresentationResult};

use crate::config::{Config, ConfigBuilder};

/// Turn parsed arguments into a validated runtime [`Config`].
///
/// The source directory must already exist; nothing is created on disk here.
pub fn load_config(args: Args) -> PresentationResult<Config> {
    validate_source(&args.source)?;

    ConfigBuilder::default()
        .source(args.source)
        .destination(args.dest)
        .policy(args.overwrite)
        .quiet(args.quiet)
        .verbosity(args.verbose)
        .build()
        .map_err(|err| PresentationError::ArgumentParsing { reason: err.to_string() })
}

fn validate_source(source: &std::path::Path) -> PresentationResult<()> {
    if source.exists() {
        return Ok(());
    }
    Err(PresentationError::SourceNotFound { path: source.to_path_buf() })
}
