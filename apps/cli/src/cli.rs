use std::path::PathBuf;

use bigfiles_common::{ErrorPolicy, ScanConfig, DEFAULT_MAX_FILES, DEFAULT_PATTERN};
use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "bigfiles", about = "List the biggest files.")]
pub struct Args {
    /// Directory to search
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Maximum number of files to show
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_MAX_FILES)]
    pub max_files: usize,

    /// A pattern to narrow down the search, e.g. "*.txt".
    /// The pattern might need quoting depending on your shell.
    #[arg(short, long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    /// Do not descend more than N levels below PATH
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// What to do with directories or files that cannot be read
    #[arg(long, value_enum, default_value_t = OnError::Skip)]
    pub on_error: OnError,

    /// Log progress to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnError {
    /// Warn and keep going
    Skip,
    /// Stop at the first error
    Abort,
}

impl From<OnError> for ErrorPolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Skip => ErrorPolicy::Skip,
            OnError::Abort => ErrorPolicy::Abort,
        }
    }
}

impl Args {
    pub fn to_config(&self) -> ScanConfig {
        ScanConfig::new(self.path.clone())
            .with_pattern(self.pattern.clone())
            .with_max_files(self.max_files)
            .with_max_depth(self.max_depth)
            .with_error_policy(self.on_error.into())
    }
}
