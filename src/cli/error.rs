use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Bad arguments, or a `--help`/`--version` request. clap renders both.
    #[error(transparent)]
    Args(#[from] clap::Error),

    #[error("Failed to write passwords: {0}")]
    Output(#[from] io::Error),
}
