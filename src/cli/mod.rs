mod context;
mod error;
mod flags;
pub mod prompts;
pub mod quiet;

use std::ffi::OsString;
use std::process::ExitCode;

pub use context::Context;
pub use error::Error;
pub use flags::CliFlags;

/// Run CLI mode with the raw process arguments.
pub fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let result = Context::from_args(args).and_then(|mut ctx| ctx.run());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Args(e)) => e.exit(),
        Err(e) => {
            prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
