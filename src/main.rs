use std::env;
use std::ffi::OsString;
use std::process::ExitCode;

mod cli;
mod entropy;
mod exits;
mod pass;
mod settings;
mod terminal;
mod tui;

fn main() -> ExitCode {
    exits::install_handlers();

    let args: Vec<OsString> = env::args_os().collect();

    if args.len() == 1 && cli::quiet::is_interactive() {
        tui::run();
        ExitCode::SUCCESS
    } else {
        cli::run(args)
    }
}
