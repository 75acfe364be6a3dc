use std::process::ExitCode;

mod config;
mod error;
mod library;
mod render;
mod runtime;

fn main() -> ExitCode {
    runtime::run()
}
