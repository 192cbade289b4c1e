//! Entry point for the `county-scout` command-line interface.
#![forbid(unsafe_code)]

use county_scout_cli::CliError;

fn main() {
    pretty_env_logger::init();
    match county_scout_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("county-scout: {err}");
            std::process::exit(1);
        }
    }
}
