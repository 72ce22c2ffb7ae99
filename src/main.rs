//! Binary entrypoint for the `skiff` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // `.env` lets SKIFF_TOKEN and SKIFF_API_URL live next to a checkout.
    let _ = dotenvy::dotenv();

    match skiff::run(std::env::args()) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
