//! Print the OpenAPI document as JSON.

use std::io::Write;
use std::process::ExitCode;

use people_api::ApiDoc;
use utoipa::OpenApi;

fn main() -> ExitCode {
    let json = match ApiDoc::openapi().to_pretty_json() {
        Ok(json) => json,
        Err(error) => {
            eprintln!("failed to serialise OpenAPI document: {error}");
            return ExitCode::FAILURE;
        }
    };
    let mut stdout = std::io::stdout().lock();
    if let Err(error) = writeln!(stdout, "{json}") {
        eprintln!("failed to write OpenAPI document: {error}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
