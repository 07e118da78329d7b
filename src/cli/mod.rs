//! Command line interface for the icon generator.
//!
//! Parses arguments, runs the preflight gates and hands the surviving
//! project over to the generation pipeline. All failures are turned into
//! process exit codes here; `main` only has to exit with what it gets.

mod args;
mod output;

pub use args::Args;
pub use output::OutputManager;

use crate::error::{Error, Result};
use crate::pipeline::Pipeline;
use crate::settings::Settings;
use crate::{platform, preflight, project};

/// Main CLI entry point. Returns the process exit code.
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    if let Err(message) = args.validate() {
        OutputManager::new(false, false).error(&message);
        return Ok(1);
    }

    let output = OutputManager::new(args.verbose, args.quiet);
    execute(args.settings(), output).await
}

async fn execute(settings: Settings, output: OutputManager) -> Result<i32> {
    output.section("Checking Project & Icon");

    let detected = project::detect_platforms().await;
    if let Err(errors) = preflight::run(&settings, &detected, &output).await {
        let code = errors.iter().map(Error::exit_code).max().unwrap_or(1);
        return Ok(code);
    }

    let project_name = match project::project_name(&settings.config_file).await {
        Ok(name) => name,
        Err(error) => {
            output.error(&format!("{error}"));
            return Ok(error.exit_code());
        }
    };
    output.verbose(&format!("project name: {project_name}"));

    let platforms = platform::list_platforms(&project_name, &settings).await;
    let report = Pipeline::new(settings, output.clone())
        .generate_all(&platforms)
        .await;

    output.println("");
    Ok(report.exit_code())
}
