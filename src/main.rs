//! appicon - platform icon generation for hybrid-app projects.
//!
//! This binary resizes a handful of source PNGs into every launcher,
//! adaptive and notification icon the installed platforms expect.

use appicon::cli;
use appicon::cli::OutputManager;
use std::process;

#[tokio::main]
async fn main() {
    env_logger::init();

    match cli::run().await {
        Ok(exit_code) => {
            process::exit(exit_code);
        }
        Err(e) => {
            // Never quiet for fatal errors
            let output = OutputManager::new(false, false);
            output.error(&format!("Fatal error: {e}"));
            process::exit(e.exit_code());
        }
    }
}
