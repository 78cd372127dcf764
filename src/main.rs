//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `redirect_resolver` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting and exit codes
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use redirect_resolver::app::{exit_code, validate_and_normalize_url};
use redirect_resolver::initialization::init_logger_with;
use redirect_resolver::{Opt, Resolution, Resolver, ResolverConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let url = validate_and_normalize_url(&opt.url)
        .ok_or_else(|| anyhow!("Unsupported or invalid URL: {}", opt.url))?;

    let resolver =
        Resolver::new(ResolverConfig::from(&opt)).context("Failed to initialize HTTP client")?;

    match resolver.resolve_with_chain(&url).await {
        Ok(resolution) => {
            print_resolution(&opt, &resolution)?;
            Ok(())
        }
        Err(e) => {
            let code = exit_code(&e);
            eprintln!("redirect_resolver error: {:#}", anyhow::Error::from(e));
            process::exit(code);
        }
    }
}

fn print_resolution(opt: &Opt, resolution: &Resolution) -> Result<()> {
    if opt.json {
        let json =
            serde_json::to_string_pretty(resolution).context("Failed to serialize resolution")?;
        println!("{}", json);
    } else if opt.show_chain {
        for hop in &resolution.chain {
            println!("{}", hop);
        }
    } else {
        println!("{}", resolution.final_url);
    }
    Ok(())
}
