use anyhow::Result;
use clap::Parser;
use std::env;
use std::path::PathBuf;

mod config;
mod patcher;

use crate::config::Config;
use crate::patcher::{PatchOutcome, UrlPatcher};

/// Rewrites the hard-coded localhost API URL in the site's HTML pages with
/// a block that picks the endpoint from the page's hostname at load time.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    let base_dir = base_dir()?;
    let patcher = UrlPatcher::new()?;

    let mut updated = 0;
    let mut already = 0;
    let mut missing = 0;

    for file in Config::TARGET_FILES {
        match patcher.patch_file(&base_dir.join(file))? {
            PatchOutcome::Updated => {
                println!("Updated {}", file);
                updated += 1;
            }
            PatchOutcome::AlreadyCurrent => {
                println!("{} - API_URL pattern not found or already updated", file);
                already += 1;
            }
            PatchOutcome::Missing => {
                println!("{} - file not found", file);
                missing += 1;
            }
        }
    }

    println!();
    println!(
        "Done. {} updated, {} already updated, {} not found.",
        updated, already, missing
    );

    Ok(())
}

/// Target pages live alongside the executable.
fn base_dir() -> Result<PathBuf> {
    let exe = env::current_exe()?;
    let Some(dir) = exe.parent() else {
        return Err(anyhow::anyhow!("executable path has no parent directory"));
    };
    Ok(dir.to_path_buf())
}
