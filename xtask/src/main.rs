//! Development tasks for pagestat.
//!
//! Run with `cargo xtask <command>`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for pagestat")]
struct Xtask {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages from the CLI definition
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().command {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

/// Render one page for the top-level command and one per subcommand.
fn generate_man_pages(out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let cmd = pagestat::cli::Cli::command();
    write_page(out_dir, "pagestat.1", cmd.clone())?;

    for sub in cmd.get_subcommands() {
        let name = format!("pagestat-{}.1", sub.get_name());
        write_page(out_dir, &name, sub.clone())?;
    }

    println!("Man pages written to {}", out_dir.display());
    Ok(())
}

fn write_page(out_dir: &Path, file_name: &str, cmd: clap::Command) -> Result<()> {
    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd).render(&mut buffer)?;
    let path = out_dir.join(file_name);
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
