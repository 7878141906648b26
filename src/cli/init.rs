use anyhow::{Context, Result};
use console::style;
use promptlab_core::config::PromptLabConfig;
use std::path::{Path, PathBuf};

/// Handle the init command
pub fn handle_init_command(force: bool) -> Result<()> {
    let workspace = std::env::current_dir().context("cannot determine current dir")?;
    println!(
        "{}",
        style("Initialize promptlab configuration").blue().bold()
    );
    println!("Workspace: {}", workspace.display());

    match init_workspace(&workspace, force)? {
        Some(path) => println!("{} {}", style("Wrote").green(), path.display()),
        None => println!(
            "{}",
            style("promptlab.toml already exists; pass --force to overwrite").yellow()
        ),
    }

    Ok(())
}

fn init_workspace(workspace: &Path, force: bool) -> Result<Option<PathBuf>> {
    PromptLabConfig::bootstrap_project(workspace, force)
        .context("failed to initialize configuration file")
}
