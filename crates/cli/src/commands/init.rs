use anyhow::{Context, Result};
use buildpanel_core::config::CONFIG_FILE_NAME;
use std::{env, path::PathBuf};
use tracing::info;

use crate::config::detect_config;

pub fn init_command(cwd: Option<&str>, force: bool) -> Result<()> {
    // Determine the project root
    let project_root = if let Some(cwd) = cwd {
        PathBuf::from(cwd)
    } else {
        env::current_dir().context("Failed to get current directory")?
    };

    let project_root = project_root
        .canonicalize()
        .context("Failed to canonicalize project root")?;

    let config_path = project_root.join(CONFIG_FILE_NAME);
    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    println!("🚀 Initializing buildpanel in: {}", project_root.display());

    let config = detect_config(&project_root);
    if !project_root.join(&config.solution).exists() {
        println!(
            "⚠️  No solution found, using {} (builds are skipped until it exists)",
            config.solution.display()
        );
    }
    info!(
        "Detected solution {} and project {}",
        config.solution.display(),
        config.project.display()
    );

    config
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!("✅ Created config: {}", config_path.display());
    println!("   • Solution: {}", config.solution.display());
    println!("   • Project: {}", config.project.display());
    println!(
        "   • Build: {} {}",
        config.build.command,
        config.build.args.join(" ")
    );

    Ok(())
}
