use anyhow::{Context, Result};
use buildpanel_core::BuildStatus;
use tracing::debug;

use crate::config::{load_config, open_panel, save_panel};
use crate::display::TerminalSurface;
use crate::services::SystemLogViewer;

pub fn build_command(configuration: Option<&str>) -> Result<()> {
    let config = load_config()?;
    let configuration = configuration.unwrap_or(&config.default_configuration);

    let mut panel = open_panel(&config, Box::new(SystemLogViewer))?;
    let mut surface = TerminalSurface::new();

    println!(
        "🔨 Building {} [{}]",
        config.solution.display(),
        configuration
    );
    let result = panel.build(configuration, &mut surface);

    // The session is recorded even when the build tool could not run
    save_panel(&config, &panel)?;

    let Some(report) = result.context("Build could not run")? else {
        println!(
            "⚠️  No solution at {}, nothing to build",
            config.solution_path().display()
        );
        return Ok(());
    };
    debug!("Build report: {:?}", report);

    surface.print_summary(false);
    surface.print_detail();

    let session = panel
        .registry()
        .get(report.session)
        .ok_or(buildpanel_core::Error::NotRegistered)?;
    println!("\n📄 Log: {}", session.log_path().display());

    match report.status {
        BuildStatus::Succeeded => {
            println!(
                "✅ Build succeeded with {} warning(s)",
                session.warning_count()
            );
            if report.assemblies_reloaded {
                println!("🔄 Assemblies reloaded");
            }
            Ok(())
        }
        _ => {
            println!(
                "❌ Build failed with {} error(s) and {} warning(s)",
                session.error_count(),
                session.warning_count()
            );
            std::process::exit(1);
        }
    }
}
