use anyhow::{Result, bail};
use buildpanel_core::interfaces::LogViewer;

use crate::config::{load_config, open_panel};
use crate::display::TerminalSurface;
use crate::services::{PrintLogViewer, SystemLogViewer};

pub fn log_command(index: Option<usize>, print: bool) -> Result<()> {
    let config = load_config()?;
    let viewer: Box<dyn LogViewer> = if print {
        Box::new(PrintLogViewer)
    } else {
        Box::new(SystemLogViewer)
    };

    let mut panel = open_panel(&config, viewer)?;
    if panel.registry().is_empty() {
        bail!("No builds recorded yet; run `buildpanel build` first");
    }

    let mut surface = TerminalSurface::new();
    panel.refresh(&mut surface);

    let path = panel.view_log_at(index.unwrap_or(0), &mut surface)?;
    if !print {
        println!("📄 Opened {}", path.display());
    }
    Ok(())
}
