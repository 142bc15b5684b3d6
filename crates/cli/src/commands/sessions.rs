use anyhow::{Context, Result};

use crate::config::{load_config, open_panel, save_panel, session_store};
use crate::display::TerminalSurface;
use crate::services::SystemLogViewer;

pub fn sessions_command(
    show: Option<usize>,
    warnings_visible: Option<bool>,
    errors_visible: Option<bool>,
    clear: bool,
) -> Result<()> {
    let config = load_config()?;

    if clear {
        let store = session_store(&config);
        store
            .clear()
            .with_context(|| format!("Failed to remove {}", store.path().display()))?;
        println!("🧹 Cleared recorded build sessions");
        return Ok(());
    }

    let mut panel = open_panel(&config, Box::new(SystemLogViewer))?;
    let mut surface = TerminalSurface::new();
    panel.refresh(&mut surface);

    let Some(index) = show else {
        // Listing alone shows no detail view
        panel.nothing_selected(&mut surface);
        surface.print_summary(true);
        return Ok(());
    };

    if index >= panel.registry().len() {
        anyhow::bail!(
            "No session at index {} ({} recorded)",
            index,
            panel.registry().len()
        );
    }

    panel.item_selected(index, &mut surface);
    if let Some(visible) = warnings_visible {
        panel.warnings_toggled(visible, &mut surface)?;
    }
    if let Some(visible) = errors_visible {
        panel.errors_toggled(visible, &mut surface)?;
    }
    if warnings_visible.is_some() || errors_visible.is_some() {
        save_panel(&config, &panel)?;
    }

    surface.print_summary(true);
    surface.print_detail();
    Ok(())
}
