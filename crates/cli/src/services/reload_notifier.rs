use buildpanel_core::interfaces::ReloadNotifier;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Reload fan-out for a terminal host.
///
/// There is no watch timer or loaded assemblies outside an editor, so those
/// steps are only logged. A running instance is told to reload by rewriting
/// the signal file, when one is configured.
pub struct SignalFileNotifier {
    signal_file: Option<PathBuf>,
    assemblies_reload_needed: bool,
}

impl SignalFileNotifier {
    pub fn new(signal_file: Option<PathBuf>, assemblies_reload_needed: bool) -> Self {
        Self {
            signal_file,
            assemblies_reload_needed,
        }
    }
}

impl ReloadNotifier for SignalFileNotifier {
    fn notify_running_instance(&self) {
        let Some(ref path) = self.signal_file else {
            tracing::debug!("No signal file configured, skipping running instance notification");
            return;
        };

        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);

        let written = match path.parent() {
            Some(parent) => std::fs::create_dir_all(parent),
            None => Ok(()),
        }
        .and_then(|_| std::fs::write(path, stamp.to_string()));

        match written {
            Ok(()) => tracing::info!("Signalled running instance via {:?}", path),
            Err(e) => tracing::warn!("Failed to write signal file {:?}: {}", path, e),
        }
    }

    fn restart_watch_timer(&self) {
        tracing::debug!("Restarting assembly watch timer");
    }

    fn assemblies_reload_needed(&self) -> bool {
        self.assemblies_reload_needed
    }

    fn reload_assemblies(&self, soft: bool) {
        tracing::info!("Reloading assemblies (soft: {})", soft);
    }
}
