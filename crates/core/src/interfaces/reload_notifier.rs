/// Trait for the post-build hot-reload fan-out
pub trait ReloadNotifier: Send + Sync {
    /// Ask a running game instance, if any, to reload its scripts
    fn notify_running_instance(&self);

    /// Restart the host's assembly-watch timer
    fn restart_watch_timer(&self);

    /// Whether the host's loaded assemblies are stale
    fn assemblies_reload_needed(&self) -> bool;

    /// Reload assemblies in the host; `soft` keeps the current state where possible
    fn reload_assemblies(&self, soft: bool);
}
