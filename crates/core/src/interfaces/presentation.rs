//! Presentation surface interface
//!
//! The render-only projection of the panel. It receives commands from the
//! core and holds nothing but index-addressed widgets; all session state
//! stays in the registry.

use crate::types::{BuildIssue, BuildSession, BuildStatus};

/// Icon shown next to a summary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusIcon {
    Running,
    Error,
    Warning,
    Success,
}

impl StatusIcon {
    pub fn for_session(session: &BuildSession) -> Self {
        match session.status() {
            BuildStatus::Running => StatusIcon::Running,
            BuildStatus::Errored => StatusIcon::Error,
            BuildStatus::Succeeded if session.warning_count() > 0 => StatusIcon::Warning,
            BuildStatus::Succeeded => StatusIcon::Success,
        }
    }
}

/// One row of the summary list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub label: String,
    pub tooltip: String,
    pub icon: StatusIcon,
}

/// Trait implemented by the host's widget adapter
pub trait PresentationSurface {
    /// Remove every summary entry
    fn clear_entries(&mut self);

    /// Append a summary entry; entries are addressed by insertion index
    fn add_entry(&mut self, entry: SummaryEntry);

    /// Mark the summary entry at `index` as selected
    fn select_entry(&mut self, index: usize);

    /// Clear the summary list's selection
    fn unselect_all(&mut self);

    /// Indices of the currently selected summary entries
    fn selected_entries(&self) -> Vec<usize>;

    /// Show the detail view of the session at `index`
    fn set_active_detail(&mut self, index: usize);

    fn set_detail_visible(&mut self, visible: bool);

    /// Show or hide the warnings toggle, errors toggle and view-log action
    fn set_aux_controls_visible(&mut self, visible: bool);

    /// Reflect a session's filter flags on the toggles
    fn set_filter_toggles(&mut self, _warnings: bool, _errors: bool) {}

    /// Replace the issue list of the detail view at `index`
    fn render_issues(&mut self, index: usize, issues: &[&BuildIssue]);

    /// Bring the builds panel to the foreground
    fn reveal_panel(&mut self) {}
}
