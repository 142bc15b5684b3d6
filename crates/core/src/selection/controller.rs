use crate::{
    error::{Error, Result},
    filter::IssueFilter,
    interfaces::{PresentationSurface, StatusIcon, SummaryEntry},
    registry::SessionRegistry,
    types::{BuildSession, BuildStatus},
};

/// Keeps the summary list's selection in step with the visible detail view.
///
/// The detail container starts hidden, becomes visible on the first
/// [`select`](Self::select) and is hidden again by
/// [`clear_selection`](Self::clear_selection).
#[derive(Debug, Default)]
pub struct SelectionController {
    current: Option<usize>,
    detail_visible: bool,
    aux_controls_visible: bool,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn detail_visible(&self) -> bool {
        self.detail_visible
    }

    pub fn aux_controls_visible(&self) -> bool {
        self.aux_controls_visible
    }

    /// Re-emit every summary entry and re-apply the selection.
    ///
    /// The previously selected index stays selected. Without a prior selection
    /// the first entry gets selected.
    pub fn rebuild(&mut self, registry: &SessionRegistry, surface: &mut dyn PresentationSurface) {
        surface.clear_entries();

        if self.current.is_some_and(|index| index >= registry.len()) {
            self.current = None;
        }

        for (index, session) in registry.iter().enumerate() {
            surface.add_entry(summary_entry(session));

            if self.current.is_none() || self.current == Some(index) {
                surface.select_entry(index);
                if let Err(e) = self.select(index, registry, surface) {
                    tracing::warn!("Failed to re-select summary entry {}: {}", index, e);
                }
            }
        }
    }

    /// Show the detail view of the session at `index`
    pub fn select(
        &mut self,
        index: usize,
        registry: &SessionRegistry,
        surface: &mut dyn PresentationSurface,
    ) -> Result<()> {
        let session = registry.at(index).ok_or(Error::IndexOutOfRange {
            index,
            count: registry.len(),
        })?;

        self.current = Some(index);
        surface.set_active_detail(index);

        if !self.detail_visible {
            self.detail_visible = true;
            surface.set_detail_visible(true);
        }

        self.aux_controls_visible = true;
        surface.set_aux_controls_visible(true);

        surface.set_filter_toggles(session.warnings_visible(), session.errors_visible());
        IssueFilter::render(session, index, surface);

        Ok(())
    }

    /// Handle the summary list reporting that nothing is selected
    pub fn clear_selection(
        &mut self,
        registry: &SessionRegistry,
        surface: &mut dyn PresentationSurface,
    ) {
        if !registry.is_empty() {
            self.detail_visible = false;
            surface.set_detail_visible(false);

            // Clicking empty space does not deselect the list by itself
            surface.unselect_all();
        }

        self.current = None;
        self.aux_controls_visible = false;
        surface.set_aux_controls_visible(false);
    }
}

/// Summary list row for `session`
pub fn summary_entry(session: &BuildSession) -> SummaryEntry {
    SummaryEntry {
        label: session.identity().display_label(),
        tooltip: tooltip(session),
        icon: StatusIcon::for_session(session),
    }
}

/// Hover text for a summary entry.
///
/// The error count is left out once a build has succeeded.
pub fn tooltip(session: &BuildSession) -> String {
    let identity = session.identity();
    let mut text = format!(
        "Solution: {}\nConfiguration: {}\nStatus: {}",
        identity.solution,
        identity.configuration,
        session.status()
    );

    if session.status() != BuildStatus::Succeeded {
        text.push_str(&format!("\nErrors: {}", session.error_count()));
    }

    text.push_str(&format!("\nWarnings: {}", session.warning_count()));
    text
}
