//! Per-session warning/error visibility for detail views

use crate::{
    error::{Error, Result},
    interfaces::PresentationSurface,
    registry::SessionRegistry,
    selection::SelectionController,
    types::{BuildIssue, BuildSession, IssueKind},
};

/// Applies a session's visibility flags to its issue list
pub struct IssueFilter;

impl IssueFilter {
    /// An issue is shown iff its kind is currently toggled on for the session
    pub fn is_visible(session: &BuildSession, issue: &BuildIssue) -> bool {
        match issue.kind {
            IssueKind::Warning => session.warnings_visible(),
            IssueKind::Error => session.errors_visible(),
        }
    }

    pub fn visible_issues(session: &BuildSession) -> Vec<&BuildIssue> {
        session
            .issues()
            .iter()
            .filter(|issue| Self::is_visible(session, issue))
            .collect()
    }

    /// Redraw the detail view at `index` with the issues `session` lets through
    pub fn render(session: &BuildSession, index: usize, surface: &mut dyn PresentationSurface) {
        let issues = Self::visible_issues(session);
        surface.render_issues(index, &issues);
    }

    /// Toggle warnings for the selected session and redraw its detail view
    pub fn set_warnings_visible(
        registry: &mut SessionRegistry,
        selection: &SelectionController,
        surface: &mut dyn PresentationSurface,
        visible: bool,
    ) -> Result<()> {
        Self::update_selected(registry, selection, surface, |session| {
            session.set_warnings_visible(visible)
        })
    }

    /// Toggle errors for the selected session and redraw its detail view
    pub fn set_errors_visible(
        registry: &mut SessionRegistry,
        selection: &SelectionController,
        surface: &mut dyn PresentationSurface,
        visible: bool,
    ) -> Result<()> {
        Self::update_selected(registry, selection, surface, |session| {
            session.set_errors_visible(visible)
        })
    }

    fn update_selected(
        registry: &mut SessionRegistry,
        selection: &SelectionController,
        surface: &mut dyn PresentationSurface,
        update: impl FnOnce(&mut BuildSession),
    ) -> Result<()> {
        let index = selection.current_index().ok_or(Error::NoSessionSelected)?;
        let session = registry.at_mut(index).ok_or(Error::NoSessionSelected)?;

        update(session);
        surface.set_filter_toggles(session.warnings_visible(), session.errors_visible());
        Self::render(session, index, surface);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSurface;
    use crate::types::BuildIdentity;

    fn issues() -> Vec<BuildIssue> {
        vec![
            BuildIssue::warning("unused variable"),
            BuildIssue::error("missing semicolon"),
            BuildIssue::warning("obsolete call"),
        ]
    }

    fn setup() -> (SessionRegistry, SelectionController, RecordingSurface) {
        let mut registry = SessionRegistry::default();
        registry.get_or_create(BuildIdentity::new("/p/Other.sln", "Debug"));
        registry.get_or_create(BuildIdentity::new("/p/Game.sln", "Debug"));
        for index in 0..registry.len() {
            registry
                .at_mut(index)
                .unwrap()
                .finish(false, 1, 2, issues())
                .unwrap();
        }
        (registry, SelectionController::new(), RecordingSurface::default())
    }

    fn messages(issues: &[BuildIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.message.as_str()).collect()
    }

    #[test]
    fn test_all_issues_visible_by_default() {
        let (registry, _, _) = setup();
        let session = registry.at(0).unwrap();
        assert_eq!(IssueFilter::visible_issues(session).len(), 3);
    }

    #[test]
    fn test_hiding_warnings_keeps_errors() {
        let (mut registry, mut selection, mut surface) = setup();
        selection.select(0, &registry, &mut surface).unwrap();

        IssueFilter::set_warnings_visible(&mut registry, &selection, &mut surface, false).unwrap();

        assert!(!registry.at(0).unwrap().warnings_visible());
        let (index, rendered) = surface.last_render().unwrap();
        assert_eq!(*index, 0);
        assert_eq!(messages(rendered), vec!["missing semicolon"]);
    }

    #[test]
    fn test_hiding_errors_keeps_warnings() {
        let (mut registry, mut selection, mut surface) = setup();
        selection.select(1, &registry, &mut surface).unwrap();

        IssueFilter::set_errors_visible(&mut registry, &selection, &mut surface, false).unwrap();

        let (index, rendered) = surface.last_render().unwrap();
        assert_eq!(*index, 1);
        assert_eq!(messages(rendered), vec!["unused variable", "obsolete call"]);
        assert_eq!(surface.toggles, Some((true, false)));
    }

    #[test]
    fn test_flags_are_independent_per_session() {
        let (mut registry, mut selection, mut surface) = setup();
        selection.select(0, &registry, &mut surface).unwrap();

        IssueFilter::set_warnings_visible(&mut registry, &selection, &mut surface, false).unwrap();

        assert!(!registry.at(0).unwrap().warnings_visible());
        assert!(registry.at(1).unwrap().warnings_visible());
    }

    #[test]
    fn test_hiding_both_renders_nothing() {
        let (mut registry, mut selection, mut surface) = setup();
        selection.select(0, &registry, &mut surface).unwrap();

        IssueFilter::set_warnings_visible(&mut registry, &selection, &mut surface, false).unwrap();
        IssueFilter::set_errors_visible(&mut registry, &selection, &mut surface, false).unwrap();

        assert!(surface.last_render().unwrap().1.is_empty());
    }

    #[test]
    fn test_toggle_without_selection_fails() {
        let (mut registry, selection, mut surface) = setup();

        let err = IssueFilter::set_warnings_visible(&mut registry, &selection, &mut surface, false)
            .unwrap_err();

        assert!(matches!(err, Error::NoSessionSelected));
        assert!(registry.at(0).unwrap().warnings_visible());
        assert!(surface.rendered.is_empty());
    }
}
