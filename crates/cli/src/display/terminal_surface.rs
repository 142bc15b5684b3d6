use buildpanel_core::BuildIssue;
use buildpanel_core::interfaces::{PresentationSurface, SummaryEntry};
use std::collections::BTreeMap;

use super::formatter::{format_entry, format_issue, format_tooltip};

/// Presentation surface that keeps the panel state for printing
#[derive(Debug, Default)]
pub struct TerminalSurface {
    entries: Vec<SummaryEntry>,
    selected: Option<usize>,
    active_detail: Option<usize>,
    detail_visible: bool,
    aux_controls_visible: bool,
    toggles: Option<(bool, bool)>,
    details: BTreeMap<usize, Vec<BuildIssue>>,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SummaryEntry] {
        &self.entries
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn summary_lines(&self, with_tooltips: bool) -> Vec<String> {
        let mut lines = Vec::new();
        for (index, entry) in self.entries.iter().enumerate() {
            lines.push(format_entry(index, entry, self.selected == Some(index)));
            if with_tooltips {
                lines.push(format_tooltip(entry));
            }
        }
        lines
    }

    /// Lines of the visible detail view; empty while it is hidden
    pub fn detail_lines(&self) -> Vec<String> {
        let Some(index) = self.active_detail.filter(|_| self.detail_visible) else {
            return Vec::new();
        };

        let mut lines = Vec::new();
        if self.aux_controls_visible {
            if let Some((warnings, errors)) = self.toggles {
                lines.push(format!(
                    "   warnings: {}  errors: {}",
                    if warnings { "shown" } else { "hidden" },
                    if errors { "shown" } else { "hidden" }
                ));
            }
        }

        match self.details.get(&index) {
            Some(issues) if !issues.is_empty() => {
                lines.extend(issues.iter().map(|issue| format!("   {}", format_issue(issue))));
            }
            _ => lines.push("   (no issues to show)".to_string()),
        }
        lines
    }

    pub fn print_summary(&self, with_tooltips: bool) {
        if self.entries.is_empty() {
            println!("📭 No builds recorded yet");
            return;
        }
        for line in self.summary_lines(with_tooltips) {
            println!("{line}");
        }
    }

    pub fn print_detail(&self) {
        for line in self.detail_lines() {
            println!("{line}");
        }
    }
}

impl PresentationSurface for TerminalSurface {
    fn clear_entries(&mut self) {
        self.entries.clear();
        self.selected = None;
        self.details.clear();
    }

    fn add_entry(&mut self, entry: SummaryEntry) {
        self.entries.push(entry);
    }

    fn select_entry(&mut self, index: usize) {
        self.selected = Some(index);
    }

    fn unselect_all(&mut self) {
        self.selected = None;
    }

    fn selected_entries(&self) -> Vec<usize> {
        self.selected.into_iter().collect()
    }

    fn set_active_detail(&mut self, index: usize) {
        self.active_detail = Some(index);
    }

    fn set_detail_visible(&mut self, visible: bool) {
        self.detail_visible = visible;
    }

    fn set_aux_controls_visible(&mut self, visible: bool) {
        self.aux_controls_visible = visible;
    }

    fn set_filter_toggles(&mut self, warnings: bool, errors: bool) {
        self.toggles = Some((warnings, errors));
    }

    fn render_issues(&mut self, index: usize, issues: &[&BuildIssue]) {
        self.details
            .insert(index, issues.iter().map(|&issue| issue.clone()).collect());
    }

    fn reveal_panel(&mut self) {
        println!("📋 Builds");
    }
}
