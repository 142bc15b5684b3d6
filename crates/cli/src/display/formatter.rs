use buildpanel_core::interfaces::{StatusIcon, SummaryEntry};
use buildpanel_core::{BuildIssue, IssueKind};

pub fn status_icon(icon: StatusIcon) -> &'static str {
    match icon {
        StatusIcon::Running => "⏳",
        StatusIcon::Error => "❌",
        StatusIcon::Warning => "⚠️",
        StatusIcon::Success => "✅",
    }
}

/// One summary list row, e.g. `> 0 ✅ Game [Debug]`
pub fn format_entry(index: usize, entry: &SummaryEntry, selected: bool) -> String {
    let marker = if selected { ">" } else { " " };
    format!("{} {} {} {}", marker, index, status_icon(entry.icon), entry.label)
}

pub fn format_issue(issue: &BuildIssue) -> String {
    let icon = match issue.kind {
        IssueKind::Error => "❌",
        IssueKind::Warning => "⚠️",
    };
    format!("{} {}", icon, issue)
}

/// Tooltip lines indented under their summary row
pub fn format_tooltip(entry: &SummaryEntry) -> String {
    entry
        .tooltip
        .lines()
        .map(|line| format!("      {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(icon: StatusIcon) -> SummaryEntry {
        SummaryEntry {
            label: "Game [Debug]".to_string(),
            tooltip: "Solution: /p/Game.sln\nStatus: Succeeded".to_string(),
            icon,
        }
    }

    #[test]
    fn test_format_entry_marks_selection() {
        assert_eq!(
            format_entry(0, &entry(StatusIcon::Success), true),
            "> 0 ✅ Game [Debug]"
        );
        assert_eq!(
            format_entry(3, &entry(StatusIcon::Error), false),
            "  3 ❌ Game [Debug]"
        );
    }

    #[test]
    fn test_format_tooltip_indents_every_line() {
        assert_eq!(
            format_tooltip(&entry(StatusIcon::Running)),
            "      Solution: /p/Game.sln\n      Status: Succeeded"
        );
    }

    #[test]
    fn test_format_issue() {
        let issue = BuildIssue::error("missing")
            .with_location("Player.cs", 2, 3)
            .with_code("CS0103");
        assert_eq!(
            format_issue(&issue),
            "❌ Player.cs(2,3): error CS0103: missing"
        );
    }
}
