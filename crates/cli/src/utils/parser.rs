use buildpanel_core::{BuildIssue, IssueKind};
use regex::Regex;
use std::sync::LazyLock;

// path(line,col[,endLine,endCol]): error CS0103: message [project]
static LOCATED_DIAGNOSTIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?P<file>[^\s(][^(]*?)\((?P<line>\d+)(?:,(?P<col>\d+))?(?:,\d+,\d+)?\)\s*:\s*(?P<kind>error|warning)\s+(?P<code>[A-Za-z]+\d+)\s*:\s*(?P<msg>.*?)(?:\s+\[(?P<project>[^\]]+)\])?\s*$",
    )
    .unwrap()
});

// origin : error MSB1009: message [project]
static GLOBAL_DIAGNOSTIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:(?P<origin>[^:\s][^:]*?)\s*:\s*)?(?P<kind>error|warning)\s+(?P<code>[A-Za-z]+\d+)\s*:\s*(?P<msg>.*?)(?:\s+\[(?P<project>[^\]]+)\])?\s*$",
    )
    .unwrap()
});

/// Parse one line of MSBuild-style output into an issue
pub fn parse_diagnostic_line(line: &str) -> Option<BuildIssue> {
    if let Some(caps) = LOCATED_DIAGNOSTIC.captures(line) {
        let mut issue = BuildIssue::new(kind(&caps["kind"]), &caps["msg"]).with_code(&caps["code"]);
        let line_number = caps["line"].parse().ok()?;
        let column = caps
            .name("col")
            .and_then(|c| c.as_str().parse().ok())
            .unwrap_or(0);
        issue = issue.with_location(caps["file"].trim(), line_number, column);
        if let Some(project) = caps.name("project") {
            issue = issue.with_project_file(project.as_str());
        }
        return Some(issue);
    }

    let caps = GLOBAL_DIAGNOSTIC.captures(line)?;
    let mut issue = BuildIssue::new(kind(&caps["kind"]), &caps["msg"]).with_code(&caps["code"]);
    if let Some(origin) = caps.name("origin") {
        issue.file = Some(origin.as_str().trim().to_string());
    }
    if let Some(project) = caps.name("project") {
        issue = issue.with_project_file(project.as_str());
    }
    Some(issue)
}

/// Collect the distinct issues reported in a build log.
///
/// MSBuild repeats every diagnostic in its closing summary; repeats are
/// dropped while first-seen order is kept.
pub fn parse_build_output(output: &str) -> Vec<BuildIssue> {
    let mut issues: Vec<BuildIssue> = Vec::new();
    for issue in output.lines().filter_map(parse_diagnostic_line) {
        if !issues.contains(&issue) {
            issues.push(issue);
        }
    }
    issues
}

fn kind(text: &str) -> IssueKind {
    if text == "error" {
        IssueKind::Error
    } else {
        IssueKind::Warning
    }
}
