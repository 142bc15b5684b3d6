use buildpanel_core::PanelConfig;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const SEARCH_DEPTH: usize = 2;

fn find_by_extension(root: &Path, extension: &str) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .max_depth(SEARCH_DEPTH)
        .into_iter()
        .filter_entry(|e| {
            // Skip hidden directories and build output
            e.depth() == 0
                || e.file_name()
                    .to_str()
                    .is_none_or(|name| !name.starts_with('.') && name != "bin" && name != "obj")
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == extension))
        .filter_map(|e| e.path().strip_prefix(root).ok().map(Path::to_path_buf))
        .collect();

    // Shallowest first, then by name
    found.sort_by_key(|p| (p.components().count(), p.clone()));
    found
}

pub fn find_solution(root: &Path) -> Option<PathBuf> {
    find_by_extension(root, "sln").into_iter().next()
}

/// The project file, preferring one named like the solution
pub fn find_project(root: &Path, solution: Option<&Path>) -> Option<PathBuf> {
    let projects = find_by_extension(root, "csproj");
    let stem = solution.and_then(|s| s.file_stem());

    projects
        .iter()
        .find(|p| stem.is_some() && p.file_stem() == stem)
        .or_else(|| projects.first())
        .cloned()
}

/// Config for the project in `root`, paths relative to `root`
pub fn detect_config(root: &Path) -> PanelConfig {
    let name = root
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("Game")
        .to_string();

    let solution = find_solution(root);
    let project = find_project(root, solution.as_deref());

    PanelConfig::new(
        solution.unwrap_or_else(|| PathBuf::from(format!("{name}.sln"))),
        project.unwrap_or_else(|| PathBuf::from(format!("{name}.csproj"))),
    )
}
