use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Read a text file that may not be valid UTF-8, as build tool output often isn't
pub fn read_lossy(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Find files under `root` whose extension is one of `extensions`, sorted by path.
///
/// Hidden directories and build output (`bin`, `obj`) are skipped.
pub fn find_files_with_extension(root: &Path, extensions: &[String]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            match e.file_name().to_str() {
                Some(name) => !name.starts_with('.') && name != "bin" && name != "obj",
                None => true,
            }
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
        })
        .map(|e| e.path().to_path_buf())
        .collect();

    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_files_skips_build_output_and_hidden_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("Scripts/Enemies")).unwrap();
        fs::create_dir_all(root.join("obj/Debug")).unwrap();
        fs::create_dir_all(root.join(".mono")).unwrap();
        fs::write(root.join("Scripts/Player.cs"), "").unwrap();
        fs::write(root.join("Scripts/Enemies/Slime.cs"), "").unwrap();
        fs::write(root.join("Scripts/notes.txt"), "").unwrap();
        fs::write(root.join("obj/Debug/Generated.cs"), "").unwrap();
        fs::write(root.join(".mono/Cached.cs"), "").unwrap();

        let files = find_files_with_extension(root, &["cs".to_string()]);

        assert_eq!(
            files,
            vec![
                root.join("Scripts/Enemies/Slime.cs"),
                root.join("Scripts/Player.cs"),
            ]
        );
    }

    #[test]
    fn test_read_lossy_replaces_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.txt");
        fs::write(&path, b"ok \xff done").unwrap();

        assert_eq!(read_lossy(&path).unwrap(), "ok \u{fffd} done");
    }
}
