//! Source-tree discovery: which files get handed to the extractor.
//!
//! Discovery order is irrelevant to the output (the catalog snapshot is
//! order-insensitive), so results are returned as a plain set.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::{Pattern, glob};
use walkdir::WalkDir;

use crate::config::TEST_FILE_PATTERNS;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of scanning files.
pub struct ScanResult {
    pub files: HashSet<String>,
    pub skipped_count: usize,
}

pub fn scan_files(
    base_dir: &str,
    includes: &[String],
    ignore_patterns: &[String],
    extensions: &[String],
    ignore_test_files: bool,
    verbose: bool,
) -> ScanResult {
    let mut files: HashSet<String> = HashSet::new();
    let mut skipped_count = 0;

    // Separate ignore patterns into literal paths and glob patterns
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid ignore pattern '{}': {}",
                            "warning:".bold().yellow(),
                            p,
                            e
                        );
                    }
                }
            }
        } else {
            // Literal path mode: anchor under base_dir for prefix matching
            let path = Path::new(base_dir).join(p);
            literal_ignore_paths.push(path);
        }
    }

    if ignore_test_files {
        for p in TEST_FILE_PATTERNS {
            if let Ok(pattern) = Pattern::new(p) {
                glob_patterns.push(pattern);
            }
        }
    }

    let dirs_to_scan: Vec<PathBuf> = if includes.is_empty() {
        vec![Path::new(base_dir).to_path_buf()]
    } else {
        let mut paths = Vec::new();
        for inc in includes {
            if is_glob_pattern(inc) {
                // Glob mode: expand pattern to matching directories
                let full_pattern = Path::new(base_dir).join(inc);
                let pattern_str = full_pattern.to_string_lossy();
                match glob(&pattern_str) {
                    Ok(entries) => {
                        for entry in entries.flatten() {
                            if entry.is_dir() {
                                paths.push(entry);
                            }
                        }
                    }
                    Err(e) => {
                        if verbose {
                            eprintln!(
                                "{} Invalid glob pattern '{}': {}",
                                "warning:".bold().yellow(),
                                inc,
                                e
                            );
                        }
                    }
                }
            } else {
                // Literal path mode: use as-is
                let path = Path::new(base_dir).join(inc);
                if path.exists() {
                    paths.push(path);
                } else if verbose {
                    eprintln!(
                        "{} Include path does not exist: {}",
                        "warning:".bold().yellow(),
                        path.display()
                    );
                }
            }
        }
        paths
    };

    for dir in dirs_to_scan {
        for entry in WalkDir::new(dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };
            let path = entry.path();
            let path_str = path.to_string_lossy();

            // Literal ignore paths match by prefix
            if literal_ignore_paths
                .iter()
                .any(|ignore_path| path.starts_with(ignore_path))
            {
                continue;
            }

            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if path.is_file() && has_extension(path, extensions) {
                files.insert(path_str.into());
            }
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}

#[cfg(test)]
mod tests {
    use std::fs::{self, File};

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    fn default_extensions() -> Vec<String> {
        ["js", "jsx", "ts", "tsx"].map(String::from).to_vec()
    }

    fn scan(
        base_dir: &Path,
        includes: &[String],
        ignores: &[String],
        ignore_test_files: bool,
    ) -> ScanResult {
        scan_files(
            base_dir.to_str().unwrap(),
            includes,
            ignores,
            &default_extensions(),
            ignore_test_files,
            false,
        )
    }

    #[test]
    fn test_scan_by_extension() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("app.jsx")).unwrap();
        File::create(dir.path().join("utils.ts")).unwrap();
        File::create(dir.path().join("style.css")).unwrap();

        let result = scan(dir.path(), &[], &[], false);

        assert_eq!(result.files.len(), 2);
        assert!(result.files.iter().any(|f| f.ends_with("app.jsx")));
        assert!(result.files.iter().any(|f| f.ends_with("utils.ts")));
        assert!(!result.files.iter().any(|f| f.ends_with("style.css")));
    }

    #[test]
    fn test_scan_custom_extensions() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("page.vue")).unwrap();
        File::create(dir.path().join("app.js")).unwrap();

        let result = scan_files(
            dir.path().to_str().unwrap(),
            &[],
            &[],
            &["vue".to_string()],
            false,
            false,
        );

        assert_eq!(result.files.len(), 1);
        assert!(result.files.iter().any(|f| f.ends_with("page.vue")));
    }

    #[test]
    fn test_scan_ignores_node_modules() {
        let dir = tempdir().unwrap();

        let node_modules = dir.path().join("node_modules");
        fs::create_dir(&node_modules).unwrap();
        File::create(node_modules.join("lib.ts")).unwrap();

        File::create(dir.path().join("app.jsx")).unwrap();

        let result = scan(dir.path(), &[], &["**/node_modules/**".to_owned()], false);

        assert_eq!(result.files.len(), 1);
        assert!(!result.files.iter().any(|f| f.contains("node_modules")));
    }

    #[test]
    fn test_scan_nested_directories() {
        let dir = tempdir().unwrap();

        let components = dir.path().join("components");
        fs::create_dir(&components).unwrap();
        File::create(components.join("Button.jsx")).unwrap();

        let utils = dir.path().join("utils");
        fs::create_dir(&utils).unwrap();
        File::create(utils.join("helper.js")).unwrap();

        let result = scan(dir.path(), &[], &[], false);

        assert_eq!(result.files.len(), 2);
        assert!(
            result
                .files
                .iter()
                .any(|f| f.ends_with("components/Button.jsx"))
        );
        assert!(result.files.iter().any(|f| f.ends_with("utils/helper.js")));
    }

    #[test]
    fn test_scan_with_includes() {
        let dir = tempdir().unwrap();

        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();
        File::create(src.join("app.js")).unwrap();

        let lib = dir.path().join("lib");
        fs::create_dir(&lib).unwrap();
        File::create(lib.join("utils.js")).unwrap();

        let result = scan(dir.path(), &["src".to_owned()], &[], false);

        assert_eq!(result.files.len(), 1);
        assert!(result.files.iter().any(|f| f.ends_with("src/app.js")));
    }

    #[test]
    fn test_scan_with_nonexistent_include() {
        let dir = tempdir().unwrap();

        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();
        File::create(src.join("app.js")).unwrap();

        let result = scan(
            dir.path(),
            &["src".to_owned(), "nonexistent".to_owned()],
            &[],
            false,
        );

        assert_eq!(result.files.len(), 1);
    }

    #[test]
    fn test_scan_ignores_test_files() {
        let dir = tempdir().unwrap();

        File::create(dir.path().join("app.jsx")).unwrap();
        File::create(dir.path().join("app.test.jsx")).unwrap();
        File::create(dir.path().join("utils.spec.js")).unwrap();

        let tests_dir = dir.path().join("__tests__");
        fs::create_dir(&tests_dir).unwrap();
        File::create(tests_dir.join("helper.test.ts")).unwrap();

        let result = scan(dir.path(), &[], &[], true);

        assert_eq!(result.files.len(), 1);
        assert!(result.files.iter().any(|f| f.ends_with("app.jsx")));
    }

    #[test]
    fn test_scan_includes_test_files_when_disabled() {
        let dir = tempdir().unwrap();

        File::create(dir.path().join("app.jsx")).unwrap();
        File::create(dir.path().join("app.test.jsx")).unwrap();

        let result = scan(dir.path(), &[], &[], false);

        assert_eq!(result.files.len(), 2);
    }

    #[test]
    fn test_scan_deduplicates_overlapping_includes() {
        let dir = tempdir().unwrap();

        let components = dir.path().join("src").join("components");
        fs::create_dir_all(&components).unwrap();
        File::create(components.join("Button.jsx")).unwrap();

        let result = scan(
            dir.path(),
            &["src".to_owned(), "src/components".to_owned()],
            &[],
            false,
        );

        assert_eq!(result.files.len(), 1);
    }

    #[test]
    fn test_scan_with_glob_include() {
        let dir = tempdir().unwrap();

        let src_app = dir.path().join("src").join("app");
        fs::create_dir_all(&src_app).unwrap();
        File::create(src_app.join("page.jsx")).unwrap();

        let lib = dir.path().join("lib");
        fs::create_dir(&lib).unwrap();
        File::create(lib.join("utils.js")).unwrap();

        let result = scan(dir.path(), &["src/*".to_owned()], &[], false);

        assert_eq!(result.files.len(), 1);
        assert!(result.files.iter().any(|f| f.ends_with("page.jsx")));
    }

    #[test]
    fn test_scan_ignores_literal_directory_path() {
        let dir = tempdir().unwrap();

        let components = dir.path().join("src").join("components");
        fs::create_dir_all(&components).unwrap();
        File::create(components.join("Button.jsx")).unwrap();

        let generated = dir.path().join("src").join("generated");
        fs::create_dir_all(&generated).unwrap();
        File::create(generated.join("types.ts")).unwrap();

        let result = scan(
            dir.path(),
            &["src".to_owned()],
            &["src/generated".to_owned()],
            false,
        );

        assert_eq!(result.files.len(), 1);
        assert!(!result.files.iter().any(|f| f.contains("generated")));
    }

    #[test]
    fn test_is_glob_pattern() {
        assert!(is_glob_pattern("src/*"));
        assert!(is_glob_pattern("src/**/*.jsx"));
        assert!(is_glob_pattern("file?.js"));
        assert!(!is_glob_pattern("src"));
        assert!(!is_glob_pattern("app/[locale]"));
    }
}
