//! Architecture tests for panic hygiene.
//!
//! Library code propagates errors; `unwrap()`, `expect(` and `panic!`
//! belong to test code only. Everything from the first `#[cfg(test)]`
//! marker to the end of a file is test code (test modules sit at the
//! bottom of each module in this workspace), as are `tests/` directories
//! and this crate.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

const FORBIDDEN: &[&str] = &[".unwrap()", ".expect(", "panic!"];

fn crates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("architecture-tests lives under crates/")
        .to_path_buf()
}

fn is_exempt(path: &Path) -> bool {
    path.components().any(|c| c.as_os_str() == "tests")
        || path
            .components()
            .any(|c| c.as_os_str() == "architecture-tests")
}

/// Strips the trailing test module, comments, and doc lines, leaving
/// only the library code subject to the hygiene rule.
fn library_lines(contents: &str) -> impl Iterator<Item = (usize, &str)> {
    contents
        .lines()
        .enumerate()
        .take_while(|(_, line)| !line.trim_start().starts_with("#[cfg(test)]"))
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
}

#[test]
fn test_library_sources_do_not_panic() {
    let mut violations = Vec::new();

    for entry in WalkDir::new(crates_dir())
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
    {
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "rs") || is_exempt(path) {
            continue;
        }

        let contents = std::fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));

        for (number, line) in library_lines(&contents) {
            if FORBIDDEN.iter().any(|m| line.contains(m)) {
                violations.push(format!("{}:{}: {}", path.display(), number + 1, line.trim()));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "panicking calls found in library sources (propagate errors instead):\n{}",
        violations.join("\n")
    );
}
