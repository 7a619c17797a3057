//! Architecture tests for output hygiene.
//!
//! Library code must go through `tracing`, never straight to stdout or
//! stderr. Test code (`tests/` directories and this crate) is exempt.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

const FORBIDDEN: &[&str] = &["println!(", "eprintln!(", "print!(", "eprint!("];

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

#[test]
fn test_library_sources_do_not_print_directly() {
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

        for (number, line) in contents.lines().enumerate() {
            if FORBIDDEN.iter().any(|m| line.contains(m)) {
                violations.push(format!("{}:{}: {}", path.display(), number + 1, line.trim()));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "direct printing found in library sources (use tracing instead):\n{}",
        violations.join("\n")
    );
}
