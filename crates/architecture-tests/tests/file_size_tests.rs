//! Architecture tests for file size limits.
//!
//! Files >400 LOC get a warning; files >700 LOC fail the test. A
//! bootstrap library has no business growing large modules.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

const WARNING_THRESHOLD: usize = 400;
const FAILURE_THRESHOLD: usize = 700;

/// Resolves the workspace `crates/` directory relative to this crate.
fn crates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("architecture-tests lives under crates/")
        .to_path_buf()
}

fn rust_sources() -> Vec<PathBuf> {
    WalkDir::new(crates_dir())
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "rs"))
        .collect()
}

#[test]
fn test_no_source_file_exceeds_size_limit() {
    let mut failures = Vec::new();

    for path in rust_sources() {
        let contents = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()));
        let lines = contents.lines().count();

        if lines > FAILURE_THRESHOLD {
            failures.push(format!("{} ({} lines)", path.display(), lines));
        } else if lines > WARNING_THRESHOLD {
            eprintln!(
                "warning: {} has {} lines (threshold {})",
                path.display(),
                lines,
                WARNING_THRESHOLD
            );
        }
    }

    assert!(
        failures.is_empty(),
        "files exceed the {FAILURE_THRESHOLD}-line limit:\n{}",
        failures.join("\n")
    );
}
