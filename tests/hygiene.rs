//! Hygiene checks enforced at test time.
//!
//! Scans the crate's `src/` tree for patterns that should never ship in
//! production code. Each pattern has a budget of zero; browser glue that
//! must swallow JS-side errors does so explicitly, never by panicking.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
}

fn production_sources() -> Vec<(PathBuf, String)> {
    let mut pending = vec![PathBuf::from("src")];
    let mut files = Vec::new();
    while let Some(dir) = pending.pop() {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                pending.push(path);
            } else if is_production_source(&path) {
                if let Ok(content) = fs::read_to_string(&path) {
                    files.push((path, content));
                }
            }
        }
    }
    files
}

fn is_production_source(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "rs")
        && !path.to_string_lossy().ends_with("_test.rs")
}

fn check_budget(budget: &Budget) {
    let mut count = 0;
    let mut report = String::new();
    for (path, content) in production_sources() {
        let hits = content
            .lines()
            .filter(|line| line.contains(budget.pattern))
            .count();
        if hits > 0 {
            count += hits;
            report.push_str(&format!("  {}: {hits}\n", path.display()));
        }
    }
    assert!(
        count <= budget.max,
        "{} budget exceeded: found {count}, max {}.\n{report}",
        budget.pattern,
        budget.max
    );
}

#[test]
fn unwrap_budget() {
    check_budget(&Budget { pattern: ".unwrap()", max: 0 });
}

#[test]
fn expect_budget() {
    check_budget(&Budget { pattern: ".expect(", max: 0 });
}

#[test]
fn panic_budget() {
    check_budget(&Budget { pattern: "panic!(", max: 0 });
}

#[test]
fn unreachable_budget() {
    check_budget(&Budget { pattern: "unreachable!(", max: 0 });
}

#[test]
fn todo_budget() {
    check_budget(&Budget { pattern: "todo!(", max: 0 });
}

#[test]
fn unimplemented_budget() {
    check_budget(&Budget { pattern: "unimplemented!(", max: 0 });
}

#[test]
fn allow_dead_code_budget() {
    check_budget(&Budget { pattern: "#[allow(dead_code)]", max: 0 });
}
