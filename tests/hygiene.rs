//! Hygiene — enforces coding standards at test time
//!
//! These tests scan the crate's production source for antipatterns. Each has a
//! budget (ideally zero). Page behaviors must degrade silently, so anything
//! that can abort the wasm module or swallow an error unlogged counts.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

// Panics — these abort the wasm module and take every behavior down with it.
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;

// Silent loss — discards errors without logging them.
const MAX_SILENT_DISCARD: usize = 0;
const MAX_DOT_OK: usize = 0;

// Style / structure.
const MAX_ALLOW_DEAD_CODE: usize = 0;

struct SourceFile {
    path: String,
    content: String,
}

impl SourceFile {
    /// Whether this file belongs to the browser host.
    fn is_browser_host(&self) -> bool {
        Path::new(&self.path).components().any(|c| c.as_os_str() == "dom")
    }
}

/// Collect production `.rs` files from `src/`, excluding test files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source<'a>(files: impl IntoIterator<Item = &'a SourceFile>, pattern: &str) -> Vec<(String, usize)> {
    files
        .into_iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            if count > 0 { Some((file.path.clone(), count)) } else { None }
        })
        .collect()
}

fn total(hits: &[(String, usize)]) -> usize {
    hits.iter().map(|(_, c)| c).sum()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter().map(|(path, count)| format!("  {path}: {count}")).collect::<Vec<_>>().join("\n")
}

fn assert_budget(pattern: &str, label: &str, max: usize) {
    let files = source_files();
    let hits = count_in_source(&files, pattern);
    let count = total(&hits);
    assert!(count <= max, "{label} budget exceeded: found {count}, max {max}.\n{}", format_hits(&hits));
}

#[test]
fn source_tree_is_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("engine.rs")), "run from the crate root");
}

#[test]
fn unwrap_budget() {
    assert_budget(".unwrap()", ".unwrap()", MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    assert_budget(".expect(", ".expect()", MAX_EXPECT);
}

#[test]
fn panic_budget() {
    assert_budget("panic!(", "panic!()", MAX_PANIC);
}

#[test]
fn unreachable_budget() {
    assert_budget("unreachable!(", "unreachable!()", MAX_UNREACHABLE);
}

#[test]
fn todo_budget() {
    assert_budget("todo!(", "todo!()", MAX_TODO);
}

#[test]
fn unimplemented_budget() {
    assert_budget("unimplemented!(", "unimplemented!()", MAX_UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    assert_budget("let _ =", "let _ =", MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    assert_budget(".ok()", ".ok()", MAX_DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    assert_budget("#[allow(dead_code)]", "#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE);
}

/// Browser APIs belong to the `dom` host so the engine stays testable natively.
#[test]
fn browser_apis_stay_in_dom_host() {
    let files = source_files();
    let engine_side: Vec<&SourceFile> = files.iter().filter(|f| !f.is_browser_host()).collect();
    for pattern in ["web_sys::", "js_sys::", "gloo_timers::"] {
        let hits = count_in_source(engine_side.iter().copied(), pattern);
        assert!(hits.is_empty(), "{pattern} used outside src/dom:\n{}", format_hits(&hits));
    }
}
