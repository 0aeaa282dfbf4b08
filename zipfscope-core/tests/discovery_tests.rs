// zipfscope-core/tests/discovery_tests.rs
use std::fs;
use std::path::Path;

use tempfile::tempdir;
use test_log::test;

use zipfscope_core::{discover_corpus, AnalysisError, FileFilter};

fn touch(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn default_filter() -> FileFilter {
    FileFilter::new(".*", r"(?i)\.txt$").unwrap()
}

#[test]
fn test_files_are_sorted_by_group_then_name() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("20240102").join("b.txt"), "");
    touch(&root.join("20240101").join("z.txt"), "");
    touch(&root.join("20240102").join("a.txt"), "");
    touch(&root.join("20240101").join("a.TXT"), "");

    let corpus = discover_corpus(root, &default_filter()).unwrap();
    let names: Vec<String> = corpus.iter().map(|f| f.relative_name()).collect();
    assert_eq!(
        names,
        vec!["20240101/a.TXT", "20240101/z.txt", "20240102/a.txt", "20240102/b.txt"]
    );
}

#[test]
fn test_only_one_level_is_descended() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("top.txt"), "");
    touch(&root.join("g").join("kept.txt"), "");
    touch(&root.join("g").join("nested").join("deep.txt"), "");

    let corpus = discover_corpus(root, &default_filter()).unwrap();
    let names: Vec<String> = corpus.iter().map(|f| f.relative_name()).collect();
    assert_eq!(names, vec!["g/kept.txt"]);
}

#[test]
fn test_patterns_filter_groups_and_files() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("20240101").join("news.txt"), "");
    touch(&root.join("20240101").join("notes.md"), "");
    touch(&root.join("drafts").join("x.txt"), "");

    let filter = FileFilter::new(r"^\d{8}$", r"\.txt$").unwrap();
    let corpus = discover_corpus(root, &filter).unwrap();
    assert_eq!(corpus.len(), 1);
    assert_eq!(corpus.files()[0].name, "news.txt");
}

#[test]
fn test_discovery_is_deterministic() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    for group in ["c", "a", "b"] {
        for name in ["3.txt", "1.txt", "2.txt"] {
            touch(&root.join(group).join(name), "字");
        }
    }

    let first = discover_corpus(root, &default_filter()).unwrap();
    let second = discover_corpus(root, &default_filter()).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.fingerprint(), second.fingerprint());
    assert_eq!(first.fingerprint().len(), 64);
}

#[test]
fn test_fingerprint_changes_with_file_set() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    touch(&root.join("g").join("a.txt"), "");
    let before = discover_corpus(root, &default_filter()).unwrap().fingerprint();

    touch(&root.join("g").join("b.txt"), "");
    let after = discover_corpus(root, &default_filter()).unwrap().fingerprint();
    assert_ne!(before, after);
}

#[test]
fn test_missing_root_is_not_a_directory() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = discover_corpus(&missing, &default_filter()).unwrap_err();
    assert!(matches!(err, AnalysisError::NotADirectory(_)));
    assert!(err.is_fatal_input_error());
}

#[test]
fn test_file_as_root_is_not_a_directory() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("file.txt");
    touch(&file, "");
    let err = discover_corpus(&file, &default_filter()).unwrap_err();
    assert!(matches!(err, AnalysisError::NotADirectory(_)));
}

#[test]
fn test_empty_corpus_is_rejected_on_demand() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("empty_group")).unwrap();

    let corpus = discover_corpus(dir.path(), &default_filter()).unwrap();
    assert!(corpus.is_empty());
    let err = corpus.require_non_empty().unwrap_err();
    assert!(matches!(err, AnalysisError::EmptyCorpus(_)));
}

#[test]
fn test_invalid_pattern_is_reported() {
    let err = FileFilter::new("(", ".*").unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidPattern(_, _)));
}
