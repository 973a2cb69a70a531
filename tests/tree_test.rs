use packstrap::glob::PatternList;
use packstrap::tree::list_tree;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn sample_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "setup.py", "");
    write(root, "README.tmpl", "");
    write(root, "pkg/__init__.py", "");
    write(root, "pkg/module.pyc", "");
    write(root, "pkg/data/config.json", "");
    write(root, "build/output.py", "");
    temp_dir
}

#[test]
fn test_list_all_files() {
    let temp_dir = sample_tree();
    let files = list_tree(temp_dir.path(), &PatternList::empty(), &PatternList::empty()).unwrap();

    assert_eq!(
        files,
        vec![
            "README.tmpl",
            "build/output.py",
            "pkg/__init__.py",
            "pkg/data/config.json",
            "pkg/module.pyc",
            "setup.py",
        ]
    );
}

#[test]
fn test_exclude_prunes_directories() {
    let temp_dir = sample_tree();
    let exclude = PatternList::new(["build", "*.pyc"]);
    let files = list_tree(temp_dir.path(), &exclude, &PatternList::empty()).unwrap();

    assert!(files.iter().all(|f| !f.starts_with("build/")));
    assert!(files.iter().all(|f| !f.ends_with(".pyc")));
    assert!(files.contains(&"pkg/__init__.py".to_string()));
}

#[test]
fn test_include_filters_files_but_not_directories() {
    let temp_dir = sample_tree();
    let include = PatternList::new(["*.py"]);
    let files = list_tree(temp_dir.path(), &PatternList::empty(), &include).unwrap();

    assert_eq!(files, vec!["build/output.py", "pkg/__init__.py", "setup.py"]);
}

#[test]
fn test_exclude_wins_over_include() {
    let temp_dir = sample_tree();
    let exclude = PatternList::new(["pkg"]);
    let include = PatternList::new(["*.py", "*.json"]);
    let files = list_tree(temp_dir.path(), &exclude, &include).unwrap();

    assert_eq!(files, vec!["build/output.py", "setup.py"]);
}

#[test]
fn test_empty_directories_contribute_nothing() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir_all(temp_dir.path().join("a/b/c")).unwrap();
    let files = list_tree(temp_dir.path(), &PatternList::empty(), &PatternList::empty()).unwrap();
    assert!(files.is_empty());
}

#[test]
fn test_missing_root_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let result = list_tree(
        temp_dir.path().join("missing"),
        &PatternList::empty(),
        &PatternList::empty(),
    );
    assert!(matches!(result, Err(packstrap::error::Error::IoError(_))));
}
