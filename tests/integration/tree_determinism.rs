//! Integration tests for tree build determinism

use std::fs;
use tempfile::TempDir;
use treediff::compare::compare;
use treediff::tree::TreeBuilder;

use super::test_utils::{populate, write, Fixture};

/// Building the same directory twice yields equal trees
#[test]
fn test_same_directory_same_tree() {
    let temp_dir = TempDir::new().unwrap();
    populate(temp_dir.path());

    let builder = TreeBuilder::new(temp_dir.path().to_path_buf());
    let first = builder.build().unwrap();
    let second = builder.build().unwrap();
    assert_eq!(first, second);
}

/// Parallel and sequential builds agree, including child order
#[test]
fn test_parallel_matches_sequential() {
    let temp_dir = TempDir::new().unwrap();
    for i in 0..50 {
        write(temp_dir.path(), &format!("dir{}/file{}.txt", i % 7, i), &i.to_string());
    }

    let root = temp_dir.path().to_path_buf();
    let parallel = TreeBuilder::new(root.clone()).parallel(true).build();
    let sequential = TreeBuilder::new(root).parallel(false).build();
    assert_eq!(parallel, sequential);
}

/// Creation order on disk does not affect the tree
#[test]
fn test_creation_order_irrelevant() {
    let fixture = Fixture::new();
    for name in ["c.txt", "a.txt", "b.txt"] {
        write(&fixture.a, name, "x");
    }
    for name in ["a.txt", "b.txt", "c.txt"] {
        write(&fixture.b, name, "x");
    }

    let comparison = compare(&fixture.a_str(), &fixture.b_str()).unwrap();
    let left: Vec<&str> = comparison.tree1.as_ref().unwrap().children().iter().map(|c| c.name()).collect();
    let right: Vec<&str> = comparison.tree2.as_ref().unwrap().children().iter().map(|c| c.name()).collect();
    assert_eq!(left, right);
}

/// Comparing twice produces byte-identical JSON
#[test]
fn test_comparison_json_idempotent() {
    let fixture = Fixture::new();
    populate(&fixture.a);
    populate(&fixture.b);
    write(&fixture.b, "src/lib.rs", "pub mod b;");
    fs::remove_file(fixture.b.join("README.md")).unwrap();

    let first = compare(&fixture.a_str(), &fixture.b_str())
        .unwrap()
        .to_json()
        .unwrap();
    let second = compare(&fixture.a_str(), &fixture.b_str())
        .unwrap()
        .to_json()
        .unwrap();
    assert_eq!(first, second);
}
