//! End-to-end comparisons over real directories

use std::fs;
use treediff::compare::{compare, CompareOptions, Comparer};
use treediff::error::CompareError;
use treediff::tree::node::{Node, Status};
use treediff::tree::walker::WalkerConfig;

use super::test_utils::{populate, write, Fixture};

fn status(tree: &Option<Node>, path: &str) -> Option<Status> {
    tree.as_ref().and_then(|t| t.find(path)).and_then(|n| n.status())
}

fn all_statuses(node: &Node, out: &mut Vec<Status>) {
    out.extend(node.status());
    for child in node.children() {
        all_statuses(child, out);
    }
}

#[test]
fn test_changed_and_added_file() {
    let fixture = Fixture::new();
    write(&fixture.a, "a.txt", "X");
    write(&fixture.b, "a.txt", "Y");
    write(&fixture.b, "b.txt", "new");

    let comparison = compare(&fixture.a_str(), &fixture.b_str()).unwrap();

    assert_eq!(status(&comparison.tree1, "a.txt"), Some(Status::Different));
    assert_eq!(status(&comparison.tree2, "a.txt"), Some(Status::Different));
    assert_eq!(status(&comparison.tree2, "b.txt"), Some(Status::Missing));
    assert!(comparison.tree1.as_ref().unwrap().find("b.txt").is_none());
    assert_eq!(status(&comparison.tree1, ""), Some(Status::Same));

    let stats = comparison.stats();
    assert_eq!(stats.different, 2);
    assert_eq!(stats.missing, 1);
    assert_eq!(stats.same, 0);
}

#[test]
fn test_added_file_mirrored_as_placeholder() {
    let fixture = Fixture::new();
    write(&fixture.a, "a.txt", "X");
    write(&fixture.b, "a.txt", "Y");
    write(&fixture.b, "b.txt", "new");

    let comparer = Comparer::new(
        WalkerConfig::default(),
        CompareOptions {
            mirror_missing: true,
            ..CompareOptions::default()
        },
    );
    let comparison = comparer.compare(&fixture.a_str(), &fixture.b_str()).unwrap();

    let placeholder = comparison.tree1.as_ref().unwrap().find("b.txt").unwrap();
    assert!(placeholder.is_placeholder());
    assert_eq!(placeholder.status(), Some(Status::Missing));
    // Placeholders don't count
    assert_eq!(comparison.stats().missing, 1);
}

#[test]
fn test_identical_trees_all_same() {
    let fixture = Fixture::new();
    populate(&fixture.a);
    populate(&fixture.b);

    let comparison = compare(&fixture.a_str(), &fixture.b_str()).unwrap();
    for tree in [&comparison.tree1, &comparison.tree2] {
        let mut statuses = Vec::new();
        all_statuses(tree.as_ref().unwrap(), &mut statuses);
        assert_eq!(statuses.len(), 8);
        assert!(statuses.iter().all(|s| *s == Status::Same));
    }
    assert!(comparison.stats().is_identical());
}

#[test]
fn test_folder_same_when_children_differ() {
    let fixture = Fixture::new();
    write(&fixture.a, "docs/one.txt", "1");
    write(&fixture.b, "docs/one.txt", "one");
    write(&fixture.b, "docs/two.txt", "2");

    let comparison = compare(&fixture.a_str(), &fixture.b_str()).unwrap();
    assert_eq!(status(&comparison.tree1, "docs"), Some(Status::Same));
    assert_eq!(status(&comparison.tree2, "docs"), Some(Status::Same));
    assert_eq!(status(&comparison.tree1, "docs/one.txt"), Some(Status::Different));
}

#[test]
fn test_content_decides_not_timestamps() {
    let fixture = Fixture::new();
    write(&fixture.a, "same.txt", "payload");
    std::thread::sleep(std::time::Duration::from_millis(20));
    write(&fixture.b, "same.txt", "payload");

    let comparison = compare(&fixture.a_str(), &fixture.b_str()).unwrap();
    assert_eq!(status(&comparison.tree1, "same.txt"), Some(Status::Same));
}

#[test]
fn test_file_against_folder() {
    let fixture = Fixture::new();
    write(&fixture.a, "thing", "a file");
    write(&fixture.b, "thing/inner.txt", "in a folder");

    let comparison = compare(&fixture.a_str(), &fixture.b_str()).unwrap();
    assert_eq!(status(&comparison.tree1, "thing"), Some(Status::Different));
    assert_eq!(status(&comparison.tree2, "thing"), Some(Status::Different));
    assert_eq!(status(&comparison.tree2, "thing/inner.txt"), Some(Status::Missing));
}

#[test]
fn test_missing_subtree_stamped_throughout() {
    let fixture = Fixture::new();
    write(&fixture.a, "only/a/b/c.txt", "deep");

    let comparison = compare(&fixture.a_str(), &fixture.b_str()).unwrap();
    for path in ["only", "only/a", "only/a/b", "only/a/b/c.txt"] {
        assert_eq!(status(&comparison.tree1, path), Some(Status::Missing), "{}", path);
    }
}

#[test]
fn test_empty_directories_compare_same() {
    let fixture = Fixture::new();
    let comparison = compare(&fixture.a_str(), &fixture.b_str()).unwrap();
    assert_eq!(status(&comparison.tree1, ""), Some(Status::Same));
    assert!(comparison.tree1.unwrap().children().is_empty());
}

#[test]
fn test_invalid_inputs() {
    let fixture = Fixture::new();
    let missing = fixture.a.join("nope").display().to_string();

    assert!(matches!(
        compare("", &fixture.b_str()),
        Err(CompareError::MissingPaths)
    ));
    let err = compare(&missing, &fixture.b_str()).unwrap_err();
    assert_eq!(err.to_string(), format!("Directory 1 does not exist: {}", missing));
    let err = compare(&fixture.a_str(), &missing).unwrap_err();
    assert_eq!(err.to_string(), format!("Directory 2 does not exist: {}", missing));
}

#[test]
fn test_json_shape() {
    let fixture = Fixture::new();
    write(&fixture.a, "f.txt", "hello");
    write(&fixture.b, "f.txt", "hello");

    let json = compare(&fixture.a_str(), &fixture.b_str())
        .unwrap()
        .to_json()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let file = &value["tree1"]["children"][0];
    assert_eq!(file["type"], "file");
    assert_eq!(file["name"], "f.txt");
    assert_eq!(file["status"], "same");
    assert_eq!(file["size"], 5);
    assert_eq!(file["content_hash"].as_str().unwrap().len(), 64);
    assert_eq!(value["tree1"]["type"], "folder");
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_different() {
    use std::os::unix::fs::PermissionsExt;

    let fixture = Fixture::new();
    write(&fixture.a, "secret.txt", "same");
    write(&fixture.b, "secret.txt", "same");
    let locked = fixture.b.join("secret.txt");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read(&locked).is_ok() {
        eprintln!("skipping test_unreadable_file_is_different: permission bits not enforced");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
        return;
    }

    let comparison = compare(&fixture.a_str(), &fixture.b_str()).unwrap();
    assert_eq!(status(&comparison.tree1, "secret.txt"), Some(Status::Different));
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
}

#[cfg(unix)]
#[test]
fn test_non_utf8_names_kept_apart() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let ff = OsStr::from_bytes(b"x\xff");
    let fe = OsStr::from_bytes(b"x\xfe");

    let fixture = Fixture::new();
    if fs::write(fixture.a.join(ff), "one").is_err() {
        eprintln!("skipping test_non_utf8_names_kept_apart: filesystem rejects non-UTF-8 names");
        return;
    }
    fs::write(fixture.a.join(fe), "two").unwrap();
    fs::write(fixture.b.join(ff), "one").unwrap();
    fs::write(fixture.b.join(fe), "two").unwrap();

    let comparison = compare(&fixture.a_str(), &fixture.b_str()).unwrap();
    let children: Vec<(&str, Option<Status>)> = comparison
        .tree1
        .as_ref()
        .unwrap()
        .children()
        .iter()
        .map(|c| (c.name(), c.status()))
        .collect();
    assert_eq!(
        children,
        vec![("x\\xfe", Some(Status::Same)), ("x\\xff", Some(Status::Same))]
    );

    // Same content under different undecodable names is not a match
    let fixture = Fixture::new();
    fs::write(fixture.a.join(fe), "same").unwrap();
    fs::write(fixture.b.join(ff), "same").unwrap();

    let comparison = compare(&fixture.a_str(), &fixture.b_str()).unwrap();
    assert_eq!(status(&comparison.tree1, "x\\xfe"), Some(Status::Missing));
    assert_eq!(status(&comparison.tree2, "x\\xff"), Some(Status::Missing));
    assert_eq!(comparison.tree1.as_ref().unwrap().children().len(), 1);
}
