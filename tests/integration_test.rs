use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn write_registry(root: &Path, records: &str) {
    std::fs::write(
        root.join("pkgdb.json"),
        format!(r#"{{"packages": [{}]}}"#, records),
    )
    .unwrap();
}

fn write_repository(root: &Path, name: &str, records: &str) {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("index.json"),
        format!(r#"{{"packages": [{}]}}"#, records),
    )
    .unwrap();
}

fn write_pool(root: &Path, repositories: &[&str]) {
    let list = repositories
        .iter()
        .map(|r| format!("\"{}\"", r))
        .collect::<Vec<_>>()
        .join(", ");
    std::fs::write(
        root.join("repositories.json"),
        format!(r#"{{"repositories": [{}]}}"#, list),
    )
    .unwrap();
}

fn pkgq(root: &Path) -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("pkgq"));
    cmd.env_remove("PKGQ_ROOT")
        .env_remove("COLUMNS")
        .env_remove("RUST_LOG")
        .arg("--root")
        .arg(root);
    cmd
}

const REGISTRY: &str = r#"
    {"pkgver": "foo-1.0_1", "short_desc": "Foo tool", "state": "installed"},
    {"pkgver": "bar-2.0_1", "short_desc": "Bar lib", "state": "unpacked", "automatic_install": true}
"#;

#[test]
fn test_list_default_and_by_state() {
    let root_dir = tempdir().unwrap();
    let root = root_dir.path();
    write_registry(root, REGISTRY);

    pkgq(root)
        .arg("list")
        .assert()
        .success()
        .stdout("foo-1.0_1 Foo tool\n");

    pkgq(root)
        .arg("list")
        .arg("unpacked")
        .assert()
        .success()
        .stdout("bar-2.0_1 Bar lib\n");

    pkgq(root)
        .arg("list")
        .arg("config-files")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_list_invalid_state() {
    let root_dir = tempdir().unwrap();
    let root = root_dir.path();
    write_registry(root, REGISTRY);

    pkgq(root)
        .arg("list")
        .arg("everything")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("invalid state `everything'"))
        .stderr(predicate::str::contains("config-files"));
}

#[test]
fn test_list_without_registry() {
    let root_dir = tempdir().unwrap();

    pkgq(root_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout("No packages currently installed.\n");
}

#[test]
fn test_list_manual() {
    let root_dir = tempdir().unwrap();
    let root = root_dir.path();
    write_registry(root, REGISTRY);

    pkgq(root)
        .arg("list-manual")
        .assert()
        .success()
        .stdout("foo-1.0_1\n");
}

#[test]
fn test_show() {
    let root_dir = tempdir().unwrap();
    let root = root_dir.path();
    write_registry(root, REGISTRY);

    pkgq(root)
        .arg("show")
        .arg("bar")
        .assert()
        .success()
        .stdout(predicate::str::contains("pkgver: bar-2.0_1"))
        .stdout(predicate::str::contains("state: unpacked"))
        .stdout(predicate::str::contains("automatic-install: yes"));

    pkgq(root)
        .arg("show")
        .arg("qux")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Package qux not installed."));
}

#[test]
fn test_search_case_insensitive() {
    let root_dir = tempdir().unwrap();
    let root = root_dir.path();
    write_repository(
        root,
        "main",
        r#"{"pkgver": "baz-3.1_1", "short_desc": "baz utility"}"#,
    );
    write_pool(root, &["main"]);

    pkgq(root)
        .arg("search")
        .arg("BAZ")
        .assert()
        .success()
        .stdout("[-] baz-3.1_1 baz utility\n");
}

#[test]
fn test_search_glob_and_installed_marker() {
    let root_dir = tempdir().unwrap();
    let root = root_dir.path();
    write_registry(
        root,
        r#"{"pkgver": "qux-1_1", "short_desc": "the qux", "state": "installed"}"#,
    );
    write_repository(
        root,
        "main",
        r#"{"pkgver": "qux-1_1", "short_desc": "the qux"},
           {"pkgver": "quux-1_1", "short_desc": "the quux"}"#,
    );
    write_pool(root, &["main"]);

    pkgq(root)
        .arg("search")
        .arg("qux*")
        .assert()
        .success()
        .stdout("[*] qux-1_1 the qux\n");
}

#[test]
fn test_search_truncates_to_columns() {
    let root_dir = tempdir().unwrap();
    let root = root_dir.path();
    write_repository(
        root,
        "main",
        r#"{"pkgver": "foo-1.0_1", "short_desc": "a description that is far too long to fit"}"#,
    );

    pkgq(root)
        .arg("--columns")
        .arg("30")
        .arg("--repository")
        .arg(root.join("main"))
        .arg("search")
        .arg("foo")
        .assert()
        .success()
        .stdout("[-] foo-1.0_1 a description...\n");
}

#[test]
fn test_search_continues_past_missing_repository() {
    let root_dir = tempdir().unwrap();
    let root = root_dir.path();
    write_repository(
        root,
        "main",
        r#"{"pkgver": "baz-3.1_1", "short_desc": "baz utility"}"#,
    );
    write_pool(root, &["missing", "main"]);

    pkgq(root)
        .arg("search")
        .arg("baz")
        .assert()
        .failure()
        .stdout("[-] baz-3.1_1 baz utility\n")
        .stderr(predicate::str::contains("Failed to read repository"))
        .stderr(predicate::str::contains("failed to read 1 of 2 repositories"));
}

#[test]
fn test_search_is_repeatable() {
    let root_dir = tempdir().unwrap();
    let root = root_dir.path();
    write_repository(
        root,
        "main",
        r#"{"pkgver": "foo-1.0_1", "short_desc": "Foo tool"},
           {"pkgver": "foobar-2.0_1", "short_desc": "Foo and bar"}"#,
    );
    write_pool(root, &["main"]);

    let first = pkgq(root).arg("search").arg("foo").arg("bar").output().unwrap();
    let second = pkgq(root).arg("search").arg("foo").arg("bar").output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(
        String::from_utf8(first.stdout).unwrap(),
        "[-] foo-1.0_1    Foo tool\n\
         [-] foobar-2.0_1 Foo and bar\n\
         [-] foobar-2.0_1 Foo and bar\n"
    );
}
