//! Integration tests for the filesearcher CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

const MINUTE: u64 = 60;
const DAY: u64 = 24 * 60 * MINUTE;

/// Create a file (and parents) with its modification time `age` in the past
fn touch(path: &Path, age: Duration) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let file = File::create(path).unwrap();
    file.set_modified(SystemTime::now() - age).unwrap();
}

/// Command isolated from the user's config files
fn filesearcher(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("filesearcher").unwrap();
    cmd.env("HOME", home.path())
        .env_remove("RUST_LOG")
        .current_dir(home.path());
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

/// Test CLI binary responds to --help
#[test]
fn test_cli_help() {
    let home = TempDir::new().unwrap();
    filesearcher(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--subname"))
        .stdout(predicate::str::contains("--keyword"))
        .stdout(predicate::str::contains("--date"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let home = TempDir::new().unwrap();
    filesearcher(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("filesearcher"));
}

/// Test bare invocation prints the banner without scanning
#[test]
fn test_bare_invocation_shows_banner() {
    let home = TempDir::new().unwrap();
    touch(&home.path().join("should-not-appear.txt"), Duration::ZERO);

    filesearcher(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("File Searcher"))
        .stdout(predicate::str::contains("should-not-appear").not());
}

/// Extension filter with newest-first ordering and month bucket labels
#[test]
fn test_extension_filter_sorted_newest_first() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    touch(&root.path().join("a.txt"), Duration::from_secs(2 * MINUTE + 30));
    touch(&root.path().join("b.txt"), Duration::from_secs(40 * DAY));
    touch(&root.path().join("c.md"), Duration::from_secs(60 * MINUTE));

    let stdout = stdout_of(
        filesearcher(&home)
            .args(["-s", "txt", "--color", "never"])
            .arg(root.path()),
    );

    assert!(stdout.contains(&format!("Found 2 matching files in {}:", root.path().display())));
    assert!(stdout.contains("· a.txt - 2 minutes ago"));
    assert!(stdout.contains("· b.txt - 1 months ago"));
    assert!(!stdout.contains("c.md"));
    assert!(stdout.find("a.txt").unwrap() < stdout.find("b.txt").unwrap());
}

/// Empty directory prints exactly the no-matches line and succeeds
#[test]
fn test_empty_directory() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();

    filesearcher(&home)
        .arg(root.path())
        .assert()
        .success()
        .stdout("No matching files found\n");
}

/// Unreadable root fails with the root path in the message
#[test]
fn test_missing_root_fails() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("no-such-dir");

    filesearcher(&home)
        .arg("-i")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains(missing.display().to_string()));
}

/// Keyword highlights names but never removes results
#[test]
fn test_keyword_highlights_without_filtering() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    touch(&root.path().join("Alpha-notes.txt"), Duration::from_secs(10 * MINUTE));
    touch(&root.path().join("beta.txt"), Duration::from_secs(20 * MINUTE));

    let plain = stdout_of(filesearcher(&home).args(["--color", "never"]).arg(root.path()));
    let highlighted = stdout_of(
        filesearcher(&home)
            .args(["-k", "ALPHA", "--color", "never"])
            .arg(root.path()),
    );

    assert!(highlighted.contains("· [Alpha-notes.txt] - 10 minutes ago"));
    assert!(highlighted.contains("· beta.txt - 20 minutes ago"));
    assert_eq!(plain.lines().count(), highlighted.lines().count());

    let colored = stdout_of(
        filesearcher(&home)
            .args(["--keyword", "alpha", "--color", "always"])
            .arg(root.path()),
    );
    assert!(colored.contains("\u{1b}[34mAlpha-notes.txt"));
}

/// Recency window drops files older than the cutoff
#[test]
fn test_recency_window() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    touch(&root.path().join("fresh.log"), Duration::from_secs(2 * DAY));
    touch(&root.path().join("stale.log"), Duration::from_secs(9 * DAY));

    filesearcher(&home)
        .args(["-d", "7"])
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("fresh.log - 2 days ago"))
        .stdout(predicate::str::contains("stale.log").not());
}

/// Directories are traversed but never listed, whatever their name
#[test]
fn test_directories_never_listed() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    touch(&root.path().join("archive.txt/inner/deep.txt"), Duration::from_secs(DAY));

    let stdout = stdout_of(filesearcher(&home).args(["--subname", "txt"]).arg(root.path()));

    assert!(stdout.contains("Found 1 matching file in"));
    assert!(stdout.contains("· deep.txt - 1 days ago"));
    assert!(!stdout.contains("archive.txt -"));
    assert!(!stdout.contains("inner"));
}

/// Match set is the same for one worker and many
#[test]
fn test_worker_count_does_not_change_results() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    for i in 0..40 {
        touch(&root.path().join(format!("d{}/f{}.rs", i % 4, i)), Duration::from_secs(i * MINUTE));
    }

    let sorted_lines = |workers: &str| {
        let stdout = stdout_of(filesearcher(&home).args(["--workers", workers]).arg(root.path()));
        let mut lines: Vec<String> = stdout.lines().map(str::to_string).collect();
        lines.sort();
        lines
    };

    let single = sorted_lines("1");
    assert_eq!(single, sorted_lines("64"));
    assert!(single.iter().any(|line| line.starts_with("Found 40 matching files")));
}

/// --input takes precedence over the positional directory
#[test]
fn test_input_flag_wins_over_positional() {
    let home = TempDir::new().unwrap();
    let chosen = TempDir::new().unwrap();
    let ignored = TempDir::new().unwrap();
    touch(&chosen.path().join("chosen.txt"), Duration::ZERO);
    touch(&ignored.path().join("ignored.txt"), Duration::ZERO);

    filesearcher(&home)
        .arg("-i")
        .arg(chosen.path())
        .arg(ignored.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("chosen.txt - just now"))
        .stdout(predicate::str::contains("ignored.txt").not());
}

/// Without a directory argument the current directory is searched
#[test]
fn test_defaults_to_current_directory() {
    let home = TempDir::new().unwrap();
    touch(&home.path().join("here.md"), Duration::ZERO);
    touch(&home.path().join("here.txt"), Duration::ZERO);

    filesearcher(&home)
        .args(["-s", "md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("here.md"))
        .stdout(predicate::str::contains("here.txt").not());
}

/// --stats prints the statistics block
#[test]
fn test_stats_output() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    touch(&root.path().join("one.txt"), Duration::ZERO);
    touch(&root.path().join("sub/two.txt"), Duration::ZERO);

    filesearcher(&home)
        .args(["--stats", "--workers", "2"])
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Search Statistics"))
        .stdout(predicate::str::contains("Files discovered"))
        .stdout(predicate::str::contains("Directories traversed"));
}

/// Config file and environment variables are layered under CLI flags
#[test]
fn test_config_and_environment_layering() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    touch(&root.path().join("top.txt"), Duration::ZERO);
    touch(&root.path().join("nested/deep.txt"), Duration::ZERO);

    let config_path = home.path().join("search.toml");
    fs::write(&config_path, "[search]\nworkers = 1\nmax_depth = 1\n").unwrap();

    // Config limits the walk to direct children
    filesearcher(&home)
        .arg("--config")
        .arg(&config_path)
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("top.txt"))
        .stdout(predicate::str::contains("deep.txt").not());

    // Environment overrides the file
    filesearcher(&home)
        .arg("--config")
        .arg(&config_path)
        .env("FILESEARCHER_SEARCH__MAX_DEPTH", "5")
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("deep.txt"));

    // Flags override both
    filesearcher(&home)
        .arg("--config")
        .arg(&config_path)
        .env("FILESEARCHER_SEARCH__MAX_DEPTH", "5")
        .args(["--max-depth", "1"])
        .arg(root.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("deep.txt").not());
}

/// Project config in the working directory is picked up automatically
#[test]
fn test_project_config_file() {
    let home = TempDir::new().unwrap();
    touch(&home.path().join("visible.txt"), Duration::ZERO);
    touch(&home.path().join(".hidden.txt"), Duration::ZERO);
    fs::write(home.path().join("filesearcher.yaml"), "search:\n  hidden: false\n").unwrap();

    filesearcher(&home)
        .args(["-s", "txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("visible.txt"))
        .stdout(predicate::str::contains(".hidden.txt").not());
}

/// Missing explicit config file is an error
#[test]
fn test_missing_config_file_fails() {
    let home = TempDir::new().unwrap();

    filesearcher(&home)
        .args(["--config", "nope.toml", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.toml"));
}
