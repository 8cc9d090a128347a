use file_cleaner::{CleanError, Cleaner, CleanerConfig, CleanupResult, ScanSummary, report};
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};

fn populate(dir: &Path, files: &[(&str, usize)]) {
    for (name, size) in files {
        fs::write(dir.join(name), vec![b'x'; *size]).unwrap();
    }
}

fn setup() -> (TempDir, TempDir, CleanerConfig) {
    let work = tempdir().unwrap();
    let logs = tempdir().unwrap();
    let config = CleanerConfig::default().with_audit_log(logs.path().join("file_cleaner.log"));
    (work, logs, config)
}

fn audit_lines(config: &CleanerConfig) -> Vec<String> {
    fs::read_to_string(&config.audit_log)
        .map(|s| s.lines().map(str::to_owned).collect::<Vec<_>>())
        .unwrap_or_default()
}

#[test]
fn stats_then_cleanup_agree() {
    let (work, _logs, config) = setup();
    populate(
        work.path(),
        &[("a.tmp", 10240), ("b.log", 2048), ("c.txt", 500)],
    );
    let cleaner = Cleaner::new(&config);

    let summary = report(work.path(), cleaner.targets()).unwrap();
    assert_eq!(
        summary,
        ScanSummary {
            total_files: 3,
            target_files: 2,
            total_bytes: 12788,
        }
    );
    assert_eq!(summary.total_kb(), 12);

    let result = cleaner.clean(work.path(), |_| {}).unwrap();
    assert_eq!(result.deleted_files, summary.target_files);
    assert_eq!(result.freed_kb(), 12);
    assert!(work.path().join("c.txt").exists());

    let lines = audit_lines(&config);
    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert!(line.starts_with('['));
        assert!(line.contains("] Deleted: "));
    }
}

#[test]
fn target_count_matches_exact_extensions() {
    let (work, _logs, config) = setup();
    populate(
        work.path(),
        &[
            (".tmp", 1),
            ("archive.bak", 1),
            ("notes.txtbak", 1),
            ("UPPER.LOG", 1),
            ("data.cache", 1),
            ("readme", 1),
        ],
    );

    let summary = report(work.path(), &config.targets).unwrap();
    assert_eq!(summary.total_files, 6);
    assert_eq!(summary.target_files, 3);
}

#[test]
fn empty_directory_boundary() {
    let (work, _logs, config) = setup();
    let cleaner = Cleaner::new(&config);

    assert_eq!(
        report(work.path(), cleaner.targets()).unwrap(),
        ScanSummary::default()
    );
    assert_eq!(
        cleaner.clean(work.path(), |_| {}).unwrap(),
        CleanupResult::default()
    );
    assert!(audit_lines(&config).is_empty());
}

#[test]
fn running_twice_deletes_nothing_the_second_time() {
    let (work, _logs, config) = setup();
    populate(work.path(), &[("x.tmp", 3000), ("y.cache", 10)]);
    let cleaner = Cleaner::new(&config);

    let first = cleaner.clean(work.path(), |_| {}).unwrap();
    let second = cleaner.clean(work.path(), |_| {}).unwrap();

    assert_eq!(first.deleted_files, 2);
    assert_eq!(second, CleanupResult::default());
    assert_eq!(audit_lines(&config).len(), 2);
}

#[test]
fn audit_lines_accumulate_across_runs() {
    let (work, _logs, config) = setup();
    let cleaner = Cleaner::new(&config);

    populate(work.path(), &[("one.tmp", 1)]);
    cleaner.clean(work.path(), |_| {}).unwrap();
    populate(work.path(), &[("two.bak", 1), ("three.log", 1)]);
    let result = cleaner.clean(work.path(), |_| {}).unwrap();

    assert_eq!(result.deleted_files, 2);
    assert_eq!(audit_lines(&config).len(), 3);
}

#[test]
fn notification_carries_path_and_size() {
    let (work, _logs, config) = setup();
    populate(work.path(), &[("big.tmp", 4096)]);

    let mut seen = Vec::new();
    Cleaner::new(&config)
        .clean(work.path(), |entry| {
            seen.push((entry.path.clone(), entry.size_bytes))
        })
        .unwrap();

    assert_eq!(seen, vec![(work.path().join("big.tmp"), 4096)]);
}

#[test]
fn missing_directory_fails_both_passes() {
    let (work, _logs, config) = setup();
    let missing = work.path().join("does-not-exist");
    let cleaner = Cleaner::new(&config);

    assert!(matches!(
        report(&missing, cleaner.targets()),
        Err(CleanError::NotFoundOrInaccessible { .. })
    ));
    assert!(matches!(
        cleaner.clean(&missing, |_| {}),
        Err(CleanError::NotFoundOrInaccessible { .. })
    ));
    assert!(audit_lines(&config).is_empty());
}

#[test]
fn unwritable_audit_log_does_not_block_deletion() {
    let (work, logs, _) = setup();
    populate(work.path(), &[("a.tmp", 10), ("b.txt", 10)]);
    let config =
        CleanerConfig::default().with_audit_log(logs.path().join("nowhere").join("audit.log"));

    let result = Cleaner::new(&config).clean(work.path(), |_| {}).unwrap();

    assert_eq!(result.deleted_files, 1);
    assert!(!work.path().join("a.tmp").exists());
    assert!(work.path().join("b.txt").exists());
}

#[test]
fn alternate_target_set_is_honoured_by_both_passes() {
    let work = tempdir().unwrap();
    let logs = tempdir().unwrap();
    populate(work.path(), &[("a.swp", 1), ("b.tmp", 1)]);
    let config = CleanerConfig {
        targets: file_cleaner::TargetExtensions::new([".swp"]),
        audit_log: logs.path().join("audit.log"),
    };
    let cleaner = Cleaner::new(&config);

    let summary = report(work.path(), cleaner.targets()).unwrap();
    let result = cleaner.clean(work.path(), |_| {}).unwrap();

    assert_eq!(summary.target_files, 1);
    assert_eq!(result.deleted_files, 1);
    assert!(work.path().join("b.tmp").exists());
}
