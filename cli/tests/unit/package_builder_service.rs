//! Unit tests for the package builder service.
//!
//! The resolver is faked; staging, copying and archiving use the real
//! filesystem inside temp directories.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::fs::File;
use std::path::Path;

use noop_cli::application::services::package_builder::build_package;
use noop_cli::domain::{PackageSpec, PackagingError};
use noop_cli::domain::config::PackageConfig;
use noop_cli::infra::archive::ZipArchiveWriter;
use tempfile::TempDir;

use crate::mocks::{FakeResolver, RecordingFs, RecordingReporter};

fn project() -> (TempDir, PackageSpec) {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("requirements.txt"), "requests==2.32.3\n").unwrap();
    std::fs::write(
        dir.path().join("lambda_function.py"),
        "def lambda_handler(event, context):\n    return {}\n",
    )
    .unwrap();
    let spec = PackageSpec::from_config(dir.path(), &PackageConfig::default());
    (dir, spec)
}

fn entry_names(archive: &Path) -> Vec<String> {
    let zip = zip::ZipArchive::new(File::open(archive).unwrap()).unwrap();
    let mut names: Vec<String> = zip.file_names().map(str::to_string).collect();
    names.sort();
    names
}

#[tokio::test]
async fn successful_build_archives_handler_and_dependencies() {
    let (dir, spec) = project();
    let fs = RecordingFs::default();
    let resolver = FakeResolver::installing(vec![
        ("requests/__init__.py", "__version__ = '2.32.3'\n"),
        ("urllib3/util/retry.py", "class Retry: pass\n"),
    ]);
    let reporter = RecordingReporter::default();

    let report = build_package(&fs, &resolver, &ZipArchiveWriter, &reporter, &spec)
        .await
        .expect("build");

    assert_eq!(report.archive, dir.path().join("lambda.zip"));
    assert_eq!(report.summary.files, 3);
    assert_eq!(
        entry_names(&report.archive),
        vec![
            "lambda_function.py",
            "requests/__init__.py",
            "urllib3/util/retry.py"
        ]
    );
    assert_eq!(resolver.calls.get(), 1);
    assert!(
        reporter
            .messages
            .borrow()
            .iter()
            .any(|m| m.starts_with("step: resolving dependencies"))
    );
}

#[tokio::test]
async fn staging_dir_is_gone_after_success() {
    let (_dir, spec) = project();
    let fs = RecordingFs::default();
    build_package(
        &fs,
        &FakeResolver::installing(vec![("six.py", "")]),
        &ZipArchiveWriter,
        &RecordingReporter::default(),
        &spec,
    )
    .await
    .expect("build");

    let staged = fs.staged.borrow().clone().expect("staging recorded");
    assert!(!staged.exists(), "staging dir must be removed");
}

#[tokio::test]
async fn failed_resolution_leaves_no_archive_and_no_staging() {
    let (dir, spec) = project();
    let fs = RecordingFs::default();
    let err = build_package(
        &fs,
        &FakeResolver::failing("No matching distribution found for requestz"),
        &ZipArchiveWriter,
        &RecordingReporter::default(),
        &spec,
    )
    .await
    .expect_err("resolution fails");

    assert!(matches!(err, PackagingError::Resolution(ref m) if m.contains("requestz")));
    assert!(!dir.path().join("lambda.zip").exists());
    let staged = fs.staged.borrow().clone().expect("staging recorded");
    assert!(!staged.exists(), "staging dir must be removed on failure");
}

#[tokio::test]
async fn failed_resolution_keeps_previous_archive() {
    let (dir, spec) = project();
    std::fs::write(dir.path().join("lambda.zip"), b"previous build").unwrap();

    build_package(
        &RecordingFs::default(),
        &FakeResolver::failing("network unreachable"),
        &ZipArchiveWriter,
        &RecordingReporter::default(),
        &spec,
    )
    .await
    .expect_err("resolution fails");

    assert_eq!(
        std::fs::read(dir.path().join("lambda.zip")).unwrap(),
        b"previous build"
    );
}

#[tokio::test]
async fn missing_manifest_fails_before_staging() {
    let (dir, spec) = project();
    std::fs::remove_file(dir.path().join("requirements.txt")).unwrap();
    let fs = RecordingFs::default();
    let resolver = FakeResolver::installing(Vec::new());

    let err = build_package(
        &fs,
        &resolver,
        &ZipArchiveWriter,
        &RecordingReporter::default(),
        &spec,
    )
    .await
    .expect_err("missing manifest");

    assert!(matches!(err, PackagingError::MissingInput(ref p) if p.ends_with("requirements.txt")));
    assert_eq!(resolver.calls.get(), 0);
    assert!(fs.staged.borrow().is_none());
}

#[tokio::test]
async fn unwritable_destination_is_archive_error() {
    let (dir, mut spec) = project();
    spec.output = dir.path().join("missing-dir").join("lambda.zip");
    let fs = RecordingFs::default();

    let err = build_package(
        &fs,
        &FakeResolver::installing(Vec::new()),
        &ZipArchiveWriter,
        &RecordingReporter::default(),
        &spec,
    )
    .await
    .expect_err("archive fails");

    assert!(matches!(err, PackagingError::Archive { .. }));
    assert!(!fs.staged.borrow().clone().unwrap().exists());
}

#[tokio::test]
async fn rebuilding_over_existing_archive_warns_and_replaces_it() {
    let (_dir, spec) = project();
    std::fs::write(&spec.output, b"stale").unwrap();
    let reporter = RecordingReporter::default();

    let report = build_package(
        &RecordingFs::default(),
        &FakeResolver::installing(vec![]),
        &ZipArchiveWriter,
        &reporter,
        &spec,
    )
    .await
    .expect("build");

    assert_eq!(entry_names(&report.archive), vec!["lambda_function.py"]);
    let messages = reporter.messages.borrow();
    assert!(
        messages
            .iter()
            .any(|m| m.starts_with("warn: replacing existing") && m.ends_with("lambda.zip")),
        "got: {messages:?}"
    );
}

#[tokio::test]
async fn fresh_build_does_not_warn() {
    let (_dir, spec) = project();
    let reporter = RecordingReporter::default();
    build_package(
        &RecordingFs::default(),
        &FakeResolver::installing(vec![]),
        &ZipArchiveWriter,
        &reporter,
        &spec,
    )
    .await
    .expect("build");
    assert!(!reporter.messages.borrow().iter().any(|m| m.starts_with("warn:")));
}
