//! End-to-end tests: policy file -> rendered repo file on disk.
//!
//! Policies and expected output live in `test-fixtures/` at the workspace root.

use pretty_assertions::assert_eq;
use repofile_core::{CancelToken, RepoFileRenderer, RepositoryPolicy, serialize};
use repofile_fs::checksum;
use repofile_test_utils::{FaultyFs, ScratchDir, Stage};
use rstest::rstest;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Barrier};
use std::thread;

fn fixture(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures")
        .join(relative)
}

fn expected_cloud_repo() -> String {
    fs::read_to_string(fixture("expected/cloud.repo")).unwrap()
}

#[rstest]
#[case::toml("policies/cloud.toml")]
#[case::json("policies/cloud.json")]
#[case::yaml("policies/cloud.yaml")]
fn policy_renders_expected_file(#[case] policy: &str) {
    let policy = RepositoryPolicy::load(&fixture(policy)).unwrap();
    let scratch = ScratchDir::new();
    let dest = scratch.child("google_osconfig.repo");

    let report = RepoFileRenderer::new()
        .render(&policy.repositories, &dest, &CancelToken::new())
        .unwrap();

    let written = fs::read_to_string(&dest).unwrap();
    assert_eq!(written, expected_cloud_repo());
    assert_eq!(report.checksum, checksum::compute_file_checksum(&dest).unwrap());
    assert_eq!(scratch.entries(), vec!["google_osconfig.repo".to_string()]);
}

#[test]
fn empty_policy_renders_main_only() {
    let policy = RepositoryPolicy::load(&fixture("policies/empty.toml")).unwrap();
    assert!(policy.repositories.is_empty());

    assert_eq!(
        serialize(&policy.repositories),
        "# Repo file managed by Google OSConfig agent\n[main]\ngpgcheck=1\n"
    );
}

#[test]
fn reapplying_shrunk_policy_replaces_whole_file() {
    let scratch = ScratchDir::new();
    let dest = scratch.child("google_osconfig.repo");
    let renderer = RepoFileRenderer::new();
    let mut policy = RepositoryPolicy::load(&fixture("policies/cloud.toml")).unwrap();

    renderer
        .render(&policy.repositories, &dest, &CancelToken::new())
        .unwrap();
    policy.repositories.truncate(1);
    renderer
        .render(&policy.repositories, &dest, &CancelToken::new())
        .unwrap();

    let written = fs::read_to_string(&dest).unwrap();
    assert_eq!(written, serialize(&policy.repositories));
    assert!(!written.contains("[epel]"));
}

#[test]
fn failed_apply_keeps_previous_policy_output() {
    let scratch = ScratchDir::new();
    let dest = scratch.child("google_osconfig.repo");
    let policy = RepositoryPolicy::load(&fixture("policies/cloud.toml")).unwrap();

    RepoFileRenderer::new()
        .render(&policy.repositories, &dest, &CancelToken::new())
        .unwrap();

    let faulty = FaultyFs::failing_at(Stage::Rename);
    let result = RepoFileRenderer::with_fs(&faulty).render(&[], &dest, &CancelToken::new());

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&dest).unwrap(), expected_cloud_repo());
    assert!(scratch.temp_files().is_empty());
}

#[test]
fn concurrent_renders_leave_one_complete_file() {
    let scratch = ScratchDir::new();
    let dest = Arc::new(scratch.child("google_osconfig.repo"));
    let policy = Arc::new(RepositoryPolicy::load(&fixture("policies/cloud.toml")).unwrap());
    let threads = 6;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let dest = Arc::clone(&dest);
            let policy = Arc::clone(&policy);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                // Even threads write the full policy, odd threads a single repo.
                let repos = if i % 2 == 0 {
                    &policy.repositories[..]
                } else {
                    &policy.repositories[..1]
                };
                barrier.wait();
                RepoFileRenderer::new()
                    .render(repos, &dest, &CancelToken::new())
                    .unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let written = fs::read_to_string(dest.as_ref()).unwrap();
    let full = serialize(&policy.repositories);
    let single = serialize(&policy.repositories[..1]);
    assert!(written == full || written == single, "corrupted: {written}");
    assert!(scratch.temp_files().is_empty());
}
