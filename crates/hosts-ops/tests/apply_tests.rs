//! End-to-end tests of the group workflow against a hosts file on disk.

use std::fs;
use std::path::PathBuf;

use hosts_core::{REGION_FOOTER, REGION_HEADER};
use hosts_ops::{
    Error, GroupStore, ScriptedEditor, UnifiedDiffer, activate_groups, apply_groups,
    deactivate_groups, new_group, new_group_from,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const SYSTEM_HOSTS: &str = "127.0.0.1\tlocalhost\n::1\tlocalhost ip6-localhost\n";

fn hosts_fixture(content: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("hosts");
    fs::write(&path, content).unwrap();
    (temp, path)
}

fn store_with_active(temp: &TempDir) -> GroupStore {
    let mut store = GroupStore::new(temp.path().join("hosts-manager.json"));
    new_group(
        &mut store,
        "staging",
        &ScriptedEditor::new(["# staging\n192.0.2.10 api.example\n"]),
    )
    .unwrap();
    activate_groups(&mut store, &["staging"]).unwrap();
    store
}

#[test]
fn test_apply_writes_region_and_reports_diff() {
    let (temp, path) = hosts_fixture(SYSTEM_HOSTS);
    let store = store_with_active(&temp);

    let report = apply_groups(&store, &path, false, &UnifiedDiffer::default()).unwrap();

    assert!(report.written);
    assert_eq!(report.groups, 1);
    assert!(report.diff.contains("+192.0.2.10 api.example"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{SYSTEM_HOSTS}{REGION_HEADER}\n# staging\n192.0.2.10 api.example\n\n{REGION_FOOTER}")
    );
}

#[test]
fn test_dry_run_leaves_file_untouched() {
    let (temp, path) = hosts_fixture(SYSTEM_HOSTS);
    let store = store_with_active(&temp);

    let report = apply_groups(&store, &path, true, &UnifiedDiffer::default()).unwrap();

    assert!(report.changed);
    assert!(!report.written);
    assert!(!report.diff.is_empty());
    assert_eq!(fs::read_to_string(&path).unwrap(), SYSTEM_HOSTS);
}

#[test]
fn test_second_apply_is_a_no_op() {
    let (temp, path) = hosts_fixture(SYSTEM_HOSTS);
    let store = store_with_active(&temp);

    apply_groups(&store, &path, false, &UnifiedDiffer::default()).unwrap();
    let first = fs::read_to_string(&path).unwrap();
    let report = apply_groups(&store, &path, false, &UnifiedDiffer::default()).unwrap();

    assert!(!report.changed);
    assert!(!report.written);
    assert_eq!(report.diff, "");
    assert_eq!(fs::read_to_string(&path).unwrap(), first);
}

#[test]
fn test_deactivate_then_apply_empties_region() {
    let (temp, path) = hosts_fixture(SYSTEM_HOSTS);
    let mut store = store_with_active(&temp);
    apply_groups(&store, &path, false, &UnifiedDiffer::default()).unwrap();

    deactivate_groups(&mut store, &["staging"]).unwrap();
    apply_groups(&store, &path, false, &UnifiedDiffer::default()).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("{SYSTEM_HOSTS}{REGION_HEADER}{REGION_FOOTER}")
    );
}

#[test]
fn test_malformed_hosts_file_is_not_modified() {
    let original = format!("{SYSTEM_HOSTS}{REGION_HEADER}192.0.2.99 stale.example\n");
    let (temp, path) = hosts_fixture(&original);
    let store = store_with_active(&temp);

    let err = apply_groups(&store, &path, false, &UnifiedDiffer::default()).unwrap_err();

    assert!(matches!(err, Error::Core(hosts_core::Error::MalformedRegion(_))));
    assert_eq!(fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_rejected_draft_can_be_reopened() {
    let temp = TempDir::new().unwrap();
    let mut store = GroupStore::new(temp.path().join("hosts-manager.json"));

    let first = new_group(&mut store, "dev", &ScriptedEditor::new(["dev.example\n"])).unwrap_err();
    let draft = match first {
        Error::InvalidGroup { draft, .. } => draft,
        other => panic!("expected InvalidGroup, got {other}"),
    };

    let editor = ScriptedEditor::new(["192.0.2.1 dev.example\n"]);
    new_group_from(&mut store, "dev", &editor, &draft).unwrap();

    assert_eq!(editor.seen(), vec!["dev.example\n"]);
    assert_eq!(store.get("dev").unwrap().body, "192.0.2.1 dev.example\n");
}

#[test]
fn test_store_round_trips_through_disk() {
    let temp = TempDir::new().unwrap();
    let mut store = store_with_active(&temp);
    store.save().unwrap();

    let reloaded = GroupStore::load(store.path()).unwrap();
    let active: Vec<&str> = reloaded.active().map(|g| g.name.as_str()).collect();
    assert_eq!(active, vec!["staging"]);
}
