//! End-to-end integration test over the shared locale fixtures
//!
//! Exercises the complete flow: discovery -> grouping -> sync -> atomic write,
//! then verifies the tree converges and a follow-up check passes.

use keysync_core::{Error, Mode, SyncConfig, SyncEngine, SyncOptions};
use keysync_test_utils::LocaleTree;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;
use std::path::Path;

/// Copy `test-fixtures/locales` into a fresh temporary tree
fn fixture_tree() -> LocaleTree {
    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/locales");
    let tree = LocaleTree::new();
    copy_dir(&source, &tree.path("locales"));
    tree
}

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let dest = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &dest);
        } else {
            fs::copy(entry.path(), dest).unwrap();
        }
    }
}

fn engine(tree: &LocaleTree, mode: Mode) -> SyncEngine {
    SyncEngine::new(
        "en.json",
        SyncOptions {
            mode,
            ..SyncOptions::default()
        },
    )
    .with_base(tree.root())
}

#[test]
fn test_fixture_tree_converges() {
    let tree = fixture_tree();

    let report = engine(&tree, Mode::Write).run(&[tree.root()]).unwrap();
    assert!(report.is_clean());

    let names: Vec<&str> = report.outcomes.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["locales/admin/es.json", "locales/app/de.json", "locales/app/fr.json"]
    );

    tree.assert_json(
        "locales/app/fr.json",
        &json!({
            "title": "Boîte de réception",
            "actions": {"archive": "Archiver", "delete": "Delete", "reply": "Reply"},
            "empty": {},
            "plurals": ["message"],
            "count": 0
        }),
    );
    tree.assert_json(
        "locales/admin/es.json",
        &json!({"users": {"list": "Usuarios", "invite": "Invite user"}}),
    );

    // Second pass has nothing left to do
    let again = engine(&tree, Mode::Write).run(&[tree.root()]).unwrap();
    assert_eq!(again.written().count(), 0);

    let check = engine(&tree, Mode::Report).run(&[tree.root()]).unwrap();
    assert!(check.ensure_clean().is_ok());
}

#[test]
fn test_fixture_change_lists() {
    let tree = fixture_tree();
    let report = engine(&tree, Mode::Write).run(&[tree.root()]).unwrap();

    let fr = report
        .outcomes
        .iter()
        .find(|o| o.name == "locales/app/fr.json")
        .unwrap();
    assert_eq!(fr.result.pushed, vec!["delete", "reply"]);
    assert_eq!(fr.result.removed, vec!["forward", "banner", "footer"]);

    let de = report
        .outcomes
        .iter()
        .find(|o| o.name == "locales/app/de.json")
        .unwrap();
    assert!(de.result.is_aligned());

    let lines: Vec<String> = fr
        .summary(Mode::Write)
        .lines()
        .map(|line| line.to_string())
        .collect();
    assert_eq!(
        lines,
        vec![
            "Pushed to locales/app/fr.json: delete, reply",
            "Removed from locales/app/fr.json: forward, banner, footer",
        ]
    );
}

#[test]
fn test_report_mode_leaves_fixtures_untouched() {
    let tree = fixture_tree();
    let before = tree.read("locales/app/fr.json");

    let report = engine(&tree, Mode::Report).run(&[tree.root()]).unwrap();

    assert_eq!(tree.read("locales/app/fr.json"), before);
    assert_eq!(
        report.findings,
        vec![
            "locales/admin/es.json contains unaligned key structure",
            "locales/app/fr.json contains unaligned key structure",
        ]
    );
    assert!(matches!(
        report.ensure_clean(),
        Err(Error::ReportFailed { count: 2 })
    ));
}

#[test]
fn test_config_file_drives_engine() {
    let tree = fixture_tree();
    tree.write("keysync.toml", "primary = \"en.json\"\nindent = 2\n");

    let config = SyncConfig::discover(tree.root()).unwrap();
    let engine = SyncEngine::from_config(&config)
        .unwrap()
        .with_base(tree.root());
    engine.run(&[tree.path("locales/admin")]).unwrap();

    assert_eq!(
        tree.read("locales/admin/es.json"),
        "{\n  \"users\": {\n    \"list\": \"Usuarios\",\n    \"invite\": \"Invite user\"\n  }\n}"
    );
    // Only the requested subtree is touched
    assert!(tree.read("locales/app/fr.json").contains("legacy"));
}

#[test]
fn test_type_mismatch_aborts_write_mode() {
    let tree = fixture_tree();
    tree.write_json("locales/app/it.json", &json!({"title": 42}));

    let err = engine(&tree, Mode::Write)
        .run(&[tree.path("locales/app")])
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "locales/app/it.json contains type mismatch on key title. Source type String, target type Number"
    );
}
