//! Designer commands run against the shared fixture pack.

use std::path::PathBuf;

use redstone_blocks::catalog::CatalogSnapshot;
use redstone_blocks::geometry::Vec3;
use redstone_designer::commands::{
    run_check, run_export, run_export_to_file, run_inspect, run_list, run_palette,
    InspectOptions,
};
use redstone_designer::DesignerConfig;

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../redstone-assets/tests/fixtures/pack")
}

fn fixture_config() -> DesignerConfig {
    DesignerConfig::default().with_overrides(Some(fixture_root()), Some(0))
}

fn output(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
    let mut buf = Vec::new();
    f(&mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn check_passes_on_fixture_pack() {
    let mut buf = Vec::new();
    let report = run_check(&fixture_config(), &mut buf).unwrap();
    assert!(report.is_ok(), "{:?}", report.failures);
    assert_eq!(report.blocks_checked, 5);
    assert!(report.missing_textures.is_empty(), "{:?}", report.missing_textures);
    let text = String::from_utf8(buf).unwrap();
    assert!(text.contains("ok    repeater"));
}

#[test]
fn check_reports_unresolvable_blocks_and_missing_textures() {
    let dir = tempfile::tempdir().unwrap();
    let assets = dir.path().join("assets/minecraft");
    std::fs::create_dir_all(assets.join("blockstates")).unwrap();
    std::fs::create_dir_all(assets.join("models/block")).unwrap();
    std::fs::write(
        assets.join("blockstates/sandstone.json"),
        r#"{"variants": {"": {"model": "minecraft:block/sandstone"}}}"#,
    )
    .unwrap();
    std::fs::write(
        assets.join("models/block/sandstone.json"),
        r##"{"textures": {"all": "block/sandstone"},
            "elements": [{"from": [0,0,0], "to": [16,16,16],
                          "faces": {"up": {"texture": "#all"}}}]}"##,
    )
    .unwrap();

    let config = DesignerConfig::default().with_overrides(Some(dir.path().to_path_buf()), None);
    let report = run_check(&config, &mut Vec::new()).unwrap();
    assert!(!report.is_ok());
    assert_eq!(report.failures.len(), 4, "only sandstone has a blockstate file");
    assert_eq!(report.missing_textures, vec!["minecraft:block/sandstone".to_owned()]);
}

#[test]
fn palette_lists_entries_with_default_marked() {
    let text = output(|out| run_palette(&fixture_config(), out));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "* 1. sandstone");
    assert!(lines[4].starts_with("  5. repeater[delay=1,facing=south"));
}

#[test]
fn list_prints_sorted_block_types() {
    let text = output(|out| run_list(&fixture_config(), out));
    let names: Vec<&str> = text.lines().collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert!(names.contains(&"redstone_wire"));
}

#[test]
fn inspect_applies_state_and_look_direction() {
    let options = InspectOptions {
        state: Some("delay=2,powered=true".to_owned()),
        look: Some(Vec3::new(0.1, -0.2, -1.0)),
    };
    let text = output(|out| run_inspect(&fixture_config(), "repeater", &options, out));
    assert!(
        text.contains("state:    repeater[delay=2,facing=north,locked=false,powered=true]"),
        "{text}"
    );
    assert!(text.contains("model:    minecraft:block/repeater_2tick_on (x=0, y=180)"));
    assert!(text.contains("texture:  minecraft:block/repeater_on"));
}

#[test]
fn inspect_rejects_unknown_property() {
    let options = InspectOptions {
        state: Some("color=blue".to_owned()),
        look: None,
    };
    let err = run_inspect(&fixture_config(), "repeater", &options, &mut Vec::new());
    assert!(err.is_err());
}

#[test]
fn export_writes_verifiable_snapshot() {
    let text = output(|out| run_export(&fixture_config(), out));
    let snapshot: CatalogSnapshot = serde_json::from_str(&text).unwrap();
    assert_eq!(snapshot.entries.len(), 5);
    assert!(snapshot.verify());
}

#[test]
fn export_to_file_matches_stdout_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    run_export_to_file(&fixture_config(), &path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, output(|out| run_export(&fixture_config(), out)));
}

#[test]
fn failed_export_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let config = DesignerConfig::default().with_overrides(Some(dir.path().join("missing")), None);
    assert!(run_export_to_file(&config, &path).is_err());
    assert!(!path.exists());
}
