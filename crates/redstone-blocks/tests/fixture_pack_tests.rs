//! Block state, variant, and catalog behaviour against the shared fixture pack.

use std::path::PathBuf;

use redstone_assets::prelude::*;
use redstone_blocks::prelude::*;

fn test_asset_pack() -> AssetPack {
    AssetPack::at_path(
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../redstone-assets/tests/fixtures/pack"),
    )
}

fn blockstates(block_type: &str) -> BlockStates {
    test_asset_pack().load_blockstates(block_type).unwrap()
}

// -- initial states ---------------------------------------------------------

#[test]
fn initial_state_for_repeater() {
    let state = BlockState::initial_state_for(&test_asset_pack(), "repeater").unwrap();
    let expected =
        BlockState::new("repeater", "delay=1,facing=south,locked=false,powered=false").unwrap();
    assert_eq!(state, expected, "initial state for repeater");
}

#[test]
fn initial_state_for_wire_has_no_connections() {
    let state = BlockState::initial_state_for(&test_asset_pack(), "redstone_wire").unwrap();
    assert_eq!(
        state.to_string(),
        "redstone_wire[east=none,north=none,south=none,west=none]"
    );
}

#[test]
fn initial_state_for_plain_block_is_empty() {
    let state = BlockState::initial_state_for(&test_asset_pack(), "sandstone").unwrap();
    assert!(state.values().is_empty());
}

// -- updates ----------------------------------------------------------------

#[test]
fn sets_allowed_facing_value() {
    let states = blockstates("repeater");
    let mut state = BlockState::initial_state_from("repeater", &states);
    state.set_facing(&states, BlockFace::West).unwrap();
    assert_eq!(
        state.get("facing"),
        Some(&StateValue::String("west".to_owned())),
        "facing should be set to 'west'"
    );
}

#[test]
fn does_not_set_disallowed_facing_value() {
    let states = blockstates("repeater");
    let mut state = BlockState::initial_state_from("repeater", &states);
    let initial_face = state.get("facing").cloned();
    assert!(state.set_facing(&states, BlockFace::Up).is_err());
    assert_eq!(state.get("facing").cloned(), initial_face, "facing hasn't changed");
}

#[test]
fn does_not_set_unknown_state_property() {
    let states = blockstates("repeater");
    let mut state = BlockState::initial_state_from("repeater", &states);
    assert!(state.update(&states, "foo", StateValue::Bool(true)).is_err());
    assert_eq!(state.get("foo"), None);
}

// -- variants ---------------------------------------------------------------

#[test]
fn selects_the_correct_variant() {
    let state =
        BlockState::new("repeater", "delay=2,facing=north,locked=false,powered=true").unwrap();
    let variants = state.active_variants(&blockstates("repeater")).unwrap();
    assert_eq!(
        variants,
        vec![Variant::Single(ModelProperties {
            model: "minecraft:block/repeater_2tick_on".to_string(),
            x: 0,
            y: 180,
            uv_lock: false,
            weight: 1,
        })]
    );
}

#[test]
fn unconnected_wire_is_a_single_dot() {
    let state = BlockState::initial_state_for(&test_asset_pack(), "redstone_wire").unwrap();
    let variants = state.active_variants(&blockstates("redstone_wire")).unwrap();
    let models: Vec<&str> = variants.iter().map(|v| v.models()[0].model.as_str()).collect();
    assert_eq!(models, vec!["minecraft:block/redstone_dust_dot"]);
}

#[test]
fn wire_climbing_north_stacks_parts() {
    let state =
        BlockState::new("redstone_wire", "east=none,north=up,south=none,west=none").unwrap();
    let variants = state.active_variants(&blockstates("redstone_wire")).unwrap();
    let models: Vec<&str> = variants.iter().map(|v| v.models()[0].model.as_str()).collect();
    assert_eq!(
        models,
        vec![
            "minecraft:block/redstone_dust_side0",
            "minecraft:block/redstone_dust_side_alt0",
            "minecraft:block/redstone_dust_up",
        ]
    );
}

#[test]
fn weighted_stone_is_deterministic_per_seed() {
    let pack = test_asset_pack();
    let state = BlockState::new("stone", "").unwrap();
    let a = describe(&pack, &state, 42).unwrap();
    let b = describe(&pack, &state, 42).unwrap();
    assert_eq!(a.models, b.models);
    assert_eq!(a.bounding_box, Aabb::full_block());
}

// -- descriptions -----------------------------------------------------------

#[test]
fn bounding_box_for_repeater() {
    let pack = test_asset_pack();
    let state = BlockState::initial_state_for(&pack, "repeater").unwrap();
    let entry = describe(&pack, &state, 0).unwrap();
    assert_eq!(
        entry.bounding_box,
        Aabb::from_corners(Vec3::ZERO, Vec3::new(16.0, 2.0, 16.0)),
        "bounding box for repeater matches bounds of its first element"
    );
    assert!(entry.requires_flat_surface);
    assert!(!entry.is_flat_surface);
    assert!(entry.textures.contains("minecraft:block/smooth_stone"));
}

#[test]
fn torch_box_follows_its_model() {
    let pack = test_asset_pack();
    let state = BlockState::initial_state_for(&pack, "redstone_torch").unwrap();
    assert_eq!(state.get("lit"), Some(&StateValue::Bool(true)));
    let entry = describe(&pack, &state, 0).unwrap();
    assert_eq!(
        entry.bounding_box,
        Aabb::from_corners(Vec3::new(7.0, 0.0, 7.0), Vec3::new(9.0, 10.0, 9.0))
    );
    assert_eq!(
        entry.textures.iter().collect::<Vec<_>>(),
        vec!["minecraft:block/redstone_torch"]
    );
}

#[test]
fn missing_model_is_reported() {
    let pack = test_asset_pack();
    let err = describe(&pack, &BlockState::new("comparator", "").unwrap(), 0).unwrap_err();
    assert!(matches!(err, BlockError::Asset(AssetError::NotFound { .. })));
}

// -- palette and catalog ----------------------------------------------------

#[test]
fn palette_loads_in_order() {
    let palette = Palette::load(&test_asset_pack()).unwrap();
    let names: Vec<&str> = palette
        .entries()
        .iter()
        .map(|e| e.block_type.as_str())
        .collect();
    assert_eq!(names, BLOCK_PALETTE.to_vec());
    assert_eq!(palette.default_selection().unwrap().block_type, "sandstone");
    assert!(palette.get("repeater").is_some());
    assert!(palette.get("stone").is_none());
}

#[test]
fn catalog_snapshot_hash_is_stable_and_verifiable() {
    let pack = test_asset_pack();
    let palette = Palette::load(&pack).unwrap();
    let first = BlockCatalog::build(&pack, &palette, 0).unwrap().snapshot();
    let second = BlockCatalog::build(&pack, &palette, 0).unwrap().snapshot();

    assert_eq!(first.hash.len(), 64);
    assert_eq!(first.hash, second.hash);
    assert!(first.verify());

    let json = serde_json::to_string(&first).unwrap();
    let restored: CatalogSnapshot = serde_json::from_str(&json).unwrap();
    assert!(restored.verify());

    let mut tampered = restored;
    tampered.entries[0].textures.insert("block/dirt".into());
    assert!(!tampered.verify());
}

#[test]
fn catalog_hash_covers_the_seed() {
    let pack = test_asset_pack();
    let palette = Palette::load(&pack).unwrap();
    let zero = BlockCatalog::build(&pack, &palette, 0).unwrap().snapshot();
    let one = BlockCatalog::build(&pack, &palette, 1).unwrap().snapshot();
    assert_eq!(zero.entries, one.entries, "palette has no weighted models");
    assert_ne!(zero.hash, one.hash);

    let mut reseeded = zero;
    reseeded.seed = 1;
    assert!(!reseeded.verify());
}

#[test]
fn catalog_collects_palette_textures() {
    let pack = test_asset_pack();
    let palette = Palette::load(&pack).unwrap();
    let catalog = BlockCatalog::build(&pack, &palette, 0).unwrap();
    let textures = catalog.textures();
    assert!(textures.contains("minecraft:block/sandstone_top"));
    assert!(textures.contains("minecraft:block/iron_block"));
    assert!(textures.contains("minecraft:block/redstone_dust_dot"));
    for texture in textures {
        let location: ResourceLocation = texture.parse().unwrap();
        assert_eq!(location.to_string(), texture, "texture locations are canonical");
        assert!(pack.texture_path(&location).is_file(), "{texture}");
    }
}
