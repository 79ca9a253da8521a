//! Loading the fixture documents through the configured data root.
mod common;

use common::{fixture_root, writable_fixture};
use std::fs;
use tracker_overlay::config::DataConfig;
use tracker_overlay::data::{Catalog, DataError, Quest, Rarity, RequirementPair};
use tracker_overlay::display::{format_hideout_summary, format_project_summary};

fn fixture_config(root: &std::path::Path) -> DataConfig {
    DataConfig {
        data_root: root.to_string_lossy().into_owned(),
        ..DataConfig::default()
    }
}

#[test]
fn loads_all_fixture_collections() {
    let catalog = Catalog::load(&fixture_config(&fixture_root())).unwrap();
    assert_eq!(catalog.items().len(), 3);
    assert_eq!(catalog.quests().len(), 2);
    assert_eq!(catalog.projects().len(), 1);
    assert_eq!(catalog.hideout_modules().len(), 2);

    let metal = catalog.item("metal_parts").unwrap();
    assert_eq!(metal.rarity, Some(Rarity::Common));
    assert_eq!(
        metal.updated_at_utc().unwrap().format("%Y-%m-%d").to_string(),
        "2025-10-31"
    );

    let shot = catalog.item("adrenaline_shot").unwrap();
    assert_eq!(shot.rarity, Some(Rarity::Uncommon));
    assert_eq!(shot.extra["craftBench"], "med_station");

    let skies = catalog.quest("clearer_skies").unwrap();
    assert_eq!(skies.xp, 0);
    assert_eq!(skies.extra["map"], "Dam Battlegrounds");

    let unlocked: Vec<&str> = catalog
        .quests_unlocked_by("picking_up_the_pieces")
        .iter()
        .filter_map(|q| q.id.as_deref())
        .collect();
    assert_eq!(unlocked, vec!["clearer_skies"]);
}

#[test]
fn dangling_references_are_not_validated() {
    let mut quest = Quest::new("orphan");
    quest.reward_item_ids = Some(vec![RequirementPair::new("ghost_item", 1)]);
    quest.previous_quest_ids = Some(vec!["never_existed".to_string()]);
    let catalog = Catalog::new(vec![], vec![quest], vec![], vec![]);

    let orphan = catalog.quest("orphan").unwrap();
    let reward = &orphan.reward_item_ids.as_ref().unwrap()[0];
    assert!(catalog.item(reward.item_id.as_deref().unwrap()).is_none());
    assert_eq!(catalog.quests_unlocked_by("never_existed").len(), 1);
}

#[test]
fn summaries_render_from_fixture() {
    let catalog = Catalog::load(&fixture_config(&fixture_root())).unwrap();
    let project = format_project_summary(catalog.project("expedition_project").unwrap(), "en");
    assert!(project.contains("Phase 1: Foundation\n  Items: 150xmetal_parts\n"));
    assert!(project.contains("Phase 2: Supplies\n  Value: 250000 Combat Items\n"));

    let stash = format_hideout_summary(catalog.hideout_module("stash").unwrap(), "en");
    assert_eq!(stash, "Stash (max level 0)\n");
}

#[test]
fn malformed_document_fails_load_with_path() {
    let tmp = writable_fixture();
    fs::write(
        tmp.path().join("quests.json"),
        r#"[{"id":"q","name":"not-a-map"}]"#,
    )
    .unwrap();

    match Catalog::load(&fixture_config(tmp.path())) {
        Err(err @ DataError::Parse { .. }) => {
            assert!(err.path().unwrap().ends_with("quests.json"));
            assert!(err.to_string().contains("quests.json"));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn missing_document_fails_load() {
    let tmp = writable_fixture();
    fs::remove_file(tmp.path().join("hideoutModules.json")).unwrap();
    let result = Catalog::load(&fixture_config(tmp.path()));
    assert!(matches!(result, Err(DataError::Io { .. })));
}

#[test]
fn custom_file_names_are_honored() {
    let tmp = writable_fixture();
    fs::rename(tmp.path().join("items.json"), tmp.path().join("items_v2.json")).unwrap();
    let config = DataConfig {
        items_file: "items_v2.json".to_string(),
        ..fixture_config(tmp.path())
    };
    let catalog = Catalog::load(&config).unwrap();
    assert!(catalog.item("wasp_driver").is_some());
}
