//! Decoding contract for the four game data record kinds.
use serde_json::{json, Value};
use tracker_overlay::data::{
    parse_collection, DataError, HideoutModule, Item, LocalizedText, Project, Quest, Rarity,
    RequirementPair,
};

#[test]
fn fully_populated_item_round_trips() {
    let source = json!({
        "id": "metal_parts",
        "name": { "en": "Metal Parts", "de": "Metallteile" },
        "description": { "en": "Basic salvage." },
        "type": "Basic Material",
        "rarity": "Common",
        "value": 75,
        "recyclesInto": { "scrap": 1 },
        "salvagesInto": { "scrap": 2 },
        "weightKg": 0.15,
        "stackSize": 50,
        "foundIn": "Industrial",
        "imageFilename": "metal_parts.png",
        "effects": { "Durability": { "value": 10 } },
        "updatedAt": "2025-10-31T00:00:00Z"
    });

    let item: Item = serde_json::from_value(source.clone()).unwrap();
    assert_eq!(item.id.as_deref(), Some("metal_parts"));
    assert_eq!(item.name.as_ref().unwrap().get("de"), Some("Metallteile"));
    assert_eq!(item.item_type.as_deref(), Some("Basic Material"));
    assert_eq!(item.rarity, Some(Rarity::Common));
    assert_eq!(item.value, Some(75));
    assert_eq!(item.salvages_into.as_ref().unwrap()["scrap"], 2);
    assert_eq!(item.weight_kg, Some(0.15));
    assert_eq!(item.stack_size, Some(50));
    assert_eq!(item.found_in.as_deref(), Some("Industrial"));
    assert_eq!(item.image_filename.as_deref(), Some("metal_parts.png"));
    assert_eq!(item.effects.as_ref().unwrap()["Durability"]["value"], 10);
    assert!(item.extra.is_empty());

    assert_eq!(serde_json::to_value(&item).unwrap(), source);
}

#[test]
fn id_only_item_has_no_other_values() {
    let item: Item = serde_json::from_str(r#"{"id":"wasp_driver"}"#).unwrap();
    assert_eq!(item, Item::new("wasp_driver"));
    assert!(item.name.is_none());
    assert!(item.rarity.is_none());
    assert!(item.value.is_none());
    assert!(item.recycles_into.is_none());
    assert!(item.weight_kg.is_none());
    assert!(item.image_filename.is_none());
    assert!(item.updated_at.is_none());
    assert_eq!(serde_json::to_string(&item).unwrap(), r#"{"id":"wasp_driver"}"#);
}

#[test]
fn records_without_id_still_decode() {
    let doc = r#"[{"id":"a"},{"name":{"en":"No id"}}]"#;
    let items = parse_collection::<Item>(doc).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id.as_deref(), Some("a"));
    assert!(items[1].id.is_none());
    assert_eq!(items[1].name.as_ref().unwrap().get("en"), Some("No id"));
    assert_eq!(serde_json::to_string(&items[1]).unwrap(), r#"{"name":{"en":"No id"}}"#);

    let quest: Quest = serde_json::from_str(r#"{"xp":5}"#).unwrap();
    assert!(quest.id.is_none());
    assert_eq!(quest.xp, 5);

    let project: Project = serde_json::from_str(r#"{"phases":[]}"#).unwrap();
    assert!(project.id.is_none());
    let module: HideoutModule = serde_json::from_str(r#"{"maxLevel":2}"#).unwrap();
    assert!(module.id.is_none());
    assert_eq!(module.max_level, 2);
}

#[test]
fn explicit_nulls_decode_as_absent() {
    let item: Item =
        serde_json::from_str(r#"{"id":"x","name":null,"value":null,"effects":null}"#).unwrap();
    assert!(item.name.is_none());
    assert!(item.value.is_none());
    assert!(item.effects.is_none());
}

#[test]
fn quest_keeps_unknown_fields() {
    let quest: Quest = serde_json::from_str(
        r#"{"id":"q","xp":250,"map":"Dam Battlegrounds","hints":[1,{"a":true}],"trader":"Shani"}"#,
    )
    .unwrap();
    assert_eq!(quest.xp, 250);
    assert_eq!(quest.trader.as_deref(), Some("Shani"));
    assert_eq!(quest.extra.get("map"), Some(&json!("Dam Battlegrounds")));
    assert_eq!(quest.extra.get("hints"), Some(&json!([1, {"a": true}])));

    let keys: Vec<&String> = quest.extra.keys().collect();
    assert_eq!(keys, vec!["map", "hints"]);

    let back = serde_json::to_value(&quest).unwrap();
    assert_eq!(back["map"], "Dam Battlegrounds");
    assert_eq!(back["hints"][1]["a"], true);
}

#[test]
fn quest_primitive_defaults() {
    let quest: Quest = serde_json::from_str(r#"{"id":"q"}"#).unwrap();
    assert_eq!(quest.xp, 0);
    assert!(quest.objectives.is_none());
    assert!(quest.reward_item_ids.is_none());

    let module: HideoutModule = serde_json::from_str(r#"{"id":"stash"}"#).unwrap();
    assert_eq!(module.max_level, 0);
    assert!(module.levels.is_none());
}

#[test]
fn quest_objectives_accept_both_variants() {
    let quest: Quest = serde_json::from_str(
        r#"{"id":"q","objectives":[{"en":"Talk to Lance"},{"en":"Collect","count":3,"itemId":"gear"}]}"#,
    )
    .unwrap();
    let objectives = quest.objectives.as_ref().unwrap();
    assert_eq!(Quest::objective_text(&objectives[0], "de"), Some("Talk to Lance"));
    assert_eq!(objectives[1]["count"], 3);
}

#[test]
fn wrong_type_is_fatal_for_whole_document() {
    let err = serde_json::from_str::<Item>(r#"{"id":"x","name":"not-a-map"}"#);
    assert!(err.is_err());

    let doc = r#"[{"id":"good"},{"id":"bad","name":"not-a-map"}]"#;
    let result = parse_collection::<Item>(doc);
    assert!(matches!(result, Err(DataError::Decode(_))));

    let doc = r#"[{"id":"q","xp":"lots"}]"#;
    assert!(parse_collection::<Quest>(doc).is_err());

    let doc = r#"[{"id":"i","rarity":"mythic"}]"#;
    assert!(parse_collection::<Item>(doc).is_err());
}

#[test]
fn partial_localization_is_fine() {
    let project: Project = serde_json::from_str(
        r#"{"id":"p","name":{"fr":"Expédition"},"phases":[{"phase":2,"description":{}}]}"#,
    )
    .unwrap();
    let name = project.name.as_ref().unwrap();
    assert_eq!(name.get("fr"), Some("Expédition"));
    assert_eq!(name.get("en"), None);
    let phase = &project.phases.as_ref().unwrap()[0];
    assert_eq!(phase.phase, 2);
    assert_eq!(phase.description, Some(LocalizedText::default()));
    assert!(phase.requirement_item_ids.is_none());
    assert!(phase.requirement_categories.is_none());
}

#[test]
fn requirement_pairs_share_one_shape() {
    let quest: Quest =
        serde_json::from_str(r#"{"id":"q","rewardItemIds":[{"itemId":"gear","quantity":2}]}"#).unwrap();
    let module: HideoutModule = serde_json::from_str(
        r#"{"id":"m","levels":[{"level":1,"requirementItemIds":[{"itemId":"gear","quantity":2}]}]}"#,
    )
    .unwrap();
    let project: Project = serde_json::from_str(
        r#"{"id":"p","phases":[{"phase":1,"requirementItemIds":[{"itemId":"gear","quantity":2}]}]}"#,
    )
    .unwrap();

    let expected = vec![RequirementPair::new("gear", 2)];
    assert_eq!(quest.reward_item_ids.unwrap(), expected);
    assert_eq!(module.levels.unwrap()[0].requirement_item_ids.clone().unwrap(), expected);
    assert_eq!(project.phases.unwrap()[0].requirement_item_ids.clone().unwrap(), expected);
}

#[test]
fn nested_records_keep_unknown_fields() {
    let module: HideoutModule = serde_json::from_str(
        r#"{"id":"m","levels":[{"level":1,"craftTime":30}],"icon":"bench.png"}"#,
    )
    .unwrap();
    assert_eq!(module.extra.get("icon"), Some(&Value::from("bench.png")));
    assert_eq!(module.levels.as_ref().unwrap()[0].extra["craftTime"], 30);
}
