use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use askama::Template;
use dara::catalog::{DatasetStore, StoreError};
use dara::views::{CatalogView, DetailView, Features, Footer, Hero, Navbar};

fn unique_temp_path(name: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("dara-{name}-{stamp}.json"))
}

fn store() -> DatasetStore {
    DatasetStore::builtin().expect("builtin catalog should load")
}

#[test]
fn store_ids_are_unique() {
    let store = store();
    let ids: HashSet<u32> = store.all().iter().map(|record| record.id).collect();
    assert_eq!(ids.len(), store.len());
    assert_eq!(store.len(), 5);
}

#[test]
fn catalog_renders_one_card_per_record_in_store_order() {
    let store = store();
    let first_three = &store.all()[..3];
    let view = CatalogView::new(first_three);

    let names: Vec<&str> = view.cards.iter().map(|card| card.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Global Energy Consumption",
            "World Happiness Index",
            "Netflix Titles Dataset"
        ]
    );
    assert_eq!(view.cards[0].icon, "⚡");

    let html = view.render().expect("catalog should render");
    assert_eq!(html.matches("class=\"dataset-card\"").count(), 3);
    let positions: Vec<usize> = names
        .iter()
        .map(|name| html.find(name).expect("card title should be present"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(html.find("⚡").expect("icon should render") < positions[0]);
}

#[test]
fn full_catalog_renders_every_record() {
    let store = store();
    let html = CatalogView::new(store.all())
        .render()
        .expect("catalog should render");
    assert_eq!(html.matches("class=\"dataset-card\"").count(), store.len());
    assert!(html.contains("href=\"/datasets/5\""));
    assert!(html.contains("271,116 records"));
    assert!(html.contains("Updated 2024-11-20"));
}

#[test]
fn empty_store_renders_zero_cards() {
    let empty = DatasetStore::empty();
    let view = CatalogView::new(empty.all());
    assert_eq!(view.len(), 0);
    let html = view.render().expect("empty catalog should render");
    assert_eq!(html.matches("class=\"dataset-card\"").count(), 0);
}

#[test]
fn detail_lookup_finds_existing_id() {
    let store = store();
    let view = DetailView::lookup(2, store.all());
    let DetailView::Found(detail) = &view else {
        panic!("id 2 should resolve");
    };
    assert_eq!(detail.name, "World Happiness Index");
    assert_eq!(detail.icon, "😊");
    assert_eq!(detail.tags, vec!["Happiness", "Social"]);

    let html = view.to_html().expect("detail should render");
    assert!(html.contains("World Happiness Index"));
    assert!(html.contains("November 15, 2024"));
}

#[test]
fn detail_lookup_for_unknown_id_is_not_found() {
    let store = store();
    let view = DetailView::lookup(999, store.all());
    assert!(!view.is_found());
    let html = view.to_html().expect("not-found should render");
    assert!(html.contains("Dataset not found"));
    assert!(html.contains("Browse all datasets"));
}

#[test]
fn shell_components_are_deterministic() {
    assert_eq!(Navbar.render().unwrap(), Navbar.render().unwrap());
    assert_eq!(Hero.render().unwrap(), Hero.render().unwrap());
    assert_eq!(
        Features::new().render().unwrap(),
        Features::default().render().unwrap()
    );
    assert_eq!(Footer.render().unwrap(), Footer.render().unwrap());
}

#[test]
fn catalog_file_with_duplicate_ids_is_rejected() {
    let path = unique_temp_path("duplicate-ids");
    let raw = r#"{"datasets":[
        {"id":1,"name":"A","description":"a","records":1,"updated":"2024-01-01","icon":"a","tags":[]},
        {"id":1,"name":"B","description":"b","records":2,"updated":"2024-01-02","icon":"b","tags":[]}
    ]}"#;
    fs::write(&path, raw).expect("fixture should be written");

    let result = DatasetStore::load(&path);
    assert!(matches!(result, Err(StoreError::DuplicateId(1))));

    let _ = fs::remove_file(path);
}

#[test]
fn catalog_file_round_trips_through_json_export() {
    let store = store();
    let payload = store.to_json_pretty().expect("catalog should serialize");
    let reloaded = DatasetStore::from_json(&payload).expect("export should reload");
    assert_eq!(reloaded.all(), store.all());
}
