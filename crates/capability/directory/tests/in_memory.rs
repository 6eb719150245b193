use domain::{Floor, Location, RecordSet};
use meter_directory::{InMemoryDirectory, MeterDirectory, RecordKind};

fn records() -> RecordSet {
    serde_json::from_value(serde_json::json!({
        "locations": [
            {"id": 2, "name": "Annex", "parent_id": 1},
            {"id": 1, "name": "HQ"}
        ],
        "floors": [{"id": 100, "name": "Floor 1", "building_id": null}],
        "meters": [{"id": 1000, "name": "M1", "floor_id": 100, "is_active": true}]
    }))
    .expect("records")
}

#[tokio::test]
async fn lists_in_id_order() {
    let directory = InMemoryDirectory::from_records(records());

    let locations = directory.get_locations(None).await.expect("locations");
    let ids: Vec<i64> = locations.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(directory.get_lognets().await.expect("lognets").is_empty());
    assert_eq!(directory.get_meters().await.expect("meters").len(), 1);
}

#[tokio::test]
async fn upsert_and_remove() {
    let directory = InMemoryDirectory::new();
    directory
        .upsert_location(Location {
            id: 1,
            name: "HQ".to_string(),
            parent_id: None,
            location_floor_id: None,
        })
        .expect("upsert");
    directory
        .upsert_floor(Floor {
            id: 100,
            name: "Floor 1".to_string(),
            building_id: None,
        })
        .expect("upsert");

    assert!(directory.remove(RecordKind::Floors, 100).expect("remove"));
    assert!(!directory.remove(RecordKind::Floors, 100).expect("remove"));
    assert!(directory.get_floors().await.expect("floors").is_empty());
    assert_eq!(directory.get_locations(None).await.expect("locations").len(), 1);
}

#[tokio::test]
async fn injected_failures_surface_as_errors() {
    let directory = InMemoryDirectory::from_records(records());
    directory.set_failing(RecordKind::Meters, true);

    assert!(directory.get_meters().await.is_err());
    assert!(directory.get_floors().await.is_ok());

    directory.set_failing(RecordKind::Meters, false);
    assert!(directory.get_meters().await.is_ok());
}

#[tokio::test]
async fn loads_json_fixture() {
    let path = std::env::temp_dir().join(format!("meter-fixture-{}.json", std::process::id()));
    std::fs::write(
        &path,
        serde_json::to_string(&records()).expect("serialize"),
    )
    .expect("write fixture");

    let directory = InMemoryDirectory::from_json_file(&path).expect("load");
    let _ = std::fs::remove_file(&path);

    assert_eq!(directory.get_locations(None).await.expect("locations").len(), 2);
    assert!(InMemoryDirectory::from_json_file(&path).is_err());
}

#[tokio::test]
async fn seeding_keeps_last_record_per_id() {
    let records: RecordSet = serde_json::from_value(serde_json::json!({
        "locations": [
            {"id": 1, "name": "HQ"},
            {"id": 1, "name": "HQ (renamed)"}
        ]
    }))
    .expect("records");

    let directory = InMemoryDirectory::from_records(records.clone());
    let locations = directory.get_locations(None).await.expect("locations");
    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].name, "HQ (renamed)");

    directory
        .upsert_floor(Floor {
            id: 100,
            name: "Floor 1".to_string(),
            building_id: None,
        })
        .expect("upsert");
    directory.replace(records).expect("replace");
    assert!(directory.get_floors().await.expect("floors").is_empty());
    assert_eq!(directory.get_locations(None).await.expect("locations").len(), 1);
}
