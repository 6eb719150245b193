use domain::{Location, LogNet, Meter, RecordSet};

#[test]
fn location_top_level_classification() {
    let root = Location {
        id: 1,
        name: "HQ".to_string(),
        parent_id: None,
        location_floor_id: None,
    };
    let nested = Location {
        parent_id: Some(1),
        ..root.clone()
    };
    let anchored = Location {
        location_floor_id: Some(100),
        ..root.clone()
    };

    assert!(root.is_top_level());
    assert!(!nested.is_top_level());
    assert!(!anchored.is_top_level());
}

#[test]
fn lognet_belongs_by_location_or_sublocation() {
    let direct: LogNet = serde_json::from_str(r#"{"id":1,"name":"GW","location_id":1}"#)
        .expect("parse");
    assert!(direct.belongs_to(1));
    assert!(!direct.belongs_to(2));

    let scoped: LogNet =
        serde_json::from_str(r#"{"id":2,"name":"GW","location_id":1,"sublocation_id":2}"#)
            .expect("parse");
    assert!(!scoped.belongs_to(1));
    assert!(scoped.belongs_to(2));
}

#[test]
fn meter_flags_accept_bool_int_and_null() {
    let meter: Meter = serde_json::from_str(
        r#"{"id":1,"name":"M1","floor_id":100,"is_active":1,"is_disabled_in_building":0}"#,
    )
    .expect("parse");
    assert!(meter.is_active);
    assert!(!meter.is_disabled_in_building);
    assert!(meter.is_online());

    let meter: Meter = serde_json::from_str(
        r#"{"id":2,"name":"M2","is_active":true,"is_disabled_in_building":true}"#,
    )
    .expect("parse");
    assert!(!meter.is_online());

    let meter: Meter =
        serde_json::from_str(r#"{"id":3,"name":"M3","is_active":null}"#).expect("parse");
    assert!(!meter.is_active);
    assert!(!meter.is_disabled_in_building);
}

#[test]
fn record_set_defaults_missing_collections() {
    let records: RecordSet =
        serde_json::from_str(r#"{"locations":[{"id":1,"name":"HQ"}]}"#).expect("parse");
    assert_eq!(records.locations.len(), 1);
    assert!(records.meters.is_empty());
    assert!(records.floors.is_empty());
}
