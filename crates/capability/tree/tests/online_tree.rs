mod common;

use common::*;
use domain::NodeKind;
use meter_tree::build_online_tree;

#[test]
fn prunes_cascading_empty_branches() {
    let locations = vec![
        location(1, "HQ", None),
        location(2, "Annex", Some(1)),
        location(3, "Dark site", None),
    ];
    let buildings = vec![
        building(10, "Tower A", 1),
        building(11, "Tower B", 2),
        building(12, "Tower C", 3),
    ];
    let floors = vec![
        floor(100, "A1", Some(10)),
        floor(101, "A2", Some(10)),
        floor(110, "B1", Some(11)),
        floor(120, "C1", Some(12)),
    ];
    let meters = vec![
        floor_meter(1000, "A1-live", 100, true, false),
        floor_meter(1001, "A1-off", 100, false, false),
        floor_meter(1100, "B1-blocked", 110, true, true),
        floor_meter(1200, "C1-off", 120, false, true),
    ];

    let tree = build_online_tree(&locations, &buildings, &floors, &meters);

    assert_eq!(names(&tree), vec!["HQ"]);
    let hq = &tree[0];
    // Annex 只含被禁用的电表，整支剪掉
    assert_eq!(names(&hq.children), vec!["Tower A"]);
    assert_eq!(names(&hq.children[0].children), vec!["A1"]);
    assert_eq!(hq.meter_ids(), vec![1000]);
}

#[test]
fn no_container_survives_without_children() {
    let locations = vec![
        location(1, "HQ", None),
        floor_location(5, "Server room", 100),
        location(6, "Vacant", Some(1)),
    ];
    let buildings = vec![building(10, "Tower A", 1)];
    let floors = vec![
        floor(100, "Floor 1", Some(10)),
        floor(200, "Yard", None),
    ];
    let meters = vec![floor_meter(1000, "M1", 100, true, false)];

    let tree = build_online_tree(&locations, &buildings, &floors, &meters);

    walk(&tree, &mut |node| {
        if node.kind() != NodeKind::Meter {
            assert!(!node.children.is_empty(), "empty node survived: {}", node.id);
        }
    });
    // 楼层内的空文件夹也被剪掉，楼层只剩电表
    let floor = &tree[0].children[0].children[0];
    assert_eq!(names(&floor.children), vec!["M1"]);
}

#[test]
fn all_offline_yields_empty_forest() {
    let records = hq_scenario();
    let meters: Vec<_> = records
        .meters
        .iter()
        .cloned()
        .map(|mut meter| {
            meter.is_active = false;
            meter
        })
        .collect();

    let tree = build_online_tree(&records.locations, &records.buildings, &records.floors, &meters);

    assert!(tree.is_empty());
}

#[test]
fn standalone_floor_with_online_meter_survives() {
    let locations = vec![location(1, "HQ", None)];
    let floors = vec![floor(200, "Yard", None)];
    let meters = vec![floor_meter(2000, "Yard meter", 200, true, false)];

    let tree = build_online_tree(&locations, &[], &floors, &meters);

    assert_eq!(names(&tree[0].children), vec!["Yard"]);
    assert_eq!(tree[0].children[0].kind(), NodeKind::Floor);
}
