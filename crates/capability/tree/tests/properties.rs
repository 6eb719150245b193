mod common;

use common::*;
use domain::{NodeKind, RecordSet, TreeKind, TreeNode};
use meter_tree::{LocationSets, build_all, build_forests, build_tree};

fn mixed_records() -> RecordSet {
    RecordSet {
        locations: vec![
            location(1, "HQ", None),
            location(2, "Annex", Some(1)),
            floor_location(3, "Lab", 100),
        ],
        lognets: vec![lognet(20, "GW-A", 1, None), lognet(21, "GW-B", 1, Some(2))],
        buildings: vec![building(10, "Tower A", 1), building(11, "Tower B", 2)],
        floors: vec![
            floor(100, "A1", Some(10)),
            floor(110, "B1", Some(11)),
            floor(200, "Yard", None),
        ],
        meters: vec![
            lognet_meter(5, "GW-A late", 20),
            floor_meter(9, "A1 z", 100, true, false),
            floor_meter(3, "A1 a", 100, false, false),
            floor_meter(7, "B1", 110, true, true),
            floor_meter(4, "Yard", 200, true, false),
            lognet_meter(1, "GW-A early", 20),
            lognet_meter(2, "GW-B", 21),
        ],
    }
}

fn assert_sibling_meters_sorted(nodes: &[TreeNode]) {
    walk(nodes, &mut |node| {
        let ids: Vec<i64> = node
            .children
            .iter()
            .filter(|child| child.is_meter())
            .map(|child| child.original_id)
            .collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted, "unsorted meters under {}", node.id);
    });
}

#[test]
fn builds_are_deterministic() {
    let records = mixed_records();
    assert_eq!(build_all(&records), build_all(&records));
    for kind in TreeKind::ALL {
        assert_eq!(build_tree(kind, &records), build_tree(kind, &records));
    }
}

#[test]
fn build_all_matches_single_builds() {
    let records = mixed_records();
    let forests = build_all(&records);
    for kind in TreeKind::ALL {
        assert_eq!(forests.get(kind), build_tree(kind, &records).as_slice());
    }
}

#[test]
fn forests_use_their_own_locations() {
    let records = mixed_records();
    let locations = LocationSets {
        system: records.locations[..1].to_vec(),
        building: records.locations.clone(),
        online: Vec::new(),
    };

    let forests = build_forests(&locations, &records);
    for kind in TreeKind::ALL {
        let scoped = RecordSet {
            locations: locations.get(kind).to_vec(),
            ..records.clone()
        };
        assert_eq!(forests.get(kind), build_tree(kind, &scoped).as_slice());
    }
    assert!(forests.online.is_empty());
}

#[test]
fn sibling_meters_follow_id_order() {
    let forests = build_all(&mixed_records());
    assert_sibling_meters_sorted(&forests.system);
    assert_sibling_meters_sorted(&forests.building);
    assert_sibling_meters_sorted(&forests.online);
    assert_eq!(forests.system[0].children[1].meter_ids(), vec![1, 5]);
}

#[test]
fn input_records_are_not_mutated() {
    let records = mixed_records();
    let before = records.clone();
    let _ = build_all(&records);
    assert_eq!(records, before);
}

#[test]
fn location_folder_classification() {
    let forests = build_all(&mixed_records());
    walk(&forests.building, &mut |node| match node.original_id {
        1 if node.name == "HQ" => assert_eq!(node.kind(), NodeKind::Location),
        2 if node.name == "Annex" => assert_eq!(node.kind(), NodeKind::Folder),
        3 if node.name == "Lab" => assert_eq!(node.kind(), NodeKind::Folder),
        _ => {}
    });
}

#[test]
fn trees_do_not_alias() {
    let records = mixed_records();
    let mut forests = build_all(&records);
    let building_before = forests.building.clone();

    forests.system[0]
        .children
        .push(TreeNode::meter(&meter(999, "injected")));
    forests.online[0].children.clear();

    assert_eq!(forests.building, building_before);
    assert_eq!(forests.building, build_tree(TreeKind::Building, &records));
}

#[test]
fn online_tree_is_subset_of_building_tree() {
    let forests = build_all(&mixed_records());
    let mut online = Vec::new();
    walk(&forests.online, &mut |node| {
        if node.is_meter() {
            online.push(node.original_id);
        }
    });
    online.sort();
    online.dedup();
    // 独立楼层 Yard 挂在每个位置下，电表 4 会出现多次
    assert_eq!(online, vec![4, 9]);
}
