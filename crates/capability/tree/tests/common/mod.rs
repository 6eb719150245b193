#![allow(dead_code)]

use domain::{Building, Floor, Location, LogNet, Meter, NodeKind, RecordSet, TreeNode};

pub fn location(id: i64, name: &str, parent_id: Option<i64>) -> Location {
    Location {
        id,
        name: name.to_string(),
        parent_id,
        location_floor_id: None,
    }
}

pub fn floor_location(id: i64, name: &str, floor_id: i64) -> Location {
    Location {
        id,
        name: name.to_string(),
        parent_id: None,
        location_floor_id: Some(floor_id),
    }
}

pub fn lognet(id: i64, name: &str, location_id: i64, sublocation_id: Option<i64>) -> LogNet {
    LogNet {
        id,
        name: name.to_string(),
        location_id,
        sublocation_id,
        brand: Some("Acme".to_string()),
        model: None,
        serial_number: Some(format!("SN-{id}")),
        firmware_version: None,
        ip_address: Some("10.0.0.2".to_string()),
        subnet_mask: None,
        gateway: None,
        dns: None,
    }
}

pub fn building(id: i64, name: &str, location_id: i64) -> Building {
    Building {
        id,
        name: name.to_string(),
        location_id,
    }
}

pub fn floor(id: i64, name: &str, building_id: Option<i64>) -> Floor {
    Floor {
        id,
        name: name.to_string(),
        building_id,
    }
}

pub fn meter(id: i64, name: &str) -> Meter {
    Meter {
        id,
        name: name.to_string(),
        brand: None,
        model: None,
        meter_sn: None,
        protocol: Some("modbus-tcp".to_string()),
        ip_address: None,
        port: Some(502),
        budrate: None,
        ct_primary: Some(100.0),
        ct_secondary: Some(5.0),
        pt_primary: None,
        pt_secondary: None,
        slave_id: Some(1),
        lognet_id: None,
        floor_id: None,
        is_active: true,
        is_disabled_in_building: false,
    }
}

pub fn floor_meter(id: i64, name: &str, floor_id: i64, active: bool, disabled: bool) -> Meter {
    Meter {
        floor_id: Some(floor_id),
        is_active: active,
        is_disabled_in_building: disabled,
        ..meter(id, name)
    }
}

pub fn lognet_meter(id: i64, name: &str, lognet_id: i64) -> Meter {
    Meter {
        lognet_id: Some(lognet_id),
        ..meter(id, name)
    }
}

/// HQ → Tower A → Floor 1 → [M1(active), M2(inactive)]
pub fn hq_scenario() -> RecordSet {
    RecordSet {
        locations: vec![location(1, "HQ", None)],
        lognets: Vec::new(),
        buildings: vec![building(10, "Tower A", 1)],
        floors: vec![floor(100, "Floor 1", Some(10))],
        meters: vec![
            floor_meter(1001, "M2", 100, false, false),
            floor_meter(1000, "M1", 100, true, false),
        ],
    }
}

pub fn names(nodes: &[TreeNode]) -> Vec<&str> {
    nodes.iter().map(|node| node.name.as_str()).collect()
}

pub fn kinds(nodes: &[TreeNode]) -> Vec<NodeKind> {
    nodes.iter().map(TreeNode::kind).collect()
}

/// 深度优先访问所有节点。
pub fn walk<'a>(nodes: &'a [TreeNode], visit: &mut dyn FnMut(&'a TreeNode)) {
    for node in nodes {
        visit(node);
        walk(&node.children, visit);
    }
}
