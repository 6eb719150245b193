//! 电表索引
//!
//! 电表按原始 ID 升序排序一次，再按挂载键（网关、楼层）分组。
//! 分组保持排序后的顺序，所以任意父节点下的电表兄弟节点都按 ID 升序。

use domain::Meter;
use std::collections::HashMap;

/// 按 ID 升序返回电表引用（不修改输入）。
pub fn sorted_meters(meters: &[Meter]) -> Vec<&Meter> {
    let mut sorted: Vec<&Meter> = meters.iter().collect();
    sorted.sort_by_key(|meter| meter.id);
    sorted
}

/// 已排序电表的挂载索引。
#[derive(Debug, Default)]
pub struct MeterIndex<'a> {
    by_lognet: HashMap<i64, Vec<&'a Meter>>,
    by_floor: HashMap<i64, Vec<&'a Meter>>,
}

impl<'a> MeterIndex<'a> {
    pub fn new(meters: &'a [Meter]) -> Self {
        let mut index = Self::default();
        for meter in sorted_meters(meters) {
            if let Some(lognet_id) = meter.lognet_id {
                index.by_lognet.entry(lognet_id).or_default().push(meter);
            }
            if let Some(floor_id) = meter.floor_id {
                index.by_floor.entry(floor_id).or_default().push(meter);
            }
        }
        index
    }

    /// 挂在指定网关下的电表。
    pub fn under_lognet(&self, lognet_id: i64) -> &[&'a Meter] {
        self.by_lognet
            .get(&lognet_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// 挂在指定楼层下的电表。
    pub fn on_floor(&self, floor_id: i64) -> &[&'a Meter] {
        self.by_floor
            .get(&floor_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meter(id: i64, lognet_id: Option<i64>, floor_id: Option<i64>) -> Meter {
        Meter {
            id,
            name: format!("M{id}"),
            brand: None,
            model: None,
            meter_sn: None,
            protocol: None,
            ip_address: None,
            port: None,
            budrate: None,
            ct_primary: None,
            ct_secondary: None,
            pt_primary: None,
            pt_secondary: None,
            slave_id: None,
            lognet_id,
            floor_id,
            is_active: true,
            is_disabled_in_building: false,
        }
    }

    #[test]
    fn groups_keep_id_order() {
        let meters = vec![
            meter(30, Some(1), Some(10)),
            meter(10, Some(1), None),
            meter(20, None, Some(10)),
        ];
        let index = MeterIndex::new(&meters);

        let lognet: Vec<i64> = index.under_lognet(1).iter().map(|m| m.id).collect();
        assert_eq!(lognet, vec![10, 30]);
        let floor: Vec<i64> = index.on_floor(10).iter().map(|m| m.id).collect();
        assert_eq!(floor, vec![20, 30]);
        assert!(index.under_lognet(2).is_empty());
        // 输入顺序不变
        assert_eq!(meters[0].id, 30);
    }
}
