//! 目录内存实现
//!
//! 用于本地演示和测试。
//!
//! 功能：
//! - 五类记录的写入、删除与按 ID 升序列出
//! - 从 JSON 夹具（`RecordSet`）加载
//! - 按记录集合注入读取失败，用于验证降级加载

use crate::error::DirectoryError;
use crate::traits::{MeterDirectory, RecordKind};
use domain::{Building, Floor, Location, LogNet, Meter, RecordSet, TreeKind};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::RwLock;

/// 目录内存存储
///
/// 使用 RwLock + BTreeMap 提供线程安全、按 ID 有序的内存存储。
#[derive(Default)]
pub struct InMemoryDirectory {
    locations: RwLock<BTreeMap<i64, Location>>,
    lognets: RwLock<BTreeMap<i64, LogNet>>,
    buildings: RwLock<BTreeMap<i64, Building>>,
    floors: RwLock<BTreeMap<i64, Floor>>,
    meters: RwLock<BTreeMap<i64, Meter>>,
    failing: RwLock<HashSet<RecordKind>>,
}

impl InMemoryDirectory {
    /// 创建空目录
    pub fn new() -> Self {
        Self::default()
    }

    /// 从记录快照创建目录（同 ID 记录后者覆盖前者）
    pub fn from_records(records: RecordSet) -> Self {
        Self {
            locations: RwLock::new(keyed(records.locations, |item| item.id)),
            lognets: RwLock::new(keyed(records.lognets, |item| item.id)),
            buildings: RwLock::new(keyed(records.buildings, |item| item.id)),
            floors: RwLock::new(keyed(records.floors, |item| item.id)),
            meters: RwLock::new(keyed(records.meters, |item| item.id)),
            failing: RwLock::default(),
        }
    }

    /// 从 JSON 夹具文件加载
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| {
            DirectoryError::Unavailable(format!("read {}: {}", path.display(), err))
        })?;
        let records: RecordSet =
            serde_json::from_str(&raw).map_err(|err| DirectoryError::Decode(err.to_string()))?;
        Ok(Self::from_records(records))
    }

    /// 用快照整体替换目录内容
    pub fn replace(&self, records: RecordSet) -> Result<(), DirectoryError> {
        fill(&self.locations, records.locations, |item| item.id)?;
        fill(&self.lognets, records.lognets, |item| item.id)?;
        fill(&self.buildings, records.buildings, |item| item.id)?;
        fill(&self.floors, records.floors, |item| item.id)?;
        fill(&self.meters, records.meters, |item| item.id)?;
        Ok(())
    }

    pub fn upsert_location(&self, record: Location) -> Result<(), DirectoryError> {
        upsert(&self.locations, record.id, record)
    }

    pub fn upsert_lognet(&self, record: LogNet) -> Result<(), DirectoryError> {
        upsert(&self.lognets, record.id, record)
    }

    pub fn upsert_building(&self, record: Building) -> Result<(), DirectoryError> {
        upsert(&self.buildings, record.id, record)
    }

    pub fn upsert_floor(&self, record: Floor) -> Result<(), DirectoryError> {
        upsert(&self.floors, record.id, record)
    }

    pub fn upsert_meter(&self, record: Meter) -> Result<(), DirectoryError> {
        upsert(&self.meters, record.id, record)
    }

    /// 删除记录，返回是否存在
    pub fn remove(&self, kind: RecordKind, id: i64) -> Result<bool, DirectoryError> {
        match kind {
            RecordKind::Locations => remove(&self.locations, id),
            RecordKind::LogNets => remove(&self.lognets, id),
            RecordKind::Buildings => remove(&self.buildings, id),
            RecordKind::Floors => remove(&self.floors, id),
            RecordKind::Meters => remove(&self.meters, id),
        }
    }

    /// 设置指定记录集合的读取是否失败
    pub fn set_failing(&self, kind: RecordKind, failing: bool) {
        if let Ok(mut set) = self.failing.write() {
            if failing {
                set.insert(kind);
            } else {
                set.remove(&kind);
            }
        }
    }

    fn check(&self, kind: RecordKind) -> Result<(), DirectoryError> {
        let set = self
            .failing
            .read()
            .map_err(|_| DirectoryError::Unavailable("lock failed".to_string()))?;
        if set.contains(&kind) {
            return Err(DirectoryError::Unavailable(format!("{kind} unavailable")));
        }
        Ok(())
    }
}

fn fill<T>(
    map: &RwLock<BTreeMap<i64, T>>,
    items: Vec<T>,
    key: impl Fn(&T) -> i64,
) -> Result<(), DirectoryError> {
    let mut map = map
        .write()
        .map_err(|_| DirectoryError::Unavailable("lock failed".to_string()))?;
    *map = keyed(items, key);
    Ok(())
}

/// 按 ID 建索引，同 ID 记录后者覆盖前者
fn keyed<T>(items: Vec<T>, key: impl Fn(&T) -> i64) -> BTreeMap<i64, T> {
    items.into_iter().map(|item| (key(&item), item)).collect()
}

fn upsert<T>(map: &RwLock<BTreeMap<i64, T>>, id: i64, item: T) -> Result<(), DirectoryError> {
    let mut map = map
        .write()
        .map_err(|_| DirectoryError::Unavailable("lock failed".to_string()))?;
    map.insert(id, item);
    Ok(())
}

fn remove<T>(map: &RwLock<BTreeMap<i64, T>>, id: i64) -> Result<bool, DirectoryError> {
    let mut map = map
        .write()
        .map_err(|_| DirectoryError::Unavailable("lock failed".to_string()))?;
    Ok(map.remove(&id).is_some())
}

fn list<T: Clone>(map: &RwLock<BTreeMap<i64, T>>) -> Result<Vec<T>, DirectoryError> {
    let map = map
        .read()
        .map_err(|_| DirectoryError::Unavailable("lock failed".to_string()))?;
    Ok(map.values().cloned().collect())
}

#[async_trait::async_trait]
impl MeterDirectory for InMemoryDirectory {
    /// 内存目录不区分树类型，始终返回全部位置
    async fn get_locations(
        &self,
        _tree_type: Option<TreeKind>,
    ) -> Result<Vec<Location>, DirectoryError> {
        self.check(RecordKind::Locations)?;
        list(&self.locations)
    }

    async fn get_lognets(&self) -> Result<Vec<LogNet>, DirectoryError> {
        self.check(RecordKind::LogNets)?;
        list(&self.lognets)
    }

    async fn get_buildings(&self) -> Result<Vec<Building>, DirectoryError> {
        self.check(RecordKind::Buildings)?;
        list(&self.buildings)
    }

    async fn get_floors(&self) -> Result<Vec<Floor>, DirectoryError> {
        self.check(RecordKind::Floors)?;
        list(&self.floors)
    }

    async fn get_meters(&self) -> Result<Vec<Meter>, DirectoryError> {
        self.check(RecordKind::Meters)?;
        list(&self.meters)
    }
}
