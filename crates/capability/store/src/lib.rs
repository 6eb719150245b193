//! # 树状态存储
//!
//! 持有三棵树（系统树、楼宇树、在线树）的当前快照与 `loading` 标记，
//! 以显式对象注入给消费方（HTTP handlers），不依赖全局状态。
//!
//! ## 读写操作
//!
//! - `get_trees()`：读取当前快照
//! - `load()`：按树类型分别读取位置，与其余四类记录一起并发读取，全部返回后一次构建三棵树
//! - `refresh(kind)`：只重新读取并构建指定树，其余两棵不变
//! - `subscribe()`：订阅快照变化
//!
//! ## 降级策略
//!
//! 任一记录集合读取失败时记录日志并按空列表参与构建，不中断整次加载，也不重试；
//! 缺失的分支就是失败的可见表现。并发刷新时以最后完成的一次为准。
//!
//! `loading` 在首次加载前为 true；多个 `load()` 重叠时，直到最后一个完成才置为 false。
//! 单树刷新不改变 `loading`。

use domain::{RecordSet, TreeKind, TreeNode};
use meter_directory::{DirectoryError, MeterDirectory, RecordKind};
use meter_tree::LocationSets;
use meter_telemetry::{
    record_build_latency_ms, record_fetch_failure, record_fetch_success, record_refresh,
    record_tree_builds,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tokio::sync::watch;

/// 三棵树的快照。
///
/// 树以 `Arc` 持有，克隆快照不会复制节点；三棵树各自独立构建，互不共享节点。
#[derive(Debug, Clone, PartialEq)]
pub struct TreeSnapshot {
    pub system: Arc<Vec<TreeNode>>,
    pub building: Arc<Vec<TreeNode>>,
    pub online: Arc<Vec<TreeNode>>,
    pub loading: bool,
}

impl Default for TreeSnapshot {
    /// 尚未完成首次加载的快照。
    fn default() -> Self {
        Self {
            system: Arc::default(),
            building: Arc::default(),
            online: Arc::default(),
            loading: true,
        }
    }
}

impl TreeSnapshot {
    pub fn get(&self, kind: TreeKind) -> &Arc<Vec<TreeNode>> {
        match kind {
            TreeKind::System => &self.system,
            TreeKind::Building => &self.building,
            TreeKind::Online => &self.online,
        }
    }

    fn slot_mut(&mut self, kind: TreeKind) -> &mut Arc<Vec<TreeNode>> {
        match kind {
            TreeKind::System => &mut self.system,
            TreeKind::Building => &mut self.building,
            TreeKind::Online => &mut self.online,
        }
    }
}

/// 树状态存储。
pub struct TreeStore {
    directory: Arc<dyn MeterDirectory>,
    state: watch::Sender<TreeSnapshot>,
    /// 进行中的 `load()` 数量，只在快照写锁内修改
    loads_in_flight: AtomicUsize,
}

impl TreeStore {
    pub fn new(directory: Arc<dyn MeterDirectory>) -> Self {
        let (state, _) = watch::channel(TreeSnapshot::default());
        Self {
            directory,
            state,
            loads_in_flight: AtomicUsize::new(0),
        }
    }

    /// 当前快照
    pub fn get_trees(&self) -> TreeSnapshot {
        self.state.borrow().clone()
    }

    /// 指定树的当前节点
    pub fn nodes(&self, kind: TreeKind) -> Arc<Vec<TreeNode>> {
        self.state.borrow().get(kind).clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// 订阅快照变化
    pub fn subscribe(&self) -> watch::Receiver<TreeSnapshot> {
        self.state.subscribe()
    }

    /// 读取全部记录并重建三棵树。
    ///
    /// 位置按树类型各读取一次，与 `refresh(kind)` 使用相同的筛选条件。
    pub async fn load(&self) -> TreeSnapshot {
        self.state.send_modify(|snapshot| {
            self.loads_in_flight.fetch_add(1, Ordering::SeqCst);
            snapshot.loading = true;
        });

        let directory = &self.directory;
        let (
            system_locations,
            building_locations,
            online_locations,
            lognets,
            buildings,
            floors,
            meters,
        ) = tokio::join!(
            directory.get_locations(Some(TreeKind::System)),
            directory.get_locations(Some(TreeKind::Building)),
            directory.get_locations(Some(TreeKind::Online)),
            directory.get_lognets(),
            directory.get_buildings(),
            directory.get_floors(),
            directory.get_meters(),
        );
        let locations = LocationSets {
            system: or_empty(RecordKind::Locations, system_locations),
            building: or_empty(RecordKind::Locations, building_locations),
            online: or_empty(RecordKind::Locations, online_locations),
        };
        let records = RecordSet {
            lognets: or_empty(RecordKind::LogNets, lognets),
            buildings: or_empty(RecordKind::Buildings, buildings),
            floors: or_empty(RecordKind::Floors, floors),
            meters: or_empty(RecordKind::Meters, meters),
            ..RecordSet::default()
        };

        let started = Instant::now();
        let forests = meter_tree::build_forests(&locations, &records);
        record_build_latency_ms(started.elapsed().as_millis() as u64);
        record_tree_builds(TreeKind::ALL.len() as u64);

        self.state.send_modify(|snapshot| {
            let remaining = self
                .loads_in_flight
                .fetch_sub(1, Ordering::SeqCst)
                .saturating_sub(1);
            snapshot.system = Arc::new(forests.system);
            snapshot.building = Arc::new(forests.building);
            snapshot.online = Arc::new(forests.online);
            snapshot.loading = remaining > 0;
        });
        tracing::info!(
            system_locations = locations.system.len(),
            building_locations = locations.building.len(),
            online_locations = locations.online.len(),
            lognets = records.lognets.len(),
            buildings = records.buildings.len(),
            floors = records.floors.len(),
            meters = records.meters.len(),
            "meter trees loaded"
        );
        self.get_trees()
    }

    /// 只重新读取并构建指定树，替换该树的快照。
    pub async fn refresh(&self, kind: TreeKind) -> Arc<Vec<TreeNode>> {
        record_refresh();
        let records = self.fetch_for(kind).await;

        let started = Instant::now();
        let nodes = Arc::new(meter_tree::build_tree(kind, &records));
        record_build_latency_ms(started.elapsed().as_millis() as u64);
        record_tree_builds(1);

        self.state
            .send_modify(|snapshot| *snapshot.slot_mut(kind) = nodes.clone());
        tracing::info!(tree = %kind, roots = nodes.len(), "meter tree refreshed");
        nodes
    }

    pub async fn refresh_system_tree(&self) -> Arc<Vec<TreeNode>> {
        self.refresh(TreeKind::System).await
    }

    pub async fn refresh_building_tree(&self) -> Arc<Vec<TreeNode>> {
        self.refresh(TreeKind::Building).await
    }

    pub async fn refresh_online_tree(&self) -> Arc<Vec<TreeNode>> {
        self.refresh(TreeKind::Online).await
    }

    /// 按树类型只读取所需的记录集合。
    async fn fetch_for(&self, kind: TreeKind) -> RecordSet {
        match kind {
            TreeKind::System => {
                let (locations, lognets, meters) = tokio::join!(
                    self.directory.get_locations(Some(kind)),
                    self.directory.get_lognets(),
                    self.directory.get_meters(),
                );
                RecordSet {
                    locations: or_empty(RecordKind::Locations, locations),
                    lognets: or_empty(RecordKind::LogNets, lognets),
                    meters: or_empty(RecordKind::Meters, meters),
                    ..RecordSet::default()
                }
            }
            TreeKind::Building | TreeKind::Online => {
                let (locations, buildings, floors, meters) = tokio::join!(
                    self.directory.get_locations(Some(kind)),
                    self.directory.get_buildings(),
                    self.directory.get_floors(),
                    self.directory.get_meters(),
                );
                RecordSet {
                    locations: or_empty(RecordKind::Locations, locations),
                    buildings: or_empty(RecordKind::Buildings, buildings),
                    floors: or_empty(RecordKind::Floors, floors),
                    meters: or_empty(RecordKind::Meters, meters),
                    ..RecordSet::default()
                }
            }
        }
    }
}

/// 读取失败时降级为空列表。
fn or_empty<T>(kind: RecordKind, result: Result<Vec<T>, DirectoryError>) -> Vec<T> {
    match result {
        Ok(items) => {
            record_fetch_success();
            items
        }
        Err(err) => {
            record_fetch_failure();
            tracing::warn!(records = %kind, error = %err, "directory fetch failed, using empty list");
            Vec::new()
        }
    }
}
