//! # 计量目录
//!
//! 树构建的数据来源：提供位置、网关、楼宇、楼层、电表五类平铺记录。
//!
//! ## 模块说明
//!
//! - [`traits`]：`MeterDirectory` 异步接口与 `RecordKind`
//! - [`error`]：目录错误类型
//! - [`http`]：基于后端 REST 的实现（reqwest），生产环境使用
//! - [`in_memory`]：内存实现，用于测试与本地演示，可从 JSON 夹具加载
//!
//! ## 边界约定
//!
//! - 上游响应可能包在 `data` 里，也可能直接是数组；实现负责统一为 `Vec<T>`
//! - 读取失败只返回 `DirectoryError`，是否降级为空列表由调用方决定
//! - 不做重试与缓存

pub mod error;
pub mod http;
pub mod in_memory;
pub mod traits;

pub use error::*;
pub use http::{HttpDirectory, HttpDirectoryConfig};
pub use in_memory::InMemoryDirectory;
pub use traits::*;
