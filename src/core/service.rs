//! 核心服务层模块

use super::error::CoreError;

/// CRUD 服务层 trait
///
/// 所有操作都是同步的，失败时返回显式的 `CoreError`。
pub trait CrudService {
    type Entity;
    type Id;

    fn list_all(&self) -> Vec<Self::Entity>;

    fn find_by_id(&self, id: Self::Id) -> Result<Self::Entity, CoreError>;

    /// 分配新 ID 并保存，忽略实体上已有的 ID
    fn create(&self, entity: Self::Entity) -> Self::Entity;

    /// 整体替换已存在的实体，ID 保持不变
    fn update(&self, id: Self::Id, entity: Self::Entity) -> Result<Self::Entity, CoreError>;

    fn delete(&self, id: Self::Id) -> Result<(), CoreError>;
}
