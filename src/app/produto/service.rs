//! 产品业务服务

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use super::model::{sample_produtos, Produto};
use super::store::ProdutoStore;
use crate::core::error::CoreError;
use crate::core::service::CrudService;

/// 产品服务，克隆后共享同一个存储
#[derive(Debug, Clone)]
pub struct ProdutoService {
    store: Arc<RwLock<ProdutoStore>>,
}

impl Default for ProdutoService {
    fn default() -> Self {
        Self::new()
    }
}

impl ProdutoService {
    /// 创建服务并写入示例产品
    pub fn new() -> Self {
        let service = Self::empty();
        for produto in sample_produtos() {
            service.create(produto);
        }
        info!("✅ 已初始化 {} 个示例产品", service.count());
        service
    }

    /// 创建不含任何数据的服务
    pub fn empty() -> Self {
        Self {
            store: Arc::new(RwLock::new(ProdutoStore::new())),
        }
    }

    pub fn count(&self) -> usize {
        self.read().len()
    }

    // 每次写入都是单个 map 操作，锁中毒后数据依然完整，直接取回
    fn read(&self) -> RwLockReadGuard<'_, ProdutoStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ProdutoStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CrudService for ProdutoService {
    type Entity = Produto;
    type Id = i64;

    fn list_all(&self) -> Vec<Produto> {
        self.read().values()
    }

    fn find_by_id(&self, id: i64) -> Result<Produto, CoreError> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::produto_not_found(id))
    }

    fn create(&self, produto: Produto) -> Produto {
        let produto = self.write().insert_new(produto);
        debug!(id = ?produto.id, nome = %produto.nome, "产品已创建");
        produto
    }

    fn update(&self, id: i64, produto: Produto) -> Result<Produto, CoreError> {
        let mut store = self.write();
        if !store.contains(id) {
            return Err(CoreError::produto_not_found(id));
        }
        let produto = store.replace(id, produto);
        debug!(id, "产品已更新");
        Ok(produto)
    }

    fn delete(&self, id: i64) -> Result<(), CoreError> {
        match self.write().remove(id) {
            Some(_) => {
                debug!(id, "产品已删除");
                Ok(())
            }
            None => Err(CoreError::produto_not_found(id)),
        }
    }
}
