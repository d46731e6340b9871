//! 产品内存存储
//!
//! 非持久化：进程退出后数据丢失。ID 从 1 开始递增，删除后不复用。

use std::collections::HashMap;

use super::model::Produto;

#[derive(Debug)]
pub struct ProdutoStore {
    produtos: HashMap<i64, Produto>,
    /// 下一个待分配的 ID
    next_id: i64,
}

impl Default for ProdutoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProdutoStore {
    pub fn new() -> Self {
        Self {
            produtos: HashMap::new(),
            next_id: 1,
        }
    }

    /// 按 ID 升序返回所有产品的快照
    pub fn values(&self) -> Vec<Produto> {
        let mut produtos: Vec<Produto> = self.produtos.values().cloned().collect();
        produtos.sort_by_key(|p| p.id);
        produtos
    }

    pub fn get(&self, id: i64) -> Option<&Produto> {
        self.produtos.get(&id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.produtos.contains_key(&id)
    }

    /// 分配下一个 ID 并插入
    pub fn insert_new(&mut self, produto: Produto) -> Produto {
        let id = self.next_id;
        self.next_id += 1;
        let produto = produto.with_id(id);
        self.produtos.insert(id, produto.clone());
        produto
    }

    /// 覆盖指定 ID 的记录，调用方负责确认记录存在
    pub fn replace(&mut self, id: i64, produto: Produto) -> Produto {
        let produto = produto.with_id(id);
        self.produtos.insert(id, produto.clone());
        produto
    }

    pub fn remove(&mut self, id: i64) -> Option<Produto> {
        self.produtos.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.produtos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.produtos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut store = ProdutoStore::new();
        let a = store.insert_new(Produto::new("A", "a", 1.0));
        let b = store.insert_new(Produto::new("B", "b", 2.0));
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut store = ProdutoStore::new();
        store.insert_new(Produto::new("A", "a", 1.0));
        let b = store.insert_new(Produto::new("B", "b", 2.0));
        store.remove(2);
        let c = store.insert_new(Produto::new("C", "c", 3.0));
        assert_eq!(b.id, Some(2));
        assert_eq!(c.id, Some(3));
        assert!(!store.contains(2));
    }

    #[test]
    fn test_values_sorted_by_id() {
        let mut store = ProdutoStore::new();
        for i in 0..10 {
            store.insert_new(Produto::new(format!("P{}", i), "", i as f64));
        }
        let ids: Vec<i64> = store.values().iter().filter_map(|p| p.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }
}
