//! 产品数据模型

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Produto {
    /// 由存储层在创建时分配，请求体中的值会被忽略
    #[serde(default)]
    pub id: Option<i64>,
    pub nome: String,
    pub descricao: String,
    pub preco: f64,
}

impl Produto {
    /// 创建尚未分配 ID 的产品
    pub fn new(nome: impl Into<String>, descricao: impl Into<String>, preco: f64) -> Self {
        Self {
            id: None,
            nome: nome.into(),
            descricao: descricao.into(),
            preco,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

/// 启动时写入的示例产品
pub fn sample_produtos() -> Vec<Produto> {
    vec![
        Produto::new("Notebook", "Notebook Dell Inspiron", 3500.00),
        Produto::new("Mouse", "Mouse sem fio Logitech", 150.00),
        Produto::new("Teclado", "Teclado mecânico RGB", 450.00),
    ]
}
