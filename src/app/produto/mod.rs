//! 产品 (Produto) 资源：模型、存储、服务和处理器

pub mod handler;
pub mod model;
pub mod service;
pub mod store;
