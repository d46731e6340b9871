//! 产品处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};

use super::{model::Produto, service::ProdutoService};
use crate::core::error::CoreError;
use crate::core::response::ApiResponse;
use crate::core::service::CrudService;

#[derive(Clone)]
pub struct AppState {
    pub produto_service: ProdutoService,
}

impl AppState {
    pub fn new(produto_service: ProdutoService) -> Self {
        Self { produto_service }
    }
}

/// GET /api/produtos
pub async fn list_produtos(State(state): State<AppState>) -> Json<ApiResponse<Vec<Produto>>> {
    let produtos = state.produto_service.list_all();
    Json(ApiResponse::success_with_message(
        "Produtos listados com sucesso",
        Some(produtos),
    ))
}

/// GET /api/produtos/:id
pub async fn get_produto(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Produto>>, CoreError> {
    let produto = state.produto_service.find_by_id(id)?;
    Ok(Json(ApiResponse::success(produto)))
}

/// POST /api/produtos
pub async fn create_produto(
    State(state): State<AppState>,
    Json(payload): Json<Produto>,
) -> (StatusCode, Json<ApiResponse<Produto>>) {
    let produto = state.produto_service.create(payload);
    (
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            "Produto criado com sucesso",
            Some(produto),
        )),
    )
}

/// PUT /api/produtos/:id
pub async fn update_produto(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<Produto>,
) -> Result<Json<ApiResponse<Produto>>, CoreError> {
    let produto = state.produto_service.update(id, payload)?;
    Ok(Json(ApiResponse::success_with_message(
        "Produto atualizado com sucesso",
        Some(produto),
    )))
}

/// DELETE /api/produtos/:id
pub async fn delete_produto(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<()>>, CoreError> {
    state.produto_service.delete(id)?;
    Ok(Json(ApiResponse::success_with_message(
        "Produto deletado com sucesso",
        None,
    )))
}
