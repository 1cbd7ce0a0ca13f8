//! Category CRUD handlers
//!
//! Thin glue over the category repository: decode, delegate, encode.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use taxon_db::CategoryRepository;
use taxon_types::Category;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct InsertCategoryRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct InsertCategoryResponse {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: i64,
    #[serde(rename = "rowsPerPage")]
    pub rows_per_page: i64,
}

#[derive(Debug, Serialize)]
pub struct ListCategoriesResponse {
    pub categories: Vec<Category>,
    pub total: i64,
}

#[derive(Debug, Serialize)]
pub struct GetCategoryResponse {
    pub category: Category,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateCategoryResponse {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteCategoryResponse {
    pub id: i64,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /categories
pub async fn insert_category(
    State(state): State<AppState>,
    Json(req): Json<InsertCategoryRequest>,
) -> ApiResult<impl IntoResponse> {
    let id = state.repos.categories.insert(&req.name).await?;

    Ok((
        StatusCode::CREATED,
        Json(InsertCategoryResponse { id, name: req.name }),
    ))
}

/// GET /categories?page=&rowsPerPage=
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<ListCategoriesResponse>> {
    if params.page < 1 || params.rows_per_page < 1 {
        return Err(ApiError::BadRequest(
            "page and rowsPerPage must be positive".to_string(),
        ));
    }

    let (rows, total) = state
        .repos
        .categories
        .list(params.page, params.rows_per_page)
        .await?;

    Ok(Json(ListCategoriesResponse {
        categories: rows.into_iter().map(|r| r.into_category()).collect(),
        total,
    }))
}

/// GET /categories/{id}
pub async fn get_category_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<GetCategoryResponse>> {
    let row = state
        .repos
        .categories
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("category not found".to_string()))?;

    Ok(Json(GetCategoryResponse {
        category: row.into_category(),
    }))
}

/// PUT /categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateCategoryRequest>,
) -> ApiResult<Json<UpdateCategoryResponse>> {
    let current = state
        .repos
        .categories
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("category not found".to_string()))?;

    if current.name == req.name {
        return Err(ApiError::BadRequest(
            "the new name must be different from the current one".to_string(),
        ));
    }

    // The name is unique; a racing insert still trips the constraint and
    // surfaces as a conflict.
    if state.repos.categories.find_by_name(&req.name).await?.is_some() {
        return Err(ApiError::BadRequest(
            "the new name is already in use".to_string(),
        ));
    }

    state.repos.categories.update_name(id, &req.name).await?;

    Ok(Json(UpdateCategoryResponse { id, name: req.name }))
}

/// DELETE /categories/{id}
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteCategoryResponse>> {
    state
        .repos
        .categories
        .delete(id)
        .await
        .map_err(|e| match e {
            taxon_db::DbError::NotFound => ApiError::NotFound("category not found".to_string()),
            e => e.into(),
        })?;

    Ok(Json(DeleteCategoryResponse { id }))
}
