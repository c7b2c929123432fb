use crate::auth::AuthenticatedUser;
use crate::dto::{FolderResponse, ProductFolderRequest, ProductRequest, ProductResponse};
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use domain::{FolderId, ProductId};

/// POST /api/products
pub async fn register_product(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiJson(request): ApiJson<ProductRequest>,
) -> ApiResult<Json<ProductResponse>> {
    let product = state
        .app
        .product_catalog
        .register(request.into_new_product(user.id()))
        .await?;

    Ok(Json(product.into()))
}

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let products = state.app.product_catalog.list(user.id()).await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// POST /api/products/:product_id/folder
pub async fn add_product_to_folder(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiPath(product_id): ApiPath<i32>,
    ApiJson(request): ApiJson<ProductFolderRequest>,
) -> ApiResult<StatusCode> {
    state
        .app
        .folder_product_index
        .add_product_to_folder(ProductId(product_id), FolderId(request.folder_id), user.id())
        .await?;

    Ok(StatusCode::OK)
}

/// GET /api/products/:product_id/folders
pub async fn get_product_folders(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiPath(product_id): ApiPath<i32>,
) -> ApiResult<Json<Vec<FolderResponse>>> {
    let folders = state
        .app
        .product_catalog
        .folders_of(ProductId(product_id), user.id())
        .await?;

    Ok(Json(folders.into_iter().map(Into::into).collect()))
}
