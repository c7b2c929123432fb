use crate::auth::AuthenticatedUser;
use crate::dto::{FolderRequest, FolderResponse, ProductResponse};
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use domain::FolderId;
use tracing::info;

/// POST /api/folders
pub async fn add_folders(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiJson(request): ApiJson<FolderRequest>,
) -> ApiResult<StatusCode> {
    info!(user = %user.id(), count = request.folder_names.len(), "adding folders");

    state
        .app
        .folder_registry
        .add_folders(&request.folder_names, user.id())
        .await?;

    Ok(StatusCode::OK)
}

/// GET /api/folders
pub async fn get_folders(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> ApiResult<Json<Vec<FolderResponse>>> {
    let folders = state.app.folder_registry.get_folders(user.id()).await?;
    Ok(Json(folders.into_iter().map(Into::into).collect()))
}

/// GET /api/folders/:folder_id/products
pub async fn get_products_in_folder(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiPath(folder_id): ApiPath<i32>,
) -> ApiResult<Json<Vec<ProductResponse>>> {
    let products = state
        .app
        .folder_product_index
        .products_in_owned(FolderId(folder_id), user.id())
        .await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
