//! Blog routes
//!
//! Listing is public; creation requires any authenticated user, update is
//! author-scoped inside the service, and deletion is manager-scoped via
//! the [`ManagerUser`] extractor.

use crate::auth::{AuthUser, ManagerUser};
use crate::error::ApiResult;
use crate::services::BlogService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use blogcraft_shared::{
    BlogListQuery, BlogListResponse, BlogResponse, CreateBlogRequest, UpdateBlogRequest,
};

/// Create blog routes
pub fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(list_blogs).post(create_blog))
        .route("/blogs/:id", put(update_blog).delete(delete_blog))
}

/// List blogs with pagination
///
/// GET /blog/blogs?page=&limit=
async fn list_blogs(
    State(state): State<AppState>,
    Query(query): Query<BlogListQuery>,
) -> ApiResult<Json<BlogListResponse>> {
    let response = BlogService::list(&state.db, &state.config().pagination, &query).await?;
    Ok(Json(response))
}

/// Create a blog authored by the caller
///
/// POST /blog/blogs
async fn create_blog(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateBlogRequest>,
) -> ApiResult<(StatusCode, Json<BlogResponse>)> {
    let response = BlogService::create(&state.db, auth.user_id, &req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Update a blog's title/description (author only)
///
/// PUT /blog/blogs/:id
async fn update_blog(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateBlogRequest>,
) -> ApiResult<Json<BlogResponse>> {
    let response = BlogService::update(&state.db, auth.user_id, &id, &req).await?;
    Ok(Json(response))
}

/// Delete a blog (manager role required; no ownership check)
///
/// DELETE /blog/blogs/:id
async fn delete_blog(
    State(state): State<AppState>,
    _manager: ManagerUser,
    Path(id): Path<String>,
) -> ApiResult<Json<BlogResponse>> {
    let response = BlogService::delete(&state.db, &id).await?;
    Ok(Json(response))
}
