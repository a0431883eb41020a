use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    response::IntoResponse,
};

use crate::{
    model::{
        api::{MessageDto, ResultCode, RsData},
        post::{PostDto, PostFormDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            extract::{ApiPath, ValidJson},
        },
        service::post::PostService,
        state::AppState,
    },
};

/// Tag for grouping post endpoints in OpenAPI documentation
pub const POST_TAG: &str = "post";

/// List all posts, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/posts",
    tag = POST_TAG,
    responses(
        (status = 200, description = "All posts", body = RsData<Vec<PostDto>>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_posts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let posts = PostService::new(&state.db).find_all().await?;

    let message = format!("{}개의 글을 조회했습니다.", posts.len());
    let posts: Vec<PostDto> = posts.into_iter().map(|post| post.into_dto()).collect();

    Ok(RsData::with_data(ResultCode::OK, message, posts))
}

/// Get a single post.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "The post", body = RsData<PostDto>),
        (status = 404, description = "Post not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let post = PostService::new(&state.db).get(id).await?;

    Ok(RsData::with_data(
        ResultCode::OK,
        format!("{}번 글을 조회했습니다.", id),
        post.into_dto(),
    ))
}

/// Write a new post.
///
/// The authenticated member becomes the author.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer credential
/// - `payload` - Title (2 to 100 characters) and content (2 to 5000 characters)
///
/// # Returns
/// - `201-1` - Post written
/// - `400-1` - Invalid body
/// - `401-x` - Missing, malformed or unknown credential
#[utoipa::path(
    post,
    path = "/api/v1/posts",
    tag = POST_TAG,
    request_body = PostFormDto,
    responses(
        (status = 201, description = "Post written", body = RsData<PostDto>),
        (status = 400, description = "Invalid request body", body = MessageDto),
        (status = 401, description = "Missing, malformed or unknown credential", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
    security(("api_key" = [])),
)]
pub async fn write_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidJson(payload): ValidJson<PostFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db)
        .require_actor(headers.get(AUTHORIZATION))
        .await?;

    let post = PostService::new(&state.db)
        .write(
            &actor,
            payload.title.unwrap_or_default(),
            payload.content.unwrap_or_default(),
        )
        .await?;

    Ok(RsData::with_data(
        ResultCode::CREATED,
        format!("{}번 글이 작성되었습니다.", post.id()),
        post.into_dto(),
    ))
}

/// Modify a post.
///
/// # Access Control
/// - Only the author may modify a post
///
/// # Returns
/// - `200-1` - Post modified
/// - `400-1` - Invalid body
/// - `401-x` - Missing, malformed or unknown credential
/// - `403-1` - Actor is not the author
/// - `404-1` - Post not found
#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    request_body = PostFormDto,
    responses(
        (status = 200, description = "Post modified", body = MessageDto),
        (status = 400, description = "Invalid request body", body = MessageDto),
        (status = 401, description = "Missing, malformed or unknown credential", body = MessageDto),
        (status = 403, description = "Actor is not the author", body = MessageDto),
        (status = 404, description = "Post not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
    security(("api_key" = [])),
)]
pub async fn modify_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
    ValidJson(payload): ValidJson<PostFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db)
        .require_actor(headers.get(AUTHORIZATION))
        .await?;

    PostService::new(&state.db)
        .modify(
            &actor,
            id,
            payload.title.unwrap_or_default(),
            payload.content.unwrap_or_default(),
        )
        .await?;

    Ok(RsData::<()>::new(
        ResultCode::OK,
        format!("{}번 글이 수정되었습니다.", id),
    ))
}

/// Delete a post and its comments.
///
/// # Access Control
/// - Only the author may delete a post
#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Post deleted", body = MessageDto),
        (status = 401, description = "Missing, malformed or unknown credential", body = MessageDto),
        (status = 403, description = "Actor is not the author", body = MessageDto),
        (status = 404, description = "Post not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
    security(("api_key" = [])),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db)
        .require_actor(headers.get(AUTHORIZATION))
        .await?;

    PostService::new(&state.db).delete(&actor, id).await?;

    Ok(RsData::<()>::new(
        ResultCode::OK,
        format!("{}번 글이 삭제되었습니다.", id),
    ))
}
