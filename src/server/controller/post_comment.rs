use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    response::IntoResponse,
};

use crate::{
    model::{
        api::{MessageDto, ResultCode, RsData},
        post_comment::{PostCommentDto, PostCommentFormDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            extract::{ApiPath, ValidJson},
        },
        service::post_comment::PostCommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub const POST_COMMENT_TAG: &str = "post-comment";

/// List the comments of a post, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{post_id}/comments",
    tag = POST_COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    responses(
        (status = 200, description = "Comments of the post", body = RsData<Vec<PostCommentDto>>),
        (status = 404, description = "Post not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn list_comments(
    State(state): State<AppState>,
    ApiPath(post_id): ApiPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comments = PostCommentService::new(&state.db).find_all(post_id).await?;

    let message = format!("{}개의 댓글을 조회했습니다.", comments.len());
    let comments: Vec<PostCommentDto> = comments
        .into_iter()
        .map(|comment| comment.into_dto())
        .collect();

    Ok(RsData::with_data(ResultCode::OK, message, comments))
}

/// Get a single comment of a post.
///
/// A comment id that belongs to another post is reported as not found.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{post_id}/comments/{id}",
    tag = POST_COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID"),
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "The comment", body = RsData<PostCommentDto>),
        (status = 404, description = "Comment not found under this post", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_comment(
    State(state): State<AppState>,
    ApiPath((post_id, id)): ApiPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let comment = PostCommentService::new(&state.db).get(post_id, id).await?;

    Ok(RsData::with_data(
        ResultCode::OK,
        format!("{}번 댓글을 조회했습니다.", id),
        comment.into_dto(),
    ))
}

/// Write a comment on a post.
///
/// # Returns
/// - `201-1` - Comment written
/// - `400-1` - Invalid body
/// - `401-x` - Missing, malformed or unknown credential
/// - `404-1` - Post not found
#[utoipa::path(
    post,
    path = "/api/v1/posts/{post_id}/comments",
    tag = POST_COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID")
    ),
    request_body = PostCommentFormDto,
    responses(
        (status = 201, description = "Comment written", body = RsData<PostCommentDto>),
        (status = 400, description = "Invalid request body", body = MessageDto),
        (status = 401, description = "Missing, malformed or unknown credential", body = MessageDto),
        (status = 404, description = "Post not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
    security(("api_key" = [])),
)]
pub async fn write_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath(post_id): ApiPath<i32>,
    ValidJson(payload): ValidJson<PostCommentFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db)
        .require_actor(headers.get(AUTHORIZATION))
        .await?;

    let comment = PostCommentService::new(&state.db)
        .write(&actor, post_id, payload.content.unwrap_or_default())
        .await?;

    Ok(RsData::with_data(
        ResultCode::CREATED,
        format!("{}번 댓글이 작성되었습니다.", comment.id()),
        comment.into_dto(),
    ))
}

/// Modify a comment.
///
/// # Access Control
/// - Only the author may modify a comment
#[utoipa::path(
    put,
    path = "/api/v1/posts/{post_id}/comments/{id}",
    tag = POST_COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID"),
        ("id" = i32, Path, description = "Comment ID")
    ),
    request_body = PostCommentFormDto,
    responses(
        (status = 200, description = "Comment modified", body = MessageDto),
        (status = 400, description = "Invalid request body", body = MessageDto),
        (status = 401, description = "Missing, malformed or unknown credential", body = MessageDto),
        (status = 403, description = "Actor is not the author", body = MessageDto),
        (status = 404, description = "Comment not found under this post", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
    security(("api_key" = [])),
)]
pub async fn modify_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath((post_id, id)): ApiPath<(i32, i32)>,
    ValidJson(payload): ValidJson<PostCommentFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db)
        .require_actor(headers.get(AUTHORIZATION))
        .await?;

    PostCommentService::new(&state.db)
        .modify(&actor, post_id, id, payload.content.unwrap_or_default())
        .await?;

    Ok(RsData::<()>::new(
        ResultCode::OK,
        format!("{}번 댓글이 수정되었습니다.", id),
    ))
}

/// Delete a comment.
///
/// # Access Control
/// - Only the author may delete a comment
#[utoipa::path(
    delete,
    path = "/api/v1/posts/{post_id}/comments/{id}",
    tag = POST_COMMENT_TAG,
    params(
        ("post_id" = i32, Path, description = "Post ID"),
        ("id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 200, description = "Comment deleted", body = MessageDto),
        (status = 401, description = "Missing, malformed or unknown credential", body = MessageDto),
        (status = 403, description = "Actor is not the author", body = MessageDto),
        (status = 404, description = "Comment not found under this post", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
    security(("api_key" = [])),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiPath((post_id, id)): ApiPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db)
        .require_actor(headers.get(AUTHORIZATION))
        .await?;

    PostCommentService::new(&state.db)
        .delete(&actor, post_id, id)
        .await?;

    Ok(RsData::<()>::new(
        ResultCode::OK,
        format!("{}번 댓글이 삭제되었습니다.", id),
    ))
}
