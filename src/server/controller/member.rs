use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    response::IntoResponse,
};

use crate::{
    model::{
        api::{MessageDto, ResultCode, RsData},
        member::{JoinMemberDto, LoginMemberDto, LoginResultDto, MemberDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, extract::ValidJson},
        model::member::CreateMemberParam,
        service::member::MemberService,
        state::AppState,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub const MEMBER_TAG: &str = "member";

/// Register a new member.
///
/// Creates the member and assigns it a freshly generated API key. The key is not
/// part of the response; it is returned on login.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Username, password and nickname, 2 to 30 characters each
///
/// # Returns
/// - `201-1` - Member registered
/// - `400-1` - Invalid body
/// - `409-1` - Username already taken
#[utoipa::path(
    post,
    path = "/api/v1/members",
    tag = MEMBER_TAG,
    request_body = JoinMemberDto,
    responses(
        (status = 201, description = "Member registered", body = RsData<MemberDto>),
        (status = 400, description = "Invalid request body", body = MessageDto),
        (status = 409, description = "Username already taken", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn join(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<JoinMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db)
        .join(CreateMemberParam {
            username: payload.username.unwrap_or_default(),
            password: payload.password.unwrap_or_default(),
            nickname: payload.nickname.unwrap_or_default(),
        })
        .await?;

    Ok(RsData::with_data(
        ResultCode::CREATED,
        format!("{}님 환영합니다. 회원가입이 완료되었습니다.", member.name()),
        member.into_dto(),
    ))
}

/// Log in with username and password.
///
/// # Returns
/// - `200-1` - Member and its API key
/// - `400-1` - Invalid body
/// - `401-1` - Unknown username
/// - `401-2` - Wrong password
#[utoipa::path(
    post,
    path = "/api/v1/members/login",
    tag = MEMBER_TAG,
    request_body = LoginMemberDto,
    responses(
        (status = 200, description = "Logged in", body = RsData<LoginResultDto>),
        (status = 400, description = "Invalid request body", body = MessageDto),
        (status = 401, description = "Unknown username or wrong password", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<LoginMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = MemberService::new(&state.db)
        .login(
            payload.username.as_deref().unwrap_or_default(),
            payload.password.as_deref().unwrap_or_default(),
        )
        .await?;

    let message = format!("{}님 환영합니다.", member.name());
    let api_key = member.api_key.clone();

    Ok(RsData::with_data(
        ResultCode::OK,
        message,
        LoginResultDto {
            item: member.into_dto(),
            api_key,
        },
    ))
}

/// Get the authenticated member.
///
/// # Access Control
/// - Requires `Authorization: Bearer <apiKey>`
#[utoipa::path(
    get,
    path = "/api/v1/members/me",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Authenticated member", body = RsData<MemberDto>),
        (status = 401, description = "Missing, malformed or unknown credential", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
    security(("api_key" = [])),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db)
        .require_actor(headers.get(AUTHORIZATION))
        .await?;

    Ok(RsData::with_data(
        ResultCode::OK,
        format!("{}님의 정보입니다.", actor.name()),
        actor.into_dto(),
    ))
}
