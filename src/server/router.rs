use axum::{
    http::{Method, Uri},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        member::{self, MEMBER_TAG},
        post::{self, POST_TAG},
        post_comment::{self, POST_COMMENT_TAG},
    },
    error::AppError,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    tags(
        (name = MEMBER_TAG, description = "Member registration and login"),
        (name = POST_TAG, description = "Posts"),
        (name = POST_COMMENT_TAG, description = "Comments on posts")
    )
)]
pub struct ApiDoc;

/// Registers the bearer API key scheme referenced by authenticated routes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_key",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

/// Builds the API router with Swagger UI at `/swagger-ui`.
///
/// Requests matching no route get the not found envelope; requests matching a path
/// but not its method get the method not allowed envelope.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(member::join))
        .routes(routes!(member::login))
        .routes(routes!(member::me))
        .routes(routes!(post::list_posts, post::write_post))
        .routes(routes!(post::get_post, post::modify_post, post::delete_post))
        .routes(routes!(
            post_comment::list_comments,
            post_comment::write_comment
        ))
        .routes(routes!(
            post_comment::get_comment,
            post_comment::modify_comment,
            post_comment::delete_comment
        ))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri))
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("{} {}", method, uri))
}
