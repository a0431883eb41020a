use axum::http::{header, HeaderValue, Method};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    model::member::CreateMemberParam,
    service::{member::MemberService, post::PostService, post_comment::PostCommentService},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the CORS layer for the configured origin.
///
/// Without a configured origin the layer allows no cross-origin requests.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer allowing the origin with the API's methods and headers
/// - `Err(ConfigError::InvalidEnvVar)` - Origin is not a valid header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let Some(origin) = config.cors_allowed_origin.as_deref() else {
        return Ok(layer);
    };

    let origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
        name: "CORS_ALLOWED_ORIGIN".to_string(),
        value: origin.to_string(),
    })?;

    Ok(layer.allow_origin(origin))
}

/// Fills an empty database with sample members, posts and comments.
///
/// Does nothing when any member exists, so restarts never duplicate the data.
///
/// # Returns
/// - `Ok(true)` - Sample data inserted
/// - `Ok(false)` - Database already had members
/// - `Err(AppError)` - Insert failed
pub async fn seed_sample_data(db: &DatabaseConnection) -> Result<bool, AppError> {
    let member_service = MemberService::new(db);

    if member_service.count().await? > 0 {
        return Ok(false);
    }

    let mut members = Vec::new();
    for (username, nickname) in [
        ("system", "시스템"),
        ("admin", "관리자"),
        ("user1", "유저1"),
        ("user2", "유저2"),
        ("user3", "유저3"),
    ] {
        let member = member_service
            .join(CreateMemberParam {
                username: username.to_string(),
                password: "1234".to_string(),
                nickname: nickname.to_string(),
            })
            .await?;
        members.push(member);
    }

    let post_service = PostService::new(db);
    let comment_service = PostCommentService::new(db);

    let user1 = &members[2];
    let user2 = &members[3];
    let user3 = &members[4];

    let first = post_service
        .write(user1, "제목 1".to_string(), "내용 1".to_string())
        .await?;
    let second = post_service
        .write(user1, "제목 2".to_string(), "내용 2".to_string())
        .await?;
    post_service
        .write(user2, "제목 3".to_string(), "내용 3".to_string())
        .await?;

    comment_service
        .write(user1, first.id(), "댓글 1-1".to_string())
        .await?;
    comment_service
        .write(user2, first.id(), "댓글 1-2".to_string())
        .await?;
    comment_service
        .write(user3, first.id(), "댓글 1-3".to_string())
        .await?;
    comment_service
        .write(user2, second.id(), "댓글 2-1".to_string())
        .await?;

    tracing::info!("Inserted sample data ({} members)", members.len());

    Ok(true)
}
