use crate::{
    api::models::*,
    api::openapi::ApiDoc,
    core::{
        errors::RosterioError,
        models::user::{NewUser, User, UserUpdate},
        services::UserService,
    },
    infrastructure::storage::in_memory::InMemoryStorage,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use http::header;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Define API routes
pub fn api_routes(service: Arc<UserService<InMemoryStorage>>) -> Router {
    Router::new()
        .route(
            "/users",
            axum::routing::get(list_users).post(create_user),
        )
        .route(
            "/users/{user_id}",
            axum::routing::get(get_user)
                .put(update_user)
                .delete(delete_user),
        )
        .with_state(service)
}

// Full application: health check, /api routes, Swagger UI, middleware stack
pub fn app(service: Arc<UserService<InMemoryStorage>>) -> Router {
    Router::new()
        // add / route with a simple health check
        .route("/", axum::routing::get(|| async { "OK" }))
        .nest("/api", api_routes(service))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new()) // Gzip compression
        .layer(TimeoutLayer::new(Duration::from_secs(30))) // 30-second timeout
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::PUT,
                    http::Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http()) // Request tracing
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "Users retrieved successfully", body = Vec<User>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_users(
    State(service): State<Arc<UserService<InMemoryStorage>>>,
) -> Result<Json<Vec<User>>, ApiError> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    params(
        ("user_id" = i64, Path, description = "ID of the user to retrieve")
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(service): State<Arc<UserService<InMemoryStorage>>>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let user = service
        .get_user(user_id)
        .await?
        .ok_or(RosterioError::UserNotFound(user_id))?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = User,
            headers(("Location" = String, description = "Path of the created user"))),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(service): State<Arc<UserService<InMemoryStorage>>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user = service
        .create_user(NewUser {
            name: req.name,
            email: req.email,
            is_active: req.is_active,
        })
        .await?;
    let location = format!("/api/users/{}", user.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(user)))
}

#[utoipa::path(
    put,
    path = "/api/users/{user_id}",
    request_body = UpdateUserRequest,
    params(
        ("user_id" = i64, Path, description = "ID of the user to update")
    ),
    responses(
        (status = 200, description = "User updated successfully", body = User),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(service): State<Arc<UserService<InMemoryStorage>>>,
    Path(user_id): Path<i64>,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<User>, ApiError> {
    let user = service
        .update_user(
            user_id,
            UserUpdate {
                name: req.name,
                email: req.email,
                is_active: req.is_active,
            },
        )
        .await?;
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    params(
        ("user_id" = i64, Path, description = "ID of the user to delete")
    ),
    responses(
        (status = 204, description = "User deleted successfully"),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(service): State<Arc<UserService<InMemoryStorage>>>,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    service.delete_user(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
