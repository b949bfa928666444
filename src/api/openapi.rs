use utoipa::OpenApi;

use crate::{
    api::models::{CreateUserRequest, ErrorResponse, UpdateUserRequest},
    core::models::user::User,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::list_users,
        super::handlers::get_user,
        super::handlers::create_user,
        super::handlers::update_user,
        super::handlers::delete_user
    ),
    components(schemas(CreateUserRequest, UpdateUserRequest, ErrorResponse, User)),
    info(
        title = "Rosterio API",
        description = "API for managing user records",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
