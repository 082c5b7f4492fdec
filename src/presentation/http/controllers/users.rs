// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::{
        ChangePasswordCommand, CreateUserCommand, DeleteUserCommand, UpdateUserCommand,
    },
    dto::UserDto,
    queries::users::{GetUserQuery, ListUsersQuery},
};
use crate::domain::user::Role;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::response::ApiResponse;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<Role>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub username: Option<String>,
    pub role: Option<Role>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

pub async fn create_user(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateUserRequest>,
) -> HttpResult<ApiResponse<UserDto>> {
    let command = CreateUserCommand {
        email: payload.email,
        username: payload.username,
        password: payload.password,
        role: payload.role,
    };

    let user = state
        .services
        .user_commands
        .create_user(command)
        .await
        .into_http()?;

    Ok(ApiResponse::created(user))
}

pub async fn list_users(
    Extension(state): Extension<HttpState>,
) -> HttpResult<ApiResponse<Vec<UserDto>>> {
    state
        .services
        .user_queries
        .list_users(ListUsersQuery)
        .await
        .into_http()
        .map(ApiResponse::ok)
}

pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<ApiResponse<UserDto>> {
    state
        .services
        .user_queries
        .get_user(GetUserQuery { id })
        .await
        .into_http()
        .map(ApiResponse::ok)
}

pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> HttpResult<ApiResponse<UserDto>> {
    let command = UpdateUserCommand {
        user_id: id,
        email: payload.email,
        username: payload.username,
        role: payload.role,
        password: payload.password,
    };

    state
        .services
        .user_commands
        .update_user(command)
        .await
        .into_http()
        .map(ApiResponse::ok)
}

pub async fn change_password(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ChangePasswordRequest>,
) -> HttpResult<StatusCode> {
    let command = ChangePasswordCommand {
        user_id: id,
        current_password: payload.current_password,
        new_password: payload.new_password,
    };

    state
        .services
        .user_commands
        .change_password(command)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .user_commands
        .delete_user(DeleteUserCommand { user_id: id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
