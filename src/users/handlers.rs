//! Axum handlers for the user resource.
//!
//! Each handler maps 1:1 to a route, delegates to the store, and wraps the
//! result in the wire envelope. Failures bubble up as [`UserError`], which
//! carries its own HTTP mapping.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::http::server::AppState;
use crate::users::error::UserError;
use crate::users::model::{CreateUser, UpdateUser, User};

#[derive(Serialize)]
pub struct UserListBody {
    pub users: Vec<User>,
}

#[derive(Serialize)]
pub struct UserBody {
    pub user: User,
}

#[derive(Serialize)]
pub struct UserMessageBody {
    pub message: String,
    pub user: User,
}

/// `GET /users` — the full collection in insertion order.
pub async fn list_users(State(state): State<AppState>) -> Json<UserListBody> {
    Json(UserListBody {
        users: state.users.list(),
    })
}

/// `POST /users` — validate, assign the next id, append.
pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUser>,
) -> Result<(StatusCode, Json<UserMessageBody>), UserError> {
    let user = state.users.create(body)?;
    tracing::info!(user_id = user.id, email = %user.email, "User created");
    Ok((
        StatusCode::CREATED,
        Json(UserMessageBody {
            message: format!("user {} created", user.name),
            user,
        }),
    ))
}

/// `GET /users/{id}`
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<UserBody>, UserError> {
    let user = state.users.get(id)?;
    Ok(Json(UserBody { user }))
}

/// `PUT /users/{id}` — overwrite name and/or email.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(body): Json<UpdateUser>,
) -> Result<Json<UserMessageBody>, UserError> {
    let user = state.users.update(id, body)?;
    tracing::info!(user_id = user.id, "User updated");
    Ok(Json(UserMessageBody {
        message: "user updated".to_string(),
        user,
    }))
}

/// `DELETE /users/{id}` — remove and return the removed record.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<UserMessageBody>, UserError> {
    let user = state.users.delete(id)?;
    tracing::info!(user_id = user.id, "User deleted");
    Ok(Json(UserMessageBody {
        message: "user deleted".to_string(),
        user,
    }))
}
