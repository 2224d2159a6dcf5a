//! User resource subsystem.
//!
//! # Data Flow
//! ```text
//! request
//!     → router() dispatch by method/path
//!     → handlers.rs (extract id/body, wrap response envelope)
//!     → store.rs (validate + mutate under one lock)
//!     → model.rs (entity + payload types, email shape check)
//!     → error.rs (domain failure → status + {message} body)
//! ```

pub mod error;
pub mod handlers;
pub mod model;
pub mod store;

use axum::routing::get;
use axum::Router;

use self::handlers::{create_user, delete_user, get_user, list_users, update_user};
use crate::http::server::AppState;

pub use error::UserError;
pub use model::{CreateUser, UpdateUser, User};
pub use store::UserStore;

/// Route table for the user resource. Pure dispatch, no logic of its own.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(state)
}
