//! User REST API handlers
//!
//! The decision layer of the service: each handler runs at most one
//! pre-flight check, issues a single repository call, and maps the raw
//! outcome to a response or a typed error.

use crate::{
    ApiError, ApiResult, AppState, CreateUserRequest, DeleteResponse, ListUsersQuery,
    UpdateUserRequest, UserDto, UserListResponse, UserResponse,
};

use ud_core::{User, UserUpdate, UserValidator};
use ud_db::UserRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use error_location::ErrorLocation;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/users
///
/// List all users, or only those matching ?name=. An empty collection is a
/// valid answer, never an error.
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> ApiResult<Json<UserListResponse>> {
    let repo = UserRepository::new(state.pool.clone());

    let users = match &query.name {
        Some(name) => repo.find_by_name(name).await?,
        None => repo.find_all().await?,
    };

    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserDto::from).collect(),
    }))
}

/// GET /api/v1/users/{id}
///
/// Get a single user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// POST /api/v1/users
///
/// Insert a new user. A missing id is minted server-side; a supplied id
/// must already be in primary-key format so the stored record never
/// carries an invalid key. A duplicate id is a storage failure, not an
/// upsert.
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = match req.id {
        Some(id) => {
            if !UserValidator::is_valid_id(&id) {
                return Err(ApiError::Validation {
                    message: format!("Invalid user id: {}", id),
                    field: Some("id".into()),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            User { id, name: req.name }
        }
        None => User::new(req.name),
    };

    let repo = UserRepository::new(state.pool.clone());
    repo.insert(&user).await?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// PUT /api/v1/users/{id}
///
/// Merge update: only fields present in the body are applied. Responds
/// with the record as stored after the update.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let update = UserUpdate::from(req);

    if !UserValidator::is_valid_update(&id, &update) {
        return Err(ApiError::Validation {
            message: format!("Invalid update for user {}", id),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let repo = UserRepository::new(state.pool.clone());

    let modified = repo.update_partial(&id, &update).await?;
    if modified == 0 {
        return Err(ApiError::NotFound {
            message: format!("User {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // Re-fetch so the response reflects what storage actually holds
    let user = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// DELETE /api/v1/users/{id}
///
/// Remove a user. A negative acknowledgement from storage outranks the
/// match count.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let outcome = repo.delete_by_id(&id).await?;

    if !outcome.acknowledged {
        return Err(ApiError::Internal {
            message: format!("Delete was not acknowledged for user {}", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if outcome.deleted_count == 0 {
        return Err(ApiError::NotFound {
            message: format!("User {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(Json(DeleteResponse { id, deleted: true }))
}
