use actix_web::{web, HttpResponse};
use serde_json::Value;

use super::body::JsonBody;
use crate::database::Collections;
use crate::models::{
    document_from_json, document_to_json, id_filter, DeleteAck, InsertAck, LoginUpdate, UpdateAck,
};
use crate::utils::{AppError, LogFailure};

/// POST /users - Insert the body as a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = LoginUpdate,
    responses(
        (status = 200, description = "Inserted", body = InsertAck),
        (status = 500, description = "Body is not an object or database failure")
    )
)]
pub async fn create_user(
    collections: web::Data<Collections>,
    body: JsonBody,
) -> Result<HttpResponse, AppError> {
    let user = document_from_json(body.into_inner()).log_failure("Error inserting user")?;
    let ack = collections
        .users
        .insert_one(user)
        .await
        .log_failure("Error inserting user")?;

    log::debug!("👤 User inserted: {}", ack.inserted_id);
    Ok(HttpResponse::Ok().json(ack))
}

/// GET /users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Array of user records"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn list_users(collections: web::Data<Collections>) -> Result<HttpResponse, AppError> {
    let users = collections
        .users
        .find_all()
        .await
        .log_failure("Error getting users")?;

    let users: Vec<Value> = users.into_iter().map(document_to_json).collect();
    Ok(HttpResponse::Ok().json(users))
}

/// DELETE /users/{id}
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ObjectId (24 hex chars)")),
    responses(
        (status = 200, description = "Delete acknowledgment", body = DeleteAck),
        (status = 500, description = "Malformed id or database failure")
    )
)]
pub async fn delete_user(
    collections: web::Data<Collections>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let filter = id_filter(&path).log_failure("Error deleting user")?;
    let ack = collections
        .users
        .delete_one(filter)
        .await
        .log_failure("Error deleting user")?;

    Ok(HttpResponse::Ok().json(ack))
}

/// PATCH /users - Record a login: matches on `email`, sets `lastLoginAt` only
#[utoipa::path(
    patch,
    path = "/users",
    tag = "Users",
    request_body = LoginUpdate,
    responses(
        (status = 200, description = "Update acknowledgment", body = UpdateAck),
        (status = 500, description = "Database failure")
    )
)]
pub async fn update_last_login(
    collections: web::Data<Collections>,
    body: JsonBody,
) -> Result<HttpResponse, AppError> {
    let login = LoginUpdate::from_body(&body.0);
    let filter = login.email_filter().log_failure("Error updating user")?;
    let update = login.login_update().log_failure("Error updating user")?;
    let ack = collections
        .users
        .update_one(filter, update, false)
        .await
        .log_failure("Error updating user")?;

    Ok(HttpResponse::Ok().json(ack))
}
