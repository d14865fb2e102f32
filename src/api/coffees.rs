use actix_web::{web, HttpResponse};
use serde_json::Value;

use super::body::JsonBody;
use crate::database::Collections;
use crate::models::{
    document_from_json, document_to_json, id_filter, CoffeeFields, DeleteAck, InsertAck, UpdateAck,
};
use crate::utils::{AppError, LogFailure};

/// GET /coffees - Every coffee in the collection
#[utoipa::path(
    get,
    path = "/coffees",
    tag = "Coffees",
    responses(
        (status = 200, description = "Array of coffee records"),
        (status = 500, description = "Database failure")
    )
)]
pub async fn list_coffees(collections: web::Data<Collections>) -> Result<HttpResponse, AppError> {
    let coffees = collections
        .coffees
        .find_all()
        .await
        .log_failure("Error getting coffees")?;

    log::debug!("☕ Listed {} coffees", coffees.len());
    let coffees: Vec<Value> = coffees.into_iter().map(document_to_json).collect();
    Ok(HttpResponse::Ok().json(coffees))
}

/// GET /coffee/{id} - One coffee, or null
#[utoipa::path(
    get,
    path = "/coffee/{id}",
    tag = "Coffees",
    params(("id" = String, Path, description = "Coffee ObjectId (24 hex chars)")),
    responses(
        (status = 200, description = "The coffee record, or null when no document matches"),
        (status = 500, description = "Malformed id or database failure")
    )
)]
pub async fn get_coffee(
    collections: web::Data<Collections>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let filter = id_filter(&path).log_failure("Error getting coffee")?;
    let coffee = collections
        .coffees
        .find_one(filter)
        .await
        .log_failure("Error getting coffee")?;

    Ok(HttpResponse::Ok().json(coffee.map(document_to_json)))
}

/// POST /coffees - Insert the body as a new document
#[utoipa::path(
    post,
    path = "/coffees",
    tag = "Coffees",
    request_body = CoffeeFields,
    responses(
        (status = 201, description = "Inserted", body = InsertAck),
        (status = 500, description = "Body is not an object or database failure")
    )
)]
pub async fn create_coffee(
    collections: web::Data<Collections>,
    body: JsonBody,
) -> Result<HttpResponse, AppError> {
    let coffee = document_from_json(body.into_inner()).log_failure("Error inserting coffee")?;
    let ack = collections
        .coffees
        .insert_one(coffee)
        .await
        .log_failure("Error inserting coffee")?;

    log::debug!("☕ Coffee inserted: {}", ack.inserted_id);
    Ok(HttpResponse::Created().json(ack))
}

/// PUT /coffee/{id} - Overwrite the coffee fields, creating the document if absent
#[utoipa::path(
    put,
    path = "/coffee/{id}",
    tag = "Coffees",
    params(("id" = String, Path, description = "Coffee ObjectId (24 hex chars)")),
    request_body = CoffeeFields,
    responses(
        (status = 200, description = "Updated or upserted", body = UpdateAck),
        (status = 500, description = "Malformed id or database failure")
    )
)]
pub async fn replace_coffee(
    collections: web::Data<Collections>,
    path: web::Path<String>,
    body: JsonBody,
) -> Result<HttpResponse, AppError> {
    let filter = id_filter(&path).log_failure("Error updating coffee")?;
    let update = CoffeeFields::from_body(&body.0)
        .replace_update().log_failure("Error updating coffee")?;
    let ack = collections
        .coffees
        .update_one(filter, update, true)
        .await
        .log_failure("Error updating coffee")?;

    Ok(HttpResponse::Ok().json(ack))
}

/// DELETE /coffees/{id}
#[utoipa::path(
    delete,
    path = "/coffees/{id}",
    tag = "Coffees",
    params(("id" = String, Path, description = "Coffee ObjectId (24 hex chars)")),
    responses(
        (status = 200, description = "Delete acknowledgment", body = DeleteAck),
        (status = 500, description = "Malformed id or database failure")
    )
)]
pub async fn delete_coffee(
    collections: web::Data<Collections>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let filter = id_filter(&path).log_failure("Error deleting coffee")?;
    let ack = collections
        .coffees
        .delete_one(filter)
        .await
        .log_failure("Error deleting coffee")?;

    Ok(HttpResponse::Ok().json(ack))
}
