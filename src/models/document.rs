use mongodb::bson::{self, doc, oid::ObjectId, Bson, Document};
use serde_json::Value;

use crate::utils::AppError;

/// Stores a JSON request body as-is. Only objects can become documents.
pub fn document_from_json(value: Value) -> Result<Document, AppError> {
    if !value.is_object() {
        return Err(AppError::InvalidDocument(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    }
    Ok(bson::to_document(&value)?)
}

/// Renders a stored document the way clients expect it: ids as hex strings,
/// dates as RFC 3339, everything else as relaxed extended JSON.
pub fn document_to_json(document: Document) -> Value {
    Value::Object(
        document
            .into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect(),
    )
}

pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        Bson::Document(document) => document_to_json(document),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

/// A missing JSON field is stored as null.
pub fn json_to_bson(value: Option<&Value>) -> Result<Bson, AppError> {
    match value {
        Some(value) => Ok(bson::to_bson(value)?),
        None => Ok(Bson::Null),
    }
}

/// `{ _id: ObjectId(id) }`. Fails for anything that is not a 24-char hex id.
pub fn id_filter(id: &str) -> Result<Document, AppError> {
    let object_id = ObjectId::parse_str(id)?;
    Ok(doc! { "_id": object_id })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
