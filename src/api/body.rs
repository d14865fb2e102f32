use actix_web::{dev::Payload, web, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;
use serde_json::Value;

use crate::utils::AppError;

/// Request body read the way a JSON body parser sees it: only JSON content
/// types are parsed, and a missing, empty or non-JSON body becomes `{}`.
/// A JSON body that does not parse, or whose top level is not an object or
/// array, is rejected with a 400.
#[derive(Debug)]
pub struct JsonBody(pub Value);

impl JsonBody {
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl FromRequest for JsonBody {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let is_json = is_json_content_type(req);
        let bytes = web::Bytes::from_request(req, payload);

        Box::pin(async move {
            let bytes = bytes.await?;
            let value = parse_body(is_json, &bytes).map_err(|e| {
                log::warn!("⚠️  Rejected request body: {}", e);
                e
            })?;
            Ok(JsonBody(value))
        })
    }
}

fn is_json_content_type(req: &HttpRequest) -> bool {
    match req.mime_type() {
        Ok(Some(mime)) => mime.subtype() == "json" || mime.suffix().is_some_and(|s| s == "json"),
        _ => false,
    }
}

fn parse_body(is_json: bool, bytes: &[u8]) -> Result<Value, AppError> {
    if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }

    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| AppError::InvalidBody(e.to_string()))?;
    if !(value.is_object() || value.is_array()) {
        return Err(AppError::InvalidBody(
            "top-level JSON value must be an object or array".to_string(),
        ));
    }
    Ok(value)
}
