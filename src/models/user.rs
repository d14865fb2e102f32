use mongodb::bson::{doc, Document};
use serde::Serialize;
use serde_json::Value;

use super::document::json_to_bson;
use crate::utils::AppError;

pub const COLLECTION: &str = "users";

#[derive(Debug, Default, Serialize, utoipa::ToSchema)]
pub struct LoginUpdate {
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
    #[serde(rename = "lastLoginAt")]
    #[schema(value_type = Option<String>)]
    pub last_login_at: Option<Value>,
}

impl LoginUpdate {
    /// Reads `email` and `lastLoginAt` by name. A body that is not an object has neither.
    pub fn from_body(body: &Value) -> Self {
        Self {
            email: body.get("email").cloned(),
            last_login_at: body.get("lastLoginAt").cloned(),
        }
    }

    pub fn email_filter(&self) -> Result<Document, AppError> {
        Ok(doc! { "email": json_to_bson(self.email.as_ref())? })
    }

    /// Touches `lastLoginAt` only.
    pub fn login_update(&self) -> Result<Document, AppError> {
        Ok(doc! { "$set": { "lastLoginAt": json_to_bson(self.last_login_at.as_ref())? } })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_update_ignores_other_fields() {
        let login = LoginUpdate::from_body(&json!({
            "email": "ana@example.com",
            "lastLoginAt": "2024-05-01T09:30:00.000Z",
            "name": "Ana"
        }));

        assert_eq!(
            login.email_filter().unwrap(),
            doc! { "email": "ana@example.com" }
        );
        assert_eq!(
            login.login_update().unwrap(),
            doc! { "$set": { "lastLoginAt": "2024-05-01T09:30:00.000Z" } }
        );
    }

    #[test]
    fn test_positional_array_body_is_not_an_email() {
        let login = LoginUpdate::from_body(&json!(["x@y.z", "t"]));

        assert_eq!(login.email_filter().unwrap(), doc! { "email": null });
        assert_eq!(
            login.login_update().unwrap(),
            doc! { "$set": { "lastLoginAt": null } }
        );
    }
}
